use super::Point;

pub trait Distance<T> {
    fn distance(p1: T, p2: T) -> f64;
}

impl Distance<Point> for Point {
    /// Euclidean distance. Every solver goes through this so that equal inputs round
    /// identically and results can be compared exactly.
    fn distance(p1: Point, p2: Point) -> f64 {
        ((p1.x - p2.x).powi(2) + (p1.y - p2.y).powi(2)).sqrt()
    }
}

pub fn distance(a: Point, b: Point) -> f64 {
    <Point as Distance<Point>>::distance(a, b)
}
