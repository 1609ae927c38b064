use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A point in the plane.
///
/// Points compare lexicographically, x first and y second. The comparison uses the
/// IEEE total order so that sorting a point collection is deterministic.
#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Point {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Orders by y first, used when sweeping the merge strip.
    pub fn cmp_by_y(&self, other: &Self) -> Ordering {
        self.y.total_cmp(&other.y).then(self.x.total_cmp(&other.x))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Point {}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x.total_cmp(&other.x).then(self.y.total_cmp(&other.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_lexicographic() {
        let mut points = vec![
            Point::new(2.0, 1.0),
            Point::new(1.0, 5.0),
            Point::new(1.0, -3.0),
            Point::new(0.5, 10.0),
        ];
        points.sort();

        assert_eq!(
            points,
            vec![
                Point::new(0.5, 10.0),
                Point::new(1.0, -3.0),
                Point::new(1.0, 5.0),
                Point::new(2.0, 1.0),
            ]
        );
    }

    #[test]
    fn cmp_by_y_works() {
        let a = Point::new(9.0, 1.0);
        let b = Point::new(0.0, 2.0);
        let c = Point::new(3.0, 1.0);

        assert_eq!(a.cmp_by_y(&b), Ordering::Less);
        assert_eq!(c.cmp_by_y(&a), Ordering::Less);
        assert_eq!(a.cmp_by_y(&a), Ordering::Equal);
    }

    #[test]
    fn equal_coordinates_are_equal_points() {
        assert_eq!(Point::new(1.5, -2.0), Point::from((1.5, -2.0)));
        assert_ne!(Point::new(1.5, -2.0), Point::new(1.5, 2.0));
    }

    #[test]
    fn scaled_works() {
        assert_eq!(Point::new(1.5, -2.0).scaled(2.0), Point::new(3.0, -4.0));
    }

    #[test]
    fn display_works() {
        assert_eq!(Point::new(1.5, -2.0).to_string(), "(1.5, -2)");
    }

    #[test]
    fn is_finite_works() {
        assert!(Point::new(0.0, 1e300).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::NEG_INFINITY).is_finite());
    }
}
