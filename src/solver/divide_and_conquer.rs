use tracing::trace;

use super::brute_force::min_pairwise_distance;
use super::{ensure_enough_points, InvalidInputError, Solver};
use crate::geometry::{distance, Point, PointSet};

/// Subproblems of at most this many points are solved by the exhaustive scan.
const BRUTE_FORCE_THRESHOLD: usize = 3;

/// Recursive halving along x with a merge over the strip around the split line.
///
/// Expects its input sorted by x (ties broken by y). `PointSet` guarantees this, so
/// prefer [`DivideAndConquer::closest_pair_set`] when a set is at hand.
#[derive(Debug, Default, Clone, Copy)]
pub struct DivideAndConquer;

impl DivideAndConquer {
    pub fn closest_pair_set(&self, points: &PointSet) -> f64 {
        closest_in(points.as_slice())
    }
}

impl Solver for DivideAndConquer {
    fn name(&self) -> &'static str {
        "divide and conquer"
    }

    fn closest_pair(&self, points: &[Point]) -> Result<f64, InvalidInputError> {
        closest_pair_divide_and_conquer(points)
    }
}

pub fn closest_pair_divide_and_conquer(points: &[Point]) -> Result<f64, InvalidInputError> {
    ensure_enough_points(points)?;
    debug_assert!(
        points.windows(2).all(|w| w[0] <= w[1]),
        "points must be sorted by x"
    );
    debug_assert!(
        points.iter().all(Point::is_finite),
        "coordinates must be finite"
    );

    Ok(closest_in(points))
}

fn closest_in(points: &[Point]) -> f64 {
    if points.len() <= BRUTE_FORCE_THRESHOLD {
        return min_pairwise_distance(points);
    }

    // the left half gets the extra point for odd sizes
    let (left, right) = points.split_at((points.len() + 1) / 2);
    let split_x = left[left.len() - 1].x;
    let min_dist = closest_in(left).min(closest_in(right));

    let strip: Vec<Point> = points
        .iter()
        .filter(|p| (p.x - split_x).abs() <= min_dist)
        .copied()
        .collect();
    trace!(
        points = points.len(),
        strip = strip.len(),
        split_x,
        min_dist,
        "merging strip"
    );

    if strip.len() < 2 {
        return min_dist;
    }
    merge_strip(strip, min_dist)
}

/// Sweeps the strip in y order. A point is only compared with the following points
/// whose y lies less than the current minimum above its own, which by the packing
/// bound are a constant number.
fn merge_strip(mut strip: Vec<Point>, mut min_dist: f64) -> f64 {
    strip.sort_by(Point::cmp_by_y);

    for (i, &a) in strip.iter().enumerate() {
        for &b in &strip[i + 1..] {
            if b.y - a.y >= min_dist {
                break;
            }
            min_dist = min_dist.min(distance(a, b));
        }
    }

    min_dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{Generate, UniformPoints};
    use crate::rng::rng64;
    use crate::solver::closest_pair_brute_force;
    use float_cmp::approx_eq;

    fn sorted(coords: &[(f64, f64)]) -> Vec<Point> {
        let mut points: Vec<Point> = coords.iter().map(|&c| Point::from(c)).collect();
        points.sort();
        points
    }

    #[test]
    fn two_points_works() {
        let p = sorted(&[(0.0, 0.0), (3.0, 4.0)]);

        assert_eq!(closest_pair_divide_and_conquer(&p), Ok(5.0));
    }

    #[test]
    fn three_points_works() {
        let p = sorted(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);

        assert!(approx_eq!(
            f64,
            closest_pair_divide_and_conquer(&p).unwrap(),
            std::f64::consts::SQRT_2
        ));
    }

    #[test]
    fn duplicates_give_zero() {
        let p = sorted(&[(0.0, 0.0), (0.0, 0.0), (5.0, 5.0)]);
        assert_eq!(closest_pair_divide_and_conquer(&p), Ok(0.0));

        let p = sorted(&[(9.0, 1.0), (0.0, 0.0), (4.0, 4.0), (7.0, 2.0), (4.0, 4.0)]);
        assert_eq!(closest_pair_divide_and_conquer(&p), Ok(0.0));
    }

    #[test]
    fn close_pair_right_of_split_works() {
        let p = sorted(&[(0.0, 0.0), (4.0, 0.0), (5.0, 5.0), (5.1, 5.0)]);

        assert_eq!(
            closest_pair_divide_and_conquer(&p),
            Ok(distance(Point::new(5.0, 5.0), Point::new(5.1, 5.0)))
        );
    }

    #[test]
    fn finds_pair_not_adjacent_in_strip() {
        // The strip sorted by y is (4,0), (0,1), (6,1); the closest pair skips (0,1).
        let p = sorted(&[(0.0, 1.0), (4.0, 0.0), (6.0, 1.0), (9.0, 10.0)]);

        assert_eq!(
            closest_pair_divide_and_conquer(&p),
            Ok(5.0_f64.sqrt())
        );
    }

    #[test]
    fn shared_x_coordinates_work() {
        let p = sorted(&[
            (1.0, 0.0),
            (1.0, 10.0),
            (1.0, 3.0),
            (1.0, 7.5),
            (1.0, 12.0),
            (1.0, 20.0),
        ]);

        assert_eq!(closest_pair_divide_and_conquer(&p), Ok(2.0));
    }

    #[test]
    fn too_few_points_fails() {
        assert_eq!(
            DivideAndConquer.closest_pair(&[Point::new(0.0, 0.0)]),
            Err(InvalidInputError::TooFewPoints(1))
        );
    }

    #[test]
    fn matches_brute_force_on_random_sets() {
        let mut rng = rng64(42);
        for count in (2..60).chain(vec![111, 500]) {
            let set = UniformPoints::new(count, (0.0, 100.0), &mut rng).generate();

            assert_eq!(
                DivideAndConquer.closest_pair_set(&set),
                closest_pair_brute_force(&set).unwrap(),
                "mismatch for {} points",
                count
            );
        }
    }

    #[test]
    fn matches_brute_force_on_integer_grids() {
        // small integer coordinates produce many ties and shared x values
        let mut rng = rng64(7);
        for _ in 0..200 {
            let coords: Vec<Point> = (0..8)
                .map(|_| Point::new(rng.rand_range(0..11) as f64, rng.rand_range(0..11) as f64))
                .collect();
            let set = PointSet::new(coords).unwrap();

            assert_eq!(
                DivideAndConquer.closest_pair_set(&set),
                closest_pair_brute_force(&set).unwrap()
            );
        }
    }
}
