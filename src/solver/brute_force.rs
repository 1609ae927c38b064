use super::{ensure_enough_points, InvalidInputError, Solver};
use crate::geometry::{distance, Point};

/// Exhaustive scan over every unordered pair. Has no ordering requirements and serves
/// as the reference the other solvers are checked against.
#[derive(Debug, Default, Clone, Copy)]
pub struct BruteForce;

impl Solver for BruteForce {
    fn name(&self) -> &'static str {
        "brute force"
    }

    fn closest_pair(&self, points: &[Point]) -> Result<f64, InvalidInputError> {
        closest_pair_brute_force(points)
    }
}

pub fn closest_pair_brute_force(points: &[Point]) -> Result<f64, InvalidInputError> {
    ensure_enough_points(points)?;
    Ok(min_pairwise_distance(points))
}

/// Smallest distance over all pairs i < j. Callers guarantee at least two points.
pub(super) fn min_pairwise_distance(points: &[Point]) -> f64 {
    let mut min_dist = f64::INFINITY;
    for (i, &a) in points.iter().enumerate() {
        for &b in &points[i + 1..] {
            min_dist = min_dist.min(distance(a, b));
        }
    }

    min_dist
}
