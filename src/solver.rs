mod brute_force;
mod divide_and_conquer;
mod error;

pub use brute_force::{closest_pair_brute_force, BruteForce};
pub use divide_and_conquer::{closest_pair_divide_and_conquer, DivideAndConquer};
pub use error::InvalidInputError;

use crate::geometry::Point;

/// An algorithm computing the smallest pairwise distance of a point collection.
///
/// Implementors never modify the given points, so several solvers can be run against
/// the same collection.
pub trait Solver {
    fn name(&self) -> &'static str;

    fn closest_pair(&self, points: &[Point]) -> Result<f64, InvalidInputError>;
}

fn ensure_enough_points(points: &[Point]) -> Result<(), InvalidInputError> {
    if points.len() < 2 {
        Err(InvalidInputError::TooFewPoints(points.len()))
    } else {
        Ok(())
    }
}
