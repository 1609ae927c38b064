mod uniform;

pub use uniform::UniformPoints;

use crate::geometry::PointSet;

/// A generator for point sets.
pub trait Generate {
    fn generate(&mut self) -> PointSet;
}
