use oorandom::Rand64;

use super::Generate;
use crate::geometry::{Point, PointSet};

/// Draws `count` points with both coordinates uniform in `[range.0, range.1)`.
pub struct UniformPoints<'a> {
    count: usize,
    range: (f64, f64),
    rng: &'a mut Rand64,
}

impl<'a> UniformPoints<'a> {
    /// `count` is raised to 2 if smaller, since a point set needs a pair.
    pub fn new(count: usize, range: (f64, f64), rng: &'a mut Rand64) -> Self {
        UniformPoints {
            count: count.max(2),
            range,
            rng,
        }
    }

    fn coordinate(&mut self) -> f64 {
        self.rng.rand_float() * (self.range.1 - self.range.0) + self.range.0
    }
}

impl<'a> Generate for UniformPoints<'a> {
    fn generate(&mut self) -> PointSet {
        let points = (0..self.count)
            .map(|_| {
                let x = self.coordinate();
                let y = self.coordinate();
                Point::new(x, y)
            })
            .collect();

        // Unwrapping is fine, count is at least 2.
        PointSet::new(points).unwrap()
    }
}
