use std::ops::Deref;

use super::Point;
use crate::solver::InvalidInputError;

/// An x-sorted collection of at least two points.
///
/// Sorting happens once on construction and the collection is immutable afterwards,
/// so a `PointSet` can be handed to every solver as is.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    pub fn new(mut points: Vec<Point>) -> Result<Self, InvalidInputError> {
        if points.len() < 2 {
            return Err(InvalidInputError::TooFewPoints(points.len()));
        }
        points.sort();

        Ok(PointSet { points })
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn into_inner(self) -> Vec<Point> {
        self.points
    }
}

impl Deref for PointSet {
    type Target = [Point];

    fn deref(&self) -> &[Point] {
        &self.points
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sorts_points() {
        let set = PointSet::new(vec![
            Point::new(3.0, 0.0),
            Point::new(-1.0, 2.0),
            Point::new(-1.0, 1.0),
        ])
        .unwrap();

        assert_eq!(
            set.as_slice(),
            &[
                Point::new(-1.0, 1.0),
                Point::new(-1.0, 2.0),
                Point::new(3.0, 0.0)
            ]
        );
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn new_rejects_too_few_points() {
        assert_eq!(
            PointSet::new(vec![]),
            Err(InvalidInputError::TooFewPoints(0))
        );
        assert_eq!(
            PointSet::new(vec![Point::new(1.0, 1.0)]),
            Err(InvalidInputError::TooFewPoints(1))
        );
    }

    #[test]
    fn keeps_duplicates() {
        let set = PointSet::new(vec![Point::new(0.0, 0.0), Point::new(0.0, 0.0)]).unwrap();

        assert_eq!(set.into_inner().len(), 2);
    }
}
