mod distance;
mod point;
mod point_set;

pub use distance::{distance, Distance};
pub use point::Point;
pub use point_set::PointSet;
