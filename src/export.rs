mod distance;
mod points;

pub use distance::{distance_output_path, format_distance, write_distance};
pub use points::write_points;
