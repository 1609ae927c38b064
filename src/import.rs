mod error;
mod points;

pub use error::{FormatError, ImportError};
pub use points::{parse_points, read_points};
