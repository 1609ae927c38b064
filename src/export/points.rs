use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::geometry::Point;

/// Writes one `x y` line per point in a form `read_points` parses back exactly.
pub fn write_points<P: AsRef<Path>>(path: P, points: &[Point]) -> io::Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    for point in points {
        writeln!(writer, "{} {}", point.x, point.y)?;
    }
    writer.flush()?;
    info!(file = %path.display(), points = points.len(), "wrote points");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{Generate, UniformPoints};
    use crate::import::read_points;
    use crate::rng::rng64;
    use std::env;
    use std::fs;

    #[test]
    fn written_points_read_back_unchanged() {
        let mut rng = rng64(11);
        let set = UniformPoints::new(111, (0.0, 100.0), &mut rng).generate();
        let path = env::temp_dir().join(format!("closest_pair_points_{}.txt", std::process::id()));

        write_points(&path, &set).unwrap();
        let read = read_points(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(read, set);
    }
}
