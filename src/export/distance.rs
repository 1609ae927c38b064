use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Where the distance computed for `input` goes: the input path without its extension,
/// suffixed with `_distance.txt`.
pub fn distance_output_path<P: AsRef<Path>>(input: P) -> PathBuf {
    let input = input.as_ref();
    let mut name: OsString = input.file_stem().unwrap_or_default().to_os_string();
    name.push("_distance.txt");
    input.with_file_name(name)
}

/// Shortest representation that parses back to the same value, always with a decimal
/// point or exponent.
pub fn format_distance(distance: f64) -> String {
    format!("{:?}", distance)
}

pub fn write_distance<P: AsRef<Path>>(distance: f64, input: P) -> io::Result<PathBuf> {
    let output = distance_output_path(input);
    fs::write(&output, format_distance(distance))?;
    info!(file = %output.display(), distance, "wrote distance");

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn distance_output_path_works() {
        assert_eq!(
            distance_output_path("111.txt"),
            PathBuf::from("111_distance.txt")
        );
        assert_eq!(
            distance_output_path("data/points.v2.txt"),
            PathBuf::from("data/points.v2_distance.txt")
        );
        assert_eq!(
            distance_output_path("data/points"),
            PathBuf::from("data/points_distance.txt")
        );
    }

    #[test]
    fn format_distance_works() {
        assert_eq!(format_distance(5.0), "5.0");
        assert_eq!(format_distance(0.0), "0.0");
        assert_eq!(format_distance(2f64.sqrt()), "1.4142135623730951");
    }

    #[test]
    fn write_distance_works() {
        let input = env::temp_dir().join(format!("closest_pair_write_{}.txt", std::process::id()));
        let output = write_distance(0.1, &input).unwrap();
        let written = fs::read_to_string(&output).unwrap();
        fs::remove_file(&output).unwrap();

        assert_eq!(written, "0.1");
        assert_eq!(output, distance_output_path(&input));
    }
}
