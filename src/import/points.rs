use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

use crate::geometry::{Point, PointSet};
use crate::import::{FormatError, ImportError};

/// Reads a point file with one `x y` pair per line and returns the points sorted.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<PointSet, ImportError> {
    let path = path.as_ref();
    let file =
        File::open(path).map_err(|_| ImportError::MissingFile(path.display().to_string()))?;
    let points = parse_points(BufReader::new(file))?;
    debug!(file = %path.display(), points = points.len(), "read points");

    Ok(points)
}

/// Parses whitespace separated coordinate pairs. Every line, including blank ones, has
/// to hold exactly two finite numbers.
pub fn parse_points<R: BufRead>(reader: R) -> Result<PointSet, ImportError> {
    let mut points = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        points.push(parse_line(&line?, idx + 1)?);
    }

    PointSet::new(points).map_err(|err| ImportError::InvalidFormat(err.into()))
}

fn parse_line(line: &str, line_number: usize) -> Result<Point, FormatError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(FormatError::WrongTokenCount {
            line: line_number,
            found: tokens.len(),
        });
    }

    Ok(Point::new(
        parse_coordinate(tokens[0], line_number)?,
        parse_coordinate(tokens[1], line_number)?,
    ))
}

fn parse_coordinate(token: &str, line_number: usize) -> Result<f64, FormatError> {
    let value: f64 = token.parse().map_err(|_| FormatError::InvalidNumber {
        line: line_number,
        token: token.to_string(),
    })?;
    if !value.is_finite() {
        return Err(FormatError::NonFiniteCoordinate {
            line: line_number,
            token: token.to_string(),
        });
    }

    Ok(value)
}
