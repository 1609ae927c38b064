use std::error::Error;
use std::fmt;
use std::io;

use crate::solver::InvalidInputError;

/// A malformed point file. Line numbers start at 1.
#[derive(Debug, PartialEq, Clone)]
pub enum FormatError {
    WrongTokenCount { line: usize, found: usize },
    InvalidNumber { line: usize, token: String },
    NonFiniteCoordinate { line: usize, token: String },
    TooFewPoints(usize),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongTokenCount { line, found } => write!(
                f,
                "Line {}: expected two coordinates, found {} tokens.",
                line, found
            ),
            Self::InvalidNumber { line, token } => {
                write!(f, "Line {}: {:?} is not a number.", line, token)
            }
            Self::NonFiniteCoordinate { line, token } => {
                write!(f, "Line {}: coordinate {:?} is not finite.", line, token)
            }
            Self::TooFewPoints(n) => write!(f, "Less than two points were given ({}).", n),
        }
    }
}

impl Error for FormatError {}

impl From<InvalidInputError> for FormatError {
    fn from(err: InvalidInputError) -> Self {
        match err {
            InvalidInputError::TooFewPoints(n) => Self::TooFewPoints(n),
        }
    }
}

#[derive(Debug)]
pub enum ImportError {
    MissingFile(String),
    InvalidFormat(FormatError),
    Io(io::Error),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFile(file) => write!(f, "Could not read or find {}.", file),
            Self::InvalidFormat(err) => write!(f, "Invalid format: {}", err),
            Self::Io(err) => write!(f, "Read failed: {}", err),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingFile(_) => None,
            Self::InvalidFormat(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<FormatError> for ImportError {
    fn from(err: FormatError) -> Self {
        Self::InvalidFormat(err)
    }
}

impl From<io::Error> for ImportError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
