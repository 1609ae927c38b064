use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum InvalidInputError {
    TooFewPoints(usize),
}

impl fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPoints(n) => write!(f, "At least two points are needed, got {}.", n),
        }
    }
}

impl Error for InvalidInputError {}
