use std::error::Error;
use std::fmt;
use std::io;

use crate::solver::InvalidInputError;
use crate::trial_config::TrialConfigError;

#[derive(Debug)]
pub enum TrialError {
    Config(TrialConfigError),
    Solver(InvalidInputError),
    Csv(csv::Error),
    Io(io::Error),
}

impl fmt::Display for TrialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "Invalid trial config: {}", err),
            Self::Solver(err) => write!(f, "Solver rejected the input: {}", err),
            Self::Csv(err) => write!(f, "Could not write trial record: {}", err),
            Self::Io(err) => write!(f, "Could not write trial records: {}", err),
        }
    }
}

impl Error for TrialError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Solver(err) => Some(err),
            Self::Csv(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<TrialConfigError> for TrialError {
    fn from(err: TrialConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<InvalidInputError> for TrialError {
    fn from(err: InvalidInputError) -> Self {
        Self::Solver(err)
    }
}

impl From<csv::Error> for TrialError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<io::Error> for TrialError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
