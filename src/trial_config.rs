use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::rng::os_random_seed64;

pub trait Fix<CorrectType> {
    fn to_fixed(&self) -> CorrectType;
}

/// Configuration of the randomized cross-check, as read from YAML.
///
/// A config without a `seed` draws one from the operating system when fixed.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(untagged)]
pub enum TrialConfig {
    Seeded(SeededTrialConfig),
    Unseeded(UnseededTrialConfig),
}

impl TrialConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, TrialConfigError> {
        serde_yaml::from_str(yaml).map_err(|err| TrialConfigError::Parse(err.to_string()))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TrialConfigError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path)
            .map_err(|_| TrialConfigError::MissingFile(path.display().to_string()))?;
        Self::from_yaml_str(&yaml)
    }

    pub fn cfg(&self) -> SeededTrialConfig {
        match self {
            Self::Seeded(cfg) => *cfg,
            Self::Unseeded(cfg) => cfg.to_fixed(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct SeededTrialConfig {
    pub seed: u64,
    pub trials: usize,
    pub points: usize,
    pub range: (f64, f64),
}

impl SeededTrialConfig {
    pub fn validate(&self) -> Result<(), TrialConfigError> {
        if self.trials == 0 {
            return Err(TrialConfigError::Invalid(
                "At least one trial has to be run.".to_string(),
            ));
        }
        if self.points < 2 {
            return Err(TrialConfigError::Invalid(format!(
                "Trials need at least two points, got {}.",
                self.points
            )));
        }
        let (min, max) = self.range;
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(TrialConfigError::Invalid(format!(
                "Coordinate range ({}, {}) is not a finite, non-empty interval.",
                min, max
            )));
        }

        Ok(())
    }
}

impl Default for SeededTrialConfig {
    fn default() -> Self {
        SeededTrialConfig {
            seed: 0,
            trials: 100,
            points: 111,
            range: (0.0, 100.0),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy)]
pub struct UnseededTrialConfig {
    pub trials: usize,
    pub points: usize,
    pub range: (f64, f64),
}

impl Fix<SeededTrialConfig> for UnseededTrialConfig {
    fn to_fixed(&self) -> SeededTrialConfig {
        SeededTrialConfig {
            seed: os_random_seed64(),
            trials: self.trials,
            points: self.points,
            range: self.range,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum TrialConfigError {
    MissingFile(String),
    Parse(String),
    Invalid(String),
}

impl fmt::Display for TrialConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFile(file) => write!(f, "Could not read or find {}.", file),
            Self::Parse(msg) => write!(f, "Config is not a valid trial config: {}", msg),
            Self::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for TrialConfigError {}
