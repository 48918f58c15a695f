use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscoveryError {
    /// Caller supplied an argument outside its accepted range
    ValidationError(String),
    /// The sampled block never produced a usable line boundary
    SamplingError(String),
    ParseError(String),
    ConfigError(String),
    IoError(String),
    Internal(String),
}

impl DiscoveryError {
    /// Sampling and I/O failures abort one source, not the discovery run.
    pub fn is_io_class(&self) -> bool {
        matches!(self, DiscoveryError::SamplingError(_) | DiscoveryError::IoError(_))
    }
}

impl fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscoveryError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            DiscoveryError::SamplingError(msg) => write!(f, "Sampling error: {}", msg),
            DiscoveryError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            DiscoveryError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            DiscoveryError::IoError(msg) => write!(f, "IO error: {}", msg),
            DiscoveryError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DiscoveryError {}

impl From<std::io::Error> for DiscoveryError {
    fn from(err: std::io::Error) -> Self {
        DiscoveryError::IoError(err.to_string())
    }
}

impl From<csv::Error> for DiscoveryError {
    fn from(err: csv::Error) -> Self {
        DiscoveryError::ParseError(err.to_string())
    }
}

impl From<figment::Error> for DiscoveryError {
    fn from(err: figment::Error) -> Self {
        DiscoveryError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DiscoveryError>;
