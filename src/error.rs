use thiserror::Error;

/// Custom error types for tickscout
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TickscoutError {
    #[error("Could not determine the config directory for this platform")]
    NoConfigDir,

    #[error("Invalid config file: {0}")]
    InvalidConfig(String),

    #[error("Invalid API base URL: {0}")]
    InvalidApiUrl(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for TickscoutError {
    fn from(err: std::io::Error) -> Self {
        TickscoutError::Io(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
