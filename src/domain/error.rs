use std::io;

use thiserror::Error;

use crate::domain::generation::GenerationFailure;

/// Library-wide error type for genconf operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration file does not exist.
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    /// The configuration file is not a well-formed configuration document.
    #[error("Failed to parse configuration file {path}: {details}")]
    ConfigParse { path: String, details: String },

    /// A required environment variable is unset or empty.
    #[error("{0} is not set")]
    MissingEnvironment(String),

    /// The generation pipeline stopped.
    #[error(transparent)]
    Generation(#[from] GenerationFailure),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_) | AppError::ConfigParse { .. } => {
                io::ErrorKind::InvalidInput
            }
            AppError::ConfigNotFound(_) | AppError::MissingEnvironment(_) => {
                io::ErrorKind::NotFound
            }
            AppError::Generation(failure) => failure.error.kind(),
        }
    }
}
