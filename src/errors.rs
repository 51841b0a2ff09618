//! Error types for the jobtrack CLI
//!
//! Each error type has a corresponding error code for programmatic handling.

use thiserror::Error;

/// Result type alias for jobtrack operations
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Main error type for all jobtrack operations
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Data directory not found - no .jobtrack directory on the search path
    #[error("Data directory not found: {0}")]
    DataDirNotFound(String),

    /// No application with the given id in the store
    #[error("Application not found: {0}")]
    ApplicationNotFound(String),

    /// Status name is not an assignable member of the vocabulary
    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    /// Invalid command-line argument value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TrackerError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            TrackerError::DataDirNotFound(_) => "DATA_DIR_NOT_FOUND",
            TrackerError::ApplicationNotFound(_) => "APPLICATION_NOT_FOUND",
            TrackerError::UnknownStatus(_) => "UNKNOWN_STATUS",
            TrackerError::InvalidArgument(_) => "INVALID_ARGUMENT",
            TrackerError::InvalidJson(_) => "INVALID_JSON",
            TrackerError::FileNotFound(_) => "FILE_NOT_FOUND",
            TrackerError::ConfigError(_) => "CONFIG_ERROR",
            TrackerError::Io(_) => "IO_ERROR",
        }
    }
}
