//! Error types for the ce-app layer.

use std::path::PathBuf;

/// Application error shared by the CLI and GUI front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("API error: {0}")]
    Api(#[from] ce_client::ClientError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No upload selected")]
    NoUploadSelected,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ce-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<ce_core::CoreError> for AppError {
    fn from(err: ce_core::CoreError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}
