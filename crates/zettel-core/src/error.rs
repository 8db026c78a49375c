//! Error types for vault and note operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while working with a note vault.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A note file already exists at the target path.
    ///
    /// Raised by note materialization when the create-if-absent write loses
    /// the race. Surfaced to the user; the existing file is left untouched.
    #[error("note already exists at '{}'", .0.display())]
    NoteExists(PathBuf),

    /// The requested note name is not a valid link name.
    #[error("invalid note name '{0}'")]
    InvalidName(String),

    /// Note glob pattern error.
    #[error("pattern error: {0}")]
    Pattern(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for vault and note operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Convert globset errors to our error type.
impl From<globset::Error> for Error {
    fn from(err: globset::Error) -> Self {
        Error::Pattern(err.to_string())
    }
}

/// Convert task join errors to our error type.
impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Error::Internal(format!("task join error: {}", err))
    }
}
