use thiserror::Error;

/// Raised when a browser handle the app depends on cannot be acquired.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SetupError {
    #[error("no global `window` available")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("required element #{0} not found")]
    MissingElement(&'static str),
    #[error("localStorage is unavailable")]
    StorageUnavailable,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StorageError {
    #[error("failed to read storage: {0}")]
    Read(String),
    #[error("failed to write storage: {0}")]
    Write(String),
}
