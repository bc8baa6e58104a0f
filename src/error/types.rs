//! Error types
//!
//! Path errors are raised locally and never reach the native engine.
//! Engine errors are carried through exactly as the engine reported them.

use thiserror::Error;

/// Path resolution errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPathError {
    #[error("Empty path")]
    Empty,
    #[error("Path traversal attempt: {0}")]
    Traversal(String),
    #[error("Non-canonical path: {0}")]
    NonCanonical(String),
    #[error("Path not representable on this platform: {0}")]
    Unrepresentable(String),
    #[error("Invalid storage root: {0}")]
    InvalidRoot(String),
}

/// Failures reported by the native storage engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NativeEngineError {
    #[error("{operation} failed with status {code}")]
    Status { operation: &'static str, code: i32 },
    #[error("{0} returned no data")]
    NoData(&'static str),
    #[error("{0} was aborted before completing")]
    Aborted(&'static str),
    #[error("{0}")]
    Other(String),
}

/// Error returned by every client operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlexonError {
    #[error("Invalid path: {0}")]
    InvalidPath(#[from] InvalidPathError),
    #[error("Native engine error: {0}")]
    Engine(#[from] NativeEngineError),
}

impl FlexonError {
    /// True when the operation was rejected before reaching the engine
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, FlexonError::InvalidPath(_))
    }
}
