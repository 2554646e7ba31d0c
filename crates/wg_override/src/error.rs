//! Error types for override and restore operations.
//!
//! All fallible functions in this crate return [`Result<T>`], which uses [`Error`]
//! as the error type. External error types (`std::io::Error`, `serde_json::Error`)
//! are automatically converted via `From` impls.
//!
//! Per-file failures during a pass are *not* represented here — they are carried
//! in the aggregate reports ([`ApplyReport`](crate::engine::ApplyReport),
//! [`RevertReport`](crate::engine::RevertReport)) so a single bad file never
//! aborts the whole traversal.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during override and restore operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem I/O failed (reading assets, writing the marker document, etc.).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse or serialize JSON (marker document).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The install root passed to the engine does not exist or is not a directory.
    #[error("Install root not found: {0}")]
    InstallRootNotFound(Utf8PathBuf),

    /// Catch-all for errors from content providers and other sources.
    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}
