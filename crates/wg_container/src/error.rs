use camino::Utf8PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving container and install paths.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem I/O failed (reading or writing the install registry).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse or serialize JSON (install registry).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No registry entry for the requested app.
    #[error("App not registered: {0}")]
    AppNotRegistered(String),

    /// A registered install directory is missing on disk.
    #[error("Install root not found: {0}")]
    InstallRootNotFound(Utf8PathBuf),

    /// An emulated drive letter outside `a`..`z`.
    #[error("Invalid drive letter: {0}")]
    InvalidDriveLetter(char),
}
