use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    #[error("No install specified")]
    #[diagnostic(
        code(install::missing_target),
        help("Pass --app-id <id> for a registered app, or --path <dir> for an explicit install directory")
    )]
    MissingTarget,

    #[error("Could not determine the launcher data directory")]
    #[diagnostic(code(data_dir::unavailable), help("Pass --data-dir <dir> explicitly"))]
    DataDirUnavailable,

    #[error("Launcher data directory is not valid UTF-8: {path:?}")]
    #[diagnostic(
        code(data_dir::non_utf8),
        help("Pass --data-dir <dir> with a UTF-8 path")
    )]
    NonUtf8DataDir { path: PathBuf },

    #[error("A session for {app_id} is currently running")]
    #[diagnostic(
        code(session::running),
        help("Close the running game session before changing its install")
    )]
    SessionRunning { app_id: String },
}
