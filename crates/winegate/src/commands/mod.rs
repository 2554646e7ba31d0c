use crate::errors::CliError;
use crate::utils::install_base_dir;
use camino::{Utf8Path, Utf8PathBuf};
use miette::{IntoDiagnostic, Result};
use wg_container::InstallPaths;
use wg_override::TargetSpec;

mod apply;
mod restore_exe;
mod revert;
mod status;

pub use apply::{apply_override, ApplyOverrideArgs};
pub use restore_exe::{restore_executable, RestoreExecutableArgs};
pub use revert::{revert_override, RevertOverrideArgs};
pub use status::{show_status, ShowStatusArgs};

/// Basenames of the anti-tamper libraries the shim swap targets
/// (32-bit and 64-bit variants, matched case-insensitively).
pub const SHIM_TARGET_BASENAMES: [&str; 2] = ["steam_api.dll", "steam_api64.dll"];

pub(crate) fn shim_targets() -> TargetSpec {
    TargetSpec::new(SHIM_TARGET_BASENAMES)
}

/// Resolve the install root from an explicit `--path` or a registered
/// `--app-id`, in that order of precedence.
pub(crate) fn resolve_install_root(
    data_dir: &Utf8Path,
    app_id: Option<&str>,
    path: Option<&str>,
) -> Result<Utf8PathBuf> {
    if let Some(path) = path {
        return Ok(Utf8PathBuf::from(path));
    }
    let Some(app_id) = app_id else {
        return Err(CliError::MissingTarget.into());
    };

    let installs = InstallPaths::load(install_base_dir(data_dir)).into_diagnostic()?;
    installs.install_root(app_id).into_diagnostic()
}

/// Refuse to mutate an install whose app has a running session.
pub(crate) fn ensure_no_session(app_id: Option<&str>) -> Result<()> {
    if let Some(app_id) = app_id {
        if wg_container::is_session_running(app_id) {
            return Err(CliError::SessionRunning {
                app_id: app_id.to_string(),
            }
            .into());
        }
    }
    Ok(())
}
