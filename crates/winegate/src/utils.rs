use crate::errors::CliError;
use camino::{Utf8Path, Utf8PathBuf};
use directories_next::ProjectDirs;
use miette::Result;

#[macro_export]
macro_rules! println_pad {
    ($($arg:tt)*) => {{
        let __s = format!($($arg)*);
        for __line in __s.lines() {
            println!("    {}", __line);
        }
    }};
}

/// Resolve the launcher data directory.
///
/// An explicit `--data-dir` wins; otherwise the platform data directory for
/// the winegate application is used.
pub fn launcher_data_dir(override_dir: Option<&str>) -> Result<Utf8PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(Utf8PathBuf::from(dir));
    }

    let dirs = ProjectDirs::from("app", "winegate", "winegate")
        .ok_or(CliError::DataDirUnavailable)?;
    Utf8PathBuf::from_path_buf(dirs.data_dir().to_path_buf())
        .map_err(|path| CliError::NonUtf8DataDir { path }.into())
}

/// `<data_dir>/installs` — base directory of installed game trees.
pub fn install_base_dir(data_dir: &Utf8Path) -> Utf8PathBuf {
    data_dir.join("installs")
}

/// `<data_dir>/containers/<app_id>` — a container's data root.
pub fn container_root(data_dir: &Utf8Path, app_id: &str) -> Utf8PathBuf {
    data_dir.join("containers").join(app_id)
}

/// `<data_dir>/assets/steampipe` — default location of the bundled shims.
pub fn default_shim_assets_dir(data_dir: &Utf8Path) -> Utf8PathBuf {
    data_dir.join("assets").join("steampipe")
}
