//! Install registry and install-path resolution.
//!
//! The launcher records every completed download in an `installs.json`
//! document inside the install base directory, mapping app ids to the
//! directory names they were installed under. [`InstallPaths`] joins the two
//! to answer "where does this app live on disk" without any global state:
//! callers construct it from a base directory and pass it where needed.

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// File name of the registry document inside the install base directory.
pub const INSTALLS_FILE_NAME: &str = "installs.json";

const REGISTRY_VERSION: u32 = 1;

/// One installed app.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallEntry {
    /// App identifier, e.g. `STEAM_123456`.
    pub app_id: String,
    /// Directory name under the install base directory.
    pub install_dir: String,
}

/// Persisted registry of installed apps.
///
/// # JSON format
///
/// ```json
/// {
///   "version": 1,
///   "installs": [
///     { "appId": "STEAM_123456", "installDir": "123456" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallRegistry {
    version: u32,
    installs: Vec<InstallEntry>,
}

impl Default for InstallRegistry {
    fn default() -> Self {
        Self {
            version: REGISTRY_VERSION,
            installs: Vec::new(),
        }
    }
}

impl InstallRegistry {
    /// Load the registry from a file. A missing file is an empty registry.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        if !path.as_std_path().exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path.as_std_path())?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save the registry, creating parent directories if needed.
    pub fn save(&self, path: &Utf8Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent.as_std_path())?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_std_path(), contents)?;
        Ok(())
    }

    /// Register an install, replacing any previous entry for the same app.
    pub fn register(&mut self, app_id: impl Into<String>, install_dir: impl Into<String>) {
        let app_id = app_id.into();
        self.installs.retain(|e| e.app_id != app_id);
        self.installs.push(InstallEntry {
            app_id,
            install_dir: install_dir.into(),
        });
    }

    /// Remove an app's entry. Removing an unknown app is a no-op.
    pub fn remove(&mut self, app_id: &str) {
        self.installs.retain(|e| e.app_id != app_id);
    }

    pub fn entries(&self) -> &[InstallEntry] {
        &self.installs
    }

    /// The registered install directory name for `app_id`.
    pub fn install_dir_name(&self, app_id: &str) -> Option<&str> {
        self.installs
            .iter()
            .find(|e| e.app_id == app_id)
            .map(|e| e.install_dir.as_str())
    }
}

/// Resolves install roots for registered apps under one base directory.
#[derive(Debug, Clone)]
pub struct InstallPaths {
    base_dir: Utf8PathBuf,
    registry: InstallRegistry,
}

impl InstallPaths {
    pub fn new(base_dir: Utf8PathBuf, registry: InstallRegistry) -> Self {
        Self { base_dir, registry }
    }

    /// Load the registry from `<base_dir>/installs.json`.
    pub fn load(base_dir: Utf8PathBuf) -> Result<Self> {
        let registry = InstallRegistry::load(&base_dir.join(INSTALLS_FILE_NAME))?;
        Ok(Self { base_dir, registry })
    }

    pub fn base_dir(&self) -> &Utf8Path {
        &self.base_dir
    }

    pub fn registry(&self) -> &InstallRegistry {
        &self.registry
    }

    /// Resolve the install root for `app_id`, validating that it exists.
    pub fn install_root(&self, app_id: &str) -> Result<Utf8PathBuf> {
        let dir_name = self
            .registry
            .install_dir_name(app_id)
            .ok_or_else(|| Error::AppNotRegistered(app_id.to_string()))?;
        let root = self.base_dir.join(dir_name);
        if !root.as_std_path().is_dir() {
            return Err(Error::InstallRootNotFound(root));
        }
        Ok(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn utf8_root(dir: &tempfile::TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap()
    }

    #[test]
    fn test_load_missing_registry_is_empty() {
        let dir = tempdir().unwrap();
        let path = utf8_root(&dir).join(INSTALLS_FILE_NAME);

        let registry = InstallRegistry::load(&path).unwrap();
        assert!(registry.entries().is_empty());
    }

    #[test]
    fn test_register_save_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = utf8_root(&dir).join(INSTALLS_FILE_NAME);

        let mut registry = InstallRegistry::default();
        registry.register("STEAM_123456", "123456");
        registry.save(&path).unwrap();

        let loaded = InstallRegistry::load(&path).unwrap();
        assert_eq!(loaded.install_dir_name("STEAM_123456"), Some("123456"));
    }

    #[test]
    fn test_register_replaces_existing_entry() {
        let mut registry = InstallRegistry::default();
        registry.register("STEAM_1", "old");
        registry.register("STEAM_1", "new");

        assert_eq!(registry.entries().len(), 1);
        assert_eq!(registry.install_dir_name("STEAM_1"), Some("new"));
    }

    #[test]
    fn test_load_invalid_json_is_an_error() {
        let dir = tempdir().unwrap();
        let path = utf8_root(&dir).join(INSTALLS_FILE_NAME);
        fs::write(path.as_std_path(), b"{ invalid json }").unwrap();

        assert!(InstallRegistry::load(&path).is_err());
    }

    #[test]
    fn test_install_root_resolution() {
        let dir = tempdir().unwrap();
        let base = utf8_root(&dir);
        fs::create_dir(base.join("123456").as_std_path()).unwrap();

        let mut registry = InstallRegistry::default();
        registry.register("STEAM_123456", "123456");
        let paths = InstallPaths::new(base.clone(), registry);

        assert_eq!(paths.install_root("STEAM_123456").unwrap(), base.join("123456"));
    }

    #[test]
    fn test_install_root_unregistered_app() {
        let dir = tempdir().unwrap();
        let paths = InstallPaths::new(utf8_root(&dir), InstallRegistry::default());

        assert!(matches!(
            paths.install_root("STEAM_999"),
            Err(Error::AppNotRegistered(_))
        ));
    }

    #[test]
    fn test_install_root_missing_directory() {
        let dir = tempdir().unwrap();
        let mut registry = InstallRegistry::default();
        registry.register("STEAM_123456", "gone");
        let paths = InstallPaths::new(utf8_root(&dir), registry);

        assert!(matches!(
            paths.install_root("STEAM_123456"),
            Err(Error::InstallRootNotFound(_))
        ));
    }
}
