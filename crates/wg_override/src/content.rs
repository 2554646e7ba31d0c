//! Override content provider abstraction.
//!
//! This module defines the [`OverrideContentProvider`] trait that decouples the
//! override engine from how shim bytes are stored. The engine asks for content
//! by target basename and writes whatever it gets back verbatim; it never
//! validates or interprets the bytes.
//!
//! The crate ships [`FsAssetContent`] for reading shim libraries from a bundled
//! asset directory. The launcher never fetches override content over a network.

use crate::error::Result;
use camino::Utf8PathBuf;

/// Supplies the exact bytes to write in place of a matched target file.
///
/// Implementations are keyed by the *canonical* target basename from the
/// [`TargetSpec`](crate::matcher::TargetSpec), not the on-disk casing of the
/// matched file. Methods take `&mut self` to allow stateful readers (e.g.
/// seeking within an archive of bundled assets).
pub trait OverrideContentProvider {
    /// Return the override bytes for `basename`.
    fn override_bytes(&mut self, basename: &str) -> Result<Vec<u8>>;
}

/// Content provider backed by a flat asset directory.
///
/// Each target basename maps to a file of the same name inside the directory:
///
/// ```text
/// assets/steampipe/
///   steam_api.dll      # 32-bit shim
///   steam_api64.dll    # 64-bit shim
/// ```
pub struct FsAssetContent {
    asset_dir: Utf8PathBuf,
}

impl FsAssetContent {
    pub fn new(asset_dir: Utf8PathBuf) -> Self {
        Self { asset_dir }
    }
}

impl OverrideContentProvider for FsAssetContent {
    fn override_bytes(&mut self, basename: &str) -> Result<Vec<u8>> {
        let path = self.asset_dir.join(basename);
        Ok(std::fs::read(path.as_std_path())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_fs_asset_content_reads_bytes() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("steam_api.dll"), b"shim bytes").unwrap();

        let asset_dir = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        let mut provider = FsAssetContent::new(asset_dir);

        let bytes = provider.override_bytes("steam_api.dll").unwrap();
        assert_eq!(bytes, b"shim bytes");
    }

    #[test]
    fn test_fs_asset_content_missing_asset_is_an_error() {
        let dir = tempdir().unwrap();
        let asset_dir = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        let mut provider = FsAssetContent::new(asset_dir);

        assert!(provider.override_bytes("missing.dll").is_err());
    }
}
