//! Container filesystem layout.
//!
//! Each app runs inside its own Wine-style container. The container's data
//! root holds a wineprefix, and emulated disk drives appear as symlinked
//! directories under `dosdevices` (`a:`, `c:`, ...). Game executables live
//! under one of those drive roots, which is where the executable restore
//! operation searches.

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};

const WINEPREFIX_DIR: &str = ".wine";
const DOSDEVICES_DIR: &str = "dosdevices";

/// Filesystem layout of one container.
#[derive(Debug, Clone)]
pub struct ContainerFs {
    root: Utf8PathBuf,
}

impl ContainerFs {
    pub fn new(root: Utf8PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// The container's wineprefix directory.
    pub fn wineprefix(&self) -> Utf8PathBuf {
        self.root.join(WINEPREFIX_DIR)
    }

    /// The `dosdevices` directory holding the emulated drive roots.
    pub fn dosdevices(&self) -> Utf8PathBuf {
        self.wineprefix().join(DOSDEVICES_DIR)
    }

    /// The root of the emulated drive `letter` (folded to lowercase).
    pub fn drive_root(&self, letter: char) -> Result<Utf8PathBuf> {
        if !letter.is_ascii_alphabetic() {
            return Err(Error::InvalidDriveLetter(letter));
        }
        let letter = letter.to_ascii_lowercase();
        Ok(self.dosdevices().join(format!("{}:", letter)))
    }

    /// Whether the container has been bootstrapped (its dosdevices exist).
    pub fn is_valid(&self) -> bool {
        self.dosdevices().as_std_path().is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_layout() {
        let fs = ContainerFs::new(Utf8PathBuf::from("/data/containers/STEAM_1"));

        assert_eq!(fs.wineprefix().as_str(), "/data/containers/STEAM_1/.wine");
        assert_eq!(
            fs.drive_root('a').unwrap().as_str(),
            "/data/containers/STEAM_1/.wine/dosdevices/a:"
        );
    }

    #[test]
    fn test_drive_letter_is_folded() {
        let fs = ContainerFs::new(Utf8PathBuf::from("/c"));
        assert_eq!(fs.drive_root('A').unwrap(), fs.drive_root('a').unwrap());
    }

    #[test]
    fn test_invalid_drive_letter() {
        let fs = ContainerFs::new(Utf8PathBuf::from("/c"));
        assert!(matches!(
            fs.drive_root('1'),
            Err(Error::InvalidDriveLetter('1'))
        ));
    }

    #[test]
    fn test_is_valid_after_bootstrap() {
        let dir = tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        let container = ContainerFs::new(root);

        assert!(!container.is_valid());
        fs::create_dir_all(container.dosdevices().as_std_path()).unwrap();
        assert!(container.is_valid());
    }
}
