//! Original-executable restore inside an emulated drive.
//!
//! Some titles get their launch executable swapped by an external process
//! that leaves the original behind as `<name>.original.exe`. This module
//! walks the emulated drive root (same bounded walker, same depth limit as
//! the override engine) and puts the original back. It is intentionally
//! one-directional: the counterpart that produces the backup lives outside
//! this crate, and restoring twice is inherently a no-op, so no markers are
//! written.

use crate::engine::replace_with_backup;
use crate::error::Result;
use crate::matcher::ORIGINAL_EXE_SUFFIX;
use crate::walker::BoundedWalk;
use camino::{Utf8Path, Utf8PathBuf};

/// Restore `executable_basename` from its `.original.exe` backup, searching
/// the emulated drive root up to the standard depth limit.
///
/// The first matching backup (case-insensitive) wins: any live file at the
/// corresponding original path is deleted, the backup's content is moved
/// there, and the backup is removed. Returns the restored path, or `None`
/// when no backup exists within the depth limit — which is a normal outcome,
/// not an error.
pub fn restore_original_executable(
    emulated_drive_root: &Utf8Path,
    executable_basename: &str,
) -> Result<Option<Utf8PathBuf>> {
    if !emulated_drive_root.as_std_path().is_dir() {
        tracing::debug!(
            "Emulated drive root '{}' does not exist, nothing to restore",
            emulated_drive_root
        );
        return Ok(None);
    }

    let backup_name = format!("{}{}", executable_basename, ORIGINAL_EXE_SUFFIX);

    for file in BoundedWalk::new(emulated_drive_root) {
        let Some(name) = file.path.file_name() else {
            continue;
        };
        if !name.eq_ignore_ascii_case(&backup_name) {
            continue;
        }
        let Some(dir) = file.path.parent() else {
            continue;
        };

        let restored_path = dir.join(executable_basename);
        replace_with_backup(&file.path, &restored_path)?;
        tracing::info!("Restored original executable '{}'", restored_path);
        return Ok(Some(restored_path));
    }

    tracing::debug!(
        "No '{}' backup found under {}",
        backup_name,
        emulated_drive_root
    );
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn utf8_root(dir: &tempfile::TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap()
    }

    fn read(path: &Utf8Path) -> Vec<u8> {
        fs::read(path.as_std_path()).unwrap()
    }

    #[test]
    fn test_restores_exe_in_drive_root() {
        let dir = tempdir().unwrap();
        let root = utf8_root(&dir);
        fs::write(root.join("game.exe.original.exe"), b"original exe content").unwrap();

        let restored = restore_original_executable(&root, "game.exe").unwrap();

        assert_eq!(restored, Some(root.join("game.exe")));
        assert_eq!(read(&root.join("game.exe")), b"original exe content");
        assert!(!root.join("game.exe.original.exe").as_std_path().exists());
    }

    #[test]
    fn test_restores_exe_in_subdirectory() {
        let dir = tempdir().unwrap();
        let root = utf8_root(&dir);
        let game_dir = root.join("Program Files").join("Game");
        fs::create_dir_all(game_dir.as_std_path()).unwrap();
        fs::write(game_dir.join("game.exe.original.exe"), b"original").unwrap();

        let restored = restore_original_executable(&root, "game.exe").unwrap();

        assert_eq!(restored, Some(game_dir.join("game.exe")));
        assert_eq!(read(&game_dir.join("game.exe")), b"original");
    }

    #[test]
    fn test_respects_max_depth() {
        let dir = tempdir().unwrap();
        let root = utf8_root(&dir);

        let mut current = root.clone();
        for i in 1..=7 {
            current = current.join(format!("level{}", i));
            fs::create_dir(current.as_std_path()).unwrap();
        }
        fs::write(current.join("game.exe.original.exe"), b"original").unwrap();

        let restored = restore_original_executable(&root, "game.exe").unwrap();

        assert_eq!(restored, None);
        assert!(!current.join("game.exe").as_std_path().exists());
    }

    #[test]
    fn test_matches_backup_case_insensitively() {
        let dir = tempdir().unwrap();
        let root = utf8_root(&dir);
        fs::write(root.join("GAME.EXE.ORIGINAL.EXE"), b"original").unwrap();

        let restored = restore_original_executable(&root, "game.exe").unwrap();

        assert_eq!(restored, Some(root.join("game.exe")));
        assert_eq!(read(&root.join("game.exe")), b"original");
    }

    #[test]
    fn test_deletes_live_file_before_restoring() {
        let dir = tempdir().unwrap();
        let root = utf8_root(&dir);
        fs::write(root.join("game.exe.original.exe"), b"original").unwrap();
        fs::write(root.join("game.exe"), b"patched launcher").unwrap();

        restore_original_executable(&root, "game.exe").unwrap();

        assert_eq!(read(&root.join("game.exe")), b"original");
    }

    #[test]
    fn test_noop_when_no_backup_exists() {
        let dir = tempdir().unwrap();
        let root = utf8_root(&dir);
        fs::write(root.join("game.exe"), b"live").unwrap();

        let restored = restore_original_executable(&root, "game.exe").unwrap();

        assert_eq!(restored, None);
        assert_eq!(read(&root.join("game.exe")), b"live");
    }

    #[test]
    fn test_noop_when_drive_root_missing() {
        let dir = tempdir().unwrap();
        let root = utf8_root(&dir).join("dosdevices").join("a:");

        let restored = restore_original_executable(&root, "game.exe").unwrap();
        assert_eq!(restored, None);
    }
}
