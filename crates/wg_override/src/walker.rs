//! Depth-bounded, handle-safe directory traversal.
//!
//! [`BoundedWalk`] is the traversal primitive shared by the override engine and
//! the executable restore operation. It yields regular files under a root, at
//! most [`MAX_WALK_DEPTH`] path components below it, in depth-first order.
//! Directories are descended into but never yielded.
//!
//! The walk lists one directory completely into memory and closes its handle
//! before descending into any subdirectory, so at most one directory handle is
//! open at any point regardless of tree depth or width. The engine may run many
//! passes per process lifetime (one per game launch), and this discipline keeps
//! repeated passes from accumulating open descriptors.
//!
//! Unreadable directories and non-UTF-8 paths are skipped with a warning rather
//! than aborting the walk. Symlinks are not followed; an entry is classified by
//! its reported type only.

use camino::{Utf8Path, Utf8PathBuf};

/// Maximum number of directory levels below the root that a walk descends.
///
/// Entries more than this many path components below the root are never
/// visited or yielded.
pub const MAX_WALK_DEPTH: usize = 5;

/// A regular file visited by [`BoundedWalk`].
#[derive(Debug, Clone)]
pub struct WalkedFile {
    /// Full path of the file.
    pub path: Utf8PathBuf,
    /// Number of path components below the walk root (a file directly inside
    /// the root has depth 1).
    pub depth: usize,
}

/// Depth-bounded depth-first iterator over the regular files under a root.
///
/// See the module docs for the traversal and resource-safety contract.
pub struct BoundedWalk {
    max_depth: usize,
    /// Directories waiting to be listed, paired with their depth below root.
    dirs: Vec<(Utf8PathBuf, usize)>,
    /// Files collected from the most recently listed directory.
    files: Vec<WalkedFile>,
}

impl BoundedWalk {
    /// Start a walk below `root` with the standard depth bound.
    pub fn new(root: &Utf8Path) -> Self {
        Self::with_max_depth(root, MAX_WALK_DEPTH)
    }

    /// Start a walk below `root` with an explicit depth bound.
    pub fn with_max_depth(root: &Utf8Path, max_depth: usize) -> Self {
        Self {
            max_depth,
            dirs: vec![(root.to_path_buf(), 0)],
            files: Vec::new(),
        }
    }

    /// List `dir` in full, queueing its files and eligible subdirectories.
    ///
    /// The directory handle is dropped before this returns, so no handle is
    /// held across descents or across calls to [`Iterator::next`].
    fn list_dir(&mut self, dir: &Utf8Path, depth: usize) {
        let entries = match std::fs::read_dir(dir.as_std_path()) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Failed to list '{}': {}", dir, e);
                return;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Failed to read an entry of '{}': {}", dir, e);
                    continue;
                }
            };

            let path = match Utf8PathBuf::from_path_buf(entry.path()) {
                Ok(p) => p,
                Err(p) => {
                    tracing::warn!("Skipping non-UTF-8 path: {}", p.display());
                    continue;
                }
            };

            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(e) => {
                    tracing::warn!("Failed to stat '{}': {}", path, e);
                    continue;
                }
            };

            let child_depth = depth + 1;
            if child_depth > self.max_depth {
                continue;
            }
            if file_type.is_dir() {
                if child_depth < self.max_depth {
                    self.dirs.push((path, child_depth));
                }
            } else if file_type.is_file() {
                self.files.push(WalkedFile {
                    path,
                    depth: child_depth,
                });
            }
            // Symlinks and special files are neither yielded nor followed.
        }
    }
}

impl Iterator for BoundedWalk {
    type Item = WalkedFile;

    fn next(&mut self) -> Option<WalkedFile> {
        loop {
            if let Some(file) = self.files.pop() {
                return Some(file);
            }
            let (dir, depth) = self.dirs.pop()?;
            self.list_dir(&dir, depth);
        }
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
    fn test_yields_files_at_all_levels_within_bound() {
        let dir = tempdir().unwrap();
        let root = utf8_root(&dir);

        fs::write(root.join("top.bin"), b"a").unwrap();
        let sub = root.join("bin");
        fs::create_dir(sub.as_std_path()).unwrap();
        fs::write(sub.join("nested.bin"), b"b").unwrap();

        let mut names: Vec<String> = BoundedWalk::new(&root)
            .map(|f| f.path.file_name().unwrap().to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["nested.bin", "top.bin"]);
    }

    #[test]
    fn test_depth_bound_excludes_deep_files() {
        let dir = tempdir().unwrap();
        let root = utf8_root(&dir);

        let mut current = root.clone();
        for i in 1..=7 {
            current = current.join(format!("level{}", i));
            fs::create_dir(current.as_std_path()).unwrap();
            fs::write(current.join("probe.bin"), b"x").unwrap();
        }

        let depths: Vec<usize> = BoundedWalk::new(&root).map(|f| f.depth).collect();
        assert!(!depths.is_empty());
        assert!(depths.iter().all(|&d| d <= MAX_WALK_DEPTH));
        // probe.bin inside level5..level7 sits at depth 6..8 and must not appear
        assert_eq!(depths.iter().filter(|&&d| d == MAX_WALK_DEPTH).count(), 1);
    }

    #[test]
    fn test_directories_are_not_yielded() {
        let dir = tempdir().unwrap();
        let root = utf8_root(&dir);

        fs::create_dir(root.join("only_dirs").as_std_path()).unwrap();
        fs::create_dir(root.join("only_dirs/inner").as_std_path()).unwrap();

        assert_eq!(BoundedWalk::new(&root).count(), 0);
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let dir = tempdir().unwrap();
        let root = utf8_root(&dir).join("does_not_exist");

        assert_eq!(BoundedWalk::new(&root).count(), 0);
    }

    #[test]
    fn test_repeated_walks_do_not_exhaust_handles() {
        let dir = tempdir().unwrap();
        let root = utf8_root(&dir);

        let mut current = root.clone();
        for i in 1..=10 {
            current = current.join(format!("level{}", i));
            fs::create_dir(current.as_std_path()).unwrap();
            for j in 1..=5 {
                fs::write(current.join(format!("file{}.txt", j)), b"content").unwrap();
            }
        }

        // A leaked handle per directory would blow past the default descriptor
        // limit long before 100 iterations of an 11-directory tree.
        for _ in 0..100 {
            // level1..level4 are within the bound, 5 files each
            assert_eq!(BoundedWalk::new(&root).count(), 20);
        }
    }
}
