//! Case-insensitive name matching for traversal passes.
//!
//! Windows game trees name the same library `steam_api64.dll`,
//! `STEAM_API64.DLL`, or anything in between, so every comparison here folds
//! case the way the rest of the codebase folds file names: ASCII-invariant,
//! locale-independent. Fixed targets are matched by exact basename equality
//! after folding; backup files by suffix equality after folding.

use camino::{Utf8Path, Utf8PathBuf};

/// Suffix appended to a file that has been replaced by the shim swap.
pub const BACKUP_SUFFIX: &str = ".orig";

/// Suffix of an original-executable backup inside an emulated drive.
pub const ORIGINAL_EXE_SUFFIX: &str = ".original.exe";

/// The ordered set of basenames a single traversal pass is allowed to touch.
///
/// Typically two entries: the 32-bit and 64-bit variants of the anti-tamper
/// library. All entries are matched in one pass; the engine never walks once
/// per target. Duplicate names (up to case) are dropped, first spelling wins.
#[derive(Debug, Clone)]
pub struct TargetSpec {
    basenames: Vec<String>,
}

impl TargetSpec {
    /// Build a spec from basenames, preserving order and deduplicating
    /// case-insensitively.
    pub fn new<I, S>(basenames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = Vec::new();
        for name in basenames {
            let name = name.into();
            if !names.iter().any(|n| n.eq_ignore_ascii_case(&name)) {
                names.push(name);
            }
        }
        Self { basenames: names }
    }

    /// The canonical basenames in this spec, in order.
    pub fn basenames(&self) -> &[String] {
        &self.basenames
    }

    pub fn is_empty(&self) -> bool {
        self.basenames.is_empty()
    }

    /// Match `file_name` against the targets, returning the canonical basename.
    pub fn match_target(&self, file_name: &str) -> Option<&str> {
        self.basenames
            .iter()
            .find(|n| n.eq_ignore_ascii_case(file_name))
            .map(String::as_str)
    }

    /// Match `file_name` as a backup (`<target><BACKUP_SUFFIX>`), returning the
    /// canonical basename of the target it backs up.
    pub fn match_backup(&self, file_name: &str) -> Option<&str> {
        let stem = strip_suffix_fold(file_name, BACKUP_SUFFIX)?;
        self.match_target(stem)
    }
}

/// Strip `suffix` from the end of `name`, comparing case-insensitively.
///
/// `suffix` must be ASCII (all fixed suffixes in this crate are).
pub fn strip_suffix_fold<'a>(name: &'a str, suffix: &str) -> Option<&'a str> {
    let split = name.len().checked_sub(suffix.len())?;
    if !name.is_char_boundary(split) {
        return None;
    }
    let (stem, tail) = name.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(stem)
}

/// The backup path for a matched target path: `<path><BACKUP_SUFFIX>`.
pub fn backup_path_for(path: &Utf8Path) -> Utf8PathBuf {
    Utf8PathBuf::from(format!("{}{}", path, BACKUP_SUFFIX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_target_case_insensitive() {
        let spec = TargetSpec::new(["steam_api.dll", "steam_api64.dll"]);
        assert_eq!(spec.match_target("steam_api.dll"), Some("steam_api.dll"));
        assert_eq!(spec.match_target("STEAM_API.DLL"), Some("steam_api.dll"));
        assert_eq!(
            spec.match_target("Steam_Api64.Dll"),
            Some("steam_api64.dll")
        );
        assert_eq!(spec.match_target("steam_api.dll.orig"), None);
        assert_eq!(spec.match_target("other.dll"), None);
    }

    #[test]
    fn test_match_backup() {
        let spec = TargetSpec::new(["steam_api.dll", "steam_api64.dll"]);
        assert_eq!(
            spec.match_backup("steam_api.dll.orig"),
            Some("steam_api.dll")
        );
        assert_eq!(
            spec.match_backup("STEAM_API64.DLL.ORIG"),
            Some("steam_api64.dll")
        );
        assert_eq!(spec.match_backup("steam_api.dll"), None);
        assert_eq!(spec.match_backup("unrelated.orig"), None);
    }

    #[test]
    fn test_dedup_preserves_first_spelling() {
        let spec = TargetSpec::new(["Steam_API.dll", "steam_api.dll", "steam_api64.dll"]);
        assert_eq!(spec.basenames(), ["Steam_API.dll", "steam_api64.dll"]);
    }

    #[test]
    fn test_strip_suffix_fold() {
        assert_eq!(strip_suffix_fold("game.exe.ORIGINAL.EXE", ORIGINAL_EXE_SUFFIX), Some("game.exe"));
        assert_eq!(strip_suffix_fold("a.orig", BACKUP_SUFFIX), Some("a"));
        assert_eq!(strip_suffix_fold(".orig", BACKUP_SUFFIX), Some(""));
        assert_eq!(strip_suffix_fold("orig", BACKUP_SUFFIX), None);
        assert_eq!(strip_suffix_fold("a.original", BACKUP_SUFFIX), None);
    }

    #[test]
    fn test_backup_path_for() {
        let path = Utf8PathBuf::from("/tmp/game/STEAM_API.DLL");
        assert_eq!(backup_path_for(&path).as_str(), "/tmp/game/STEAM_API.DLL.orig");
    }
}
