//! Shim override engine: apply and revert.
//!
//! The [`OverrideEngine`] swaps a vendor anti-tampering library inside an
//! installed game's tree for a bundled compatibility shim, and can later
//! reverse the swap exactly.
//!
//! # Apply algorithm
//!
//! 1. Validate that the install root exists.
//! 2. Run a single [`BoundedWalk`] pass. For each file whose basename matches
//!    a target (case-insensitively):
//!    - If a `<path>.orig` backup already exists, skip the path. The backup is
//!      the one trustworthy copy of the original; a repeated apply must never
//!      clobber it with previously-substituted content.
//!    - Otherwise fetch the shim bytes from the content provider, rename the
//!      current file to `<path>.orig`, and write the shim bytes to `<path>`.
//!      If the write fails the backup is moved back, so an interrupted apply
//!      leaves the path either untouched or fully overridden.
//! 3. After the pass — even with zero matches — set the
//!    [`OverrideActive`](MarkerKind::OverrideActive) marker and clear
//!    [`OverrideReverted`](MarkerKind::OverrideReverted).
//!
//! # Revert algorithm
//!
//! 1. Run a single [`BoundedWalk`] pass. For each `<name>.orig` file whose
//!    stem matches a target: delete the live file if present and move the
//!    backup's content into place under the canonical target basename,
//!    removing the backup. Matching keys off the backup, not the live file,
//!    so a live file deleted out from under the engine is still restored.
//! 2. After the pass, clear `OverrideActive` and set `OverrideReverted`.
//!
//! Both operations treat zero matches as success: the host calls them
//! unconditionally around every game session and most titles simply lack the
//! targeted files. A read/write/rename failure on one path is recorded in the
//! aggregate report and the walk continues — some paths may end up
//! overridden or restored while others did not.

use crate::content::OverrideContentProvider;
use crate::error::{Error, Result};
use crate::marker::{MarkerKind, MarkerStore};
use crate::matcher::{backup_path_for, TargetSpec};
use crate::walker::BoundedWalk;
use camino::{Utf8Path, Utf8PathBuf};

/// A per-path failure recorded while a pass kept walking.
#[derive(Debug)]
pub struct FileFailure {
    /// The path whose mutation was abandoned.
    pub path: Utf8PathBuf,
    pub error: Error,
}

/// Aggregate result of an apply pass.
#[derive(Debug, Default)]
pub struct ApplyReport {
    /// Paths newly overridden by this pass.
    pub overridden: Vec<Utf8PathBuf>,
    /// Matched paths skipped because a backup already existed.
    pub skipped: Vec<Utf8PathBuf>,
    /// Paths whose mutation failed; the walk continued past them.
    pub failures: Vec<FileFailure>,
}

impl ApplyReport {
    /// Number of paths newly overridden by this pass.
    pub fn newly_overridden(&self) -> usize {
        self.overridden.len()
    }
}

/// Aggregate result of a revert pass.
#[derive(Debug, Default)]
pub struct RevertReport {
    /// Paths restored from their backups.
    pub restored: Vec<Utf8PathBuf>,
    /// Backups whose restoration failed; the walk continued past them.
    pub failures: Vec<FileFailure>,
}

/// Orchestrates the shim swap for one install root.
///
/// The engine drives one walker pass per invocation and holds no state
/// between calls; markers and backups on disk are the only record. A single
/// root must not see concurrent apply/revert — the host serializes calls per
/// root. Distinct roots may be processed concurrently from independent
/// engines.
pub struct OverrideEngine {
    install_root: Utf8PathBuf,
    targets: TargetSpec,
}

impl OverrideEngine {
    /// Create an engine for `install_root`, allowed to touch `targets`.
    pub fn new(install_root: Utf8PathBuf, targets: TargetSpec) -> Self {
        Self {
            install_root,
            targets,
        }
    }

    pub fn install_root(&self) -> &Utf8Path {
        &self.install_root
    }

    /// Swap every matched target under the install root for shim content.
    ///
    /// Returns the aggregate report; zero matches is success. Fails outright
    /// only when the install root is missing or the marker write fails.
    ///
    /// # Arguments
    ///
    /// * `provider` - Source of the shim bytes, keyed by canonical basename
    /// * `markers` - Durable marker store updated after the pass
    pub fn apply(
        &self,
        provider: &mut dyn OverrideContentProvider,
        markers: &dyn MarkerStore,
    ) -> Result<ApplyReport> {
        if !self.install_root.as_std_path().is_dir() {
            return Err(Error::InstallRootNotFound(self.install_root.clone()));
        }

        tracing::info!("Applying shim override under {}", self.install_root);
        let mut report = ApplyReport::default();

        for file in BoundedWalk::new(&self.install_root) {
            let Some(name) = file.path.file_name() else {
                continue;
            };
            let Some(canonical) = self.targets.match_target(name) else {
                continue;
            };

            let backup_path = backup_path_for(&file.path);
            if backup_path.as_std_path().exists() {
                tracing::debug!("Backup already present for '{}', skipping", file.path);
                report.skipped.push(file.path);
                continue;
            }

            // Fetch before mutating so a missing asset leaves the path untouched.
            let bytes = match provider.override_bytes(canonical) {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::warn!("No override content for '{}': {}", canonical, e);
                    report.failures.push(FileFailure {
                        path: file.path,
                        error: e,
                    });
                    continue;
                }
            };

            match swap_in_override(&file.path, &backup_path, &bytes) {
                Ok(()) => {
                    tracing::debug!("Overrode '{}' ({} bytes)", file.path, bytes.len());
                    report.overridden.push(file.path);
                }
                Err(e) => {
                    tracing::warn!("Failed to override '{}': {}", file.path, e);
                    report.failures.push(FileFailure {
                        path: file.path,
                        error: e.into(),
                    });
                }
            }
        }

        markers.set(&self.install_root, MarkerKind::OverrideActive)?;
        markers.clear(&self.install_root, MarkerKind::OverrideReverted)?;

        tracing::info!(
            "Shim override applied under {}: {} overridden, {} already active, {} failed",
            self.install_root,
            report.overridden.len(),
            report.skipped.len(),
            report.failures.len()
        );
        Ok(report)
    }

    /// Restore every backed-up target under the install root.
    ///
    /// Targets with no backup are left untouched; invoking revert when no
    /// override is active is a successful no-op (plus the marker update).
    ///
    /// # Arguments
    ///
    /// * `markers` - Durable marker store updated after the pass
    pub fn revert(&self, markers: &dyn MarkerStore) -> Result<RevertReport> {
        if !self.install_root.as_std_path().is_dir() {
            return Err(Error::InstallRootNotFound(self.install_root.clone()));
        }

        tracing::info!("Reverting shim override under {}", self.install_root);
        let mut report = RevertReport::default();

        for file in BoundedWalk::new(&self.install_root) {
            let Some(name) = file.path.file_name() else {
                continue;
            };
            let Some(canonical) = self.targets.match_backup(name) else {
                continue;
            };
            let Some(dir) = file.path.parent() else {
                continue;
            };

            let restored_path = dir.join(canonical);
            match replace_with_backup(&file.path, &restored_path) {
                Ok(()) => {
                    tracing::debug!("Restored '{}' from '{}'", restored_path, file.path);
                    report.restored.push(restored_path);
                }
                Err(e) => {
                    tracing::warn!("Failed to restore '{}': {}", restored_path, e);
                    report.failures.push(FileFailure {
                        path: file.path,
                        error: e.into(),
                    });
                }
            }
        }

        markers.clear(&self.install_root, MarkerKind::OverrideActive)?;
        markers.set(&self.install_root, MarkerKind::OverrideReverted)?;

        tracing::info!(
            "Shim override reverted under {}: {} restored, {} failed",
            self.install_root,
            report.restored.len(),
            report.failures.len()
        );
        Ok(report)
    }
}

/// Move `path` to `backup_path`, then write `bytes` to `path`.
///
/// On a failed write the backup is moved back, so the invariant "a backup
/// exists iff the override is in place" holds across interruptions.
fn swap_in_override(
    path: &Utf8Path,
    backup_path: &Utf8Path,
    bytes: &[u8],
) -> std::io::Result<()> {
    std::fs::rename(path.as_std_path(), backup_path.as_std_path())?;
    if let Err(write_err) = std::fs::write(path.as_std_path(), bytes) {
        if let Err(undo_err) = std::fs::rename(backup_path.as_std_path(), path.as_std_path()) {
            tracing::warn!(
                "Failed to undo backup of '{}' after write failure: {}",
                path,
                undo_err
            );
        }
        return Err(write_err);
    }
    Ok(())
}

/// Delete `target_path` if present, then move `backup_path` into its place.
pub(crate) fn replace_with_backup(
    backup_path: &Utf8Path,
    target_path: &Utf8Path,
) -> std::io::Result<()> {
    if target_path.as_std_path().exists() {
        std::fs::remove_file(target_path.as_std_path())?;
    }
    std::fs::rename(backup_path.as_std_path(), target_path.as_std_path())
}
