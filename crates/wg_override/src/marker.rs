//! Durable per-root markers recording the engine's last completed transition.
//!
//! After each apply or revert pass, the engine records which transition it
//! completed as a pair of boolean flags scoped to the install root. The flags
//! survive process restart and are read by the host UI to show whether the
//! shim swap is active.
//!
//! Markers are advisory: the filesystem (presence of a `.orig` backup) is the
//! authoritative record of whether an override is in place. A crash between a
//! file mutation and the marker write leaves the two out of sync; the engine
//! reconciles by deciding per-path behavior from backup presence only and
//! rewriting the markers unconditionally at the end of every pass. For the
//! same reason a corrupt marker document is logged and treated as empty
//! rather than failing the pass.
//!
//! The shipped backend, [`FsMarkerStore`], persists a small versioned JSON
//! document inside the install root itself, so markers disappear together
//! with the install tree on uninstall.

use crate::error::Result;
use camino::Utf8Path;
use serde::{Deserialize, Serialize};

/// File name of the marker document inside an install root.
pub const MARKERS_FILE_NAME: &str = ".winegate-markers.json";

const MARKERS_VERSION: u32 = 1;

/// The durable flags maintained by the override engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Set when an apply pass completes; cleared by revert.
    OverrideActive,
    /// Set when a revert pass completes; cleared by apply.
    OverrideReverted,
}

/// Durable boolean flags scoped to `(install root, marker kind)`.
///
/// All operations are idempotent: setting a set marker or clearing a cleared
/// one is a no-op. Operations for the same root are applied in issue order;
/// no ordering is guaranteed across roots.
pub trait MarkerStore {
    fn set(&self, root: &Utf8Path, kind: MarkerKind) -> Result<()>;
    fn clear(&self, root: &Utf8Path, kind: MarkerKind) -> Result<()>;
    fn has(&self, root: &Utf8Path, kind: MarkerKind) -> Result<bool>;
}

/// Persisted marker document.
///
/// # JSON format
///
/// ```json
/// {
///   "version": 1,
///   "overrideActive": true,
///   "overrideReverted": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MarkerDocument {
    version: u32,
    #[serde(default)]
    override_active: bool,
    #[serde(default)]
    override_reverted: bool,
}

impl Default for MarkerDocument {
    fn default() -> Self {
        Self {
            version: MARKERS_VERSION,
            override_active: false,
            override_reverted: false,
        }
    }
}

impl MarkerDocument {
    fn flag_mut(&mut self, kind: MarkerKind) -> &mut bool {
        match kind {
            MarkerKind::OverrideActive => &mut self.override_active,
            MarkerKind::OverrideReverted => &mut self.override_reverted,
        }
    }

    fn flag(&self, kind: MarkerKind) -> bool {
        match kind {
            MarkerKind::OverrideActive => self.override_active,
            MarkerKind::OverrideReverted => self.override_reverted,
        }
    }
}

/// Marker store backed by a flat JSON document per install root.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsMarkerStore;

impl FsMarkerStore {
    pub fn new() -> Self {
        Self
    }

    fn load(root: &Utf8Path) -> MarkerDocument {
        let path = root.join(MARKERS_FILE_NAME);
        if !path.as_std_path().exists() {
            return MarkerDocument::default();
        }
        let contents = match std::fs::read_to_string(path.as_std_path()) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("Failed to read marker document '{}': {}", path, e);
                return MarkerDocument::default();
            }
        };
        match serde_json::from_str(&contents) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!("Ignoring corrupt marker document '{}': {}", path, e);
                MarkerDocument::default()
            }
        }
    }

    fn save(root: &Utf8Path, doc: &MarkerDocument) -> Result<()> {
        let path = root.join(MARKERS_FILE_NAME);
        let contents = serde_json::to_string_pretty(doc)?;
        std::fs::write(path.as_std_path(), contents)?;
        Ok(())
    }

    fn update(root: &Utf8Path, kind: MarkerKind, value: bool) -> Result<()> {
        let mut doc = Self::load(root);
        if *doc.flag_mut(kind) == value {
            return Ok(());
        }
        *doc.flag_mut(kind) = value;
        doc.version = MARKERS_VERSION;
        Self::save(root, &doc)
    }
}

impl MarkerStore for FsMarkerStore {
    fn set(&self, root: &Utf8Path, kind: MarkerKind) -> Result<()> {
        Self::update(root, kind, true)
    }

    fn clear(&self, root: &Utf8Path, kind: MarkerKind) -> Result<()> {
        Self::update(root, kind, false)
    }

    fn has(&self, root: &Utf8Path, kind: MarkerKind) -> Result<bool> {
        Ok(Self::load(root).flag(kind))
    }
}
