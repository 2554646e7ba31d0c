//! Binary override and restore engine for Windows game installs.
//!
//! This crate implements the shim swap that lets the launcher run titles
//! shipping a vendor anti-tampering library: locate the library inside an
//! installed game's tree, swap it for a bundled compatibility shim, remember
//! that it did so, and later reverse the swap exactly. It supports:
//!
//! - **Bounded traversal**: depth-limited walks that hold at most one
//!   directory handle open, so passes can run once per game launch forever
//! - **Case-insensitive matching**: inconsistent casing in game trees is the
//!   norm, not the exception
//! - **Exactly-one-backup**: the first apply preserves the original bytes as
//!   `<path>.orig`; repeated applies never clobber them
//! - **Durable markers**: per-root flags recording the last completed
//!   transition, persisted across restarts
//! - **Partial-failure reports**: one bad file never aborts a pass
//!
//! # Example
//!
//! ```no_run
//! use camino::Utf8PathBuf;
//! use wg_override::{FsAssetContent, FsMarkerStore, OverrideEngine, TargetSpec};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let install_root = Utf8PathBuf::from("/data/winegate/installs/123456");
//! let engine = OverrideEngine::new(
//!     install_root,
//!     TargetSpec::new(["steam_api.dll", "steam_api64.dll"]),
//! );
//!
//! let mut assets = FsAssetContent::new(Utf8PathBuf::from("/data/winegate/assets/steampipe"));
//! let markers = FsMarkerStore::new();
//!
//! let report = engine.apply(&mut assets, &markers)?;
//! println!("{} libraries overridden", report.newly_overridden());
//! # Ok(())
//! # }
//! ```

pub mod content;
pub mod engine;
pub mod error;
pub mod marker;
pub mod matcher;
pub mod restore;
pub mod walker;

// Re-export main types
pub use content::{FsAssetContent, OverrideContentProvider};
pub use engine::{ApplyReport, FileFailure, OverrideEngine, RevertReport};
pub use error::{Error, Result};
pub use marker::{FsMarkerStore, MarkerKind, MarkerStore, MARKERS_FILE_NAME};
pub use matcher::{TargetSpec, BACKUP_SUFFIX, ORIGINAL_EXE_SUFFIX};
pub use restore::restore_original_executable;
pub use walker::{BoundedWalk, WalkedFile, MAX_WALK_DEPTH};
