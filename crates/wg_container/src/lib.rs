//! Container and install path resolution for winegate.
//!
//! This crate answers "where does this app live" for the rest of the
//! launcher: the install root holding a game's files, and the container's
//! emulated drive roots where its executable runs. Everything is explicit —
//! resolvers are constructed from a base directory and passed to callers,
//! with no process-global state.

mod container_fs;
mod error;
mod registry;
mod session;

pub use container_fs::ContainerFs;
pub use error::{Error, Result};
pub use registry::{InstallEntry, InstallPaths, InstallRegistry, INSTALLS_FILE_NAME};
pub use session::{is_session_running, SESSION_PROCESS_NAME};
