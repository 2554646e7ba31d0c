//! Running-session detection.
//!
//! Apply and revert must not race a running game session over the same
//! install root. The engine itself imposes no locking; callers serialize per
//! root, and this advisory check lets a CLI or UI refuse to start a pass
//! while the container runtime has the app open.

use sysinfo::System;

/// Process name the container runtime is spawned under.
pub const SESSION_PROCESS_NAME: &str = "winegate-session";

/// Whether a container session for `app_id` appears to be running.
///
/// Sessions are spawned as `winegate-session <app_id> ...`, so detection is
/// a process-name scan plus a command-line check.
pub fn is_session_running(app_id: &str) -> bool {
    let system = System::new_all();

    for process in system.processes_by_name(SESSION_PROCESS_NAME.as_ref()) {
        if process
            .cmd()
            .iter()
            .any(|arg| arg.to_str() == Some(app_id))
        {
            return true;
        }
    }

    false
}
