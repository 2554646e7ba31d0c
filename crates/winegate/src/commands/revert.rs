use crate::commands::{ensure_no_session, resolve_install_root, shim_targets};
use crate::println_pad;
use crate::utils::launcher_data_dir;
use colored::Colorize;
use miette::IntoDiagnostic;
use wg_override::{FsMarkerStore, OverrideEngine};

pub struct RevertOverrideArgs {
    pub app_id: Option<String>,
    pub path: Option<String>,
    pub data_dir: Option<String>,
}

pub fn revert_override(args: RevertOverrideArgs) -> miette::Result<()> {
    let data_dir = launcher_data_dir(args.data_dir.as_deref())?;
    ensure_no_session(args.app_id.as_deref())?;
    let root = resolve_install_root(&data_dir, args.app_id.as_deref(), args.path.as_deref())?;

    let engine = OverrideEngine::new(root.clone(), shim_targets());
    let report = engine.revert(&FsMarkerStore::new()).into_diagnostic()?;

    println_pad!(
        "{} {}",
        "↩️  Shim override reverted:".bright_blue().bold(),
        root.as_str().bright_cyan()
    );
    println_pad!(
        "{} {}",
        "Restored:".bright_green(),
        report.restored.len().to_string().bright_white().bold()
    );
    for failure in &report.failures {
        println_pad!(
            "{} {} — {}",
            "Failed:".bright_red().bold(),
            failure.path.as_str().bright_white(),
            failure.error
        );
    }

    Ok(())
}
