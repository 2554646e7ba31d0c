use crate::commands::{ensure_no_session, resolve_install_root, shim_targets};
use crate::println_pad;
use crate::utils::{default_shim_assets_dir, launcher_data_dir};
use camino::Utf8PathBuf;
use colored::Colorize;
use miette::IntoDiagnostic;
use wg_override::{FsAssetContent, FsMarkerStore, OverrideEngine};

pub struct ApplyOverrideArgs {
    pub app_id: Option<String>,
    pub path: Option<String>,
    pub assets: Option<String>,
    pub data_dir: Option<String>,
}

pub fn apply_override(args: ApplyOverrideArgs) -> miette::Result<()> {
    let data_dir = launcher_data_dir(args.data_dir.as_deref())?;
    ensure_no_session(args.app_id.as_deref())?;
    let root = resolve_install_root(&data_dir, args.app_id.as_deref(), args.path.as_deref())?;

    let assets_dir = match args.assets.as_deref() {
        Some(dir) => Utf8PathBuf::from(dir),
        None => default_shim_assets_dir(&data_dir),
    };

    let engine = OverrideEngine::new(root.clone(), shim_targets());
    let mut assets = FsAssetContent::new(assets_dir);
    let report = engine
        .apply(&mut assets, &FsMarkerStore::new())
        .into_diagnostic()?;

    println_pad!(
        "{} {}",
        "🔧 Shim override applied:".bright_blue().bold(),
        root.as_str().bright_cyan()
    );
    println_pad!(
        "{} {}",
        "Newly overridden:".bright_green(),
        report.newly_overridden().to_string().bright_white().bold()
    );
    if !report.skipped.is_empty() {
        println_pad!(
            "{} {}",
            "Already active:".bright_yellow(),
            report.skipped.len().to_string().bright_white()
        );
    }
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
