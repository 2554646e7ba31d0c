use crate::commands::{resolve_install_root, shim_targets};
use crate::println_pad;
use crate::utils::launcher_data_dir;
use camino::Utf8PathBuf;
use colored::Colorize;
use miette::IntoDiagnostic;
use wg_override::{BoundedWalk, FsMarkerStore, MarkerKind, MarkerStore};

pub struct ShowStatusArgs {
    pub app_id: Option<String>,
    pub path: Option<String>,
    pub data_dir: Option<String>,
    pub json: bool,
}

pub fn show_status(args: ShowStatusArgs) -> miette::Result<()> {
    let data_dir = launcher_data_dir(args.data_dir.as_deref())?;
    let root = resolve_install_root(&data_dir, args.app_id.as_deref(), args.path.as_deref())?;

    let markers = FsMarkerStore::new();
    let active = markers
        .has(&root, MarkerKind::OverrideActive)
        .into_diagnostic()?;
    let reverted = markers
        .has(&root, MarkerKind::OverrideReverted)
        .into_diagnostic()?;

    let targets = shim_targets();
    let backups: Vec<Utf8PathBuf> = BoundedWalk::new(&root)
        .filter(|f| {
            f.path
                .file_name()
                .and_then(|n| targets.match_backup(n))
                .is_some()
        })
        .map(|f| f.path)
        .collect();

    if args.json {
        let value = serde_json::json!({
            "installRoot": root.as_str(),
            "overrideActive": active,
            "overrideReverted": reverted,
            "backups": backups.iter().map(|p| p.as_str()).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&value).into_diagnostic()?);
        return Ok(());
    }

    println_pad!(
        "{} {}",
        "📦 Install:".bright_blue().bold(),
        root.as_str().bright_cyan()
    );
    println_pad!(
        "{} {}",
        "Override active marker:".bright_green(),
        fmt_flag(active)
    );
    println_pad!(
        "{} {}",
        "Override reverted marker:".bright_green(),
        fmt_flag(reverted)
    );
    println_pad!(
        "{} {}",
        "Backups on disk:".bright_green(),
        backups.len().to_string().bright_white().bold()
    );
    for backup in &backups {
        println_pad!("   {} {}", "•".bright_cyan(), backup.as_str().bright_white());
    }

    // Markers are advisory; backups are the authoritative record. Point out a
    // divergence (e.g. after a crash) rather than hiding it.
    if active && backups.is_empty() {
        println_pad!(
            "{}",
            "Note: marker says active but no backups exist — will reconcile on next pass".dimmed()
        );
    }
    if !active && !backups.is_empty() {
        println_pad!(
            "{}",
            "Note: backups exist but the active marker is unset — will reconcile on next pass"
                .dimmed()
        );
    }

    Ok(())
}

fn fmt_flag(value: bool) -> colored::ColoredString {
    if value {
        "set".bright_white().bold()
    } else {
        "unset".dimmed()
    }
}
