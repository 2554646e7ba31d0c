use crate::commands::ensure_no_session;
use crate::println_pad;
use crate::utils::{container_root, launcher_data_dir};
use colored::Colorize;
use miette::IntoDiagnostic;
use wg_container::ContainerFs;
use wg_override::restore_original_executable;

pub struct RestoreExecutableArgs {
    pub app_id: String,
    pub exe: String,
    pub drive: char,
    pub data_dir: Option<String>,
}

pub fn restore_executable(args: RestoreExecutableArgs) -> miette::Result<()> {
    let data_dir = launcher_data_dir(args.data_dir.as_deref())?;
    ensure_no_session(Some(&args.app_id))?;

    let container = ContainerFs::new(container_root(&data_dir, &args.app_id));
    let drive_root = container.drive_root(args.drive).into_diagnostic()?;

    match restore_original_executable(&drive_root, &args.exe).into_diagnostic()? {
        Some(path) => println_pad!(
            "{} {}",
            "✅ Restored original executable:".bright_green().bold(),
            path.as_str().bright_cyan()
        ),
        None => println_pad!(
            "{}",
            format!(
                "No {}.original.exe backup found under {} — nothing to do",
                args.exe, drive_root
            )
            .dimmed()
        ),
    }

    Ok(())
}
