use clap::builder::{styling::AnsiColor, Styles};
use clap::ColorChoice;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use commands::{
    apply_override, restore_executable, revert_override, show_status, ApplyOverrideArgs,
    RestoreExecutableArgs, RevertOverrideArgs, ShowStatusArgs,
};
use miette::Result;

mod commands;
mod errors;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Swap the anti-tamper libraries in an install for the bundled compatibility shims
    Apply {
        /// Registered app id to operate on
        #[arg(short, long)]
        app_id: Option<String>,

        /// Explicit install directory (bypasses the install registry)
        #[arg(short, long)]
        path: Option<String>,

        /// Directory holding the bundled shim libraries
        #[arg(long)]
        assets: Option<String>,

        /// Launcher data directory override
        #[arg(long)]
        data_dir: Option<String>,
    },
    /// Put the original libraries back from their backups
    Revert {
        /// Registered app id to operate on
        #[arg(short, long)]
        app_id: Option<String>,

        /// Explicit install directory (bypasses the install registry)
        #[arg(short, long)]
        path: Option<String>,

        /// Launcher data directory override
        #[arg(long)]
        data_dir: Option<String>,
    },
    /// Restore a backed-up original executable inside an app's emulated drive
    RestoreExe {
        /// Registered app id whose container to search
        #[arg(short, long)]
        app_id: String,

        /// Executable basename, e.g. game.exe
        #[arg(short, long)]
        exe: String,

        /// Emulated drive letter to search
        #[arg(long, default_value_t = 'a')]
        drive: char,

        /// Launcher data directory override
        #[arg(long)]
        data_dir: Option<String>,
    },
    /// Show override marker state and backup presence for an install
    Status {
        /// Registered app id to inspect
        #[arg(short, long)]
        app_id: Option<String>,

        /// Explicit install directory (bypasses the install registry)
        #[arg(short, long)]
        path: Option<String>,

        /// Launcher data directory override
        #[arg(long)]
        data_dir: Option<String>,

        /// Print machine-readable JSON instead of the human summary
        #[arg(long)]
        json: bool,
    },
}

fn parse_args() -> Args {
    // Configure colored/styled help output
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Blue.on_default());

    let matches = Args::command()
        .styles(styles)
        .color(ColorChoice::Auto)
        .get_matches();

    Args::from_arg_matches(&matches).expect("failed to parse arguments")
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let args = parse_args();

    match args.command {
        Commands::Apply {
            app_id,
            path,
            assets,
            data_dir,
        } => apply_override(ApplyOverrideArgs {
            app_id,
            path,
            assets,
            data_dir,
        }),
        Commands::Revert {
            app_id,
            path,
            data_dir,
        } => revert_override(RevertOverrideArgs {
            app_id,
            path,
            data_dir,
        }),
        Commands::RestoreExe {
            app_id,
            exe,
            drive,
            data_dir,
        } => restore_executable(RestoreExecutableArgs {
            app_id,
            exe,
            drive,
            data_dir,
        }),
        Commands::Status {
            app_id,
            path,
            data_dir,
            json,
        } => show_status(ShowStatusArgs {
            app_id,
            path,
            data_dir,
            json,
        }),
    }
}
