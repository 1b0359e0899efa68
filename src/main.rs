mod cmd;
mod logging;

use attendance_planner::data::persistence;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "attplan", about = "plan class skips against the minimum attendance")]
struct Cli {
    /// Path to the data directory containing semester.yaml (default: ./config)
    #[arg(long, default_value = "./config")]
    data_dir: PathBuf,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a sample semester.yaml
    Init,
    /// Project attendance for one slot and a set of planned skips
    Stats(cmd::stats::StatsArgs),
    /// List holidays, exams and other academic events
    Calendar,
    /// List slot combinations and the weekdays they meet on
    Slots {
        /// Year cohort (e.g. 4th_year)
        cohort: Option<String>,
        /// Credit tier (e.g. 3_credits)
        credits: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Resolve data_dir to an absolute path so file I/O is unaffected by any
    // later directory change within the process.
    let data_dir = if cli.data_dir.is_absolute() {
        cli.data_dir.clone()
    } else {
        std::env::current_dir()?.join(&cli.data_dir)
    };
    persistence::set_data_dir(data_dir.clone());

    // Auto-init when the data directory is missing or empty and the user did not
    // explicitly invoke the `init` subcommand.
    let is_init_command = matches!(cli.command, Commands::Init);
    if !is_init_command && dir_needs_init(&data_dir) {
        eprintln!(
            "Data directory '{}' is missing or empty - running init...",
            data_dir.display()
        );
        cmd::init::run()?;
    }

    match cli.command {
        Commands::Init => cmd::init::run(),
        Commands::Stats(args) => cmd::stats::run(&args),
        Commands::Calendar => cmd::calendar::run(),
        Commands::Slots { cohort, credits } => {
            cmd::slots::run(cohort.as_deref(), credits.as_deref())
        }
    }
}

/// Returns true when `dir` does not exist or exists but contains no files.
fn dir_needs_init(dir: &std::path::Path) -> bool {
    if !dir.exists() {
        return true;
    }
    dir.read_dir()
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false)
}
