mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "depthgrab", about = "Depth-camera frame conversion and snapshot export")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show raw depth capture metadata
    Info(commands::info::InfoArgs),
    /// Convert a raw depth capture to a grayscale PNG
    Convert(commands::convert::ConvertArgs),
    /// Export the three snapshot artifacts from a raw depth capture
    Snapshot(commands::snapshot::SnapshotArgs),
    /// Run a synthetic sensor through the mailbox and export a snapshot
    Simulate(commands::simulate::SimulateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Convert(args) => commands::convert::run(args),
        Commands::Snapshot(args) => commands::snapshot::run(args),
        Commands::Simulate(args) => commands::simulate::run(args),
    }
}
