mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "regiondiff", about = "Highlight where two image regions differ")]
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
    /// Compare two images once and save the annotated result
    Compare(commands::compare::CompareArgs),
    /// Re-compare two images periodically, skipping cycles that fail
    Watch(commands::watch::WatchArgs),
    /// List comparison modes and their thresholds
    Modes,
    /// Print the default session config as TOML
    Config(commands::config::ConfigArgs),
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
        Commands::Compare(args) => commands::compare::run(args),
        Commands::Watch(args) => commands::watch::run(args),
        Commands::Modes => commands::modes::run(),
        Commands::Config(args) => commands::config::run(args),
    }
}
