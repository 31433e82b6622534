mod commands;
mod summary;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hivesample", about = "Hive camera capture sampling tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Sampler config file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show photo blob contents
    Info(commands::info::InfoArgs),
    /// Render the visible region of a photo with its marks
    Preview(commands::preview::PreviewArgs),
    /// Extract labeled sample patches between two points
    Sample(commands::sample::SampleArgs),
    /// Pair captures taken at the same time
    Pair(commands::pair::PairArgs),
    /// Print or save the default config as TOML
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

    let config = commands::load_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::Info(args) => commands::info::run(args, &config),
        Commands::Preview(args) => commands::preview::run(args, &config),
        Commands::Sample(args) => commands::sample::run(args, &config),
        Commands::Pair(args) => commands::pair::run(args, &config),
        Commands::Config(args) => commands::config::run(args, &config),
    }
}
