mod commands;
mod summary;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use regionseek_core::config::FrontendConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "regionseek", about = "Region selection and job progress for image search")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (TOML). Defaults are used when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Select a region on an image with a scripted drag
    Select(commands::select::SelectArgs),
    /// Follow an index build's progress log
    Watch(commands::watch::WatchArgs),
    /// Feed recorded progress reports through the tracker
    Replay(commands::replay::ReplayArgs),
    /// Show the multipart fields of a cropped search request
    Form(commands::form::FormArgs),
    /// Print or save the default configuration
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

    let config = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            FrontendConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?
        }
        None => FrontendConfig::default(),
    };

    match &cli.command {
        Commands::Select(args) => commands::select::run(args, &config),
        Commands::Watch(args) => commands::watch::run(args, &config),
        Commands::Replay(args) => commands::replay::run(args, &config),
        Commands::Form(args) => commands::form::run(args, &config),
        Commands::Config(args) => commands::config::run(args, &config),
    }
}
