//! Granula CLI - render audio files through the granular spray engine.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "granula")]
#[command(author, version, about = "Granular spray renderer", long_about = None)]
struct Cli {
    /// Log debug events (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an audio file through the spray effect
    Process(commands::process::ProcessArgs),

    /// List and manage presets
    Presets(commands::presets::PresetsArgs),

    /// List the spray parameters
    Params,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Process(args) => commands::process::run(args),
        Commands::Presets(args) => commands::presets::run(args),
        Commands::Params => commands::params::run(),
    }
}
