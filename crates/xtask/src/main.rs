//! Development tasks for the enemy pattern workspace
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod dirs;

use anyhow::Result;
use clap::Parser;
use commands::{Explain, Lint, Simulate};

/// Development tasks for enemy action patterns
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for enemy action patterns", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Compile every pattern in the content directory
    Lint(Lint),

    /// Show how a single pattern string compiles
    Explain(Explain),

    /// Run a scenario and print the behaviour timeline
    Simulate(Simulate),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for CONTENT_DATA_DIR, PATTERN_SEED and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Lint(cmd) => cmd.execute(),
        Command::Explain(cmd) => cmd.execute(),
        Command::Simulate(cmd) => cmd.execute(),
    }
}
