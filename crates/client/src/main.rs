//! Command-line driver for the aircraft attack controller.
//!
//! Loads unit rules, a map and a scenario, then prints the attack decision
//! made on every scenario tick.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Run, Validate};
use config::ClientConfig;

/// Evaluate aircraft attack scenarios
#[derive(Parser)]
#[command(name = "airstrike")]
#[command(about = "Replay aircraft attack decisions tick by tick", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Run a scenario and print the per-tick verdicts
    Run(Run),

    /// Validate a unit catalog
    Validate(Validate),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    let cli = Cli::parse();

    match cli.command {
        Command::Run(cmd) => cmd.execute(&config),
        Command::Validate(cmd) => cmd.execute(&config),
    }
}
