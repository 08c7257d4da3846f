//! Lumiere CLI binary.
//!
//! The stand-in front end for the Lumiere library: `generate` submits a
//! script for the asset fan-out, `feedback` requests a short critique.

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_feedback, run_generate};

    // Load .env before anything reads the environment
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Generate {
            script,
            theme,
            kinds,
            feedback,
            out,
        } => {
            run_generate(&script, &theme, kinds, feedback, out).await?;
        }

        Commands::Feedback { script, copy } => {
            run_feedback(&script, copy).await?;
        }
    }

    Ok(())
}
