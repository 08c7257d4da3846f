//! CLI command definitions.

use clap::{Parser, Subcommand};
use lumiere::AssetKind;
use std::path::PathBuf;

/// Lumiere - Turn a script and a theme into cinematic production assets
#[derive(Parser, Debug)]
#[command(name = "lumiere")]
#[command(about = "Turn a script and a theme into cinematic production assets", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate cinematic assets from a script file
    Generate {
        /// Path to the script file
        #[arg(long)]
        script: PathBuf,

        /// Creative theme applied to every asset instruction
        #[arg(long)]
        theme: String,

        /// Asset kinds to generate: blueprint, audio-prompt, storyboard (all when omitted)
        #[arg(long, value_delimiter = ',')]
        kinds: Vec<AssetKind>,

        /// Also request short feedback on the script
        #[arg(long)]
        feedback: bool,

        /// Directory to write assets into (overrides the configured export dir)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Request short feedback on a script file
    Feedback {
        /// Path to the script file
        #[arg(long)]
        script: PathBuf,

        /// Copy the feedback to the clipboard
        #[arg(long)]
        copy: bool,
    },
}
