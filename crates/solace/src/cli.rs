use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "solace")]
#[command(version)]
#[command(about = "Supportive chat companion with daily emotion tracking")]
pub struct Cli {
    /// Log pipeline decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive conversation
    Chat {
        /// Model name (overrides SOLACE_MODEL)
        #[arg(short, long)]
        model: Option<String>,

        /// Where to write the emotion chart (overrides SOLACE_CHART_PATH)
        #[arg(long)]
        chart_path: Option<PathBuf>,
    },

    /// Show how a piece of text would be classified, without calling the model
    Classify {
        /// Text to classify
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Print version information
    Version,
}
