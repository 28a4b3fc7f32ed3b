mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` when set, WARN otherwise; `--verbose` adds a DEBUG directive on top
fn env_filter(verbose: bool) -> EnvFilter {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::WARN.as_str()));
    if verbose {
        filter.add_directive(Level::DEBUG.into())
    } else {
        filter
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the chat stays readable on stdout
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Chat { model, chart_path } => commands::chat::run(model, chart_path),
        Commands::Classify { text } => commands::classify::run(&text.join(" ")),
        Commands::Version => commands::version::run(),
    }
}
