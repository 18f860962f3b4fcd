//! Terminal tic-tac-toe with move-history time travel.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_rewind::tui;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play tic-tac-toe in the terminal and rewind to any earlier move.
#[derive(Parser, Debug)]
#[command(name = "tictactoe_rewind")]
#[command(about = "Terminal tic-tac-toe with move-history time travel", long_about = None)]
#[command(version)]
struct Cli {
    /// File to write diagnostics to (stdout belongs to the TUI)
    #[arg(long, default_value = "tictactoe_rewind.log")]
    log_file: std::path::PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file so output never interferes with the TUI.
    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!("Starting tictactoe_rewind");

    tui::run_tui()
}
