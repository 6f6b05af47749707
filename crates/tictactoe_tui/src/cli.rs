//! Command-line interface for the terminal game.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal: click a cell to play, R restarts, Q quits
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (ignored if it does not exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Swap the opening player on every restart instead of always starting with X
    #[arg(long)]
    pub alternate_start: bool,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Input polling interval in milliseconds (at least 1)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub poll_ms: Option<u64>,
}
