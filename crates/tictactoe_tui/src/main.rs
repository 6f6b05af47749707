//! Tic Tac Toe - terminal front end
//!
//! Two players share one terminal: click a cell (or use the keyboard) to
//! place a mark, press R to restart, Q to quit.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod terminal;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::Cli;
use config::AppConfig;
use std::path::Path;
use terminal::TerminalGuard;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .context("Failed to load configuration")?
        .with_overrides(&cli);

    init_tracing(config.log_file())?;
    info!(config_path = %cli.config.display(), ?config, "Starting Tic Tac Toe");

    terminal::install_panic_hook();
    let mut app = App::new(&config);
    let mut guard = TerminalGuard::enter().context("Failed to set up terminal")?;
    let res = app.run(guard.terminal_mut());
    let restored = guard.restore();

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Exiting");
    terminal::finish(res, restored)
}

/// Sends logs to a file so they never corrupt the terminal UI.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))
}
