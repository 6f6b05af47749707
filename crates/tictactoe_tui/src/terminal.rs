//! Terminal setup and teardown.

use crate::app::Tui;
use anyhow::Context;
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};
use tracing::{debug, info, instrument, warn};

/// Owns the terminal while the game runs. Restores it on drop.
pub struct TerminalGuard {
    terminal: Tui,
    restored: bool,
}

impl TerminalGuard {
    /// Enters raw mode, the alternate screen and mouse capture.
    ///
    /// If any step after raw mode fails, the steps already taken are undone
    /// before the error is returned.
    #[instrument]
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let terminal = with_rollback(
            || {
                let mut stdout = io::stdout();
                execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
                let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
                terminal.clear()?;
                Ok(terminal)
            },
            || {
                let _ = leave(&mut io::stdout());
            },
        )?;
        info!("Terminal ready");
        Ok(Self {
            terminal,
            restored: false,
        })
    }

    /// Gets the terminal to draw on.
    pub fn terminal_mut(&mut self) -> &mut Tui {
        &mut self.terminal
    }

    /// Restores the terminal now and reports whether that worked.
    pub fn restore(mut self) -> io::Result<()> {
        self.restored = true;
        leave(self.terminal.backend_mut())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.restored {
            debug!("Restoring terminal on drop");
            let _ = leave(self.terminal.backend_mut());
        }
    }
}

/// Restores the terminal before the default panic message is printed, so
/// the message lands on the normal screen instead of a raw alternate one.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = leave(&mut io::stdout());
        previous(info);
    }));
}

/// Combines the loop result with the restore result.
///
/// A loop error wins; a restore error is only returned when the loop
/// itself succeeded, and is logged either way.
pub fn finish(run: io::Result<()>, restored: io::Result<()>) -> anyhow::Result<()> {
    if let Err(err) = &restored {
        warn!(error = %err, "Failed to restore terminal");
    }
    run.context("Game loop failed")?;
    restored.context("Failed to restore terminal")
}

/// Runs `setup`, calling `rollback` if it fails.
fn with_rollback<T>(
    setup: impl FnOnce() -> io::Result<T>,
    rollback: impl FnOnce(),
) -> io::Result<T> {
    setup().inspect_err(|_| rollback())
}

/// Undoes everything [`TerminalGuard::enter`] did. Every step is attempted
/// even if an earlier one fails; the first error is returned.
fn leave<W: Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show);
    raw.and(screen)
}
