//! Application state and the input/render loop.

use crate::config::AppConfig;
use crate::input::{self, Action};
use crate::ui::{self, ScreenLayout};
use crossterm::event;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::Stdout;
use std::time::Duration;
use tictactoe::{Coord, GameEvent, GameState};
use tracing::{debug, info, instrument};

/// Terminal type the game draws on.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Main application state.
///
/// Owns the single [`GameState`]; every event is applied to completion
/// before the next one is read.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Coord,
    layout: ScreenLayout,
    poll_interval: Duration,
    should_quit: bool,
}

impl App {
    /// Creates a new application from its configuration.
    #[instrument(skip_all, fields(policy = ?config.starting_player()))]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            game: GameState::with_policy(*config.starting_player()),
            cursor: Coord::ALL[4],
            layout: ScreenLayout::default(),
            poll_interval: config.poll_interval(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Returns true once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one action.
    ///
    /// Rejected moves are logged and otherwise ignored.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Game(event) => {
                if let GameEvent::CellClicked { row, col } = event
                    && let Some(coord) = Coord::new(row, col)
                {
                    self.cursor = coord;
                }
                match self.game.handle(event) {
                    Ok(status) => debug!(?status, "Event applied"),
                    Err(e) => debug!(error = %e, "Event ignored"),
                }
            }
            Action::MoveCursor(d_row, d_col) => {
                self.cursor = self.cursor.step(d_row, d_col);
            }
            Action::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Runs the draw/poll loop until the player quits.
    ///
    /// Each iteration redraws, waits up to the poll interval for input,
    /// then drains every pending event.
    #[instrument(skip_all)]
    pub fn run(&mut self, terminal: &mut Tui) -> std::io::Result<()> {
        info!(poll_ms = self.poll_interval.as_millis() as u64, "Entering game loop");
        while !self.should_quit() {
            let mut layout = self.layout;
            terminal.draw(|frame| layout = ui::draw(frame, self.game(), self.cursor()))?;
            self.layout = layout;

            let mut timeout = self.poll_interval;
            while !self.should_quit() && event::poll(timeout)? {
                let raw = event::read()?;
                if let Some(action) = input::translate(&raw, &self.layout, self.cursor) {
                    self.apply(action);
                }
                timeout = Duration::ZERO;
            }
        }
        Ok(())
    }
}
