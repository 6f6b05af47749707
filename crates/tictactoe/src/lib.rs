//! Tic-tac-toe game state machine.
//!
//! The crate owns the 3x3 board, whose turn it is, and whether the match
//! has been won or drawn. Front ends feed it [`GameEvent`]s and draw the
//! resulting [`GameState`].
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameState, GameStatus, Line, Player};
//!
//! let mut game = GameState::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
//!     game.apply_move(row, col)?;
//! }
//! let status = game.apply_move(0, 2)?;
//! assert_eq!(status, GameStatus::Won { player: Player::X, line: Line::Row0 });
//! assert_eq!(game.status_message(), "Player X Wins! Press R to Restart");
//! # Ok::<(), tictactoe::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod event;
pub mod invariants;
mod policy;
mod position;
pub mod rules;
mod state;
mod types;

pub use error::InvalidMove;
pub use event::{GameEvent, Move};
pub use policy::StartingPlayerPolicy;
pub use position::Coord;
pub use rules::{Line, Orientation};
pub use state::{GameState, GameStatus};
pub use types::{Board, Cell, Player};
