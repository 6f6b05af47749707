//! Who opens the next match after a reset.

use super::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Rule for choosing the starting player when a match is reset.
///
/// Defaults to [`StartingPlayerPolicy::AlwaysX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartingPlayerPolicy {
    /// X opens every match.
    #[default]
    AlwaysX,
    /// The opener swaps on every reset: X, then O, then X, ...
    Alternate,
}

impl StartingPlayerPolicy {
    /// Starting player of the very first match.
    pub fn first(self) -> Player {
        Player::X
    }

    /// Starting player of the match following one opened by `previous`.
    #[instrument]
    pub fn next(self, previous: Player) -> Player {
        match self {
            Self::AlwaysX => Player::X,
            Self::Alternate => previous.opponent(),
        }
    }
}
