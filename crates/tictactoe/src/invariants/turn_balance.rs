//! Turn balance invariant: players alternate starting with the opener.

use super::Invariant;
use crate::GameState;

/// Invariant: the opener has placed either as many marks as the other
/// player or exactly one more.
///
/// Under the default policy the opener is always X, so X count minus O
/// count is 0 or 1.
pub struct TurnBalanceInvariant;

impl Invariant<GameState> for TurnBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let opener = state.starting_player();
        let ahead = state.board().count(opener);
        let behind = state.board().count(opener.opponent());
        ahead == behind || ahead == behind + 1
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the opener"
    }
}
