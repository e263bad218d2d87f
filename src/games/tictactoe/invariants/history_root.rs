//! History root invariant: every history starts from the empty board.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: History is non-empty and entry 0 is the empty board with no
/// recorded location.
pub struct HistoryRootInvariant;

impl Invariant<GameState> for HistoryRootInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .get(0)
            .is_some_and(|root| *root.board() == Board::new() && root.location().is_none())
    }

    fn description() -> &'static str {
        "History starts with an empty board and no location"
    }
}
