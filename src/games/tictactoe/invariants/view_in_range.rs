//! View index invariant.

use super::super::GameState;
use super::Invariant;

/// Invariant: The viewed move names an existing history entry.
pub struct ViewInRangeInvariant;

impl Invariant<GameState> for ViewInRangeInvariant {
    fn holds(state: &GameState) -> bool {
        state.view_index() < state.history().len()
    }

    fn description() -> &'static str {
        "View index lies within the history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::History;

    #[test]
    fn test_new_game_holds() {
        assert!(ViewInRangeInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_index_past_end_violates() {
        let state = GameState::from_parts(History::new(), 1);
        assert!(!ViewInRangeInvariant::holds(&state));
    }
}
