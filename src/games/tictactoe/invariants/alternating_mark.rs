//! Alternating mark invariant: snapshots alternate X, O, X, O, ...

use super::super::{GameState, Player, Square};
use super::Invariant;

/// Invariant: The mark added by snapshot `k` is X for odd `k` and O for
/// even `k`.
///
/// Together with the view-index parity rule this keeps the displayed turn
/// consistent with the board.
pub struct AlternatingMarkInvariant;

impl Invariant<GameState> for AlternatingMarkInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(k, snapshot)| {
                let expected = Square::Occupied(Player::for_move_number(k - 1));
                snapshot
                    .last_move()
                    .is_some_and(|pos| snapshot.board().get(pos) == expected)
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Event, History, Position, Snapshot};

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingMarkInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let state = GameState::replay([
            Event::CellClick(Position::TopLeft),
            Event::CellClick(Position::Center),
            Event::CellClick(Position::TopRight),
            Event::CellClick(Position::BottomLeft),
        ]);
        assert!(AlternatingMarkInvariant::holds(&state));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let first = Snapshot::after_move(&Board::new(), Position::TopLeft, Player::X);
        let second = Snapshot::after_move(first.board(), Position::Center, Player::X);
        let history = History::from_snapshots(vec![Snapshot::initial(), first, second]);
        assert!(!AlternatingMarkInvariant::holds(&GameState::from_parts(history, 2)));
    }

    #[test]
    fn test_o_first_violates() {
        let first = Snapshot::after_move(&Board::new(), Position::TopLeft, Player::O);
        let history = History::from_snapshots(vec![Snapshot::initial(), first]);
        assert!(!AlternatingMarkInvariant::holds(&GameState::from_parts(history, 1)));
    }
}
