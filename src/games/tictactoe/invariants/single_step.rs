//! Single-step invariant: each snapshot adds exactly one mark.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: Each snapshot differs from its predecessor in exactly one
/// square, which went from empty to occupied at the recorded location.
///
/// Squares are therefore never overwritten along the history.
pub struct SingleStepInvariant;

impl Invariant<GameState> for SingleStepInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().snapshots().windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let changed: Vec<usize> = (0..9)
                .filter(|&i| before.squares()[i] != after.squares()[i])
                .collect();

            match (changed.as_slice(), pair[1].last_move()) {
                ([index], Some(pos)) => {
                    *index == pos.to_index()
                        && before.squares()[*index] == Square::Empty
                        && after.squares()[*index] != Square::Empty
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each move fills exactly one empty square at its location"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Event, History, Player, Position, Snapshot};

    #[test]
    fn test_played_game_holds() {
        let state = GameState::replay([
            Event::CellClick(Position::TopLeft),
            Event::CellClick(Position::Center),
            Event::CellClick(Position::BottomRight),
        ]);
        assert!(SingleStepInvariant::holds(&state));
    }

    #[test]
    fn test_two_marks_in_one_step_violates() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::Center, Player::O);
        let history = History::from_snapshots(vec![
            Snapshot::initial(),
            Snapshot::from_parts(board, Some(Position::Center.location())),
        ]);
        assert!(!SingleStepInvariant::holds(&GameState::from_parts(history, 1)));
    }

    #[test]
    fn test_wrong_location_violates() {
        let board = Board::new().with_mark(Position::TopLeft, Player::X);
        let history = History::from_snapshots(vec![
            Snapshot::initial(),
            Snapshot::from_parts(board, Some(Position::Center.location())),
        ]);
        assert!(!SingleStepInvariant::holds(&GameState::from_parts(history, 1)));
    }

    #[test]
    fn test_overwrite_violates() {
        let first = Board::new().with_mark(Position::Center, Player::X);
        let second = first.with_mark(Position::Center, Player::O);
        let history = History::from_snapshots(vec![
            Snapshot::initial(),
            Snapshot::from_parts(first, Some(Position::Center.location())),
            Snapshot::from_parts(second, Some(Position::Center.location())),
        ]);
        assert!(!SingleStepInvariant::holds(&GameState::from_parts(history, 2)));
    }
}
