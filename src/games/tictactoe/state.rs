//! Game controller: one immutable state value and its transitions.
//!
//! Turn and outcome are never stored. Both are recomputed from the
//! viewed snapshot, so they cannot drift from the board on screen.

use super::action::{Event, MoveError};
use super::history::{History, Snapshot};
use super::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use super::rules::evaluate;
use super::{Board, Outcome, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Order in which the move list is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MoveOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl MoveOrder {
    /// Flips the order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Complete game state: history, viewed move, and move-list order.
///
/// Deserialization checks every controller invariant, so a decoded state
/// is as sound as one built by transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateRepr")]
pub struct GameState {
    history: History,
    view_index: usize,
    move_order: MoveOrder,
}

#[derive(Deserialize)]
struct GameStateRepr {
    history: History,
    view_index: usize,
    #[serde(default)]
    move_order: MoveOrder,
}

impl TryFrom<GameStateRepr> for GameState {
    type Error = InvariantViolation;

    fn try_from(repr: GameStateRepr) -> Result<Self, Self::Error> {
        let state = Self {
            history: repr.history,
            view_index: repr.view_index,
            move_order: repr.move_order,
        };
        GameInvariants::check_all(&state).map_err(|violations| InvariantViolation::merge(&violations))?;
        Ok(state)
    }
}

impl GameState {
    /// Creates a new game: one empty snapshot, viewing move 0.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(MoveOrder::default())
    }

    /// Creates a new game with the given move-list order.
    pub fn with_order(move_order: MoveOrder) -> Self {
        Self {
            history: History::new(),
            view_index: 0,
            move_order,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(history: History, view_index: usize) -> Self {
        Self {
            history,
            view_index,
            move_order: MoveOrder::default(),
        }
    }

    /// Returns the history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the move currently displayed.
    pub fn view_index(&self) -> usize {
        self.view_index
    }

    /// Move-list display order.
    pub fn move_order(&self) -> MoveOrder {
        self.move_order
    }

    /// The snapshot being viewed.
    pub fn current(&self) -> &Snapshot {
        self.history.current(self.view_index)
    }

    /// The board being viewed.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Outcome of the viewed board.
    pub fn outcome(&self) -> Outcome {
        evaluate(self.board())
    }

    /// Player to move on the viewed board.
    pub fn turn(&self) -> Player {
        Player::for_move_number(self.view_index)
    }

    /// Position of the move that produced the viewed board.
    pub fn last_move(&self) -> Option<Position> {
        self.current().last_move()
    }

    /// True when the viewed move is the newest one.
    pub fn is_at_latest(&self) -> bool {
        self.view_index == self.history.last_index()
    }

    /// Applies an event and returns the next state.
    ///
    /// Rejected moves and jumps return an unchanged copy of `self`.
    #[instrument(skip(self), fields(view_index = self.view_index, len = self.history.len()))]
    pub fn apply(&self, event: Event) -> GameState {
        let result = match event {
            Event::CellClick(pos) => self.try_play(pos),
            Event::JumpTo(target) => self.try_jump_to(target),
            Event::ToggleOrder => Ok(self.toggle_order()),
            Event::Reset => Ok(self.reset()),
        };

        match result {
            Ok(next) => next,
            Err(e @ MoveError::JumpOutOfRange { .. }) => {
                warn!(error = %e, "Ignoring jump outside history");
                self.clone()
            }
            Err(e) => {
                debug!(error = %e, "Move rejected");
                self.clone()
            }
        }
    }

    /// Plays the current turn's mark at `pos`.
    ///
    /// Fails if the viewed board is already decided or the square is taken.
    /// Any moves after the viewed one are discarded.
    #[instrument(skip(self))]
    pub fn try_play(&self, pos: Position) -> Result<GameState, MoveError> {
        if !self.outcome().is_in_progress() {
            return Err(MoveError::GameOver);
        }
        if !self.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.turn();
        let snapshot = Snapshot::after_move(self.board(), pos, player);
        let history = self.history.append(snapshot, self.view_index);
        let next = GameState {
            view_index: history.last_index(),
            history,
            move_order: self.move_order,
        };
        debug!(%player, %pos, view_index = next.view_index, "Move played");
        next.debug_check();
        Ok(next)
    }

    /// Views the board after move `target`. History is untouched.
    #[instrument(skip(self))]
    pub fn try_jump_to(&self, target: usize) -> Result<GameState, MoveError> {
        if target >= self.history.len() {
            return Err(MoveError::JumpOutOfRange {
                target,
                len: self.history.len(),
            });
        }
        let next = GameState {
            view_index: target,
            ..self.clone()
        };
        debug!(target, outcome = %next.outcome(), "Jumped to move");
        next.debug_check();
        Ok(next)
    }

    /// Flips the move-list order. Nothing else changes.
    #[instrument(skip(self))]
    pub fn toggle_order(&self) -> GameState {
        let next = GameState {
            move_order: self.move_order.toggle(),
            ..self.clone()
        };
        next.debug_check();
        next
    }

    /// Starts a fresh game, keeping the move-list order.
    #[instrument(skip(self))]
    pub fn reset(&self) -> GameState {
        debug!("Game reset");
        let next = GameState::with_order(self.move_order);
        next.debug_check();
        next
    }

    /// Replays a sequence of events from a new game.
    #[instrument(skip(events))]
    pub fn replay<I>(events: I) -> GameState
    where
        I: IntoIterator<Item = Event>,
    {
        events
            .into_iter()
            .fold(GameState::new(), |state, event| state.apply(event))
    }

    /// Panics on an invariant violation in debug builds.
    fn debug_check(&self) {
        #[cfg(debug_assertions)]
        if let Err(violations) = GameInvariants::check_all(self) {
            panic!("{}", InvariantViolation::merge(&violations));
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.view_index(), 0);
        assert_eq!(state.turn(), Player::X);
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert_eq!(state.last_move(), None);
    }

    #[test]
    fn test_try_play_reports_occupied_square() {
        let state = GameState::new().apply(Event::CellClick(Position::Center));
        assert_eq!(
            state.try_play(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_try_jump_reports_out_of_range() {
        let state = GameState::new();
        assert_eq!(
            state.try_jump_to(1),
            Err(MoveError::JumpOutOfRange { target: 1, len: 1 })
        );
        assert_eq!(state.apply(Event::JumpTo(1)), state);
    }

    #[test]
    fn test_reset_keeps_move_order() {
        let state = GameState::replay([
            Event::CellClick(Position::Center),
            Event::ToggleOrder,
            Event::Reset,
        ]);
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.move_order(), MoveOrder::Descending);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "View index lies within the history")]
    fn test_toggle_checks_invariants() {
        GameState::from_parts(History::new(), 3).toggle_order();
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "History starts with an empty board")]
    fn test_jump_checks_invariants() {
        let root = Snapshot::after_move(&Board::new(), Position::Center, Player::X);
        let state = GameState::from_parts(History::from_snapshots(vec![root]), 0);
        let _ = state.try_jump_to(0);
    }

    #[test]
    fn test_deserialize_rejects_empty_history() {
        let json = r#"{"history":{"snapshots":[]},"view_index":0,"move_order":"ascending"}"#;
        assert!(serde_json::from_str::<GameState>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_view_outside_history() {
        let mut value = serde_json::to_value(GameState::new()).unwrap();
        value["view_index"] = 5.into();
        let err = serde_json::from_value::<GameState>(value).unwrap_err();
        assert!(err.to_string().contains("View index lies within the history"));
    }

    #[test]
    fn test_deserialize_accepts_branched_game() {
        let state = GameState::replay([
            Event::CellClick(Position::TopLeft),
            Event::CellClick(Position::Center),
            Event::JumpTo(1),
            Event::ToggleOrder,
        ]);
        let json = serde_json::to_string(&state).unwrap();
        let decoded: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, state);
        assert_eq!(decoded.turn(), Player::O);
    }
}
