//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage and from the history controller, which re-evaluates the
//! viewed board after every transition.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};

use super::{Board, Outcome};
use tracing::{instrument, trace};

/// Evaluates a board into an [`Outcome`].
///
/// A completed line wins, checked in [`LINES`] order. Otherwise a full
/// board is a tie and anything else is still in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    let outcome = if let Some((player, line)) = winning_line(board) {
        Outcome::Win { player, line }
    } else if is_full(board) {
        Outcome::Tie
    } else {
        Outcome::InProgress
    };
    trace!(%outcome, "Board evaluated");
    outcome
}
