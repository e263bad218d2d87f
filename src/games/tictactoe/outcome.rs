//! Outcome of evaluating a board.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// Three positions forming a row, column or diagonal.
pub type Line = [Position; 3];

/// Result of evaluating a board.
///
/// Always derived from a board, never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one square is empty.
    InProgress,
    /// A player completed a line.
    Win {
        /// The winning player.
        player: Player,
        /// The completed line.
        line: Line,
    },
    /// The board is full and no line is complete.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            Outcome::InProgress | Outcome::Tie => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<&Line> {
        match self {
            Outcome::Win { line, .. } => Some(line),
            Outcome::InProgress | Outcome::Tie => None,
        }
    }

    /// Returns true while moves can still be played.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Outcome::InProgress)
    }

    /// Returns true if the game ended without a winner.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win { player, .. } => write!(f, "Player {} wins", player),
            Outcome::Tie => write!(f, "Draw"),
        }
    }
}
