//! First-class input events for the game controller.
//!
//! Events are the only way state changes. They can be parsed from a
//! compact text form so a whole session can be scripted and replayed.

use super::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An input consumed by [`GameState::apply`](super::GameState::apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    /// A cell was clicked.
    CellClick(Position),
    /// A move-list entry was clicked.
    JumpTo(usize),
    /// The sort toggle was clicked.
    ToggleOrder,
    /// Start a new game.
    Reset,
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::CellClick(pos) => write!(f, "c{}", pos.to_index()),
            Event::JumpTo(index) => write!(f, "j{}", index),
            Event::ToggleOrder => write!(f, "t"),
            Event::Reset => write!(f, "r"),
        }
    }
}

/// Error parsing an [`Event`] from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid event '{}': {}", input, reason)]
pub struct EventParseError {
    /// The rejected input.
    pub input: String,
    /// Why it was rejected.
    pub reason: &'static str,
}

impl EventParseError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

impl FromStr for Event {
    type Err = EventParseError;

    /// Parses `0`-`8` or `c<i>` (cell), `j<k>` (jump), `t` (toggle), `r` (reset).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let cell = |digits: &str| {
            digits
                .parse::<usize>()
                .ok()
                .and_then(Position::from_index)
                .map(Event::CellClick)
                .ok_or_else(|| EventParseError::new(trimmed, "cell must be 0-8"))
        };

        match trimmed {
            "t" | "toggle" => Ok(Event::ToggleOrder),
            "r" | "reset" => Ok(Event::Reset),
            _ if trimmed.starts_with('c') => cell(&trimmed[1..]),
            _ if trimmed.starts_with('j') => trimmed[1..]
                .parse::<usize>()
                .map(Event::JumpTo)
                .map_err(|_| EventParseError::new(trimmed, "jump target must be a move number")),
            _ if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) => cell(trimmed),
            _ => Err(EventParseError::new(trimmed, "expected c<0-8>, j<n>, t or r")),
        }
    }
}

/// Why a move or jump was not applied.
///
/// [`GameState::apply`](super::GameState::apply) swallows these and
/// returns the state unchanged; the `try_*` operations surface them.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The viewed board already has a winner or is full.
    #[display("Game is already over")]
    GameOver,

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The jump target does not name a history entry.
    #[display("Move #{} does not exist (history has {} entries)", target, len)]
    JumpOutOfRange {
        /// Requested index.
        target: usize,
        /// History length at the time.
        len: usize,
    },
}
