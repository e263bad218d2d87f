//! Rewind Tic-Tac-Toe library - a tic-tac-toe engine with time travel
//!
//! Every move is kept as an immutable board snapshot. Any earlier move can
//! be viewed again, and playing from an earlier move discards the moves
//! after it.
//!
//! # Architecture
//!
//! - **Rules**: pure board evaluation (win line, tie, in progress)
//! - **History**: snapshot list with branch truncation
//! - **GameState**: the controller, advanced by [`Event`]s
//! - **View**: a front-end neutral description of what to draw
//! - **Settings**: TOML-backed preferences
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Event, GameState, Outcome, Player, Position, render};
//!
//! let state = GameState::replay([
//!     Event::CellClick(Position::TopLeft),
//!     Event::CellClick(Position::MiddleLeft),
//!     Event::CellClick(Position::TopCenter),
//!     Event::CellClick(Position::Center),
//!     Event::CellClick(Position::TopRight),
//! ]);
//! assert_eq!(state.outcome().winner(), Some(Player::X));
//!
//! // Look back at the opening move without losing the rest.
//! let earlier = state.apply(Event::JumpTo(1));
//! assert_eq!(earlier.outcome(), Outcome::InProgress);
//! assert_eq!(earlier.history().len(), 6);
//! assert_eq!(render(&earlier, true).status(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod games;
mod settings;
pub mod tui;

// Crate-level exports - Settings
pub use settings::{ConfigError, DEFAULT_SETTINGS_FILE, Settings};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, CellView, Event, EventParseError, GameState, GameView, History, Line, Location, Mark,
    MoveEntry, MoveError, MoveOrder, Outcome, Player, Position, Snapshot, Square, evaluate,
    render, status_line,
};
