//! Tic-tac-toe with a browsable move history.
//!
//! - [`rules`] evaluates a board into an [`Outcome`].
//! - [`History`] stores one [`Snapshot`] per move.
//! - [`GameState`] is the controller: an immutable value advanced by
//!   [`Event`]s.
//! - [`render`] turns a state into a [`GameView`] for front ends.

mod action;
mod history;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod state;
mod types;
mod view;

pub use action::{Event, EventParseError, MoveError};
pub use history::{History, Snapshot};
pub use outcome::{Line, Outcome};
pub use position::{Location, Position};
pub use rules::evaluate;
pub use state::{GameState, MoveOrder};
pub use types::{Board, Player, Square};
pub use view::{CellView, GameView, MoveEntry, render, status_line};

/// Alias for clarity in front-end code.
pub type Mark = Player;
