//! Keyboard mapping for the terminal UI.

use crate::games::tictactoe::{Event, Position};
use crossterm::event::KeyCode;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Forward an event to the game.
    Game(Event),
    /// Move the board cursor.
    Cursor(Position),
    /// View the previous move.
    StepBack,
    /// View the next move.
    StepForward,
    /// View the initial board.
    JumpStart,
    /// View the newest move.
    JumpLatest,
    /// Leave the UI.
    Quit,
    /// Key has no binding.
    Ignore,
}

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    match key {
        KeyCode::Right => cursor.step(0, 1),
        KeyCode::Left => cursor.step(0, -1),
        KeyCode::Down => cursor.step(1, 0),
        KeyCode::Up => cursor.step(-1, 0),
        _ => cursor,
    }
}

/// Maps a key to an [`Action`] given the current cursor.
pub fn map_key(code: KeyCode, cursor: Position) -> Action {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Action::Cursor(move_cursor(cursor, code))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Action::Game(Event::CellClick(cursor)),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map_or(Action::Ignore, |pos| Action::Game(Event::CellClick(pos))),
        KeyCode::Char('[') => Action::StepBack,
        KeyCode::Char(']') => Action::StepForward,
        KeyCode::Home => Action::JumpStart,
        KeyCode::End => Action::JumpLatest,
        KeyCode::Char('s') => Action::Game(Event::ToggleOrder),
        KeyCode::Char('r') => Action::Game(Event::Reset),
        _ => Action::Ignore,
    }
}
