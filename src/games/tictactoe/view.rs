//! Presentation model: what a front end should draw for a given state.
//!
//! [`render`] is a pure function of [`GameState`]. Front ends (the
//! terminal UI, the `replay` command) only lay out the [`GameView`] it
//! returns and send [`Event`]s back.

use super::{Event, GameState, MoveOrder, Outcome, Player, Position, Square};
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// One board square as it should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters)]
pub struct CellView {
    /// Which square this is.
    position: Position,
    /// Mark in the square, if any.
    mark: Option<Player>,
    /// Part of the winning line.
    highlighted: bool,
    /// Filled by the move that produced the viewed board.
    just_played: bool,
}

impl CellView {
    /// Event sent when this cell is clicked.
    pub fn on_click(&self) -> Event {
        Event::CellClick(self.position)
    }
}

/// One entry in the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    index: usize,
    /// Text shown for the entry.
    label: String,
    /// The entry currently viewed; shown as text rather than a button.
    is_current: bool,
}

impl MoveEntry {
    /// Event sent when this entry is clicked.
    pub fn on_click(&self) -> Event {
        Event::JumpTo(self.index)
    }
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    /// The nine cells in row-major order.
    cells: [CellView; 9],
    /// Winner, draw, or next player.
    status: String,
    /// Index of the viewed move.
    current_move: usize,
    /// Move list in display order.
    moves: Vec<MoveEntry>,
    /// Order the move list is shown in.
    move_order: MoveOrder,
}

impl GameView {
    /// Cells of one board row (0-2).
    pub fn row(&self, row: usize) -> &[CellView] {
        &self.cells[row * 3..row * 3 + 3]
    }

    /// Label of the sort toggle.
    pub fn order_label(&self) -> &'static str {
        match self.move_order {
            MoveOrder::Ascending => "Sort: oldest first",
            MoveOrder::Descending => "Sort: newest first",
        }
    }

    /// Plain-text rendering used by the `replay` command.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.status);
        out.push('\n');
        out.push_str(&format!("Current move: {}\n", self.current_move));
        for row in 0..3 {
            let cells: Vec<String> = self
                .row(row)
                .iter()
                .map(|cell| {
                    let mark = cell.mark.map_or_else(|| ".".to_string(), |p| p.to_string());
                    if cell.highlighted {
                        format!("[{}]", mark)
                    } else if cell.just_played {
                        format!("<{}>", mark)
                    } else {
                        format!(" {} ", mark)
                    }
                })
                .collect();
            out.push_str(&cells.join("|"));
            out.push('\n');
        }
        out.push_str(self.order_label());
        out.push('\n');
        for entry in &self.moves {
            let marker = if entry.is_current { '>' } else { ' ' };
            out.push_str(&format!("{} {}. {}\n", marker, entry.index, entry.label));
        }
        out
    }
}

/// Status line for an outcome and the player to move.
pub fn status_line(outcome: &Outcome, turn: Player) -> String {
    match outcome {
        Outcome::Win { player, .. } => format!("Winner: {}", player),
        Outcome::Tie => "Draw".to_string(),
        Outcome::InProgress => format!("Next player: {}", turn),
    }
}

/// Builds the view of `state`.
///
/// With `show_locations` set, move entries carry the `(row, col)` of the
/// move that produced them.
#[instrument(skip(state), fields(view_index = state.view_index()))]
pub fn render(state: &GameState, show_locations: bool) -> GameView {
    let outcome = state.outcome();
    let board = state.board();
    let winning = outcome.winning_line();
    let last_move = state.last_move();

    let cells = Position::ALL.map(|position| CellView {
        position,
        mark: board.get(position).player(),
        highlighted: winning.is_some_and(|line| line.contains(&position)),
        just_played: last_move == Some(position) && board.get(position) != Square::Empty,
    });

    let mut moves: Vec<MoveEntry> = state
        .history()
        .iter()
        .enumerate()
        .map(|(index, snapshot)| {
            let is_current = index == state.view_index();
            let mut label = if is_current {
                format!("You are at move #{}", index)
            } else if index > 0 {
                format!("Go to move #{}", index)
            } else {
                "Go to game start".to_string()
            };
            if show_locations && let Some(location) = snapshot.location() {
                label.push_str(&format!(" {}", location));
            }
            MoveEntry {
                index,
                label,
                is_current,
            }
        })
        .collect();

    if state.move_order() == MoveOrder::Descending {
        moves.reverse();
    }

    GameView {
        cells,
        status: status_line(&outcome, state.turn()),
        current_move: state.view_index(),
        moves,
        move_order: state.move_order(),
    }
}
