//! Application state and logic.

use super::input::{Action, map_key};
use super::ui::ScreenLayout;
use crate::Settings;
use crate::games::tictactoe::{Event, GameState, GameView, Position, render};
use crossterm::event::{KeyEvent, KeyEventKind};
use ratatui::layout::Position as ScreenPosition;
use tracing::{debug, info};

/// Main application state.
///
/// Wraps the immutable [`GameState`], replacing it on every event, plus
/// the UI-only cursor.
#[derive(Debug, Clone)]
pub struct App {
    state: GameState,
    cursor: Position,
    show_locations: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application from settings.
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: GameState::with_order(*settings.move_order()),
            cursor: Position::Center,
            show_locations: *settings.show_locations(),
            should_quit: false,
        }
    }

    /// Gets the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Builds the view for the current state.
    pub fn view(&self) -> GameView {
        render(&self.state, self.show_locations)
    }

    /// Applies a game event.
    pub fn dispatch(&mut self, event: Event) {
        debug!(%event, "Dispatching event");
        self.state = self.state.apply(event);
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.handle_action(map_key(key.code, self.cursor));
    }

    /// Performs an action.
    pub fn handle_action(&mut self, action: Action) {
        let view_index = self.state.view_index();
        let last_index = self.state.history().last_index();

        match action {
            Action::Game(event) => self.dispatch(event),
            Action::Cursor(pos) => self.cursor = pos,
            Action::StepBack if view_index > 0 => self.dispatch(Event::JumpTo(view_index - 1)),
            Action::StepForward if view_index < last_index => {
                self.dispatch(Event::JumpTo(view_index + 1))
            }
            Action::JumpStart => self.dispatch(Event::JumpTo(0)),
            Action::JumpLatest => self.dispatch(Event::JumpTo(last_index)),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Action::StepBack | Action::StepForward | Action::Ignore => {}
        }
    }

    /// Handles a left click at a terminal cell.
    ///
    /// Clicking a board square plays there; clicking a move-list line jumps
    /// to that move.
    pub fn handle_click(&mut self, column: u16, row: u16, layout: &ScreenLayout) {
        let point = ScreenPosition::new(column, row);

        if let Some(pos) = Position::ALL
            .into_iter()
            .find(|pos| layout.cells[pos.to_index()].contains(point))
        {
            self.cursor = pos;
            self.dispatch(Event::CellClick(pos));
            return;
        }

        if layout.moves.contains(point) {
            let line = usize::from(row - layout.moves.y);
            if let Some(entry) = self.view().moves().get(line) {
                self.dispatch(entry.on_click());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::MoveOrder;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::layout::Rect;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_keys_play_and_step_through_history() {
        let mut app = App::new(&Settings::default());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.state().history().len(), 3);

        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.state().view_index(), 1);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.state().view_index(), 0);
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.state().view_index(), 0);
        press(&mut app, KeyCode::End);
        assert_eq!(app.state().view_index(), 2);
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.state().view_index(), 2);
    }

    #[test]
    fn test_toggle_and_quit() {
        let mut app = App::new(&Settings::default());
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.state().move_order(), MoveOrder::Descending);
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_click_on_cell_and_move_list() {
        let mut app = App::new(&Settings::default());
        let layout = ScreenLayout::new(Rect::new(0, 0, 100, 30));

        let top_left = layout.cells[0];
        app.handle_click(top_left.x, top_left.y, &layout);
        assert_eq!(app.state().board().get(Position::TopLeft).player(), Some(crate::Player::X));
        assert_eq!(app.cursor(), Position::TopLeft);

        // First move-list line is "Go to game start" in ascending order.
        app.handle_click(layout.moves.x, layout.moves.y, &layout);
        assert_eq!(app.state().view_index(), 0);
        assert_eq!(app.state().history().len(), 2);
    }
}
