//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::app::App;
use crate::games::tictactoe::{CellView, GameView, Position};

const HELP: &str = "Arrows+Enter or 1-9: play | [ ]: step | Home/End | S: sort | R: reset | Q: quit";

/// Screen regions, computed from the terminal size.
///
/// Shared by drawing and mouse hit-testing so both agree on where
/// things are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Status box.
    pub status: Rect,
    /// Board squares in row-major order.
    pub cells: [Rect; 9],
    /// Move list frame, including its border.
    pub moves_block: Rect,
    /// Move list lines, one entry per row.
    pub moves: Rect,
    /// Key help footer.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits `area` into screen regions.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(13),   // Board + moves
                Constraint::Length(3), // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(44), Constraint::Min(20)])
            .split(chunks[1]);

        let board_pane = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(11)])
            .split(body[0]);

        let moves_block = body[1];

        Self {
            title: chunks[0],
            status: board_pane[0],
            cells: board_cells(center_rect(board_pane[1], 40, 11)),
            moves_block,
            moves: Block::default().borders(Borders::ALL).inner(moves_block),
            help: chunks[2],
        }
    }
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::new(frame.area());
    let view = app.view();

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    let status = Paragraph::new(format!("{}  (move {})", view.status(), view.current_move()))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, layout.status);

    for cell in view.cells() {
        draw_cell(frame, layout.cells[cell.position().to_index()], cell, app.cursor());
    }

    draw_moves(frame, &layout, &view);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, layout.help);
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, cursor: Position) {
    let (symbol, mut style) = match cell.mark() {
        None => (
            format!("{}", cell.position().to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Some(player) => {
            let color = match player {
                crate::Player::X => Color::Blue,
                crate::Player::O => Color::Red,
            };
            (
                player.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
    };

    if *cell.highlighted() {
        style = style.bg(Color::Green);
    }
    if *cell.just_played() {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if *cell.position() == cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, layout: &ScreenLayout, view: &GameView) {
    let items: Vec<ListItem> = view
        .moves()
        .iter()
        .map(|entry| {
            let style = if *entry.is_current() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(entry.label().clone(), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Moves - {}", view.order_label())),
    );
    frame.render_widget(list, layout.moves_block);
}

fn board_cells(board_area: Rect) -> [Rect; 9] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let mut cells = [Rect::default(); 9];
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(2),
                Constraint::Length(12),
                Constraint::Length(2),
                Constraint::Length(12),
            ])
            .split(row_area);
        for (col, col_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[row * 3 + col] = col_area;
        }
    }
    cells
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Event, Settings};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_cells_do_not_overlap() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 100, 30));
        for (i, a) in layout.cells.iter().enumerate() {
            assert!(a.width > 0 && a.height > 0);
            for b in &layout.cells[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_cursor_keeps_winning_highlight() {
        let mut app = App::new(&Settings::default());
        for pos in [3, 0, 4, 1, 5] {
            app.dispatch(Event::CellClick(Position::ALL[pos]));
        }
        assert_eq!(app.cursor(), Position::Center);

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();
        let buffer = terminal.backend().buffer();
        let area = ScreenLayout::new(Rect::new(0, 0, 100, 30)).cells[Position::Center.to_index()];

        let mark = (area.y..area.bottom())
            .flat_map(|y| (area.x..area.right()).map(move |x| (x, y)))
            .map(|pos| &buffer[pos])
            .find(|cell| cell.symbol() == "X")
            .unwrap();
        assert_eq!(mark.bg, Color::Green);
        assert!(mark.modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_draw_shows_status_and_moves() {
        let mut app = App::new(&Settings::default());
        app.dispatch(Event::CellClick(Position::Center));
        let text = screen_text(&app);
        assert!(text.contains("Next player: O"));
        assert!(text.contains("Go to game start"));
        assert!(text.contains("You are at move #1 (1, 1)"));
        assert!(text.contains("Sort: oldest first"));
    }
}
