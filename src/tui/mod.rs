//! Terminal UI for Rewind Tic-Tac-Toe.
//!
//! Blocking, single-threaded event loop: draw, wait for one terminal
//! event, apply it, repeat.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, map_key, move_cursor};
pub use ui::{ScreenLayout, draw};

use crate::Settings;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyEventKind,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

/// Runs the terminal UI until the user quits.
#[instrument(skip(settings))]
pub fn run(settings: &Settings) -> Result<()> {
    info!("Starting Rewind TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut app = App::new(settings);
    let res = with_cleanup(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
                .context("Failed to enter alternate screen")?;
            let mut terminal =
                Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")?;
            run_loop(&mut terminal, &mut app)
        },
        restore_terminal,
    );

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        moves = app.state().history().len() - 1,
        outcome = %app.state().outcome(),
        "TUI closed"
    );
    res
}

/// Leaves raw mode and the alternate screen, and shows the cursor again.
fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show)
        .context("Failed to restore terminal")?;
    Ok(())
}

/// Runs `body`, then `cleanup` whether or not `body` failed.
///
/// An error from `body` wins over one from `cleanup`.
fn with_cleanup<T>(
    body: impl FnOnce() -> Result<T>,
    cleanup: impl FnOnce() -> Result<()>,
) -> Result<T> {
    let res = body();
    let cleaned = cleanup();
    let value = res?;
    cleaned?;
    Ok(value)
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let mut area = Rect::default();

    while !app.should_quit() {
        terminal.draw(|f| {
            area = f.area();
            draw(f, app);
        })?;

        match event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            TermEvent::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                debug!(column = mouse.column, row = mouse.row, "Mouse click");
                app.handle_click(mouse.column, mouse.row, &ScreenLayout::new(area));
            }
            _ => {}
        }
    }

    Ok(())
}
