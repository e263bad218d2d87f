//! Rewind Tic-Tac-Toe - Unified CLI
//!
//! Terminal UI and scripted replay over the same game engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, ViewOptions};
use rewind_tictactoe::{Event, GameState, MoveOrder, Settings, render, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Tui { view } => run_tui(&view),
        Command::Replay { view, json, events } => run_replay(&view, json, events),
    }
}

/// Loads settings and applies command-line overrides.
fn load_settings(view: &ViewOptions) -> Result<Settings> {
    let mut settings = Settings::load_or_default(&view.config)
        .with_context(|| format!("Failed to load settings from {}", view.config.display()))?;
    if view.descending {
        settings = settings.with_move_order(MoveOrder::Descending);
    }
    if view.no_locations {
        settings = settings.with_show_locations(false);
    }
    Ok(settings)
}

fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.log_filter()))
}

/// Run the terminal UI
fn run_tui(view: &ViewOptions) -> Result<()> {
    let settings = load_settings(view)?;

    // Log to a file; the terminal belongs to the UI
    let log_file = std::fs::File::create(settings.log_file())
        .with_context(|| format!("Failed to create log file {}", settings.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&settings))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    tui::run(&settings)
}

/// Apply scripted events and print the resulting view
fn run_replay(view: &ViewOptions, json: bool, events: Vec<Event>) -> Result<()> {
    let settings = load_settings(view)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&settings))
        .with_writer(std::io::stderr)
        .try_init();

    info!("Replaying events");
    let state = events
        .into_iter()
        .fold(GameState::with_order(*settings.move_order()), |state, event| {
            state.apply(event)
        });
    let game_view = render(&state, *settings.show_locations());

    if json {
        println!("{}", serde_json::to_string_pretty(&game_view)?);
    } else {
        print!("{}", game_view.to_text());
    }

    info!(outcome = %state.outcome(), moves = state.history().len() - 1, "Replay finished");
    Ok(())
}
