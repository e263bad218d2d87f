//! Command-line interface for rewind_tictactoe.

use clap::{Args, Parser, Subcommand};
use rewind_tictactoe::{DEFAULT_SETTINGS_FILE, Event};
use std::path::PathBuf;

/// Rewind Tic-Tac-Toe - play, then step back through every move
#[derive(Parser, Debug)]
#[command(name = "rewind_tictactoe")]
#[command(about = "Tic-tac-toe with a browsable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every front end.
#[derive(Args, Debug, Clone)]
pub struct ViewOptions {
    /// Path to the settings file (defaults apply if it does not exist)
    #[arg(short, long, default_value = DEFAULT_SETTINGS_FILE)]
    pub config: PathBuf,

    /// List moves newest first
    #[arg(long)]
    pub descending: bool,

    /// Hide the (row, col) of each move in the move list
    #[arg(long)]
    pub no_locations: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Tui {
        #[command(flatten)]
        view: ViewOptions,
    },

    /// Apply a scripted event sequence and print the resulting view
    Replay {
        #[command(flatten)]
        view: ViewOptions,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Events: 0-8 or c<i> (cell), j<n> (jump to move), t (toggle order), r (reset)
        #[arg(required = true)]
        events: Vec<Event>,
    },
}
