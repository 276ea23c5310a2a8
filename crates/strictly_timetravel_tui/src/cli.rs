//! Command-line interface for strictly_timetravel.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Timetravel - tic-tac-toe with a rewindable move history
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel")]
#[command(about = "Tic-tac-toe with full move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults are used if missing)
    #[arg(short, long, default_value = "strictly_timetravel.toml", global = true)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Start with the move list sorted newest-first
        #[arg(long)]
        descending: bool,
    },

    /// Play a scripted sequence of moves and print the resulting view
    Replay {
        /// Cells to play in order, as indices 0-8 or labels like `top-left`
        #[arg(required = true)]
        moves: Vec<String>,

        /// History index to jump to after playing
        #[arg(long)]
        jump: Option<usize>,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
