//! Command-line interface for tictactoe_tui.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic Tac Toe - a minimal game for two players
#[derive(Parser, Debug)]
#[command(name = "tictactoe_tui")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply cell indices (0-8) to a fresh game and print the result
    Replay {
        /// Cell indices in play order
        #[arg(allow_negative_numbers = true)]
        cells: Vec<i64>,

        /// Print the game view as JSON instead of a text board
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// The command to run, with `play` as the default.
    pub fn selected_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}
