//! Command-line interface for strictly_games.

use clap::{Parser, Subcommand};

/// Strictly Games - replay tic-tac-toe moves and render the board
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Replay tic-tac-toe games from the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a fresh game
    Show {
        /// Print the game as JSON instead of the text board
        #[arg(long)]
        json: bool,
    },

    /// Play moves from a fresh game and render the result
    Replay {
        /// Comma-separated moves, e.g. "X@0,O@3,X@center"
        #[arg(short, long, required_unless_present = "script", conflicts_with = "script")]
        moves: Option<String>,

        /// TOML file with a `moves = [...]` list
        #[arg(short, long)]
        script: Option<std::path::PathBuf>,

        /// Print the game as JSON instead of the text board
        #[arg(long)]
        json: bool,
    },
}
