//! Strictly Games - tic-tac-toe replay CLI
//!
//! Plays a list of moves through the rules engine and renders the result.

#![warn(missing_docs)]

mod cli;
mod script;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use script::MoveScript;
use serde::Serialize;
use std::io::Write;
use strictly_tictactoe::{Game, Outcome};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command {
        Command::Show { json } => render(Game::new(), json, &mut std::io::stdout().lock()),
        Command::Replay {
            moves,
            script,
            json,
        } => run_replay(moves, script, json),
    }
}

/// Logs go to stderr so stdout carries only the rendered game.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load a script, play it, render the final game
#[instrument(skip_all)]
fn run_replay(moves: Option<String>, script: Option<std::path::PathBuf>, json: bool) -> Result<()> {
    let script = match (moves, script) {
        (Some(list), _) => MoveScript::from_list(&list)?,
        (None, Some(path)) => MoveScript::from_file(&path)
            .with_context(|| format!("Loading {}", path.display()))?,
        (None, None) => anyhow::bail!("Either --moves or --script is required"),
    };

    let game = script.play()?;
    info!(
        moves = script.moves().len(),
        outcome = %game.winner(),
        winner = ?game.winner().winner(),
        "Replay finished"
    );
    render(game, json, &mut std::io::stdout().lock())
}

/// JSON view of a game, with the evaluated outcome alongside the raw state.
#[derive(Serialize)]
struct Report {
    #[serde(flatten)]
    game: Game,
    outcome: Outcome,
}

fn render(game: Game, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        let report = Report {
            game,
            outcome: game.winner(),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        game.draw(out)?;
    }
    Ok(())
}
