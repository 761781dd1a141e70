//! Move scripts: inline move lists and TOML files.

use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::Path;
use strictly_tictactoe::{Game, Move};
use tracing::{debug, info, instrument};

/// Move script error.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} at {}:{}", message, file, line)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawScript {
    moves: Vec<String>,
}

/// An ordered list of moves to play from a fresh game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveScript {
    moves: Vec<Move>,
}

impl MoveScript {
    /// Parses a comma-separated list such as `"X@0, O@center"`.
    #[instrument]
    pub fn from_list(list: &str) -> Result<Self, ScriptError> {
        Self::parse_all(list.split(',').filter(|s| !s.trim().is_empty()))
    }

    /// Loads a script from a TOML file with a `moves` array.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        debug!("Loading move script");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ScriptError::new(format!("Failed to read script: {}", e)))?;

        let raw: RawScript = toml::from_str(&content)
            .map_err(|e| ScriptError::new(format!("Failed to parse script: {}", e)))?;

        let script = Self::parse_all(raw.moves.iter().map(String::as_str))?;
        info!(moves = script.moves.len(), "Script loaded");
        Ok(script)
    }

    fn parse_all<'a>(items: impl Iterator<Item = &'a str>) -> Result<Self, ScriptError> {
        let moves = items
            .map(|item| {
                item.parse::<Move>()
                    .map_err(|e| ScriptError::new(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { moves })
    }

    /// Returns the moves in play order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Plays every move from a fresh game.
    ///
    /// The error names the 1-based move number that was refused.
    #[instrument(skip(self), fields(moves = self.moves.len()))]
    pub fn play(&self) -> anyhow::Result<Game> {
        use anyhow::Context;

        self.moves
            .iter()
            .enumerate()
            .try_fold(Game::new(), |game, (i, action)| {
                game.place(*action)
                    .with_context(|| format!("Move {} ({}) was refused", i + 1, action))
            })
    }
}
