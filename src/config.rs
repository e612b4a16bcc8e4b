//! Game configuration: starting board, marks and scripted computer moves.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_tictactoe::{Board, BoardError, Cell, Mark};
use tracing::{debug, info, instrument};

/// Side length of the built-in blank board.
pub const DEFAULT_DIMENSION: usize = 3;

/// Configuration for one game.
///
/// Built once at startup, either by [`GameConfig::default`] or
/// [`GameConfig::from_file`], and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    /// Starting board as a row-major cell string.
    #[serde(default = "default_board")]
    board: String,

    /// Mark played by the human.
    #[serde(default = "default_player_letter")]
    player_letter: Mark,

    /// Mark played by the computer.
    #[serde(default = "default_computer_letter")]
    computer_letter: Mark,

    /// Moves the computer plays first, in algebraic notation, one per turn.
    #[serde(default)]
    computer_moves: Vec<String>,
}

fn default_board() -> String {
    Cell::EMPTY_CHAR
        .to_string()
        .repeat(DEFAULT_DIMENSION * DEFAULT_DIMENSION)
}

fn default_player_letter() -> Mark {
    Mark::X
}

fn default_computer_letter() -> Mark {
    Mark::O
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: default_board(),
            player_letter: default_player_letter(),
            computer_letter: default_computer_letter(),
            computer_moves: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration and validates it.
    #[instrument(skip(board, computer_moves))]
    pub fn new(
        board: impl Into<String>,
        player_letter: Mark,
        computer_letter: Mark,
        computer_moves: Vec<String>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            board: board.into(),
            player_letter,
            computer_letter,
            computer_moves,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a JSON file, or TOML when the path ends in `.toml`.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!(
                "Configuration file not found: {} ({})",
                path.display(),
                e
            ))
        })?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let config = if is_toml {
            Self::from_toml_str(&content)?
        } else {
            Self::from_json_str(&content)?
        };

        info!(
            player = %config.player_letter,
            computer = %config.computer_letter,
            scripted_moves = config.computer_moves.len(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses and validates a JSON document.
    #[instrument(skip(content))]
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a TOML document.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Parses the starting board.
    pub fn initial_board(&self) -> Result<Board, BoardError> {
        Board::parse(&self.board)
    }

    /// Checks the marks differ and the board parses.
    ///
    /// Scripted moves are not checked here; they are judged against the
    /// board at the turn they are played.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.player_letter == self.computer_letter {
            return Err(ConfigError::new(format!(
                "Player and computer both use {}",
                self.player_letter
            )));
        }
        self.initial_board()
            .map_err(|e| ConfigError::new(format!("Invalid board {:?}: {}", self.board, e)))?;
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
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
