//! Human player typing moves at the console.

use super::Player;
use crate::console::input::Console;
use anyhow::Result;
use strictly_tictactoe::{Board, Coordinate, Mark, rules};
use tracing::{debug, instrument};

/// Prompt shown when it is the human's turn.
pub const MOVE_PROMPT: &str = "What's your move? (e.g., A1)";

/// Message shown after a rejected move.
pub const INVALID_MOVE: &str = "Invalid move. Please try again.";

/// Human player answering prompts in algebraic notation.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
    mark: Mark,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }
}

impl Player for HumanPlayer {
    /// Prompts until the answer is a legal move. Rejections never end the turn.
    #[instrument(skip_all, fields(player = %self.name))]
    fn next_move(&mut self, board: &Board, console: &mut dyn Console) -> Result<Coordinate> {
        loop {
            let answer = console.prompt(MOVE_PROMPT)?;
            match rules::check_move(board, answer.trim()) {
                Ok(coordinate) => {
                    debug!(%coordinate, "Human chose move");
                    return Ok(coordinate);
                }
                Err(e) => {
                    debug!(answer = %answer, error = %e, "Human move rejected");
                    console.show(INVALID_MOVE)?;
                }
            }
        }
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}
