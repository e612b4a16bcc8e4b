//! How a finished game ended.

use crate::rules::{get_winner, is_full};
use crate::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A mark completed a line.
    Winner(Mark),
    /// The board filled up with no complete line.
    Draw,
}

impl Outcome {
    /// Reads the outcome off a board, or `None` while play can continue.
    ///
    /// A winner takes precedence over a full board.
    #[instrument(skip(board), fields(dimension = board.dimension()))]
    pub fn of(board: &Board) -> Option<Self> {
        if let Some(mark) = get_winner(board) {
            Some(Outcome::Winner(mark))
        } else if is_full(board) {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "{} won the game!", mark),
            Outcome::Draw => write!(f, "It's a draw!"),
        }
    }
}
