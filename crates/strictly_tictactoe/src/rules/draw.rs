//! Full-board and draw detection.

use super::win::get_winner;
use crate::{Board, Cell};
use tracing::instrument;

/// Checks if the board has no empty cell left.
#[instrument(skip(board), fields(dimension = board.dimension()))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A full board with no winner.
#[instrument(skip(board), fields(dimension = board.dimension()))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && get_winner(board).is_none()
}
