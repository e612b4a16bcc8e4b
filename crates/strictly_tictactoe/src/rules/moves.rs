//! Move validation and placement.
//!
//! Validation is two separate predicates: the token must be algebraic
//! notation ([`parse_algebraic`]) and the coordinate must fit the live board
//! ([`is_on_board`]). Only then is the target cell checked for emptiness.

use crate::error::MoveError;
use crate::position::{Coordinate, parse_algebraic};
use crate::{Board, Cell, Mark};
use tracing::{debug, instrument, warn};

/// Checks whether `coordinate` lies on `board`.
pub fn is_on_board(board: &Board, coordinate: Coordinate) -> bool {
    coordinate.row() < board.dimension() && coordinate.col() < board.dimension()
}

/// Validates a move token against the board, explaining any rejection.
#[instrument(skip(board), fields(dimension = board.dimension()))]
pub fn check_move(board: &Board, token: &str) -> Result<Coordinate, MoveError> {
    let coordinate = parse_algebraic(token).ok_or_else(|| MoveError::Unparseable {
        token: token.to_string(),
    })?;
    check_at(board, coordinate)
}

/// Validates an already parsed coordinate: on the board and empty.
pub fn check_at(board: &Board, coordinate: Coordinate) -> Result<Coordinate, MoveError> {
    if !is_on_board(board, coordinate) {
        return Err(MoveError::OffBoard {
            coordinate,
            dimension: board.dimension(),
        });
    }

    if !board.is_empty_at(coordinate) {
        return Err(MoveError::Occupied { coordinate });
    }

    Ok(coordinate)
}

/// True iff `token` parses, lies on the board and names an empty cell.
#[instrument(skip(board), fields(dimension = board.dimension()))]
pub fn is_valid_move(board: &Board, token: &str) -> bool {
    match check_move(board, token) {
        Ok(_) => true,
        Err(e) => {
            debug!(error = %e, "Move rejected");
            false
        }
    }
}

/// Returns a copy of `board` with `mark` written at `coordinate`.
///
/// Callers validate first. An off-board coordinate yields an unchanged copy;
/// an occupied cell is overwritten.
#[instrument(skip(board), fields(dimension = board.dimension()))]
pub fn place_at(board: &Board, mark: Mark, coordinate: Coordinate) -> Board {
    if !is_on_board(board, coordinate) {
        warn!(%coordinate, "Placement off the board ignored");
    }
    board.with_cell(coordinate, Cell::Occupied(mark))
}

/// Returns a copy of `board` with `mark` written at the cell `token` names.
///
/// Callers check [`is_valid_move`] first. An unparseable token yields an
/// unchanged copy.
#[instrument(skip(board), fields(dimension = board.dimension()))]
pub fn place_mark(board: &Board, mark: Mark, token: &str) -> Board {
    match parse_algebraic(token) {
        Some(coordinate) => place_at(board, mark, coordinate),
        None => {
            warn!(token, "Placement with unparseable token ignored");
            board.clone()
        }
    }
}

/// Every legal move on the board, row-major.
///
/// Each cell's algebraic token is derived and filtered through
/// [`is_valid_move`], so cells the notation cannot name are never offered.
#[instrument(skip(board), fields(dimension = board.dimension()))]
pub fn valid_moves(board: &Board) -> Vec<Coordinate> {
    let dimension = board.dimension();
    (0..dimension * dimension)
        .map(|index| Coordinate::from_index(dimension, index))
        .filter(|coordinate| {
            coordinate
                .to_algebraic()
                .is_some_and(|token| is_valid_move(board, &token))
        })
        .collect()
}
