//! Error types for board parsing and move validation.

use crate::position::Coordinate;
use derive_more::{Display, Error};

/// A board string could not be turned into a [`crate::Board`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The string had no cells at all.
    #[display("Board string is empty")]
    Empty,

    /// The cell count is not a perfect square.
    #[display("Board of {} cells is not square", len)]
    NotSquare {
        /// Number of characters in the string.
        len: usize,
    },

    /// A character other than ' ', 'X' or 'O'.
    #[display("Invalid cell {:?} at index {}", found, index)]
    InvalidCell {
        /// Row-major index of the offending character.
        index: usize,
        /// The offending character.
        found: char,
    },
}

/// Why a move token was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The token is not algebraic notation (e.g. `a1`, `A0`, `AA1`).
    #[display("{:?} is not a move like A1", token)]
    Unparseable {
        /// The rejected input.
        token: String,
    },

    /// The coordinate lies outside this board.
    #[display("{} is off a {}x{} board", coordinate, dimension, dimension)]
    OffBoard {
        /// The parsed coordinate.
        coordinate: Coordinate,
        /// Side length of the board.
        dimension: usize,
    },

    /// The target cell already holds a mark.
    #[display("{} is already occupied", coordinate)]
    Occupied {
        /// The parsed coordinate.
        coordinate: Coordinate,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_is_a_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(MoveError::Occupied {
            coordinate: Coordinate::new(0, 0),
        });
        assert_eq!(err.to_string(), "A1 is already occupied");
        assert!(err.source().is_none());
    }
}
