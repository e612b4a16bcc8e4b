//! Pure N×N tic-tac-toe rules.
//!
//! Boards are square grids of any dimension, addressed in algebraic
//! notation (`A1` is the top-left cell). Everything in this crate is a pure
//! function of its arguments: boards are values, placing a mark returns a
//! new board, and no operation touches I/O or randomness.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Board, Mark, rules};
//!
//! let board = Board::empty(3).unwrap();
//! assert!(rules::is_valid_move(&board, "B2"));
//!
//! let board = rules::place_mark(&board, Mark::X, "B2");
//! assert!(!rules::is_valid_move(&board, "B2"));
//! assert_eq!(rules::get_winner(&board), None);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use error::{BoardError, MoveError};
pub use outcome::Outcome;
pub use position::{
    Coordinate, MAX_ALGEBRAIC, coordinate_to_index, index_to_coordinate, parse_algebraic,
};
pub use types::{Board, Cell, Mark};
