//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions over [`Board`](crate::Board) values. Nothing here performs
//! I/O, consults randomness or mutates its input; every move produces a new
//! board.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::{is_draw, is_full};
pub use moves::{check_at, check_move, is_on_board, is_valid_move, place_at, place_mark, valid_moves};
pub use win::get_winner;
