//! Win detection for boards of any dimension.

use crate::position::Coordinate;
use crate::{Board, Cell, Mark};
use tracing::{debug, instrument};

/// Returns the mark that fills a whole line, if any.
///
/// Every occupied cell is checked, in row-major order, against its full row,
/// its full column and, when it lies on one, the main or anti diagonal. The
/// first mark found completing a line wins. Boards holding several complete
/// lines report whichever mark's line is reached first.
///
/// This re-walks lines per cell, so it costs O(n³) on an n×n board.
#[instrument(skip(board), fields(dimension = board.dimension()))]
pub fn get_winner(board: &Board) -> Option<Mark> {
    let dimension = board.dimension();

    for (index, cell) in board.cells().iter().enumerate() {
        let Cell::Occupied(mark) = *cell else {
            continue;
        };
        let at = Coordinate::from_index(dimension, index);
        let owned = |c: Cell| c == Cell::Occupied(mark);

        let row = board.row(at.row()).all(owned);
        let column = board.column(at.col()).all(owned);
        let main = at.row() == at.col() && main_diagonal(board).all(owned);
        let anti = at.row() + at.col() + 1 == dimension && anti_diagonal(board).all(owned);

        if row || column || main || anti {
            debug!(%mark, %at, row, column, main, anti, "Winning line found");
            return Some(mark);
        }
    }

    None
}

fn main_diagonal(board: &Board) -> impl Iterator<Item = Cell> + '_ {
    (0..board.dimension()).filter_map(move |i| board.get(Coordinate::new(i, i)))
}

fn anti_diagonal(board: &Board) -> impl Iterator<Item = Cell> + '_ {
    let last = board.dimension().saturating_sub(1);
    (0..board.dimension()).filter_map(move |i| board.get(Coordinate::new(i, last - i)))
}
