//! Core domain types for N×N tic-tac-toe.

use crate::error::BoardError;
use crate::position::Coordinate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Mark {
    /// Mark X (always moves first).
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// The character this mark is written as on a board string.
    pub fn as_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    /// Looks up the mark written as `c`.
    pub fn from_char(c: char) -> Option<Self> {
        Mark::iter().find(|mark| mark.as_char() == c)
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

impl Cell {
    /// Character used for an empty cell in board strings.
    pub const EMPTY_CHAR: char = ' ';

    /// The character this cell is written as.
    pub fn as_char(self) -> char {
        match self {
            Cell::Empty => Self::EMPTY_CHAR,
            Cell::Occupied(mark) => mark.as_char(),
        }
    }

    /// Parses a board character. Anything but ' ', 'X' or 'O' is rejected.
    pub fn from_char(c: char) -> Option<Self> {
        if c == Self::EMPTY_CHAR {
            Some(Cell::Empty)
        } else {
            Mark::from_char(c).map(Cell::Occupied)
        }
    }

    /// Returns the occupying mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// Square tic-tac-toe board of any dimension.
///
/// Cells are stored row-major, `index = row * dimension + col`. A board is a
/// value: the rules never mutate one in place, placing a mark yields a new
/// board (see [`crate::rules::place_at`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    dimension: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a blank `dimension`×`dimension` board.
    ///
    /// A board has at least one cell, so a zero dimension is rejected the
    /// same way [`Board::parse`] rejects an empty string.
    #[instrument]
    pub fn empty(dimension: usize) -> Result<Self, BoardError> {
        if dimension == 0 {
            return Err(BoardError::Empty);
        }
        Ok(Self {
            dimension,
            cells: vec![Cell::Empty; dimension * dimension],
        })
    }

    /// Parses a row-major board string.
    ///
    /// The length must be a non-zero perfect square and every character one
    /// of ' ', 'X' or 'O'.
    #[instrument(fields(len = s.chars().count()))]
    pub fn parse(s: &str) -> Result<Self, BoardError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.is_empty() {
            return Err(BoardError::Empty);
        }

        let dimension = chars.len().isqrt();
        if dimension * dimension != chars.len() {
            return Err(BoardError::NotSquare { len: chars.len() });
        }

        let cells = chars
            .iter()
            .enumerate()
            .map(|(index, &c)| Cell::from_char(c).ok_or(BoardError::InvalidCell { index, found: c }))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { dimension, cells })
    }

    /// Side length of the board.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the cell at `coordinate`, or `None` if it lies off the board.
    pub fn get(&self, coordinate: Coordinate) -> Option<Cell> {
        if coordinate.row() >= self.dimension || coordinate.col() >= self.dimension {
            return None;
        }
        self.cells
            .get(coordinate.to_index(self.dimension))
            .copied()
    }

    /// Checks if the cell at `coordinate` exists and is empty.
    pub fn is_empty_at(&self, coordinate: Coordinate) -> bool {
        matches!(self.get(coordinate), Some(Cell::Empty))
    }

    /// Iterates over the cells of one row. Rows past the board yield nothing.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .iter()
            .skip(row.saturating_mul(self.dimension))
            .take(self.dimension)
            .copied()
    }

    /// Iterates over the cells of one column.
    pub fn column(&self, col: usize) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .iter()
            .skip(col)
            .step_by(self.dimension.max(1))
            .take(self.dimension)
            .copied()
    }

    /// Returns a copy of this board with `coordinate` set to `cell`.
    ///
    /// Off-board coordinates leave the copy unchanged.
    pub(crate) fn with_cell(&self, coordinate: Coordinate, cell: Cell) -> Self {
        let mut next = self.clone();
        if coordinate.row() < self.dimension && coordinate.col() < self.dimension {
            next.cells[coordinate.to_index(self.dimension)] = cell;
        }
        next
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::parse(s)
    }
}

impl TryFrom<String> for Board {
    type Error = BoardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Board::parse(&s)
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_string()
    }
}

/// Writes the board back as its row-major cell string.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.as_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_square_length() {
        let board = Board::empty(4).unwrap();
        assert_eq!(board.dimension(), 4);
        assert_eq!(board.cells().len(), 16);
        assert!(board.cells().iter().all(|c| *c == Cell::Empty));
    }

    #[test]
    fn test_empty_rejects_zero_dimension() {
        assert_eq!(Board::empty(0), Err(BoardError::Empty));
        assert_eq!(Board::empty(1).unwrap(), Board::parse(" ").unwrap());
    }

    #[test]
    fn test_parse_three_by_three() {
        let board = Board::parse("XXXOO    ").unwrap();
        assert_eq!(board.dimension(), 3);
        assert_eq!(board.get(Coordinate::new(0, 0)), Some(Cell::Occupied(Mark::X)));
        assert_eq!(board.get(Coordinate::new(1, 1)), Some(Cell::Occupied(Mark::O)));
        assert_eq!(board.get(Coordinate::new(2, 2)), Some(Cell::Empty));
    }

    #[test]
    fn test_parse_rejects_non_square_length() {
        assert_eq!(Board::parse("XO "), Err(BoardError::NotSquare { len: 3 }));
        assert_eq!(Board::parse("        "), Err(BoardError::NotSquare { len: 8 }));
    }

    #[test]
    fn test_parse_rejects_empty_string() {
        assert_eq!(Board::parse(""), Err(BoardError::Empty));
    }

    #[test]
    fn test_parse_rejects_unknown_characters() {
        assert_eq!(
            Board::parse("X-O      "),
            Err(BoardError::InvalidCell { index: 1, found: '-' })
        );
        // Lowercase marks are not marks.
        assert!(Board::parse("x        ").is_err());
    }

    #[test]
    fn test_single_cell_board() {
        let board = Board::parse(" ").unwrap();
        assert_eq!(board.dimension(), 1);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let text = "X O  O X ";
        let board: Board = text.parse().unwrap();
        assert_eq!(board.to_string(), text);
    }

    #[test]
    fn test_get_off_board_is_none() {
        let board = Board::empty(3).unwrap();
        assert_eq!(board.get(Coordinate::new(3, 0)), None);
        assert_eq!(board.get(Coordinate::new(0, 3)), None);
        assert!(!board.is_empty_at(Coordinate::new(5, 5)));
    }

    #[test]
    fn test_rows_and_columns() {
        let board = Board::parse("XO OX  OX").unwrap();
        let row: String = board.row(1).map(Cell::as_char).collect();
        let col: String = board.column(1).map(Cell::as_char).collect();
        assert_eq!(row, "OX ");
        assert_eq!(col, "OXO");
    }

    #[test]
    fn test_rows_past_the_board_are_empty() {
        let board = Board::parse("XO OX  OX").unwrap();
        assert_eq!(board.row(3).count(), 0);
        assert_eq!(board.row(usize::MAX).count(), 0);
    }

    #[test]
    fn test_serde_uses_board_string() {
        let board = Board::parse("X   O    ").unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, "\"X   O    \"");
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
        assert!(serde_json::from_str::<Board>("\"XX\"").is_err());
    }

    #[test]
    fn test_mark_chars() {
        assert_eq!(Mark::from_char('X'), Some(Mark::X));
        assert_eq!(Mark::from_char('O'), Some(Mark::O));
        assert_eq!(Mark::from_char('o'), None);
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.to_string(), "O");
    }
}
