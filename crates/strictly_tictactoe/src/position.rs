//! Board coordinates and algebraic move notation.
//!
//! A move is written as one uppercase row letter followed by a 1-based
//! column number: `A1` is the top-left cell, `C3` the bottom-right cell of
//! a 3×3 board. Parsing here is grammar-only. Whether a coordinate fits a
//! particular board is decided by [`crate::rules::is_on_board`].

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Highest row letter and column number the notation can express.
pub const MAX_ALGEBRAIC: usize = 26;

/// A 0-indexed (row, column) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    /// Creates a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row, counted from the top.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column, counted from the left.
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index on a board of side `dimension`.
    pub fn to_index(self, dimension: usize) -> usize {
        coordinate_to_index(dimension, self.row, self.col)
    }

    /// Coordinate of a row-major index on a board of side `dimension`.
    pub fn from_index(dimension: usize, index: usize) -> Self {
        let (row, col) = index_to_coordinate(dimension, index);
        Self { row, col }
    }

    /// Writes the coordinate in algebraic notation.
    ///
    /// Returns `None` past row `Z` or column 26, which the notation cannot
    /// name.
    pub fn to_algebraic(self) -> Option<String> {
        if self.row >= MAX_ALGEBRAIC || self.col >= MAX_ALGEBRAIC {
            return None;
        }
        let letter = char::from(b'A' + self.row as u8);
        Some(format!("{}{}", letter, self.col + 1))
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_algebraic() {
            Some(token) => write!(f, "{}", token),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

/// Maps (row, col) to a row-major index.
pub fn coordinate_to_index(dimension: usize, row: usize, col: usize) -> usize {
    row * dimension + col
}

/// Maps a row-major index back to (row, col).
///
/// A zero dimension has no cells; it maps everything to (0, 0).
pub fn index_to_coordinate(dimension: usize, index: usize) -> (usize, usize) {
    if dimension == 0 {
        return (0, 0);
    }
    (index / dimension, index % dimension)
}

/// Parses a token such as `B12` into a coordinate.
///
/// Accepts exactly one letter `A`-`Z` followed by a column number `1`-`26`
/// with no leading zero and nothing after it. Lowercase letters, several
/// row letters, `A0`, `A01`, `A27` and trailing text are all rejected.
#[instrument]
pub fn parse_algebraic(token: &str) -> Option<Coordinate> {
    let mut chars = token.chars();
    let letter = chars.next().filter(char::is_ascii_uppercase)?;
    let digits = chars.as_str();

    if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.starts_with('0') {
        return None;
    }

    let column: usize = digits.parse().ok()?;
    if column > MAX_ALGEBRAIC {
        return None;
    }

    let row = (letter as u8 - b'A') as usize;
    Some(Coordinate::new(row, column - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_corners() {
        assert_eq!(parse_algebraic("A1"), Some(Coordinate::new(0, 0)));
        assert_eq!(parse_algebraic("C3"), Some(Coordinate::new(2, 2)));
        assert_eq!(parse_algebraic("B10"), Some(Coordinate::new(1, 9)));
    }

    #[test]
    fn test_parse_grammar_limits() {
        assert_eq!(parse_algebraic("Z26"), Some(Coordinate::new(25, 25)));
        assert_eq!(parse_algebraic("A19"), Some(Coordinate::new(0, 18)));
        assert_eq!(parse_algebraic("A20"), Some(Coordinate::new(0, 19)));
        assert_eq!(parse_algebraic("A27"), None);
        assert_eq!(parse_algebraic("A30"), None);
    }

    #[test]
    fn test_parse_rejects_malformed_tokens() {
        for token in ["", "a1", "A0", "A01", "AA1", "A", "1A", "A1 ", " A1", "A1x", "A100", "Ä1", "A-1", "A+1"] {
            assert_eq!(parse_algebraic(token), None, "{:?} should be rejected", token);
        }
    }

    #[test]
    fn test_algebraic_round_trip() {
        for token in ["A1", "C3", "H12", "Z26"] {
            let coordinate = parse_algebraic(token).unwrap();
            assert_eq!(coordinate.to_algebraic().as_deref(), Some(token));
        }
    }

    #[test]
    fn test_unnameable_coordinate() {
        assert_eq!(Coordinate::new(26, 0).to_algebraic(), None);
        assert_eq!(Coordinate::new(26, 0).to_string(), "(26, 0)");
        assert_eq!(Coordinate::new(1, 1).to_string(), "B2");
    }

    #[test]
    fn test_index_mapping() {
        assert_eq!(coordinate_to_index(3, 1, 2), 5);
        assert_eq!(index_to_coordinate(3, 5), (1, 2));
        assert_eq!(Coordinate::from_index(4, 15), Coordinate::new(3, 3));
        assert_eq!(Coordinate::new(3, 3).to_index(4), 15);
    }
}
