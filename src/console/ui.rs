//! Stateless text rendering of the board.

use strictly_tictactoe::{Board, Cell};

/// Renders the board as a grid with column numbers and row letters.
///
/// ```text
///     1   2   3
///   +---+---+---+
/// A | X |   |   |
///   +---+---+---+
/// ```
///
/// Column headers assume single-digit numbers and drift right on boards
/// wider than nine.
pub fn render_board(board: &Board) -> String {
    let dimension = board.dimension();

    let header: String = (1..=dimension).map(|col| format!("{}   ", col)).collect();
    let separator = format!("  +{}", "---+".repeat(dimension));

    let mut lines = vec![format!("    {}", header).trim_end().to_string(), separator.clone()];
    for row in 0..dimension {
        let cells: Vec<String> = board.row(row).map(|c: Cell| c.as_char().to_string()).collect();
        lines.push(format!("{} | {} |", row_label(row), cells.join(" | ")));
        lines.push(separator.clone());
    }
    lines.join("\n")
}

fn row_label(row: usize) -> char {
    u8::try_from(row)
        .ok()
        .and_then(|r| b'A'.checked_add(r))
        .filter(u8::is_ascii_uppercase)
        .map_or('?', char::from)
}
