//! Player trait and implementations.

mod computer;
mod human;

pub use computer::{CONTINUE_PROMPT, ComputerPlayer};
pub use human::{HumanPlayer, INVALID_MOVE, MOVE_PROMPT};

use super::input::Console;
use anyhow::Result;
use strictly_tictactoe::{Board, Coordinate, Mark};

/// Something that can choose moves.
pub trait Player {
    /// Chooses a legal move on `board`.
    ///
    /// The console is the only way a player talks to the user.
    fn next_move(&mut self, board: &Board, console: &mut dyn Console) -> Result<Coordinate>;

    /// The mark this player places.
    fn mark(&self) -> Mark;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Moves this player has committed to in advance, in algebraic notation.
    fn script(&self) -> &[String] {
        &[]
    }
}
