//! Computer opponent: scripted moves first, then random legal moves.

use super::Player;
use crate::console::input::Console;
use crate::console::random::RandomSource;
use anyhow::{Result, bail};
use strictly_tictactoe::{Board, Coordinate, Mark, rules};
use tracing::{debug, instrument, warn};

/// Prompt pacing the computer's turn.
pub const CONTINUE_PROMPT: &str = "Please <ENTER> to see computer's move";

/// Computer player.
///
/// Each turn consumes one entry of the script. A scripted move that is no
/// longer legal is skipped in favour of a random move, and the cursor still
/// advances, so later entries stay paired with later turns rather than
/// shifting back.
#[derive(Debug, Clone)]
pub struct ComputerPlayer<R> {
    name: String,
    mark: Mark,
    script: Vec<String>,
    cursor: usize,
    rng: R,
}

impl<R: RandomSource> ComputerPlayer<R> {
    /// Creates a computer player with a move script and a source of randomness.
    pub fn new(name: impl Into<String>, mark: Mark, script: Vec<String>, rng: R) -> Self {
        Self {
            name: name.into(),
            mark,
            script,
            cursor: 0,
            rng,
        }
    }

    /// Index of the script entry the next turn will consult.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Takes the current script entry if it is still legal. Always advances.
    fn scripted_move(&mut self, board: &Board) -> Option<Coordinate> {
        let entry = self.script.get(self.cursor).cloned();
        self.cursor += 1;

        let token = entry?;
        match rules::check_move(board, &token) {
            Ok(coordinate) => Some(coordinate),
            Err(e) => {
                warn!(token = %token, error = %e, "Scripted move skipped");
                None
            }
        }
    }

    /// Picks uniformly among every legal move.
    fn random_move(&mut self, board: &Board) -> Result<Coordinate> {
        let moves = rules::valid_moves(board);
        if moves.is_empty() {
            bail!("No legal moves left for {}", self.name);
        }
        let index = self.rng.pick_index(moves.len());
        match moves.get(index) {
            Some(coordinate) => Ok(*coordinate),
            None => bail!("Random index {} out of {} moves", index, moves.len()),
        }
    }
}

impl<R: RandomSource> Player for ComputerPlayer<R> {
    #[instrument(skip_all, fields(player = %self.name, cursor = self.cursor))]
    fn next_move(&mut self, board: &Board, console: &mut dyn Console) -> Result<Coordinate> {
        console.prompt(CONTINUE_PROMPT)?;

        if let Some(coordinate) = self.scripted_move(board) {
            debug!(%coordinate, "Computer played scripted move");
            return Ok(coordinate);
        }

        let coordinate = self.random_move(board)?;
        debug!(%coordinate, "Computer played random move");
        Ok(coordinate)
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn script(&self) -> &[String] {
        &self.script
    }
}
