//! Game orchestration between the human and the computer.

use super::input::Console;
use super::players::{ComputerPlayer, HumanPlayer, Player};
use super::random::RandomSource;
use super::ui::render_board;
use crate::config::GameConfig;
use anyhow::{Context, Result};
use strictly_tictactoe::{Board, Mark, Outcome, rules};
use tracing::{debug, info, instrument};

/// Whose move it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The human moves next.
    Player,
    /// The computer moves next.
    Opponent,
}

impl Turn {
    /// X always moves first, so the side holding X opens.
    pub fn first(player_letter: Mark) -> Self {
        if player_letter == Mark::X {
            Turn::Player
        } else {
            Turn::Opponent
        }
    }

    /// The other side.
    pub fn next(self) -> Self {
        match self {
            Turn::Player => Turn::Opponent,
            Turn::Opponent => Turn::Player,
        }
    }
}

/// Runs one game from a starting board to a win or a draw.
pub struct Orchestrator<C> {
    board: Board,
    human: Box<dyn Player>,
    computer: Box<dyn Player>,
    console: C,
    turn: Turn,
}

impl<C: Console> Orchestrator<C> {
    /// Creates an orchestrator from explicit players.
    pub fn new(
        board: Board,
        human: Box<dyn Player>,
        computer: Box<dyn Player>,
        console: C,
        turn: Turn,
    ) -> Self {
        Self {
            board,
            human,
            computer,
            console,
            turn,
        }
    }

    /// Builds the standard human-versus-computer game a configuration describes.
    #[instrument(skip_all)]
    pub fn from_config<R>(config: &GameConfig, console: C, rng: R) -> Result<Self>
    where
        R: RandomSource + 'static,
    {
        let board = config
            .initial_board()
            .context("Configured board is not a valid board")?;
        let human = HumanPlayer::new("Player", *config.player_letter());
        let computer = ComputerPlayer::new(
            "Computer",
            *config.computer_letter(),
            config.computer_moves().clone(),
            rng,
        );

        Ok(Self::new(
            board,
            Box::new(human),
            Box::new(computer),
            console,
            Turn::first(*config.player_letter()),
        ))
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose move is next.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// The console, for inspecting what was shown.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Plays until the board holds a winner or is full, then reports the result.
    #[instrument(skip(self), fields(dimension = self.board.dimension()))]
    pub fn run(&mut self) -> Result<Outcome> {
        info!("Starting game");
        self.announce()?;
        self.console.show(&render_board(&self.board))?;

        let outcome = loop {
            if let Some(outcome) = Outcome::of(&self.board) {
                break outcome;
            }
            self.play_turn()?;
            self.console.show(&render_board(&self.board))?;
        };

        info!(%outcome, "Game over");
        self.console.show(&outcome.to_string())?;
        Ok(outcome)
    }

    fn announce(&mut self) -> Result<()> {
        self.console.show(&format!(
            "Player is {}, Computer is {}",
            self.human.mark(),
            self.computer.mark()
        ))?;
        let script = self.computer.script();
        if !script.is_empty() {
            let line = format!(
                "Computer will make the following moves: {}",
                script.join(", ")
            );
            self.console.show(&line)?;
        }
        Ok(())
    }

    /// Asks the side to move for a move, applies it and hands over the turn.
    #[instrument(skip(self), fields(turn = ?self.turn))]
    fn play_turn(&mut self) -> Result<()> {
        let player = match self.turn {
            Turn::Player => &mut self.human,
            Turn::Opponent => &mut self.computer,
        };

        let coordinate = player.next_move(&self.board, &mut self.console)?;
        rules::check_at(&self.board, coordinate)
            .with_context(|| format!("{} returned an illegal move", player.name()))?;

        debug!(player = player.name(), %coordinate, "Move applied");
        self.board = rules::place_at(&self.board, player.mark(), coordinate);
        self.turn = self.turn.next();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::input::ReplayConsole;

    #[test]
    fn test_x_moves_first() {
        assert_eq!(Turn::first(Mark::X), Turn::Player);
        assert_eq!(Turn::first(Mark::O), Turn::Opponent);
        assert_eq!(Turn::Player.next(), Turn::Opponent);
    }

    #[test]
    fn test_finished_board_skips_the_loop() {
        let config = GameConfig::new("XXXOO    ", Mark::X, Mark::O, Vec::new()).unwrap();
        let mut game =
            Orchestrator::from_config(&config, ReplayConsole::default(), |_: usize| 0).unwrap();
        assert_eq!(game.run().unwrap(), Outcome::Winner(Mark::X));
        assert_eq!(
            game.console().transcript().last().map(String::as_str),
            Some("X won the game!")
        );
    }

    #[test]
    fn test_computer_opens_when_it_holds_x() {
        let config = GameConfig::new("         ", Mark::O, Mark::X, vec!["B2".into()]).unwrap();
        let console = ReplayConsole::new([""]);
        let mut game = Orchestrator::from_config(&config, console, |_: usize| 0).unwrap();
        assert_eq!(game.turn(), Turn::Opponent);

        // One computer move, then the human prompt finds no answer.
        assert!(game.run().is_err());
        assert_eq!(game.board().to_string(), "    X    ");
    }

    struct Cheater;

    impl Player for Cheater {
        fn next_move(
            &mut self,
            _board: &Board,
            _console: &mut dyn Console,
        ) -> Result<strictly_tictactoe::Coordinate> {
            Ok(strictly_tictactoe::Coordinate::new(0, 0))
        }

        fn mark(&self) -> Mark {
            Mark::O
        }

        fn name(&self) -> &str {
            "Cheater"
        }
    }

    #[test]
    fn test_illegal_move_from_a_player_is_an_error() {
        let board = Board::parse("X        ").unwrap();
        let human = HumanPlayer::new("Player", Mark::X);
        let mut game = Orchestrator::new(
            board,
            Box::new(human),
            Box::new(Cheater),
            ReplayConsole::default(),
            Turn::Opponent,
        );
        let err = game.run().unwrap_err();
        assert!(err.to_string().contains("Cheater returned an illegal move"));
        assert_eq!(game.board().to_string(), "X        ");
    }

    #[test]
    fn test_banner_lists_the_computer_script() {
        let board = Board::parse("XX OO    ").unwrap();
        let human = HumanPlayer::new("Player", Mark::X);
        let computer =
            ComputerPlayer::new("Computer", Mark::O, vec!["C1".into(), "C2".into()], |_: usize| 0);
        let mut game = Orchestrator::new(
            board,
            Box::new(human),
            Box::new(computer),
            ReplayConsole::new(["A3"]),
            Turn::Player,
        );

        assert_eq!(game.run().unwrap(), Outcome::Winner(Mark::X));
        let transcript = game.console().transcript();
        assert_eq!(transcript[0], "Player is X, Computer is O");
        assert_eq!(transcript[1], "Computer will make the following moves: C1, C2");
    }

    #[test]
    fn test_banner_omits_an_empty_script() {
        let board = Board::parse("XX OO    ").unwrap();
        let human = HumanPlayer::new("Player", Mark::X);
        let mut game = Orchestrator::new(
            board,
            Box::new(human),
            Box::new(Cheater),
            ReplayConsole::new(["A3"]),
            Turn::Player,
        );

        game.run().unwrap();
        let transcript = game.console().transcript();
        assert!(!transcript.iter().any(|l| l.starts_with("Computer will make")));
    }
}
