//! Strictly Console - tic-tac-toe in the terminal.
//!
//! A human plays against the computer on a square board of any size. The
//! computer plays the moves scripted in its configuration first, then
//! random legal moves.
//!
//! # Architecture
//!
//! - **Rules**: pure board logic from [`strictly_tictactoe`]
//! - **Config**: starting board, marks and scripted moves ([`GameConfig`])
//! - **Console**: prompts, rendering, players and the turn loop ([`Orchestrator`])
//!
//! # Example
//!
//! ```
//! use strictly_console::{GameConfig, Orchestrator, ReplayConsole};
//! use strictly_tictactoe::{Mark, Outcome};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::new("XX OO    ", Mark::X, Mark::O, Vec::new())?;
//! let console = ReplayConsole::new(["A3"]);
//! let mut game = Orchestrator::from_config(&config, console, |_: usize| 0)?;
//! assert_eq!(game.run()?, Outcome::Winner(Mark::X));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
pub mod console;

pub use cli::Cli;
pub use config::{ConfigError, DEFAULT_DIMENSION, GameConfig};
pub use console::{
    ComputerPlayer, Console, GameRng, HumanPlayer, Orchestrator, Player, RandomSource,
    ReplayConsole, StdConsole, Turn, render_board,
};
