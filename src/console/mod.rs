//! Console front end: prompts, rendering, players and the game loop.

pub mod input;
pub mod orchestrator;
pub mod players;
pub mod random;
pub mod ui;

pub use input::{Console, ReplayConsole, StdConsole};
pub use orchestrator::{Orchestrator, Turn};
pub use players::{ComputerPlayer, HumanPlayer, Player};
pub use random::{GameRng, RandomSource};
pub use ui::render_board;
