//! Console Tic-Tac-Toe - two players, one terminal.
//!
//! # Architecture
//!
//! - **Rules**: board, turns, win and draw detection (`tictactoe_rules`)
//! - **Input**: turning typed lines into board positions
//! - **Session**: the prompt/place/render loop with replay
//!
//! # Example
//!
//! ```no_run
//! use console_tictactoe::Session;
//!
//! # fn example() -> anyhow::Result<()> {
//! let stdin = std::io::stdin();
//! let mut session = Session::new(stdin.lock(), std::io::stdout());
//! let summary = session.run()?;
//! println!("{} games played", summary.games_played());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod input;
mod session;

pub use cli::Cli;
pub use input::{ChoiceError, parse_choice, wants_replay};
pub use session::{DRAW_MESSAGE, LOCATION_TAKEN, PLAY_AGAIN_PROMPT, Session, Summary};

// Game types re-exported for callers that only depend on this crate
pub use tictactoe_rules::{GameState, GameStatus, Mark, Player, Position};
