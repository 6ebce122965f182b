//! Pure tic-tac-toe game logic.
//!
//! - [`Board`] holds nine [`Square`]s in row-major order.
//! - [`GameState`] owns the board, two [`Player`]s and the turn.
//! - [`rules`] has the win and draw checks as free functions.
//!
//! No I/O happens here; the console front end lives in `console_tictactoe`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod position;
pub mod rules;
mod types;

pub use game::{GameState, PlaceError};
pub use position::Position;
pub use types::{Board, EMPTY_GLYPH, GameStatus, Mark, Player, Square};
