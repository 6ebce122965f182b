//! Command-line interface for console_tictactoe.

use clap::Parser;

/// Console Tic-Tac-Toe - two players, one keyboard
#[derive(Parser, Debug)]
#[command(name = "console_tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {}
