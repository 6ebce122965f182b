//! Interactive game loop between two players sharing one console.

use crate::input::{parse_choice, wants_replay};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictactoe_rules::{GameState, GameStatus, Position};
use tracing::{debug, info, instrument};

/// Printed when a player picks a square that is already taken.
pub const LOCATION_TAKEN: &str = "Location is taken try again!";
/// Printed when the board fills up with no winner.
pub const DRAW_MESSAGE: &str = "It's a draw!";
/// Asked after every finished game.
pub const PLAY_AGAIN_PROMPT: &str = "Play again? ";

/// Results of the games finished in one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    results: Vec<GameStatus>,
}

impl Summary {
    /// Final status of each finished game, in order.
    pub fn results(&self) -> &[GameStatus] {
        &self.results
    }

    /// Number of games played to the end.
    pub fn games_played(&self) -> usize {
        self.results.len()
    }
}

/// Drives games over a line-oriented input and a text output.
///
/// Closing the input at any prompt ends the session; a game cut short that
/// way is not counted in the [`Summary`].
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading moves from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the input and output streams.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Plays games until a player declines to play again.
    ///
    /// # Errors
    ///
    /// Fails only if reading input or writing output fails.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Summary> {
        let mut summary = Summary::default();
        let mut game = GameState::new();

        loop {
            let Some(status) = self.play_round(&mut game)? else {
                info!("Input closed mid-game");
                break;
            };
            summary.results.push(status);
            info!(?status, games = summary.games_played(), "Game finished");

            let Some(answer) = self.prompt(PLAY_AGAIN_PROMPT)? else {
                break;
            };
            if !wants_replay(&answer) {
                break;
            }

            debug!("Replacing finished game with a new one");
            game = GameState::new();
        }

        info!(games = summary.games_played(), "Session over");
        Ok(summary)
    }

    /// Plays `game` until it is won or drawn.
    ///
    /// Returns `None` if input runs out first.
    #[instrument(skip_all)]
    pub fn play_round(&mut self, game: &mut GameState) -> Result<Option<GameStatus>> {
        self.show_board(game)?;

        loop {
            let Some(pos) = self.read_choice(game)? else {
                return Ok(None);
            };

            if let Err(err) = game.place_move(pos) {
                debug!(%err, "Move rejected");
                self.say(LOCATION_TAKEN)?;
            }
            self.show_board(game)?;

            if let Some(winner) = game.winner() {
                let message = format!("{} wins!", winner.name());
                let status = GameStatus::Won(winner.mark());
                self.say(&message)?;
                return Ok(Some(status));
            }
            if game.check_draw() {
                self.say(DRAW_MESSAGE)?;
                return Ok(Some(GameStatus::Draw));
            }
        }
    }

    /// Asks the current player for a cell until they give a valid one.
    #[instrument(skip_all, fields(player = %game.current_player().name()))]
    fn read_choice(&mut self, game: &GameState) -> Result<Option<Position>> {
        let prompt = format!("{} enter your choice: ", game.current_player().name());
        loop {
            let Some(line) = self.prompt(&prompt)? else {
                return Ok(None);
            };
            match parse_choice(&line) {
                Ok(pos) => return Ok(Some(pos)),
                Err(err) => {
                    debug!(input = %line.trim_end(), ?err, "Invalid cell choice");
                    self.say(&err.to_string())?;
                }
            }
        }
    }

    fn show_board(&mut self, game: &GameState) -> Result<()> {
        let board = game.render();
        self.say(&board)
    }

    /// Writes `message` on its own line and reads one line back.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        self.say(message)?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        Ok((read > 0).then_some(line))
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}").context("Failed to write output")?;
        self.output.flush().context("Failed to flush output")
    }
}
