//! Game state holder: board, players and whose turn it is.

use crate::rules::{self, is_full};
use crate::{Board, GameStatus, Mark, Player, Position, Square};
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Errors that can occur when placing a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// Square is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),
}

/// One game of tic-tac-toe.
///
/// Built fresh for every game; a finished game is replaced with a new
/// instance rather than reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    players: [Player; 2],
    current: usize,
    history: Vec<Position>,
}

impl GameState {
    /// Creates a new game with `Player 1` (X) to move against `Player 2` (O).
    #[instrument]
    pub fn new() -> Self {
        Self::with_players(
            Player::new(Mark::X, "Player 1"),
            Player::new(Mark::O, "Player 2"),
        )
    }

    /// Creates a new game between two players; `first` moves first.
    #[instrument(skip(first, second), fields(first = %first.name(), second = %second.name()))]
    pub fn with_players(first: Player, second: Player) -> Self {
        Self {
            board: Board::new(),
            players: [first, second],
            current: 0,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both players in turn order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Index (0 or 1) of the player to move.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The player to move.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Positions accepted so far, oldest first.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Places the current player's mark at `pos` and passes the turn.
    ///
    /// Returns the mark placed.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::SquareOccupied`] if `pos` is taken; nothing
    /// changes in that case and the same player stays on turn.
    #[instrument(skip(self), fields(player = %self.current_player().name()))]
    pub fn place_move(&mut self, pos: Position) -> Result<Mark, PlaceError> {
        if !self.board.is_empty(pos) {
            debug!(%pos, "Rejected move on occupied square");
            return Err(PlaceError::SquareOccupied(pos));
        }

        let mark = self.current_player().mark();
        self.board.set(pos, Square::Occupied(mark));
        self.history.push(pos);
        self.toggle_turn();
        debug!(%pos, %mark, "Move placed");
        Ok(mark)
    }

    fn toggle_turn(&mut self) {
        self.current = 1 - self.current;
    }

    /// True if `mark` holds any winning line.
    pub fn check_winner(&self, mark: Mark) -> bool {
        rules::has_line(&self.board, mark)
    }

    /// The winning player, checking the first player before the second.
    #[instrument(skip(self))]
    pub fn winner(&self) -> Option<&Player> {
        self.players
            .iter()
            .find(|player| self.check_winner(player.mark()))
    }

    /// True once no empty square remains.
    ///
    /// Does not look at lines; check [`winner`](Self::winner) first.
    pub fn check_draw(&self) -> bool {
        is_full(&self.board)
    }

    /// Winner first, then draw.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        if let Some(player) = self.winner() {
            GameStatus::Won(player.mark())
        } else if self.check_draw() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Renders the board as three `c|c|c` lines.
    pub fn render(&self) -> String {
        self.board.render()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
