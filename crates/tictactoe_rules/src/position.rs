//! Typed board positions.

use super::types::Board;
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for this position.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from the 1-based cell number players type in.
    #[instrument]
    pub fn from_choice(choice: i32) -> Option<Self> {
        if !(1..=9).contains(&choice) {
            return None;
        }
        Self::from_index((choice - 1) as usize)
    }

    /// The 1-based cell number shown to players.
    pub fn to_choice(self) -> i32 {
        self.to_index() as i32 + 1
    }

    /// Positions still empty on the board.
    #[instrument(skip(board))]
    pub fn open_positions(board: &Board) -> Vec<Position> {
        Self::iter().filter(|pos| board.is_empty(*pos)).collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Square};

    #[test]
    fn test_index_matches_row_major() {
        for (idx, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), idx);
            assert_eq!(Position::from_index(idx), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_choice_is_one_based() {
        assert_eq!(Position::from_choice(1), Some(Position::TopLeft));
        assert_eq!(Position::from_choice(5), Some(Position::Center));
        assert_eq!(Position::from_choice(9), Some(Position::BottomRight));
        assert_eq!(Position::BottomRight.to_choice(), 9);
    }

    #[test]
    fn test_choice_out_of_range() {
        assert_eq!(Position::from_choice(0), None);
        assert_eq!(Position::from_choice(10), None);
        assert_eq!(Position::from_choice(-3), None);
    }

    #[test]
    fn test_open_positions_skips_taken() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Mark::X));
        let open = Position::open_positions(&board);
        assert_eq!(open.len(), 8);
        assert!(!open.contains(&Position::Center));
    }
}
