//! Parsing of what players type at the prompts.

use derive_more::{Display, Error};
use tictactoe_rules::Position;
use tracing::instrument;

/// Why a line could not be taken as a cell choice.
///
/// The display text is what the player is shown before being asked again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ChoiceError {
    /// The line was not an integer.
    #[display("You did not enter a number please try again later")]
    NotANumber,
    /// The integer was outside 1-9.
    #[display("You did not enter a correct number try again!")]
    OutOfRange(#[error(not(source))] i32),
}

/// Parses a 1-based cell number into a board position.
///
/// # Errors
///
/// [`ChoiceError::NotANumber`] if the trimmed line is not a 32-bit integer,
/// [`ChoiceError::OutOfRange`] if it is not in 1-9.
#[instrument]
pub fn parse_choice(line: &str) -> Result<Position, ChoiceError> {
    let choice: i32 = line.trim().parse().map_err(|_| ChoiceError::NotANumber)?;
    Position::from_choice(choice).ok_or(ChoiceError::OutOfRange(choice))
}

/// True only for exactly `y` or `Y`.
#[instrument]
pub fn wants_replay(line: &str) -> bool {
    matches!(line.trim_end_matches(['\r', '\n']), "y" | "Y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_choices() {
        assert_eq!(parse_choice("1"), Ok(Position::TopLeft));
        assert_eq!(parse_choice("5\n"), Ok(Position::Center));
        assert_eq!(parse_choice("  9 \r\n"), Ok(Position::BottomRight));
    }

    #[test]
    fn test_not_a_number() {
        assert_eq!(parse_choice("abc"), Err(ChoiceError::NotANumber));
        assert_eq!(parse_choice(""), Err(ChoiceError::NotANumber));
        assert_eq!(parse_choice("4.5"), Err(ChoiceError::NotANumber));
        assert_eq!(parse_choice("99999999999"), Err(ChoiceError::NotANumber));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(parse_choice("0"), Err(ChoiceError::OutOfRange(0)));
        assert_eq!(parse_choice("10"), Err(ChoiceError::OutOfRange(10)));
        assert_eq!(parse_choice("-2"), Err(ChoiceError::OutOfRange(-2)));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ChoiceError::NotANumber.to_string(),
            "You did not enter a number please try again later"
        );
        assert_eq!(
            ChoiceError::OutOfRange(12).to_string(),
            "You did not enter a correct number try again!"
        );
    }

    #[test]
    fn test_replay_answer() {
        assert!(wants_replay("y\n"));
        assert!(wants_replay("Y\r\n"));
        assert!(!wants_replay("yes\n"));
        assert!(!wants_replay("n\n"));
        assert!(!wants_replay(" y\n"));
        assert!(!wants_replay(""));
    }
}
