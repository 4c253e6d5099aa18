//! Reading typed moves and writing moves in long algebraic form.
//!
//! Accepts `"e2 e4"` and `"e2e4"`. The returned halves are only split here;
//! whether they name real squares is decided when the move is attempted.

use crate::errors::MoveCommandError;
use crate::game_state::chess_types::Square;

pub fn parse_move_command(command: &str) -> Result<(String, String), MoveCommandError> {
    let trimmed = command.trim();
    if trimmed.is_empty() {
        return Err(MoveCommandError::Empty);
    }

    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    match parts.as_slice() {
        [from, to] => Ok(((*from).to_owned(), (*to).to_owned())),
        [joined] if joined.len() == 4 && joined.is_ascii() => {
            Ok((joined[0..2].to_owned(), joined[2..4].to_owned()))
        }
        _ => Err(MoveCommandError::Unrecognized(trimmed.to_owned())),
    }
}

#[inline]
pub fn to_long_algebraic(from: Square, to: Square) -> String {
    format!("{from}{to}")
}

#[cfg(test)]
mod tests {
    use super::{parse_move_command, to_long_algebraic};
    use crate::errors::MoveCommandError;
    use crate::utils::algebraic::parse_square;

    #[test]
    fn accepts_both_spellings() {
        let expected = ("e2".to_owned(), "e4".to_owned());
        assert_eq!(parse_move_command("e2 e4"), Ok(expected.clone()));
        assert_eq!(parse_move_command("  e2\te4 \n"), Ok(expected.clone()));
        assert_eq!(parse_move_command("e2e4"), Ok(expected));
    }

    #[test]
    fn passes_bad_squares_through_for_the_engine_to_judge() {
        assert_eq!(
            parse_move_command("z9 e4"),
            Ok(("z9".to_owned(), "e4".to_owned()))
        );
    }

    #[test]
    fn rejects_unreadable_commands() {
        assert_eq!(parse_move_command("   "), Err(MoveCommandError::Empty));
        assert!(matches!(
            parse_move_command("e2 e4 e5"),
            Err(MoveCommandError::Unrecognized(_))
        ));
        assert!(matches!(
            parse_move_command("e2e"),
            Err(MoveCommandError::Unrecognized(_))
        ));
    }

    #[test]
    fn writes_long_algebraic() {
        let from = parse_square("g1").expect("g1 should parse");
        let to = parse_square("f3").expect("f3 should parse");
        assert_eq!(to_long_algebraic(from, to), "g1f3");
    }
}
