//! Legality filter.
//!
//! A move is legal when it is pseudo-legal for the piece on the origin and,
//! played out on an independent copy of the game state, does not leave the
//! mover's king attacked. The copy is checked exactly once per candidate;
//! the check itself only looks at pseudo-legal reach.

use crate::errors::MoveError;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::moves::piece_movement::pseudo_legal_destinations;

/// Full validation of `from -> to` for the side to move, naming the first
/// rule the move breaks.
pub fn validate_move(from: Square, to: Square, game_state: &GameState) -> Result<(), MoveError> {
    let piece = game_state
        .board()
        .piece_at(from)
        .ok_or(MoveError::NoPieceAtOrigin(from))?;

    if piece.color != game_state.side_to_move() {
        return Err(MoveError::WrongSideToMove {
            square: from,
            side_to_move: game_state.side_to_move(),
        });
    }

    if !pseudo_legal_destinations(piece, from, game_state.board()).contains(&to) {
        return Err(MoveError::IllegalDestination { from, to });
    }

    if !keeps_own_king_safe(piece.color, from, to, game_state) {
        return Err(MoveError::IllegalDestination { from, to });
    }

    Ok(())
}

#[inline]
pub fn is_legal_move(from: Square, to: Square, game_state: &GameState) -> bool {
    validate_move(from, to, game_state).is_ok()
}

/// Legal destinations for the piece on `square`, judged for that piece's own
/// color whether or not it is that side's turn. Empty for an empty square.
pub fn generate_legal_moves(square: Square, game_state: &GameState) -> Vec<Square> {
    let Some(piece) = game_state.board().piece_at(square) else {
        return Vec::new();
    };

    pseudo_legal_destinations(piece, square, game_state.board())
        .into_iter()
        .filter(|&to| keeps_own_king_safe(piece.color, square, to, game_state))
        .collect()
}

fn keeps_own_king_safe(mover: Color, from: Square, to: Square, game_state: &GameState) -> bool {
    match game_state.simulate(from, to) {
        Some(next) => !is_in_check(mover, &next),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::parse_square;

    fn sq(name: &str) -> Square {
        parse_square(name).expect("test square should parse")
    }

    fn game(fen: &str) -> GameState {
        GameState::from_fen(fen).expect("test FEN should parse")
    }

    #[test]
    fn opening_moves() {
        let game = GameState::new_game();
        assert!(is_legal_move(sq("e2"), sq("e4"), &game));
        assert!(is_legal_move(sq("g1"), sq("f3"), &game));
        assert_eq!(
            validate_move(sq("e2"), sq("e5"), &game),
            Err(MoveError::IllegalDestination { from: sq("e2"), to: sq("e5") })
        );
        assert_eq!(
            validate_move(sq("e4"), sq("e5"), &game),
            Err(MoveError::NoPieceAtOrigin(sq("e4")))
        );
        assert_eq!(
            validate_move(sq("e7"), sq("e5"), &game),
            Err(MoveError::WrongSideToMove { square: sq("e7"), side_to_move: Color::Light })
        );
        assert_eq!(
            validate_move(sq("a1"), sq("a2"), &game),
            Err(MoveError::IllegalDestination { from: sq("a1"), to: sq("a2") })
        );
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        // Bishop on e2 is pinned against the king by the rook on e8.
        let game = game("4r1k1/8/8/8/8/8/4B3/4K3 w");
        assert!(!is_legal_move(sq("e2"), sq("d3"), &game));
        assert!(generate_legal_moves(sq("e2"), &game).is_empty());
        assert!(is_legal_move(sq("e1"), sq("d1"), &game));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let game = game("4k3/8/8/8/8/8/r7/4K3 w");
        let king_moves = generate_legal_moves(sq("e1"), &game);
        assert_eq!(king_moves.len(), 2);
        assert!(king_moves.contains(&sq("d1")));
        assert!(king_moves.contains(&sq("f1")));
    }

    #[test]
    fn king_cannot_capture_defended_piece() {
        let game = game("4k3/8/8/8/8/8/3q4/2b1K3 w");
        assert!(!is_legal_move(sq("e1"), sq("d2"), &game));
    }

    #[test]
    fn must_answer_check() {
        let game = game("4k3/8/8/8/8/8/1N1P4/r3K3 w");
        // Only moves that deal with the rook on a1 are legal.
        assert!(!is_legal_move(sq("d2"), sq("d3"), &game));
        assert!(is_legal_move(sq("e1"), sq("e2"), &game));
        assert_eq!(generate_legal_moves(sq("b2"), &game), vec![sq("d1")]);
    }

    #[test]
    fn legal_moves_can_be_listed_for_the_waiting_side() {
        let game = GameState::new_game();
        assert_eq!(generate_legal_moves(sq("b8"), &game).len(), 2);
        assert!(generate_legal_moves(sq("e4"), &game).is_empty());
    }

    #[test]
    fn validation_never_mutates_state() {
        let game = game("4r1k1/8/8/8/8/8/4B3/4K3 w");
        let before = game.clone();
        let _ = generate_legal_moves(sq("e2"), &game);
        let _ = is_legal_move(sq("e1"), sq("d1"), &game);
        assert_eq!(game, before);
    }
}
