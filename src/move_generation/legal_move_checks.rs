//! Attack and check detection.
//!
//! Attacks are computed from pseudo-legal reach only, never from full
//! legality, so nothing here can recurse back into the legality filter.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::piece_movement::pseudo_legal_destinations;

/// True iff some piece of `by_color` could move to `square` as a capture.
///
/// When `square` does not already hold a piece of the other side, it is
/// probed as if it did, so pawns attack their diagonals and never their
/// push squares.
pub fn is_square_attacked(square: Square, by_color: Color, board: &Board) -> bool {
    let probe = capture_probe(square, by_color, board);
    let attacked = probe
        .pieces_of(by_color)
        .any(|(origin, piece)| reaches(piece, origin, square, &probe));
    attacked
}

/// Every `by_color` piece attacking `square`, with where it stands.
pub fn attackers_to_square(square: Square, by_color: Color, board: &Board) -> Vec<(Square, Piece)> {
    let probe = capture_probe(square, by_color, board);
    probe
        .pieces_of(by_color)
        .filter(|&(origin, piece)| reaches(piece, origin, square, &probe))
        .collect()
}

/// Whether `color`'s king is attacked, using the cached king square.
#[inline]
pub fn is_in_check(color: Color, game_state: &GameState) -> bool {
    is_square_attacked(game_state.king_square(color), color.opposite(), game_state.board())
}

/// The pieces currently giving check to `color`.
pub fn checking_pieces(color: Color, game_state: &GameState) -> Vec<(Square, Piece)> {
    attackers_to_square(game_state.king_square(color), color.opposite(), game_state.board())
}

#[inline]
fn reaches(piece: Piece, origin: Square, target: Square, board: &Board) -> bool {
    pseudo_legal_destinations(piece, origin, board).contains(&target)
}

fn capture_probe(square: Square, by_color: Color, board: &Board) -> Board {
    let mut probe = *board;
    match board.piece_at(square) {
        Some(piece) if piece.color != by_color => {}
        _ => {
            probe.set(square, Some(Piece::new(PieceKind::Pawn, by_color.opposite())));
        }
    }
    probe
}
