//! Pseudo-legal destination generation, dispatched on piece kind.
//!
//! Results respect movement patterns and blocking but ignore whether the
//! mover's own king ends up in check.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_destinations;
use crate::moves::king_moves::king_destinations;
use crate::moves::knight_moves::knight_destinations;
use crate::moves::pawn_moves::pawn_destinations;
use crate::moves::queen_moves::queen_destinations;
use crate::moves::rook_moves::rook_destinations;

/// Destination generator for one piece kind.
pub type MovementRule = fn(Color, Square, &Board) -> Vec<Square>;

#[inline]
pub fn movement_rule(kind: PieceKind) -> MovementRule {
    match kind {
        PieceKind::Pawn => pawn_destinations,
        PieceKind::Knight => knight_destinations,
        PieceKind::Bishop => bishop_destinations,
        PieceKind::Rook => rook_destinations,
        PieceKind::Queen => queen_destinations,
        PieceKind::King => king_destinations,
    }
}

/// Pseudo-legal destinations for `piece` standing on `origin`. Order is
/// unspecified and no square appears twice.
#[inline]
pub fn pseudo_legal_destinations(piece: Piece, origin: Square, board: &Board) -> Vec<Square> {
    movement_rule(piece.kind)(piece.color, origin, board)
}

/// Pseudo-legal destinations for whatever stands on `origin`; empty if the
/// square is empty.
pub fn pseudo_legal_destinations_from(origin: Square, board: &Board) -> Vec<Square> {
    match board.piece_at(origin) {
        Some(piece) => pseudo_legal_destinations(piece, origin, board),
        None => Vec::new(),
    }
}
