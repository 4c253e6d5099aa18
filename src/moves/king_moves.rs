//! King step targets: the eight adjacent squares. Castling is not played.

use crate::game_state::chess_types::*;
use crate::moves::move_patterns::step_targets;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

#[inline]
pub fn king_destinations(color: Color, origin: Square, board: &Board) -> Vec<Square> {
    step_targets(color, origin, board, &KING_OFFSETS)
}
