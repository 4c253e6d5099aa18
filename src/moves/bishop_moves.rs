use crate::game_state::chess_types::*;
use crate::moves::move_patterns::{ray_targets, DIAGONAL_DIRECTIONS};

#[inline]
pub fn bishop_destinations(color: Color, origin: Square, board: &Board) -> Vec<Square> {
    ray_targets(color, origin, board, &DIAGONAL_DIRECTIONS)
}
