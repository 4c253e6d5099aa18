use crate::game_state::chess_types::*;
use crate::moves::move_patterns::{ray_targets, ORTHOGONAL_DIRECTIONS};

#[inline]
pub fn rook_destinations(color: Color, origin: Square, board: &Board) -> Vec<Square> {
    ray_targets(color, origin, board, &ORTHOGONAL_DIRECTIONS)
}
