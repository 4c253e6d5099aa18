//! Shared target walkers for the per-piece movement rules.
//!
//! Leapers (knight, king) test a fixed list of offsets; sliders (bishop,
//! rook, queen) trace rays that stop at the first occupied square, which is
//! included only when it holds an enemy piece.

use crate::game_state::chess_types::*;

pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Every on-board `origin + offset` not occupied by a friendly piece.
pub fn step_targets(color: Color, origin: Square, board: &Board, offsets: &[(i8, i8)]) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| origin.offset(d_row, d_col))
        .filter(|&target| !board.is_occupied_by(target, color))
        .collect()
}

/// Union of the rays from `origin` along each of `directions`.
pub fn ray_targets(color: Color, origin: Square, board: &Board, directions: &[(i8, i8)]) -> Vec<Square> {
    let mut targets = Vec::with_capacity(14);
    for &(d_row, d_col) in directions {
        trace_ray(color, origin, board, d_row, d_col, &mut targets);
    }
    targets
}

fn trace_ray(color: Color, origin: Square, board: &Board, d_row: i8, d_col: i8, out: &mut Vec<Square>) {
    let mut current = origin;

    while let Some(target) = current.offset(d_row, d_col) {
        match board.piece_at(target) {
            None => out.push(target),
            Some(blocker) => {
                if blocker.color != color {
                    out.push(target);
                }
                break;
            }
        }
        current = target;
    }
}
