//! Pawn pushes and captures.
//!
//! One step forward onto an empty square, two from the home row when both
//! squares are empty, and one diagonal step forward onto an enemy piece.
//! No en-passant and no promotion.

use crate::game_state::chess_rules::{DARK_PAWN_START_ROW, LIGHT_PAWN_START_ROW};
use crate::game_state::chess_types::*;

pub fn pawn_destinations(color: Color, origin: Square, board: &Board) -> Vec<Square> {
    let mut targets = Vec::with_capacity(4);
    let forward = color.forward();

    if let Some(single) = origin.offset(forward, 0) {
        if board.is_empty(single) {
            targets.push(single);

            if origin.row() == pawn_start_row(color) {
                if let Some(double) = single.offset(forward, 0) {
                    if board.is_empty(double) {
                        targets.push(double);
                    }
                }
            }
        }
    }

    for capture in pawn_capture_squares(color, origin) {
        if board.is_occupied_by(capture, color.opposite()) {
            targets.push(capture);
        }
    }

    targets
}

/// The (up to two) forward diagonals a pawn of `color` on `origin` strikes.
pub fn pawn_capture_squares(color: Color, origin: Square) -> impl Iterator<Item = Square> {
    let forward = color.forward();
    [-1i8, 1]
        .into_iter()
        .filter_map(move |d_col| origin.offset(forward, d_col))
}

#[inline]
const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::Light => LIGHT_PAWN_START_ROW,
        Color::Dark => DARK_PAWN_START_ROW,
    }
}
