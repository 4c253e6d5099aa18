//! Side-wide legal move enumeration.
//!
//! Walks every square holding a piece of the requested color (found by
//! scanning the board) and collects its filtered destinations.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_filter::generate_legal_moves;

/// Every legal `(from, to)` pair for `color`.
pub fn all_legal_moves(color: Color, game_state: &GameState) -> Vec<(Square, Square)> {
    let mut legal = Vec::with_capacity(64);
    for (from, _) in game_state.board().pieces_of(color) {
        legal.extend(generate_legal_moves(from, game_state).into_iter().map(|to| (from, to)));
    }
    legal
}

/// Cheaper than `all_legal_moves(..).is_empty()`: stops at the first piece
/// that can move.
pub fn has_any_legal_move(color: Color, game_state: &GameState) -> bool {
    game_state
        .board()
        .pieces_of(color)
        .any(|(from, _)| !generate_legal_moves(from, game_state).is_empty())
}
