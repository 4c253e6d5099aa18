//! Checkmate and stalemate detection.
//!
//! Nothing is stored: every query re-derives the answer from the current
//! position by enumerating the side's legal moves.

use std::fmt;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;

/// Outcome of the position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEndStatus {
    InProgress,
    /// Carries the side that has been mated.
    Checkmate(Color),
    Stalemate,
}

impl GameEndStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, GameEndStatus::InProgress)
    }

    /// PGN result token.
    pub fn result_token(self) -> &'static str {
        match self {
            GameEndStatus::InProgress => "*",
            GameEndStatus::Checkmate(Color::Dark) => "1-0",
            GameEndStatus::Checkmate(Color::Light) => "0-1",
            GameEndStatus::Stalemate => "1/2-1/2",
        }
    }
}

impl fmt::Display for GameEndStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEndStatus::InProgress => write!(f, "game in progress"),
            GameEndStatus::Checkmate(mated) => {
                write!(f, "checkmate, {} wins", mated.opposite())
            }
            GameEndStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

pub fn is_checkmate(color: Color, game_state: &GameState) -> bool {
    is_in_check(color, game_state) && !has_any_legal_move(color, game_state)
}

pub fn is_stalemate(color: Color, game_state: &GameState) -> bool {
    !is_in_check(color, game_state) && !has_any_legal_move(color, game_state)
}

/// Status for whoever is to move.
pub fn game_end_status(game_state: &GameState) -> GameEndStatus {
    let color = game_state.side_to_move();
    if has_any_legal_move(color, game_state) {
        GameEndStatus::InProgress
    } else if is_in_check(color, game_state) {
        GameEndStatus::Checkmate(color)
    } else {
        GameEndStatus::Stalemate
    }
}
