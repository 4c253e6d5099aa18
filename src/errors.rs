//! Error types for the rules engine.
//!
//! Every failure here is recoverable: a rejected move or a malformed input
//! string never disturbs live game state. `MoveError` is the only error the
//! move-application boundary (`game_api::attempt_move`) reports; the others
//! belong to the text utilities around the core.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

/// Why a requested move was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The string is not a lowercase file `a`-`h` followed by a rank `1`-`8`.
    #[error("invalid square {0:?}: expected a file a-h followed by a rank 1-8")]
    InvalidSquareFormat(String),

    #[error("there is no piece on {0}")]
    NoPieceAtOrigin(Square),

    #[error("the piece on {square} does not belong to {side_to_move}, who is to move")]
    WrongSideToMove { square: Square, side_to_move: Color },

    /// Covers movement pattern, blocking, capture and self-check violations.
    #[error("the piece on {from} cannot legally move to {to}")]
    IllegalDestination { from: Square, to: Square },
}

/// Failures while reading a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("FEN is missing the {0} field")]
    MissingField(&'static str),

    #[error("FEN has unexpected trailing fields")]
    TrailingFields,

    #[error("board layout must contain 8 ranks, found {0}")]
    WrongRankCount(usize),

    #[error("rank {rank} does not describe exactly 8 files")]
    BadRankWidth { rank: usize },

    #[error("invalid character {0:?} in board layout")]
    InvalidPieceChar(char),

    #[error("invalid {field} field: {value:?}")]
    InvalidField { field: &'static str, value: String },

    #[error("{color} must have exactly one king, found {count}")]
    KingCount { color: Color, count: usize },
}

/// Failures while splitting a typed move command into two square names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveCommandError {
    #[error("empty move command")]
    Empty,

    #[error("could not read a move from {0:?}; try something like \"e2 e4\"")]
    Unrecognized(String),
}

/// Failures while exporting a move log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PgnError {
    #[error("move {ply} ({from}{to}) does not replay from the initial position: {source}")]
    Replay {
        ply: usize,
        from: Square,
        to: Square,
        #[source]
        source: MoveError,
    },
}
