//! Entry points for a front end (console, UI, network adapter).
//!
//! A front end creates a game with [`new_game`], feeds square names to
//! [`attempt_move`], asks [`query_game_end`] after each ply and shows
//! [`render`]. These calls are the only way it touches the engine.

use crate::errors::MoveError;
use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::move_generation::game_end::game_end_status;
use crate::move_generation::legal_move_filter::validate_move;
use crate::utils::algebraic::parse_square;

pub use crate::move_generation::game_end::GameEndStatus;
pub use crate::utils::render_game_state::render;

/// Standard initial position, White to move.
#[inline]
pub fn new_game() -> GameState {
    GameState::new_game()
}

/// Parse, validate and play `from_square -> to_square`.
///
/// Returns the successor state. On any error the caller's state is left
/// exactly as it was.
pub fn attempt_move(
    game_state: &GameState,
    from_square: &str,
    to_square: &str,
) -> Result<GameState, MoveError> {
    let (from, to) = match checked_squares(game_state, from_square, to_square) {
        Ok(squares) => squares,
        Err(err) => {
            log::debug!("rejected {from_square}{to_square}: {err}");
            return Err(err);
        }
    };

    let mut next = game_state.clone();
    next.apply_move(from, to).ok_or(MoveError::NoPieceAtOrigin(from))?;
    Ok(next)
}

fn checked_squares(
    game_state: &GameState,
    from_square: &str,
    to_square: &str,
) -> Result<(Square, Square), MoveError> {
    let from = parse_square(from_square)?;
    let to = parse_square(to_square)?;
    validate_move(from, to, game_state)?;
    Ok((from, to))
}

/// Whether the side to move has been mated or stalemated.
pub fn query_game_end(game_state: &GameState) -> GameEndStatus {
    let status = game_end_status(game_state);
    if status.is_over() {
        log::info!("game over after {} plies: {status}", game_state.ply_count());
    }
    status
}
