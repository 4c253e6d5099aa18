//! Random playouts for exercising the rules engine.
//!
//! Plays uniformly random legal moves until the game ends or a ply limit is
//! hit. There is no evaluation here; it exists to drive long stretches of
//! play through the engine in tests and benchmarks.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::game_api::{query_game_end, GameEndStatus};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::all_legal_moves;

#[derive(Debug, Clone)]
pub struct Playout {
    pub final_state: GameState,
    pub status: GameEndStatus,
    pub plies: usize,
}

pub fn random_playout<R: Rng + ?Sized>(game_state: &GameState, max_plies: usize, rng: &mut R) -> Playout {
    let mut state = game_state.clone();
    let mut plies = 0usize;

    loop {
        let status = query_game_end(&state);
        if status.is_over() || plies >= max_plies {
            return Playout {
                final_state: state,
                status,
                plies,
            };
        }

        let moves = all_legal_moves(state.side_to_move(), &state);
        let Some(&(from, to)) = moves.choose(rng) else {
            // Unreachable while query_game_end agrees with the generator.
            return Playout {
                final_state: state,
                status,
                plies,
            };
        };

        if state.apply_move(from, to).is_none() {
            log::warn!("generated move {from}{to} had no piece on its origin");
            return Playout {
                final_state: state,
                status,
                plies,
            };
        }
        plies += 1;
    }
}
