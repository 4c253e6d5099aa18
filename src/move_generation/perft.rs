//! Perft node counting over the legal move generator.
//!
//! Counts leaf positions reachable in exactly `depth` plies. Handy as a
//! regression oracle for the movement rules and the legality filter.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::all_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> u64 {
    perft_counts(game_state, depth).nodes
}

pub fn perft_counts(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for (from, to) in all_legal_moves(game_state.side_to_move(), game_state) {
        let mut next = game_state.clone();
        let Some(record) = next.apply_move(from, to) else {
            continue;
        };

        if depth == 1 {
            total.nodes += 1;
            if record.captured.is_some() {
                total.captures += 1;
            }
        } else {
            total.merge(perft_counts(&next, depth - 1));
        }
    }

    total
}

/// Per-root-move breakdown, sorted by move text, for diffing against other
/// engines.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Vec<(String, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let mut out: Vec<(String, u64)> = all_legal_moves(game_state.side_to_move(), game_state)
        .into_iter()
        .filter_map(|(from, to)| {
            let mut next = game_state.clone();
            next.apply_move(from, to)?;
            Some((format!("{from}{to}"), perft(&next, depth - 1)))
        })
        .collect();
    out.sort();
    out
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_counts, perft_divide};
    use crate::game_state::game_state::GameState;

    #[test]
    fn perft_start_position() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 0), 1);
        assert_eq!(perft(&game, 1), 20);
        assert_eq!(perft(&game, 2), 400);
        let counts = perft_counts(&game, 3);
        assert_eq!(counts.nodes, 8902);
        assert_eq!(counts.captures, 34);
    }

    #[test]
    fn perft_position_3() {
        let game = GameState::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1")
            .expect("FEN should parse");
        assert_eq!(perft(&game, 1), 14);
        let counts = perft_counts(&game, 2);
        assert_eq!(counts.nodes, 191);
        assert_eq!(counts.captures, 14);
    }

    #[test]
    fn divide_sums_to_perft() {
        let game = GameState::new_game();
        let divide = perft_divide(&game, 2);
        assert_eq!(divide.len(), 20);
        assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), 400);
        assert!(divide.iter().all(|(_, n)| *n == 20));
    }
}
