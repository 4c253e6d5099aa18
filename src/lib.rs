//! Crate root module declarations for the Plum Rules chess engine.
//!
//! The engine keeps a chess position, validates moves against piece movement
//! and check constraints, and detects checkmate and stalemate. Front ends talk
//! to it through `game_api`; the remaining modules are exposed so tests,
//! benchmarks and tooling can reach each layer directly.

pub mod errors;
pub mod game_api;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod move_record;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_patterns;
    pub mod pawn_moves;
    pub mod piece_movement;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod game_end;
    pub mod legal_move_checks;
    pub mod legal_move_filter;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod pgn;
    pub mod random_playout;
    pub mod render_game_state;
}
