//! Canonical chess-rule constants.
//!
//! Static literals used to set up and validate positions: the standard
//! starting position and the pawn home rows.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
/// Castling rights are written out for compatibility; the engine ignores them.
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Row Light pawns start on (rank 2).
pub const LIGHT_PAWN_START_ROW: u8 = 1;

/// Row Dark pawns start on (rank 7).
pub const DARK_PAWN_START_ROW: u8 = 6;
