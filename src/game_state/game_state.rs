//! Live game state.
//!
//! `GameState` owns the board, the side to move, a per-color cache of king
//! squares and the append-only move log. The only mutation path is
//! [`GameState::apply_move`], which updates all of them together; the king
//! cache must always agree with the board.

use crate::errors::FenError;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    // [color] -> king square, mirrors the board.
    king_squares: [Square; 2],
    fullmove_number: u16,
    move_log: Vec<MoveRecord>,
}

impl GameState {
    /// Standard initial position, Light (White) to move.
    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Build a state around an arbitrary placement. Each color needs exactly
    /// one king; the king cache is derived from the board here.
    pub fn from_board(
        board: Board,
        side_to_move: Color,
        fullmove_number: u16,
    ) -> Result<Self, FenError> {
        let light_king = single_king(&board, Color::Light)?;
        let dark_king = single_king(&board, Color::Dark)?;

        Ok(Self {
            board,
            side_to_move,
            king_squares: [light_king, dark_king],
            fullmove_number: fullmove_number.max(1),
            move_log: Vec::new(),
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub fn move_log(&self) -> &[MoveRecord] {
        &self.move_log
    }

    #[inline]
    pub fn ply_count(&self) -> usize {
        self.move_log.len()
    }

    /// Move the piece on `from` to `to`, clearing `from` and keeping the king
    /// cache in step. Does not touch the log or the side to move; this is the
    /// part of a move that simulations replay on their private copy.
    ///
    /// Returns `None` (and changes nothing) if `from` is empty.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<MoveRecord> {
        let moved = self.board.piece_at(from)?;
        self.board.set(from, None);
        let captured = self.board.set(to, Some(moved));

        if moved.kind == PieceKind::King {
            self.king_squares[moved.color.index()] = to;
        }

        Some(MoveRecord {
            from,
            to,
            moved,
            captured,
        })
    }

    /// Play an already validated move: relocate, log it and pass the turn.
    pub(crate) fn apply_move(&mut self, from: Square, to: Square) -> Option<MoveRecord> {
        let record = self.relocate(from, to)?;

        if self.side_to_move == Color::Dark {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = self.side_to_move.opposite();
        self.move_log.push(record);

        log::trace!("ply {}: {} {}", self.move_log.len(), record.moved.symbol(), record);
        Some(record)
    }

    /// Independent copy with `from -> to` played on the board only. Used to
    /// test a candidate move without touching `self`.
    pub(crate) fn simulate(&self, from: Square, to: Square) -> Option<GameState> {
        let mut copy = self.clone();
        copy.relocate(from, to)?;
        Some(copy)
    }
}

fn single_king(board: &Board, color: Color) -> Result<Square, FenError> {
    match board.kings_of(color).as_slice() {
        [king] => Ok(*king),
        kings => Err(FenError::KingCount {
            color,
            count: kings.len(),
        }),
    }
}
