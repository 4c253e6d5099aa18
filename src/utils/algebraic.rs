//! Conversions between algebraic coordinates (e.g. `e4`) and board indices.
//!
//! Row 0 is rank "1" and col 0 is file "a". Only lowercase files are
//! accepted.

use crate::errors::MoveError;
use crate::game_state::chess_types::Square;

/// Convert an algebraic square (for example: "e4") to `(row, col)`.
pub fn square_to_index(square: &str) -> Result<(u8, u8), MoveError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(MoveError::InvalidSquareFormat(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(MoveError::InvalidSquareFormat(square.to_owned()));
    }

    Ok((rank - b'1', file - b'a'))
}

/// Convert `(row, col)` to algebraic notation. Callers keep both indices in
/// `0..8`.
#[inline]
pub fn index_to_square(row: u8, col: u8) -> String {
    debug_assert!(row < 8 && col < 8, "index ({row}, {col}) is off the board");
    let file_char = char::from(b'a' + col);
    let rank_char = char::from(b'1' + row);
    format!("{file_char}{rank_char}")
}

#[inline]
pub fn is_on_board(row: i8, col: i8) -> bool {
    (0..8).contains(&row) && (0..8).contains(&col)
}

/// Parse an algebraic square straight into a [`Square`].
pub fn parse_square(square: &str) -> Result<Square, MoveError> {
    let (row, col) = square_to_index(square)?;
    Square::new(row as i8, col as i8).ok_or_else(|| MoveError::InvalidSquareFormat(square.to_owned()))
}
