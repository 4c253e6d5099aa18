//! Board rendering for text front ends.
//!
//! [`render`] is the raw symbol grid; [`render_to_string`] lays it out with
//! rank 8 on top and file/rank labels for terminal output.

use crate::game_state::{chess_types::*, game_state::GameState};

/// How pieces are drawn by [`render_to_string`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderStyle {
    /// FEN letters, uppercase for White.
    #[default]
    Ascii,
    /// Chess glyphs.
    Unicode,
}

/// `[row][col]` grid of piece symbols, row 0 = rank 1. Uppercase is White,
/// lowercase is Black, `' '` is an empty square.
pub fn render(game_state: &GameState) -> [[char; 8]; 8] {
    let mut grid = [[' '; 8]; 8];
    for (square, piece) in game_state.board().occupied() {
        grid[square.row() as usize][square.col() as usize] = piece.symbol();
    }
    grid
}

pub fn render_to_string(game_state: &GameState, style: RenderStyle) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in (0..8i8).rev() {
        out.push(char::from(b'1' + row as u8));
        out.push(' ');

        for col in 0..8i8 {
            let piece = Square::new(row, col).and_then(|square| game_state.board().piece_at(square));
            out.push(match (piece, style) {
                (Some(piece), RenderStyle::Ascii) => piece.symbol(),
                (Some(piece), RenderStyle::Unicode) => piece.unicode_symbol(),
                (None, RenderStyle::Ascii) => '.',
                (None, RenderStyle::Unicode) => '·',
            });

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + row as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

#[cfg(test)]
mod tests {
    use super::{render, render_to_string, RenderStyle};
    use crate::game_state::game_state::GameState;

    #[test]
    fn ascii_board_has_rank_eight_on_top() {
        let text = render_to_string(&GameState::new_game(), RenderStyle::Ascii);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 r n b q k b n r 8");
        assert_eq!(lines[5], "4 . . . . . . . . 4");
        assert_eq!(lines[8], "1 R N B Q K B N R 1");
    }

    #[test]
    fn unicode_board_uses_glyphs() {
        let text = render_to_string(&GameState::new_game(), RenderStyle::Unicode);
        assert!(text.contains("♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜"));
        assert!(text.contains("♙ ♙ ♙ ♙ ♙ ♙ ♙ ♙"));
    }

    #[test]
    fn grid_counts_match_board() {
        let game = GameState::from_fen("4k3/8/8/8/3Q4/8/8/4K3 w").expect("FEN should parse");
        let grid = render(&game);
        let filled = grid.iter().flatten().filter(|c| **c != ' ').count();
        assert_eq!(filled, 3);
        assert_eq!(grid[3][3], 'Q');
        assert_eq!(grid[7][4], 'k');
    }
}
