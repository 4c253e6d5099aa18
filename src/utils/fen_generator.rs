use crate::game_state::{chess_types::*, game_state::GameState};

/// Emit a six-field FEN. Castling and en-passant are always `-` and the
/// halfmove clock is always 0, since the engine does not track them.
pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(game_state.board());
    let side_to_move = match game_state.side_to_move() {
        Color::Light => "w",
        Color::Dark => "b",
    };

    format!(
        "{} {} - - 0 {}",
        board,
        side_to_move,
        game_state.fullmove_number()
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for row in (0..8i8).rev() {
        let mut empty_count = 0u8;

        for col in 0..8i8 {
            let piece = Square::new(row, col).and_then(|square| board.piece_at(square));
            if let Some(piece) = piece {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.symbol());
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row > 0 {
            out.push('/');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_api::attempt_move;
    use crate::game_state::game_state::GameState;

    #[test]
    fn starting_position_placement() {
        let fen = generate_fen(&GameState::new_game());
        assert_eq!(fen, "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1");
    }

    #[test]
    fn round_trip_custom_position_fen() {
        let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b - - 0 6";
        let parsed = GameState::from_fen(fen).expect("custom FEN should parse");
        let generated = generate_fen(&parsed);

        assert_eq!(generated, fen);
        assert_eq!(GameState::from_fen(&generated), Ok(parsed));
    }

    #[test]
    fn fullmove_number_advances_after_dark_moves() {
        let game = GameState::new_game();
        let game = attempt_move(&game, "e2", "e4").expect("e2e4 is legal");
        assert_eq!(
            generate_fen(&game),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b - - 0 1"
        );
        let game = attempt_move(&game, "e7", "e5").expect("e7e5 is legal");
        assert!(generate_fen(&game).ends_with(" w - - 0 2"));
    }
}
