//! FEN-to-GameState parser.
//!
//! Reads the piece placement and side-to-move fields. Castling and
//! en-passant fields are syntax-checked and then dropped since the engine
//! does not play those moves; the clocks are optional.

use crate::errors::FenError;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::square_to_index;

pub fn parse_fen(fen: &str) -> Result<GameState, FenError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or(FenError::MissingField("board layout"))?;
    let side_part = parts.next().ok_or(FenError::MissingField("side-to-move"))?;
    let castling_part = parts.next();
    let en_passant_part = parts.next();
    let _halfmove_part = parts.next().map(|x| parse_counter("halfmove clock", x)).transpose()?;
    let fullmove_part = parts.next().map(|x| parse_counter("fullmove number", x)).transpose()?;

    if parts.next().is_some() {
        return Err(FenError::TrailingFields);
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    if let Some(castling_part) = castling_part {
        check_castling_field(castling_part)?;
    }
    if let Some(en_passant_part) = en_passant_part {
        check_en_passant_field(en_passant_part)?;
    }

    GameState::from_board(board, side_to_move, fullmove_part.unwrap_or(1))
}

fn parse_board(board_part: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount(ranks.len()));
    }

    let mut board = Board::empty();

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let row = 7 - fen_rank_idx as i8;
        let mut col = 0i8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(FenError::InvalidPieceChar(ch));
                }
                col += empty_count as i8;
                if col > 8 {
                    return Err(FenError::BadRankWidth { rank: row as usize + 1 });
                }
                continue;
            }

            let piece = Piece::from_symbol(ch).ok_or(FenError::InvalidPieceChar(ch))?;
            let square = Square::new(row, col).ok_or(FenError::BadRankWidth {
                rank: row as usize + 1,
            })?;
            board.set(square, Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(FenError::BadRankWidth {
                rank: row as usize + 1,
            });
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, FenError> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(FenError::InvalidField {
            field: "side-to-move",
            value: side_part.to_owned(),
        }),
    }
}

fn check_castling_field(castling_part: &str) -> Result<(), FenError> {
    let valid = castling_part == "-"
        || (!castling_part.is_empty() && castling_part.chars().all(|ch| "KQkq".contains(ch)));
    if valid {
        Ok(())
    } else {
        Err(FenError::InvalidField {
            field: "castling",
            value: castling_part.to_owned(),
        })
    }
}

fn check_en_passant_field(en_passant_part: &str) -> Result<(), FenError> {
    if en_passant_part == "-" || square_to_index(en_passant_part).is_ok() {
        Ok(())
    } else {
        Err(FenError::InvalidField {
            field: "en-passant",
            value: en_passant_part.to_owned(),
        })
    }
}

fn parse_counter(field: &'static str, value: &str) -> Result<u16, FenError> {
    value.parse::<u16>().map_err(|_| FenError::InvalidField {
        field,
        value: value.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::errors::FenError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::parse_square;

    #[test]
    fn parse_starting_fen() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(game_state.side_to_move(), Color::Light);
        assert_eq!(game_state.fullmove_number(), 1);
        assert_eq!(game_state.board().occupied().count(), 32);
        assert_eq!(
            game_state.board().piece_at(parse_square("d8").expect("d8 should parse")),
            Some(Piece::new(PieceKind::Queen, Color::Dark))
        );
    }

    #[test]
    fn clock_fields_are_optional() {
        let game_state = parse_fen("4k3/8/8/8/8/8/8/4K3 b").expect("short FEN should parse");
        assert_eq!(game_state.side_to_move(), Color::Dark);

        let game_state =
            parse_fen("4k3/8/8/8/8/8/8/4K3 b - e3 7 42").expect("full FEN should parse");
        assert_eq!(game_state.fullmove_number(), 42);
    }

    #[test]
    fn reports_malformed_fields() {
        assert_eq!(parse_fen(""), Err(FenError::MissingField("board layout")));
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/4K3 w"),
            Err(FenError::WrongRankCount(7))
        );
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4K4 w"),
            Err(FenError::BadRankWidth { rank: 1 })
        );
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4X3 w"),
            Err(FenError::InvalidPieceChar('X'))
        );
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 x"),
            Err(FenError::InvalidField { field: "side-to-move", .. })
        ));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w KZ"),
            Err(FenError::InvalidField { field: "castling", .. })
        ));
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra"),
            Err(FenError::TrailingFields)
        );
    }
}
