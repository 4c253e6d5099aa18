//! PGN export of a finished (or abandoned) game's move log.
//!
//! Movetext is written in long algebraic form. The log is replayed from the
//! initial position first, so a log that does not belong to that position
//! is refused rather than written out.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};

use crate::errors::PgnError;
use crate::game_api::{attempt_move, GameEndStatus};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::long_algebraic::to_long_algebraic;

/// PGN dated today (local time).
pub fn write_pgn(
    initial_state: &GameState,
    move_log: &[MoveRecord],
    status: GameEndStatus,
) -> Result<String, PgnError> {
    write_pgn_dated(initial_state, move_log, status, Local::now().date_naive())
}

pub fn write_pgn_dated(
    initial_state: &GameState,
    move_log: &[MoveRecord],
    status: GameEndStatus,
    date: NaiveDate,
) -> Result<String, PgnError> {
    replay(initial_state, move_log)?;

    let mut headers = BTreeMap::<&str, String>::new();
    headers.insert("Event", "Casual Game".to_owned());
    headers.insert("Site", "Local".to_owned());
    headers.insert("Date", date.format("%Y.%m.%d").to_string());
    headers.insert("Round", "-".to_owned());
    headers.insert("White", "White".to_owned());
    headers.insert("Black", "Black".to_owned());
    headers.insert("Result", status.result_token().to_owned());

    let initial_fen = initial_state.get_fen();
    if !is_standard_start(&initial_fen) {
        headers.insert("SetUp", "1".to_owned());
        headers.insert("FEN", initial_fen);
    }

    let mut out = String::new();
    for (key, value) in &headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let mut movetext_parts = Vec::<String>::with_capacity(move_log.len() + 2);
    let mut fullmove = initial_state.fullmove_number();
    let mut mover = initial_state.side_to_move();
    for (ply, record) in move_log.iter().enumerate() {
        let lan = to_long_algebraic(record.from, record.to);
        match mover {
            Color::Light => movetext_parts.push(format!("{fullmove}. {lan}")),
            Color::Dark if ply == 0 => movetext_parts.push(format!("{fullmove}... {lan}")),
            Color::Dark => movetext_parts.push(lan),
        }
        if mover == Color::Dark {
            fullmove = fullmove.saturating_add(1);
        }
        mover = mover.opposite();
    }
    movetext_parts.push(status.result_token().to_owned());

    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    Ok(out)
}

fn replay(initial_state: &GameState, move_log: &[MoveRecord]) -> Result<GameState, PgnError> {
    let mut state = initial_state.clone();
    for (ply, record) in move_log.iter().enumerate() {
        state = attempt_move(&state, &record.from.to_string(), &record.to.to_string()).map_err(
            |source| PgnError::Replay {
                ply: ply + 1,
                from: record.from,
                to: record.to,
                source,
            },
        )?;
    }
    Ok(state)
}

fn is_standard_start(fen: &str) -> bool {
    // Ignore castling rights, which the engine never writes.
    fen.split_whitespace().take(2).eq(STARTING_POSITION_FEN.split_whitespace().take(2))
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::{write_pgn, write_pgn_dated};
    use chrono::NaiveDate;

    use crate::errors::PgnError;
    use crate::game_api::{attempt_move, query_game_end, GameEndStatus};
    use crate::game_state::game_state::GameState;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid date")
    }

    #[test]
    fn fools_mate_pgn() {
        let start = GameState::new_game();
        let mut game = start.clone();
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
            game = attempt_move(&game, from, to).expect("scripted move should be legal");
        }

        let pgn = write_pgn_dated(&start, game.move_log(), query_game_end(&game), date())
            .expect("PGN should write");

        assert!(pgn.contains("[Date \"2024.03.09\"]"));
        assert!(pgn.contains("[Result \"0-1\"]"));
        assert!(!pgn.contains("[FEN"));
        assert!(pgn.ends_with("1. f2f3 e7e5 2. g2g4 d8h4 0-1\n"));
    }

    #[test]
    fn custom_start_writes_setup_tags() {
        let start = GameState::from_fen("4k3/8/8/8/8/8/4P3/4K3 b - - 0 12").expect("FEN should parse");
        let game = attempt_move(&start, "e8", "d7").expect("king move is legal");
        let game = attempt_move(&game, "e2", "e4").expect("pawn push is legal");

        let pgn = write_pgn_dated(&start, game.move_log(), GameEndStatus::InProgress, date())
            .expect("PGN should write");

        assert!(pgn.contains("[SetUp \"1\"]"));
        assert!(pgn.contains("[FEN \"4k3/8/8/8/8/8/4P3/4K3 b - - 0 12\"]"));
        assert!(pgn.ends_with("12... e8d7 13. e2e4 *\n"));
    }

    #[test]
    fn foreign_log_is_refused() {
        let other = attempt_move(&GameState::new_game(), "e2", "e4").expect("e2e4 is legal");
        let start = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w").expect("FEN should parse");

        assert!(matches!(
            write_pgn(&start, other.move_log(), GameEndStatus::InProgress),
            Err(PgnError::Replay { ply: 1, .. })
        ));
    }
}
