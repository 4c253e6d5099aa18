use crate::game_state::chess_types::*;
use crate::moves::move_patterns::{ray_targets, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};

#[inline]
pub fn queen_destinations(color: Color, origin: Square, board: &Board) -> Vec<Square> {
    let mut targets = ray_targets(color, origin, board, &ORTHOGONAL_DIRECTIONS);
    targets.extend(ray_targets(color, origin, board, &DIAGONAL_DIRECTIONS));
    targets
}

#[cfg(test)]
mod tests {
    use super::queen_destinations;
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::parse_square;

    fn sq(name: &str) -> Square {
        parse_square(name).expect("test square should parse")
    }

    #[test]
    fn queen_from_d4_has_twenty_seven_squares() {
        assert_eq!(queen_destinations(Color::Dark, sq("d4"), &Board::empty()).len(), 27);
    }

    #[test]
    fn queen_attacks_match_union() {
        let mut board = Board::empty();
        board.set(sq("d6"), Some(Piece::new(PieceKind::Pawn, Color::Light)));
        board.set(sq("g4"), Some(Piece::new(PieceKind::Pawn, Color::Light)));

        let targets = queen_destinations(Color::Dark, sq("d4"), &board);
        assert!(targets.contains(&sq("d6")));
        assert!(targets.contains(&sq("g4")));
        assert!(!targets.contains(&sq("d7")));
        assert!(!targets.contains(&sq("h4")));
    }
}
