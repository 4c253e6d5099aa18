use crate::game_state::chess_types::*;
use crate::moves::move_patterns::step_targets;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

#[inline]
pub fn knight_destinations(color: Color, origin: Square, board: &Board) -> Vec<Square> {
    step_targets(color, origin, board, &KNIGHT_OFFSETS)
}

#[cfg(test)]
mod tests {
    use super::knight_destinations;
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::parse_square;

    fn sq(name: &str) -> Square {
        parse_square(name).expect("test square should parse")
    }

    #[test]
    fn knight_from_d4_has_eight_targets() {
        let targets = knight_destinations(Color::Light, sq("d4"), &Board::empty());
        assert_eq!(targets.len(), 8);
        assert!(targets.contains(&sq("e6")));
        assert!(targets.contains(&sq("b3")));
    }

    #[test]
    fn knight_in_corner_skips_friendly_squares() {
        let mut board = Board::empty();
        board.set(sq("b3"), Some(Piece::new(PieceKind::Pawn, Color::Light)));
        board.set(sq("c2"), Some(Piece::new(PieceKind::Pawn, Color::Dark)));

        let targets = knight_destinations(Color::Light, sq("a1"), &board);
        assert_eq!(targets, vec![sq("c2")]);
    }
}
