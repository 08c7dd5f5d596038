//! Attack and check detection.
//!
//! Attacks are pseudo-moves: whether the attacker's own King would be exposed
//! is irrelevant here.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::sliding_moves::{slider_directions, Ray};

/// True iff any piece of `attacker` threatens `square`.
pub fn is_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == attacker)
        .any(|(from, piece)| piece_attacks_square(board, from, piece, square))
}

/// Squares holding pieces of `attacker` that threaten `square`.
pub fn attackers_to_square(board: &Board, square: Square, attacker: Color) -> Vec<Square> {
    board
        .pieces()
        .filter(|(from, piece)| {
            piece.color == attacker && piece_attacks_square(board, *from, *piece, square)
        })
        .map(|(from, _)| from)
        .collect()
}

/// A missing King counts as in check so callers never treat that side as safe.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.find_king(color) {
        Some(king_sq) => is_attacked(board, king_sq, color.opposite()),
        None => true,
    }
}

fn piece_attacks_square(board: &Board, from: Square, piece: Piece, target: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(from, piece.color).contains(&target),
        PieceKind::Knight => knight_attacks(from).contains(&target),
        PieceKind::King => king_attacks(from).contains(&target),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => slider_directions(piece.kind)
            .iter()
            .any(|&(d_row, d_col)| Ray::new(board, from, d_row, d_col).any(|sq| sq == target)),
    }
}

#[cfg(test)]
mod tests {
    use super::{attackers_to_square, is_attacked, is_in_check};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::utils::layout::parse_layout;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn pawn_attacks_in_its_own_forward_direction() {
        let board = parse_layout("7/7/7/3P3/7/7/7 w").expect("layout should parse");
        assert!(is_attacked(&board, sq(2, 2), Color::White));
        assert!(is_attacked(&board, sq(2, 4), Color::White));
        assert!(!is_attacked(&board, sq(4, 2), Color::White));
        assert!(!is_attacked(&board, sq(2, 3), Color::White));

        let board = parse_layout("7/7/7/3p3/7/7/7 b").expect("layout should parse");
        assert!(is_attacked(&board, sq(4, 2), Color::Black));
        assert!(!is_attacked(&board, sq(2, 2), Color::Black));
    }

    #[test]
    fn rook_attack_wraps_around_the_file_edge() {
        let board = parse_layout("7/7/7/5R1/7/7/7 w").expect("layout should parse");
        assert!(is_attacked(&board, sq(3, 0), Color::White));
        assert!(is_attacked(&board, sq(3, 4), Color::White));
    }

    #[test]
    fn blockers_stop_attacks_but_are_themselves_attacked() {
        let board = parse_layout("7/7/7/R1p1k2/7/7/7 w").expect("layout should parse");
        assert!(is_attacked(&board, sq(3, 2), Color::White));
        assert!(!is_attacked(&board, sq(3, 3), Color::White));
        // The other way round the cylinder the king is reachable: 6, 5, 4.
        assert!(is_attacked(&board, sq(3, 4), Color::White));
    }

    #[test]
    fn check_detection_and_missing_king() {
        let board = parse_layout("3k3/7/7/7/7/7/3RK2 b").expect("layout should parse");
        assert!(is_in_check(&board, Color::Black));
        assert!(!is_in_check(&board, Color::White));
        assert_eq!(
            attackers_to_square(&board, sq(0, 3), Color::White),
            vec![sq(6, 3)]
        );

        let board = Board::empty(Color::White);
        assert!(is_in_check(&board, Color::White));
    }

    #[test]
    fn knight_and_king_attack_shapes() {
        let board = parse_layout("7/7/7/3N3/7/7/K6 w").expect("layout should parse");
        assert!(is_attacked(&board, sq(1, 2), Color::White));
        assert!(is_attacked(&board, sq(4, 1), Color::White));
        assert!(!is_attacked(&board, sq(2, 3), Color::White));
        // king on (6,0) reaches (5,6) through the wrapped file.
        assert!(is_attacked(&board, sq(5, 6), Color::White));
    }
}
