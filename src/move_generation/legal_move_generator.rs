//! Legal move generation.
//!
//! Each pseudo-move is played on a cloned board (grid write only) and kept
//! iff the mover's own King is not attacked afterwards. Output order is
//! row-major over origin squares, then per-piece generation order.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::attack_detection::is_in_check;
use crate::move_generation::pseudo_moves::{pseudo_moves_for, pseudo_moves_for_piece};

/// Legal moves of the piece on `square`; empty unless it belongs to the side to move.
pub fn legal_moves_for(board: &Board, square: Square) -> Vec<Move> {
    let mover = board.side_to_move();
    pseudo_moves_for(board, square)
        .into_iter()
        .filter(|mv| leaves_king_safe(board, *mv, mover))
        .collect()
}

pub fn legal_moves_for_side_to_move(board: &Board) -> Vec<Move> {
    legal_moves_for_color(board, board.side_to_move())
}

/// Legal moves `color` would have if it were its turn. Does not touch the
/// board's side to move.
pub fn legal_moves_for_color(board: &Board, color: Color) -> Vec<Move> {
    let mut legal = Vec::with_capacity(48);
    for (from, piece) in board.pieces().filter(|(_, piece)| piece.color == color) {
        legal.extend(
            pseudo_moves_for_piece(board, from, piece)
                .into_iter()
                .filter(|mv| leaves_king_safe(board, *mv, color)),
        );
    }
    legal
}

#[inline]
pub fn legal_move_count_for(board: &Board, color: Color) -> usize {
    legal_moves_for_color(board, color).len()
}

fn leaves_king_safe(board: &Board, mv: Move, mover: Color) -> bool {
    let mut trial = board.clone();
    trial.move_piece_on_grid(mv);
    !is_in_check(&trial, mover)
}

#[cfg(test)]
mod tests {
    use super::{
        legal_move_count_for, legal_moves_for, legal_moves_for_color,
        legal_moves_for_side_to_move,
    };
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::move_generation::attack_detection::is_in_check;
    use crate::utils::layout::parse_layout;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn starting_position_has_eleven_moves_per_side() {
        let board = Board::new();
        assert_eq!(legal_moves_for_side_to_move(&board).len(), 11);
        assert_eq!(legal_move_count_for(&board, Color::Black), 11);
        assert_eq!(board.side_to_move(), Color::White);
    }

    #[test]
    fn pinned_piece_cannot_expose_its_king() {
        // White rook on (3,3) shields the king on (6,3) from the black rook on (0,3).
        let board = parse_layout("3r3/7/7/3R3/7/7/3K3 w").expect("layout should parse");
        let rook_moves = legal_moves_for(&board, sq(3, 3));
        assert!(rook_moves.iter().all(|mv| mv.to.col() == 3));
        assert!(rook_moves.contains(&Move::new(sq(3, 3), sq(0, 3))));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let board = parse_layout("7/7/7/7/7/r6/3K3 w").expect("layout should parse");
        let king_moves = legal_moves_for(&board, sq(6, 3));
        assert!(king_moves.iter().all(|mv| mv.to.row() == 6));
    }

    #[test]
    fn every_legal_move_leaves_the_mover_safe() {
        let layouts = [
            "rnbqkbn/ppppppp/7/7/7/PPPPPPP/RNBQKBN w",
            "3r3/7/1n5/3R3/2b4/7/3K3 w",
            "k6/1q5/7/7/7/5Q1/6K b",
        ];
        for layout in layouts {
            let board = parse_layout(layout).expect("layout should parse");
            let mover = board.side_to_move();
            for mv in legal_moves_for_side_to_move(&board) {
                let mut next = board.clone();
                next.apply_move_unchecked(mv);
                assert!(!is_in_check(&next, mover), "{layout}: {mv} leaves king attacked");
            }
        }
    }

    #[test]
    fn color_query_ignores_side_to_move() {
        let board = parse_layout("3k3/7/7/7/7/7/3K3 w").expect("layout should parse");
        let black = legal_moves_for_color(&board, Color::Black);
        assert_eq!(black.len(), 5);
        assert!(legal_moves_for(&board, sq(0, 3)).is_empty());
        assert_eq!(board.side_to_move(), Color::White);
    }

    #[test]
    fn generation_order_is_row_major() {
        let board = Board::new();
        let moves = legal_moves_for_side_to_move(&board);
        let origins: Vec<usize> = moves.iter().map(|mv| mv.from.index()).collect();
        let mut sorted = origins.clone();
        sorted.sort();
        assert_eq!(origins, sorted);
        assert_eq!(moves, legal_moves_for_side_to_move(&board.clone()));
    }
}
