//! Rays for rooks, bishops and queens.
//!
//! Horizontal rays wrap around the cylinder and are bounded to six steps so
//! they never return to their origin. Any ray with a vertical component ends
//! as soon as its raw row leaves the board.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::geometry::{row_on_board, BOARD_SIZE};

pub const ROOK_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const QUEEN_DIRECTIONS: [(i32, i32); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const MAX_RAY_STEPS: i32 = BOARD_SIZE as i32 - 1;

/// Ray directions for a sliding piece; empty for every other kind.
pub fn slider_directions(kind: PieceKind) -> &'static [(i32, i32)] {
    match kind {
        PieceKind::Rook => &ROOK_DIRECTIONS,
        PieceKind::Bishop => &BISHOP_DIRECTIONS,
        PieceKind::Queen => &QUEEN_DIRECTIONS,
        _ => &[],
    }
}

/// Squares seen along one ray, up to and including the first occupied one.
pub struct Ray<'a> {
    board: &'a Board,
    from: Square,
    d_row: i32,
    d_col: i32,
    step: i32,
    blocked: bool,
}

impl<'a> Ray<'a> {
    pub fn new(board: &'a Board, from: Square, d_row: i32, d_col: i32) -> Self {
        Self {
            board,
            from,
            d_row,
            d_col,
            step: 0,
            blocked: false,
        }
    }
}

impl Iterator for Ray<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.blocked || self.step >= MAX_RAY_STEPS {
            return None;
        }
        self.step += 1;

        let raw_row = self.from.row() as i32 + self.d_row * self.step;
        if !row_on_board(raw_row) {
            self.blocked = true;
            return None;
        }

        let target = Square::new(raw_row, self.from.col() as i32 + self.d_col * self.step);
        if self.board.piece_at(target).is_some() {
            self.blocked = true;
        }
        Some(target)
    }
}

/// Every square a slider on `from` sees, ray by ray in direction order.
pub fn sliding_attacks(board: &Board, from: Square, kind: PieceKind) -> Vec<Square> {
    slider_directions(kind)
        .iter()
        .flat_map(|&(d_row, d_col)| Ray::new(board, from, d_row, d_col))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{sliding_attacks, Ray};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn rook_on_empty_board_sees_row_and_column_once() {
        let mut board = Board::empty(Color::White);
        let from = Square::new(3, 3);
        board.set_piece(from, Some(Piece::new(PieceKind::Rook, Color::White)));

        let mut seen = sliding_attacks(&board, from, PieceKind::Rook);
        // Both horizontal rays cover the other six squares of the row.
        assert_eq!(seen.len(), 6 + 6 + 3 + 3);
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 6 + 6);
        assert!(!seen.contains(&from));
    }

    #[test]
    fn vertical_ray_stops_at_the_row_edge() {
        let board = Board::empty(Color::White);
        let up: Vec<Square> = Ray::new(&board, Square::new(2, 4), -1, 0).collect();
        assert_eq!(up, vec![Square::new(1, 4), Square::new(0, 4)]);
    }

    #[test]
    fn horizontal_ray_wraps_from_column_six_to_zero() {
        let board = Board::empty(Color::White);
        let right: Vec<Square> = Ray::new(&board, Square::new(4, 6), 0, 1).collect();
        assert_eq!(right.first(), Some(&Square::new(4, 0)));
        assert_eq!(right.len(), 6);
    }

    #[test]
    fn ray_includes_first_blocker_and_stops() {
        let mut board = Board::empty(Color::White);
        board.set_piece(Square::new(4, 1), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        let right: Vec<Square> = Ray::new(&board, Square::new(4, 6), 0, 1).collect();
        assert_eq!(right, vec![Square::new(4, 0), Square::new(4, 1)]);
    }

    #[test]
    fn diagonal_ray_wraps_columns_and_stops_at_edge() {
        let board = Board::empty(Color::White);
        let ray: Vec<Square> = Ray::new(&board, Square::new(2, 6), -1, 1).collect();
        assert_eq!(ray, vec![Square::new(1, 0), Square::new(0, 1)]);
    }
}
