//! Positional bonus tables, indexed `[row][col]` from White's point of view
//! (White advances toward row 0). Black reads them with the row mirrored.

use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::geometry::BOARD_SIZE;

pub type PieceSquareTable = [[i32; BOARD_SIZE]; BOARD_SIZE];

pub const PAWN_TABLE: PieceSquareTable = [
    [0, 0, 0, 0, 0, 0, 0],
    [50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 20, 10, 10],
    [5, 5, 10, 25, 10, 5, 5],
    [0, 0, 0, 20, 0, 0, 0],
    [5, -5, -10, 0, -10, -5, 5],
    [0, 0, 0, 0, 0, 0, 0],
];

pub const KNIGHT_TABLE: PieceSquareTable = [
    [-50, -40, -30, -30, -30, -40, -50],
    [-40, -20, 0, 0, 0, -20, -40],
    [-30, 0, 10, 15, 10, 0, -30],
    [-30, 5, 15, 20, 15, 5, -30],
    [-30, 0, 15, 20, 15, 0, -30],
    [-40, -20, 0, 5, 0, -20, -40],
    [-50, -40, -30, -30, -30, -40, -50],
];

pub const BISHOP_TABLE: PieceSquareTable = [
    [-20, -10, -10, -10, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 10, 5, 0, -10],
    [-10, 5, 5, 10, 5, 5, -10],
    [-10, 0, 10, 10, 10, 0, -10],
    [-10, 10, 0, 0, 0, 10, -10],
    [-20, -10, -10, -10, -10, -10, -20],
];

pub const ROOK_TABLE: PieceSquareTable = [
    [0, 0, 0, 5, 0, 0, 0],
    [-5, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, -5],
    [0, 0, 0, 5, 0, 0, 0],
];

pub const QUEEN_TABLE: PieceSquareTable = [
    [-20, -10, -10, -5, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 5, 5, 0, -10],
    [-5, 0, 5, 5, 5, 0, -5],
    [0, 0, 5, 5, 5, 0, -5],
    [-10, 5, 0, 0, 0, 5, -10],
    [-20, -10, -10, -5, -10, -10, -20],
];

pub const KING_MIDDLEGAME_TABLE: PieceSquareTable = [
    [-30, -40, -40, -50, -40, -40, -30],
    [-30, -40, -40, -50, -40, -40, -30],
    [-30, -40, -40, -50, -40, -40, -30],
    [-30, -40, -40, -50, -40, -40, -30],
    [-20, -30, -30, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -10],
    [20, 30, 10, 0, 10, 30, 20],
];

pub const KING_ENDGAME_TABLE: PieceSquareTable = [
    [-50, -40, -30, -20, -30, -40, -50],
    [-30, -20, -10, 0, -10, -20, -30],
    [-30, -10, 20, 30, 20, -10, -30],
    [-30, -10, 30, 40, 30, -10, -30],
    [-30, -10, 30, 40, 30, -10, -30],
    [-30, -20, -10, 0, -10, -20, -30],
    [-50, -40, -30, -20, -30, -40, -50],
];

/// Row as seen by `color`: Black's rows are mirrored so both sides read the
/// tables from their own advancing perspective.
#[inline]
pub const fn effective_row(square: Square, color: Color) -> usize {
    match color {
        Color::White => square.row() as usize,
        Color::Black => BOARD_SIZE - 1 - square.row() as usize,
    }
}

/// Unsigned table bonus for a piece of `color` and `kind` standing on `square`.
pub fn table_bonus(kind: PieceKind, color: Color, square: Square, endgame: bool) -> i32 {
    let table = match kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King if endgame => &KING_ENDGAME_TABLE,
        PieceKind::King => &KING_MIDDLEGAME_TABLE,
    };
    table[effective_row(square, color)][square.col() as usize]
}
