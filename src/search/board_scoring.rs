//! Static board evaluation.
//!
//! Search delegates leaf scoring to [`BoardScorer`] so alternate heuristics can
//! be swapped without touching search code. Every term is computed as
//! White-minus-Black and the total is negated for Black's perspective.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::geometry::{wrap_column, BOARD_SIZE};
use crate::move_generation::legal_move_generator::legal_move_count_for;
use crate::moves::king_moves::king_neighbours;
use crate::search::piece_square_tables::table_bonus;

const DOUBLED_PAWN_PENALTY: i32 = 10;
const ISOLATED_PAWN_PENALTY: i32 = 5;
const PASSED_PAWN_BASE: i32 = 20;
const PASSED_PAWN_PER_ROW: i32 = 5;
const MOBILITY_WEIGHT: f64 = 0.1;
const OPEN_KING_FILE_PENALTY: i32 = 10;
const BARE_KING_FLANKS_PENALTY: i32 = 15;
const PAWN_SHIELD_BONUS: i32 = 5;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of `perspective`; positive is good for it.
    fn score(&self, board: &Board, perspective: Color) -> f64;
}

/// Material only. Useful as a cheap baseline scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board, perspective: Color) -> f64 {
        from_perspective(material_white_minus_black(board) as f64, perspective)
    }
}

/// Full positional evaluation: material, piece-square tables, pawn structure,
/// mobility and king safety.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalScorer;

impl BoardScorer for PositionalScorer {
    fn score(&self, board: &Board, perspective: Color) -> f64 {
        evaluate(board, perspective)
    }
}

pub fn evaluate(board: &Board, perspective: Color) -> f64 {
    let endgame = is_endgame(board);
    let integral = material_white_minus_black(board)
        + piece_square_white_minus_black(board, endgame)
        + pawn_structure_white_minus_black(board)
        + king_safety_white_minus_black(board);
    let white_minus_black = integral as f64 + mobility_white_minus_black(board);
    from_perspective(white_minus_black, perspective)
}

#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 10,
        PieceKind::Knight => 30,
        PieceKind::Bishop => 30,
        PieceKind::Rook => 50,
        PieceKind::Queen => 90,
        PieceKind::King => 900,
    }
}

/// Endgame once at most one Queen remains on the board.
#[inline]
pub fn is_endgame(board: &Board) -> bool {
    board.count_pieces(PieceKind::Queen) <= 1
}

pub fn material_white_minus_black(board: &Board) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| sign(piece.color) * piece_value(piece.kind))
        .sum()
}

pub fn piece_square_white_minus_black(board: &Board, endgame: bool) -> i32 {
    board
        .pieces()
        .map(|(square, piece)| {
            sign(piece.color) * table_bonus(piece.kind, piece.color, square, endgame)
        })
        .sum()
}

/// Doubled, isolated and passed pawns.
pub fn pawn_structure_white_minus_black(board: &Board) -> i32 {
    let mut score = 0i32;

    for color in [Color::White, Color::Black] {
        let pawn = Piece::new(PieceKind::Pawn, color);
        let mut side_score = 0i32;

        for col in 0..BOARD_SIZE as i32 {
            let on_file = pawns_on_file(board, pawn, col, 0..BOARD_SIZE as i32);
            if on_file > 1 {
                side_score -= (on_file as i32 - 1) * DOUBLED_PAWN_PENALTY;
            }

            let isolated = on_file > 0
                && pawns_on_file(board, pawn, col - 1, 0..BOARD_SIZE as i32) == 0
                && pawns_on_file(board, pawn, col + 1, 0..BOARD_SIZE as i32) == 0;
            if isolated {
                side_score -= ISOLATED_PAWN_PENALTY;
            }
        }

        for (square, piece) in board.pieces() {
            if piece == pawn && is_passed_pawn(board, square, color) {
                side_score += PASSED_PAWN_BASE + PASSED_PAWN_PER_ROW * advancement(square, color);
            }
        }

        score += sign(color) * side_score;
    }

    score
}

/// ±0.1 per legal move, probing both colors without touching side to move.
pub fn mobility_white_minus_black(board: &Board) -> f64 {
    let white = legal_move_count_for(board, Color::White) as f64;
    let black = legal_move_count_for(board, Color::Black) as f64;
    (white - black) * MOBILITY_WEIGHT
}

/// Open files ahead of each King and the pawn shield around it.
pub fn king_safety_white_minus_black(board: &Board) -> i32 {
    let mut score = 0i32;

    for color in [Color::White, Color::Black] {
        let Some(king_sq) = board.find_king(color) else {
            continue;
        };
        let pawn = Piece::new(PieceKind::Pawn, color);
        let ahead = rows_ahead(king_sq, color);
        let col = king_sq.col() as i32;
        let mut side_score = 0i32;

        if pawns_on_file(board, pawn, col, ahead.clone()) == 0 {
            side_score -= OPEN_KING_FILE_PENALTY;
        }
        if pawns_on_file(board, pawn, col - 1, ahead.clone()) == 0
            && pawns_on_file(board, pawn, col + 1, ahead) == 0
        {
            side_score -= BARE_KING_FLANKS_PENALTY;
        }

        let shield = king_neighbours(king_sq)
            .into_iter()
            .filter(|sq| board.piece_at(*sq) == Some(pawn))
            .count() as i32;
        side_score += shield * PAWN_SHIELD_BONUS;

        score += sign(color) * side_score;
    }

    score
}

/// No enemy pawn anywhere ahead on the pawn's own file or either wrap-adjacent file.
fn is_passed_pawn(board: &Board, square: Square, color: Color) -> bool {
    let enemy_pawn = Piece::new(PieceKind::Pawn, color.opposite());
    let col = square.col() as i32;
    (-1..=1).all(|d_col| pawns_on_file(board, enemy_pawn, col + d_col, rows_ahead(square, color)) == 0)
}

/// Rows ahead of `square` toward `color`'s promotion row, excluding its own row.
fn rows_ahead(square: Square, color: Color) -> std::ops::Range<i32> {
    let row = square.row() as i32;
    match color {
        Color::White => 0..row,
        Color::Black => row + 1..BOARD_SIZE as i32,
    }
}

/// Rows advanced from the pawn's point of view (distance from its home edge).
#[inline]
fn advancement(square: Square, color: Color) -> i32 {
    match color {
        Color::White => BOARD_SIZE as i32 - 1 - square.row() as i32,
        Color::Black => square.row() as i32,
    }
}

fn pawns_on_file(board: &Board, pawn: Piece, col: i32, rows: std::ops::Range<i32>) -> usize {
    let col = wrap_column(col);
    rows.filter(|row| board.piece_at(Square::new(*row, col)) == Some(pawn))
        .count()
}

#[inline]
const fn sign(color: Color) -> i32 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

#[inline]
fn from_perspective(white_minus_black: f64, perspective: Color) -> f64 {
    match perspective {
        Color::White => white_minus_black,
        Color::Black => -white_minus_black,
    }
}
