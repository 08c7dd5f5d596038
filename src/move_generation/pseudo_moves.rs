//! Pseudo-legal move generation per piece.
//!
//! Destinations are normalized squares not occupied by a friendly piece.
//! Duplicates produced by row clamping on the edge are dropped, keeping the
//! first occurrence so generation order stays deterministic.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::{pawn_attacks, pawn_push};
use crate::moves::sliding_moves::sliding_attacks;

/// Pseudo-moves of the piece on `from`. Empty for an empty square or a piece
/// of the side not to move.
pub fn pseudo_moves_for(board: &Board, from: Square) -> Vec<Move> {
    match board.piece_at(from) {
        Some(piece) if piece.color == board.side_to_move() => {
            pseudo_moves_for_piece(board, from, piece)
        }
        _ => Vec::new(),
    }
}

/// Pseudo-moves of `piece` standing on `from`, regardless of whose turn it is.
pub(crate) fn pseudo_moves_for_piece(board: &Board, from: Square, piece: Piece) -> Vec<Move> {
    let mut out = Vec::with_capacity(16);

    match piece.kind {
        PieceKind::Pawn => {
            let push = pawn_push(from, piece.color);
            if board.piece_at(push).is_none() {
                push_unique(&mut out, Move::new(from, push));
            }
            for target in pawn_attacks(from, piece.color) {
                if is_enemy(board, target, piece.color) {
                    push_unique(&mut out, Move::new(from, target));
                }
            }
        }
        PieceKind::Knight => push_targets(board, from, piece.color, knight_attacks(from), &mut out),
        PieceKind::King => push_targets(board, from, piece.color, king_attacks(from), &mut out),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            let targets = sliding_attacks(board, from, piece.kind);
            push_targets(board, from, piece.color, targets, &mut out);
        }
    }

    out
}

fn push_targets(
    board: &Board,
    from: Square,
    color: Color,
    targets: impl IntoIterator<Item = Square>,
    out: &mut Vec<Move>,
) {
    for target in targets {
        if !is_friendly(board, target, color) {
            push_unique(out, Move::new(from, target));
        }
    }
}

#[inline]
fn push_unique(out: &mut Vec<Move>, mv: Move) {
    if !out.contains(&mv) {
        out.push(mv);
    }
}

#[inline]
fn is_friendly(board: &Board, square: Square, color: Color) -> bool {
    Board::color_of(board.piece_at(square)) == Some(color)
}

#[inline]
fn is_enemy(board: &Board, square: Square, color: Color) -> bool {
    Board::color_of(board.piece_at(square)) == Some(color.opposite())
}
