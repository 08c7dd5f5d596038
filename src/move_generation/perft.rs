//! Perft: exhaustive legal-move tree counting.
//!
//! Used as a move-generation regression check and as the workload of the
//! perft benchmark.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::attack_detection::is_in_check;
use crate::move_generation::legal_move_generator::legal_moves_for_side_to_move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(board: &Board, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in legal_moves_for_side_to_move(board) {
        let mut local = PerftCounts::default();
        perft_recurse(board, mv, depth, 1, &mut local);
        total.merge(local);
    }
    total
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide(board: &Board, depth: u8) -> Vec<(Move, usize)> {
    if depth == 0 {
        return Vec::new();
    }

    legal_moves_for_side_to_move(board)
        .into_iter()
        .map(|mv| {
            let mut local = PerftCounts::default();
            perft_recurse(board, mv, depth, 1, &mut local);
            (mv, local.nodes)
        })
        .collect()
}

fn perft_recurse(
    board: &Board,
    mv: Move,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    let is_capture = board.piece_at(mv.to).is_some();
    let is_promotion = board.piece_at(mv.from).is_some_and(|piece| {
        piece.kind == PieceKind::Pawn && mv.to.row() == piece.color.promotion_row()
    });

    let mut next = board.clone();
    next.apply_move_unchecked(mv);

    if current_depth == search_depth {
        counts.nodes += 1;
        if is_capture {
            counts.captures += 1;
        }
        if is_promotion {
            counts.promotions += 1;
        }
        if is_in_check(&next, next.side_to_move()) {
            counts.checks += 1;
            if legal_moves_for_side_to_move(&next).is_empty() {
                counts.checkmates += 1;
            }
        }
        return;
    }

    for reply in legal_moves_for_side_to_move(&next) {
        perft_recurse(&next, reply, search_depth, current_depth + 1, counts);
    }
}
