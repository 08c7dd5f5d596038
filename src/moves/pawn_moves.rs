//! Pawn shapes. A pawn's attack direction is its own advancing direction.

use crate::game_state::chess_types::{Color, Square};

const CAPTURE_COLUMN_STEPS: [i32; 2] = [-1, 1];

/// Square one step forward for a pawn of `color`.
#[inline]
pub fn pawn_push(from: Square, color: Color) -> Square {
    from.offset(color.pawn_direction(), 0)
}

/// The two diagonally-forward squares a pawn of `color` attacks.
#[inline]
pub fn pawn_attacks(from: Square, color: Color) -> [Square; 2] {
    CAPTURE_COLUMN_STEPS.map(|d_col| from.offset(color.pawn_direction(), d_col))
}
