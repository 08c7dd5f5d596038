use crate::game_state::chess_types::Square;

pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Knight targets, each normalized. Near the top or bottom edge the row
/// clamps, so a target can collapse onto the knight's own row.
#[inline]
pub fn knight_attacks(from: Square) -> [Square; 8] {
    KNIGHT_OFFSETS.map(|(d_row, d_col)| from.offset(d_row, d_col))
}
