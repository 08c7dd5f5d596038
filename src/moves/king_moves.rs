use crate::game_state::chess_types::Square;

pub const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The eight neighbours, normalized. On an edge row some collapse onto the
/// king's own row (or its own square); callers filter those out.
#[inline]
pub fn king_attacks(from: Square) -> [Square; 8] {
    KING_OFFSETS.map(|(d_row, d_col)| from.offset(d_row, d_col))
}

/// Distinct neighbouring squares, excluding `from` itself.
pub fn king_neighbours(from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(8);
    for sq in king_attacks(from) {
        if sq != from && !out.contains(&sq) {
            out.push(sq);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{king_attacks, king_neighbours};
    use crate::game_state::chess_types::Square;

    #[test]
    fn king_neighbours_wrap_columns() {
        let targets = king_attacks(Square::new(3, 0));
        assert!(targets.contains(&Square::new(2, 6)));
        assert!(targets.contains(&Square::new(4, 6)));
        assert_eq!(king_neighbours(Square::new(3, 0)).len(), 8);
    }

    #[test]
    fn king_on_edge_row_has_five_neighbours() {
        let neighbours = king_neighbours(Square::new(6, 2));
        assert_eq!(neighbours.len(), 5);
        assert!(!neighbours.contains(&Square::new(6, 2)));
    }
}
