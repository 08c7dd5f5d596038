//! Cylindrical board geometry.
//!
//! Files wrap around (column 6 is adjacent to column 0) while ranks are
//! bounded and clamp to the nearest edge. Every coordinate is normalized here
//! before it touches the grid.

pub const BOARD_SIZE: usize = 7;

const MAX_INDEX: i32 = BOARD_SIZE as i32 - 1;

#[inline]
pub fn clamp_row(row: i32) -> i32 {
    row.clamp(0, MAX_INDEX)
}

/// True mathematical modulo, never negative.
#[inline]
pub fn wrap_column(col: i32) -> i32 {
    col.rem_euclid(BOARD_SIZE as i32)
}

#[inline]
pub fn normalize(row: i32, col: i32) -> (i32, i32) {
    let normalized = (clamp_row(row), wrap_column(col));
    debug_assert!(in_bounds(normalized.0, normalized.1));
    normalized
}

#[inline]
pub fn in_bounds(row: i32, col: i32) -> bool {
    (0..=MAX_INDEX).contains(&row) && (0..=MAX_INDEX).contains(&col)
}

/// Whether a raw row lies on the board before clamping.
///
/// Sliding rays stop here: rows never wrap, so a ray that steps past the top
/// or bottom edge is finished rather than re-reading the clamped edge square.
#[inline]
pub fn row_on_board(row: i32) -> bool {
    clamp_row(row) == row
}

#[cfg(test)]
mod tests {
    use super::{clamp_row, in_bounds, normalize, row_on_board, wrap_column};

    #[test]
    fn wrap_column_is_periodic() {
        for col in -20..20 {
            for k in -3..=3 {
                assert_eq!(wrap_column(col), wrap_column(col + 7 * k));
            }
            assert!((0..7).contains(&wrap_column(col)));
        }
        assert_eq!(wrap_column(-1), 6);
        assert_eq!(wrap_column(7), 0);
    }

    #[test]
    fn clamp_row_is_idempotent_and_bounded() {
        for row in -10..17 {
            let clamped = clamp_row(row);
            assert!((0..=6).contains(&clamped));
            assert_eq!(clamp_row(clamped), clamped);
        }
        assert_eq!(clamp_row(-4), 0);
        assert_eq!(clamp_row(9), 6);
    }

    #[test]
    fn normalized_coordinates_are_always_in_bounds() {
        for row in -9..16 {
            for col in -15..15 {
                let (r, c) = normalize(row, col);
                assert!(in_bounds(r, c));
            }
        }
        assert!(!in_bounds(7, 0));
        assert!(!in_bounds(0, -1));
    }

    #[test]
    fn row_on_board_rejects_clamped_rows() {
        assert!(row_on_board(0));
        assert!(row_on_board(6));
        assert!(!row_on_board(-1));
        assert!(!row_on_board(7));
    }
}
