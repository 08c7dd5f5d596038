//! Terminal board renderer.
//!
//! Rows are printed top to bottom from row 0 (Black's home row), with row and
//! column indices on the edges so squares can be typed back as `row col`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::geometry::BOARD_SIZE;

pub fn render_board(board: &Board) -> String {
    render_board_with_marks(board, &[])
}

/// Render with `*` marking empty squares listed in `marks` (for example the
/// destinations of a selected piece).
pub fn render_board_with_marks(board: &Board, marks: &[Square]) -> String {
    let mut out = String::new();
    out.push_str(&column_header());

    for row in 0..BOARD_SIZE {
        out.push(char::from(b'0' + row as u8));
        out.push(' ');

        for col in 0..BOARD_SIZE {
            let square = Square::new(row as i32, col as i32);
            let ch = match board.piece_at(square) {
                Some(piece) => piece_to_unicode(piece),
                None if marks.contains(&square) => '*',
                None => '·',
            };
            out.push(ch);
            if col + 1 < BOARD_SIZE {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + row as u8));
        out.push('\n');
    }

    out.push_str(column_header().trim_end());
    out
}

fn column_header() -> String {
    let labels: Vec<String> = (0..BOARD_SIZE).map(|col| col.to_string()).collect();
    format!("  {}\n", labels.join(" "))
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::{render_board, render_board_with_marks};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Square;

    #[test]
    fn renders_start_position_rows() {
        let text = render_board(&Board::new());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "  0 1 2 3 4 5 6");
        assert_eq!(lines[1], "0 ♜ ♞ ♝ ♛ ♚ ♝ ♞ 0");
        assert_eq!(lines[4], "3 · · · · · · · 3");
        assert_eq!(lines[7], "6 ♖ ♘ ♗ ♕ ♔ ♗ ♘ 6");
        assert_eq!(lines[8], "  0 1 2 3 4 5 6");
    }

    #[test]
    fn marks_only_show_on_empty_squares() {
        let text = render_board_with_marks(&Board::new(), &[Square::new(4, 3), Square::new(5, 3)]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[5], "4 · · · * · · · 4");
        assert_eq!(lines[6], "5 ♙ ♙ ♙ ♙ ♙ ♙ ♙ 5");
    }
}
