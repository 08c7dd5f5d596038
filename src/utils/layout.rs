//! Board layout text.
//!
//! Seven `/`-separated rows from row 0 (Black's home) to row 6 (White's home),
//! letters `pnbrqk` for Black and `PNBRQK` for White, digit runs for empty
//! squares, then `w` or `b` for the side to move. For example the starting
//! position is `rnbqkbn/ppppppp/7/7/7/PPPPPPP/RNBQKBN w`.

use crate::errors::LayoutError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::geometry::BOARD_SIZE;

/// Parse a layout. Terminal flags start cleared; call
/// [`Board::refresh_terminal_state`] to evaluate them.
pub fn parse_layout(layout: &str) -> Result<Board, LayoutError> {
    let mut parts = layout.split_whitespace();

    let rows_part = parts.next().ok_or(LayoutError::MissingRows)?;
    let side_part = parts.next().ok_or(LayoutError::MissingSideToMove)?;
    if parts.next().is_some() {
        return Err(LayoutError::TrailingFields);
    }

    let mut board = Board::empty(parse_side_to_move(side_part)?);
    parse_rows(rows_part, &mut board)?;
    Ok(board)
}

pub fn generate_layout(board: &Board) -> String {
    let mut rows = Vec::with_capacity(BOARD_SIZE);

    for row in 0..BOARD_SIZE {
        let mut text = String::new();
        let mut empty_run = 0u32;

        for col in 0..BOARD_SIZE {
            match board.piece_at(Square::new(row as i32, col as i32)) {
                Some(piece) => {
                    if empty_run > 0 {
                        text.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    text.push(piece.to_char());
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            text.push_str(&empty_run.to_string());
        }
        rows.push(text);
    }

    let side = match board.side_to_move() {
        Color::White => 'w',
        Color::Black => 'b',
    };
    format!("{} {}", rows.join("/"), side)
}

fn parse_rows(rows_part: &str, board: &mut Board) -> Result<(), LayoutError> {
    let rows: Vec<&str> = rows_part.split('/').collect();
    if rows.len() != BOARD_SIZE {
        return Err(LayoutError::WrongRowCount(rows.len()));
    }

    for (row, row_text) in rows.iter().enumerate() {
        let mut col = 0usize;

        for ch in row_text.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                col += empty_count as usize;
                continue;
            }

            let piece = Piece::from_char(ch).ok_or(LayoutError::InvalidPiece(ch))?;
            if col >= BOARD_SIZE {
                return Err(LayoutError::WrongRowWidth {
                    row,
                    width: col + 1,
                });
            }
            board.set_piece(Square::new(row as i32, col as i32), Some(piece));
            col += 1;
        }

        if col != BOARD_SIZE {
            return Err(LayoutError::WrongRowWidth { row, width: col });
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, LayoutError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(LayoutError::InvalidSideToMove(side_part.to_owned())),
    }
}
