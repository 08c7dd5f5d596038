//! Error types for the fallible edges of the crate.
//!
//! Rule operations themselves never fail: illegal requests are rejected with
//! `false` or `None`. These enums cover text input, engines, and the terminal
//! front-end.

use thiserror::Error;

use crate::game_state::chess_types::Move;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("missing board rows in layout")]
    MissingRows,

    #[error("missing side-to-move field in layout")]
    MissingSideToMove,

    #[error("layout has extra trailing fields")]
    TrailingFields,

    #[error("layout must contain 7 rows, found {0}")]
    WrongRowCount(usize),

    #[error("row {row} spans {width} columns, expected 7")]
    WrongRowWidth { row: usize, width: usize },

    #[error("invalid piece character '{0}' in layout")]
    InvalidPiece(char),

    #[error("invalid side-to-move field: {0}")]
    InvalidSideToMove(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("engine returned illegal move {0}")]
    IllegalMove(Move),

    #[error("engine failed: {0}")]
    Failed(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("expected a square as 'row col', got: {0}")]
    InvalidSquare(String),
}
