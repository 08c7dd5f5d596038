//! Engine abstraction layer used by the session and match harness.
//!
//! Different move-choosing strategies sit behind one trait so callers can
//! swap them at runtime.

use crate::errors::EngineError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick a move for the side to move. `Ok` with no move means the position
    /// has no legal move.
    fn choose_move(&mut self, board: &Board) -> Result<EngineOutput, EngineError>;
}
