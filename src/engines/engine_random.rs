//! Uniform random-move engine.
//!
//! Used for diagnostics, match-harness opponents, and low-strength play.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::EngineError;
use crate::game_state::board::Board;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Reproducible move choices for tests and seeded matches.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Rollerball Random"
    }

    fn choose_move(&mut self, board: &Board) -> Result<EngineOutput, EngineError> {
        let legal_moves = board.legal_moves();

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("info string random_engine legal_moves {}", legal_moves.len()));

        if legal_moves.is_empty() {
            return Ok(out);
        }

        let picked = legal_moves
            .as_slice()
            .choose(&mut self.rng)
            .ok_or_else(|| EngineError::Failed("failed to choose a random move".to_owned()))?;

        out.best_move = Some(*picked);
        Ok(out)
    }
}
