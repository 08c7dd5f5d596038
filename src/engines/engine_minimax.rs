//! Fixed-depth alpha-beta engine.

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::EngineError;
use crate::game_state::board::Board;
use crate::move_generation::attack_detection::attackers_to_square;
use crate::search::board_scoring::{BoardScorer, PositionalScorer};
use crate::search::minimax::{SearchConfig, Searcher};

pub struct MinimaxEngine<S: BoardScorer = PositionalScorer> {
    searcher: Searcher<S>,
}

impl MinimaxEngine<PositionalScorer> {
    pub fn new(depth: u8) -> Self {
        Self {
            searcher: Searcher::new(depth),
        }
    }
}

impl Default for MinimaxEngine<PositionalScorer> {
    fn default() -> Self {
        Self {
            searcher: Searcher::default(),
        }
    }
}

impl<S: BoardScorer> MinimaxEngine<S> {
    pub fn with_scorer(config: SearchConfig, scorer: S) -> Self {
        Self {
            searcher: Searcher::with_scorer(config, scorer),
        }
    }

    pub fn depth(&self) -> u8 {
        self.searcher.depth()
    }
}

impl<S: BoardScorer> Engine for MinimaxEngine<S> {
    fn name(&self) -> &str {
        "Rollerball Minimax"
    }

    fn choose_move(&mut self, board: &Board) -> Result<EngineOutput, EngineError> {
        let result = self.searcher.search(board);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info depth {} score {:.1} nodes {}",
            self.searcher.depth(),
            result.best_score,
            result.nodes
        ));
        if let Some(mv) = result.best_move {
            out.info_lines.push(format!("info pv {mv}"));
        }
        let mover = board.side_to_move();
        if let Some(king) = board.find_king(mover) {
            let checkers = attackers_to_square(board, king, mover.opposite());
            if !checkers.is_empty() {
                let listed: Vec<String> = checkers.iter().map(|sq| sq.to_string()).collect();
                out.info_lines
                    .push(format!("info string checkers {}", listed.join(" ")));
            }
        }
        out.best_move = result.best_move;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::MinimaxEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::board::Board;
    use crate::utils::layout::parse_layout;

    #[test]
    fn returns_a_legal_move_from_the_start() {
        let board = Board::new();
        let mut engine = MinimaxEngine::new(2);
        let out = engine.choose_move(&board).expect("engine should not fail");
        let mv = out.best_move.expect("start position has moves");
        assert!(board.legal_moves().contains(&mv));
        assert!(out.info_lines[0].starts_with("info depth 2"));
    }

    #[test]
    fn reports_no_move_when_mated() {
        let board = parse_layout("2k3R/R6/7/7/7/7/3K3 b").expect("layout should parse");
        let mut engine = MinimaxEngine::new(2);
        let out = engine.choose_move(&board).expect("engine should not fail");
        assert_eq!(out.best_move, None);
    }

    #[test]
    fn lists_checking_pieces() {
        let board = parse_layout("3k3/7/7/7/7/7/3RK2 b").expect("layout should parse");
        let mut engine = MinimaxEngine::new(1);
        let out = engine.choose_move(&board).expect("engine should not fail");
        assert!(out.best_move.is_some());
        assert!(out
            .info_lines
            .iter()
            .any(|line| line == "info string checkers (6,3)"));
    }

    #[test]
    fn quiet_position_reports_no_checkers() {
        let mut engine = MinimaxEngine::new(1);
        let out = engine.choose_move(&Board::new()).expect("engine should not fail");
        assert!(out.info_lines.iter().all(|line| !line.contains("checkers")));
    }
}
