//! Depth-limited minimax with alpha-beta pruning.
//!
//! Every node works on its own cloned board. The maximizing side is the color
//! to move at the root; its wins score `+WIN_SCORE`, its losses `-WIN_SCORE`,
//! and leaves are evaluated from its perspective. Siblings are searched in
//! generation order and ties keep the earliest move.

use tracing::debug;

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{DEFAULT_SEARCH_DEPTH, DRAW_SCORE, WIN_SCORE};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::legal_moves_for_side_to_move;
use crate::search::board_scoring::{BoardScorer, PositionalScorer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
}

impl SearchConfig {
    /// Depth is clamped to at least one ply.
    pub fn new(depth: u8) -> Self {
        Self {
            depth: depth.max(1),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEPTH)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: f64,
    pub nodes: u64,
}

/// Whose point of view a non-terminal leaf is scored from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LeafPerspective {
    /// Always the root maximizer.
    Maximizer,
    /// White at maximizing nodes, Black at minimizing nodes.
    NodeRole,
}

struct SearchContext {
    maximizer: Color,
    leaves: LeafPerspective,
    nodes: u64,
}

pub struct Searcher<S: BoardScorer = PositionalScorer> {
    config: SearchConfig,
    scorer: S,
}

impl Searcher<PositionalScorer> {
    pub fn new(depth: u8) -> Self {
        Self::with_scorer(SearchConfig::new(depth), PositionalScorer)
    }
}

impl Default for Searcher<PositionalScorer> {
    fn default() -> Self {
        Self::with_scorer(SearchConfig::default(), PositionalScorer)
    }
}

impl<S: BoardScorer> Searcher<S> {
    pub fn with_scorer(config: SearchConfig, scorer: S) -> Self {
        Self {
            config: SearchConfig::new(config.depth),
            scorer,
        }
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.config.depth
    }

    /// Best move for the side to move, or `None` when it has no legal move.
    pub fn find_best_move(&self, board: &Board) -> Option<Move> {
        self.search(board).best_move
    }

    pub fn search(&self, board: &Board) -> SearchResult {
        let mut ctx = SearchContext {
            maximizer: board.side_to_move(),
            leaves: LeafPerspective::Maximizer,
            nodes: 1,
        };

        let moves = legal_moves_for_side_to_move(board);
        if moves.is_empty() {
            return SearchResult {
                best_move: None,
                best_score: terminal_score(board.terminal_outcome(0), ctx.maximizer),
                nodes: ctx.nodes,
            };
        }

        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut best_move = None;
        let mut best_score = f64::NEG_INFINITY;

        for mv in moves {
            let mut child = board.clone();
            child.apply_move_unchecked(mv);
            let score = self.minimax_inner(&mut ctx, &child, self.config.depth - 1, alpha, beta, false);

            if score > best_score || best_move.is_none() {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
        }

        debug!(
            depth = self.config.depth,
            nodes = ctx.nodes,
            score = best_score,
            best = ?best_move,
            "search finished"
        );

        SearchResult {
            best_move,
            best_score,
            nodes: ctx.nodes,
        }
    }

    /// Minimax score of `board` with White as the maximizer.
    ///
    /// Terminal positions return exactly `±WIN_SCORE` (or the draw score)
    /// regardless of the remaining depth. Non-terminal leaves are scored from
    /// White's side at maximizing nodes and from Black's side otherwise.
    pub fn minimax(&self, board: &Board, depth: u8, alpha: f64, beta: f64, maximizing: bool) -> f64 {
        let mut ctx = SearchContext {
            maximizer: Color::White,
            leaves: LeafPerspective::NodeRole,
            nodes: 0,
        };
        self.minimax_inner(&mut ctx, board, depth, alpha, beta, maximizing)
    }

    fn minimax_inner(
        &self,
        ctx: &mut SearchContext,
        board: &Board,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> f64 {
        ctx.nodes += 1;

        if board.is_game_over() {
            return terminal_score(board.winner(), ctx.maximizer);
        }

        let moves = legal_moves_for_side_to_move(board);
        if let Some(outcome) = board.terminal_outcome(moves.len()) {
            return terminal_score(Some(outcome), ctx.maximizer);
        }

        if depth == 0 {
            let perspective = match ctx.leaves {
                LeafPerspective::Maximizer => ctx.maximizer,
                LeafPerspective::NodeRole if maximizing => Color::White,
                LeafPerspective::NodeRole => Color::Black,
            };
            return self.scorer.score(board, perspective);
        }

        if maximizing {
            let mut best = f64::NEG_INFINITY;
            for mv in moves {
                let mut child = board.clone();
                child.apply_move_unchecked(mv);
                let score = self.minimax_inner(ctx, &child, depth - 1, alpha, beta, false);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = f64::INFINITY;
            for mv in moves {
                let mut child = board.clone();
                child.apply_move_unchecked(mv);
                let score = self.minimax_inner(ctx, &child, depth - 1, alpha, beta, true);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

fn terminal_score(outcome: Option<Winner>, maximizer: Color) -> f64 {
    match outcome {
        Some(Winner::Draw) | None => DRAW_SCORE,
        Some(winner) if winner == Winner::from(maximizer) => WIN_SCORE,
        Some(_) => -WIN_SCORE,
    }
}
