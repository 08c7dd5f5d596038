//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other with an optional
//! seeded random opening prefix, and aggregates series statistics.

use chrono::{DateTime, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;
use tracing::{debug, info};

use crate::engines::engine_trait::Engine;
use crate::errors::EngineError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWin,
    BlackWin,
    DrawStalemate,
    DrawMaxPlies,
}

impl MatchOutcome {
    fn from_winner(winner: Option<Winner>) -> Option<Self> {
        match winner? {
            Winner::White => Some(Self::WhiteWin),
            Winner::Black => Some(Self::BlackWin),
            Winner::Draw => Some(Self::DrawStalemate),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, color: Color },
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_min_plies: 0,
            opening_max_plies: 4,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub started_at: DateTime<Utc>,
    pub final_board: Board,
    pub opening_moves: Vec<Move>,
    pub played_moves: Vec<Move>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub overall_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
            self.overall_avg_move_time_ms
        )
    }
}

/// Play a single seeded match from the starting position.
///
/// `engine_white` is White, `engine_black` is Black.
pub fn play_engine_match(
    mut engine_white: Box<dyn Engine>,
    mut engine_black: Box<dyn Engine>,
    seed: u64,
    config: MatchConfig,
) -> Result<MatchResult, EngineError> {
    play_match_internal(
        Board::new(),
        engine_white.as_mut(),
        engine_black.as_mut(),
        seed,
        config,
        true,
    )
}

/// Play a match from a caller-provided board. No random opening is applied.
pub fn play_engine_match_from_board(
    mut engine_white: Box<dyn Engine>,
    mut engine_black: Box<dyn Engine>,
    start: Board,
    config: MatchConfig,
) -> Result<MatchResult, EngineError> {
    play_match_internal(
        start,
        engine_white.as_mut(),
        engine_black.as_mut(),
        0,
        config,
        false,
    )
}

fn play_match_internal(
    mut board: Board,
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    seed: u64,
    config: MatchConfig,
    apply_random_opening: bool,
) -> Result<MatchResult, EngineError> {
    let started_at = Utc::now();
    engine_white.new_game();
    engine_black.new_game();

    let opening_moves = if apply_random_opening {
        apply_seeded_random_opening(
            &mut board,
            seed,
            config.opening_min_plies,
            config.opening_max_plies,
        )
    } else {
        Vec::new()
    };
    board.refresh_terminal_state();

    let mut played_moves = Vec::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    let mut outcome = MatchOutcome::DrawMaxPlies;
    for _ in 0..config.max_plies {
        if let Some(finished) = MatchOutcome::from_winner(board.winner()) {
            outcome = finished;
            break;
        }

        let legal_moves = board.legal_moves();
        if legal_moves.is_empty() {
            board.refresh_terminal_state();
            outcome = MatchOutcome::from_winner(board.winner()).unwrap_or(MatchOutcome::DrawStalemate);
            break;
        }

        let mover = board.side_to_move();
        let started = Instant::now();
        let out = match mover {
            Color::White => engine_white.choose_move(&board)?,
            Color::Black => engine_black.choose_move(&board)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::White => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Black => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let Some(chosen) = out.best_move else {
            let name = match mover {
                Color::White => engine_white.name(),
                Color::Black => engine_black.name(),
            };
            return Err(EngineError::Failed(format!(
                "{name} returned no move with {} legal moves available",
                legal_moves.len()
            )));
        };
        if !board.attempt_move(chosen.from, chosen.to) {
            return Err(EngineError::IllegalMove(chosen));
        }
        debug!(%chosen, side = %mover, "match move");
        played_moves.push(chosen);
    }

    // The last ply may have ended the game.
    if outcome == MatchOutcome::DrawMaxPlies {
        if let Some(finished) = MatchOutcome::from_winner(board.winner()) {
            outcome = finished;
        }
    }

    Ok(MatchResult {
        outcome,
        started_at,
        final_board: board,
        opening_moves,
        played_moves,
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
    })
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player colors are randomized each game (deterministic from `base_seed`).
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> Result<MatchSeriesStats, EngineError>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_white = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        if config.verbose {
            let (white, black) = if player1_is_white {
                ("Player1", "Player2")
            } else {
                ("Player2", "Player1")
            };
            info!(game = i + 1, games = config.games, seed, white, black, "series game starting");
        }

        let result = if player1_is_white {
            play_engine_match(player1_factory(), player2_factory(), seed, config.per_game)?
        } else {
            play_engine_match(player2_factory(), player1_factory(), seed, config.per_game)?
        };

        let (p1_moves, p2_moves, p1_ns, p2_ns) = if player1_is_white {
            (
                result.white_move_count,
                result.black_move_count,
                result.white_total_time_ns,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.white_move_count,
                result.black_total_time_ns,
                result.white_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let mapped = match result.outcome {
            MatchOutcome::WhiteWin | MatchOutcome::BlackWin => {
                let color = if result.outcome == MatchOutcome::WhiteWin {
                    Color::White
                } else {
                    Color::Black
                };
                let player = if (color == Color::White) == player1_is_white {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWin { player, color }
            }
            MatchOutcome::DrawStalemate => {
                stats.draws += 1;
                SeriesOutcome::DrawStalemate
            }
            MatchOutcome::DrawMaxPlies => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
        };
        stats.outcomes.push(mapped);

        if config.verbose {
            info!(
                game = i + 1,
                result = ?mapped,
                plies = result.played_moves.len(),
                p1_wins = stats.player1_wins,
                p2_wins = stats.player2_wins,
                draws = stats.draws,
                "series game finished"
            );
        }
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    let total_ns = stats
        .player1_total_time_ns
        .saturating_add(stats.player2_total_time_ns);
    let total_moves = stats.player1_moves.saturating_add(stats.player2_moves);
    stats.overall_avg_move_time_ms = avg_ns_per_move_ms(total_ns, total_moves);

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

fn apply_seeded_random_opening(
    board: &mut Board,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> Vec<Move> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut opening_moves = Vec::new();

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    for _ in 0..target_plies {
        if board.is_game_over() {
            break;
        }
        let legal_moves = board.legal_moves();
        if legal_moves.is_empty() {
            break;
        }
        let chosen = legal_moves[rng.random_range(0..legal_moves.len())];
        if board.attempt_move(chosen.from, chosen.to) {
            opening_moves.push(chosen);
        }
    }

    opening_moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_minimax::MinimaxEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::engines::engine_trait::EngineOutput;
    use crate::utils::layout::parse_layout;

    fn random(seed: u64) -> Box<dyn Engine> {
        Box::new(RandomEngine::seeded(seed))
    }

    struct SilentEngine;

    impl Engine for SilentEngine {
        fn name(&self) -> &str {
            "silent"
        }

        fn choose_move(&mut self, _board: &Board) -> Result<EngineOutput, EngineError> {
            Ok(EngineOutput::default())
        }
    }

    #[test]
    fn seeded_matches_are_reproducible() {
        let config = MatchConfig {
            max_plies: 30,
            opening_min_plies: 2,
            opening_max_plies: 6,
        };
        let a = play_engine_match(random(1), random(2), 11, config).expect("match should run");
        let b = play_engine_match(random(1), random(2), 11, config).expect("match should run");
        assert_eq!(a.opening_moves, b.opening_moves);
        assert_eq!(a.played_moves, b.played_moves);
        assert_eq!(a.outcome, b.outcome);
        assert_eq!(a.final_board, b.final_board);
        assert!((2..=6).contains(&a.opening_moves.len()));
    }

    #[test]
    fn move_counts_match_played_moves() {
        let config = MatchConfig {
            max_plies: 20,
            opening_min_plies: 0,
            opening_max_plies: 0,
        };
        let result = play_engine_match(random(3), random(4), 0, config).expect("match should run");
        assert!(result.opening_moves.is_empty());
        assert_eq!(
            (result.white_move_count + result.black_move_count) as usize,
            result.played_moves.len()
        );
        assert!(result.played_moves.len() <= 20);
    }

    #[test]
    fn minimax_converts_mate_in_one() {
        let start = parse_layout("2k4/R6/7/7/7/7/3K2R w").expect("layout should parse");
        let result = play_engine_match_from_board(
            Box::new(MinimaxEngine::new(1)),
            random(5),
            start,
            MatchConfig::default(),
        )
        .expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::WhiteWin);
        assert_eq!(result.played_moves.len(), 1);
        assert!(result.final_board.is_game_over());
    }

    #[test]
    fn terminal_start_plays_no_moves() {
        let start = parse_layout("3k3/7/2Q2K1/7/7/7/7 b").expect("layout should parse");
        let result =
            play_engine_match_from_board(random(6), random(7), start, MatchConfig::default())
                .expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::DrawStalemate);
        assert!(result.played_moves.is_empty());
    }

    #[test]
    fn missing_move_with_legal_moves_is_an_engine_failure() {
        let result = play_engine_match_from_board(
            Box::new(SilentEngine),
            random(10),
            Board::new(),
            MatchConfig::default(),
        );
        match result {
            Err(EngineError::Failed(message)) => assert!(message.contains("silent")),
            other => panic!("expected engine failure, got {:?}", other.map(|r| r.outcome)),
        }
    }

    #[test]
    fn zero_ply_budget_is_a_max_plies_draw() {
        let config = MatchConfig {
            max_plies: 0,
            ..MatchConfig::default()
        };
        let result = play_engine_match_from_board(random(8), random(9), Board::new(), config)
            .expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::DrawMaxPlies);
    }

    #[test]
    fn series_accounts_for_every_game() {
        let config = MatchSeriesConfig {
            games: 4,
            base_seed: 42,
            per_game: MatchConfig {
                max_plies: 16,
                opening_min_plies: 0,
                opening_max_plies: 2,
            },
            verbose: false,
        };
        let stats = play_engine_match_series(
            || Box::new(RandomEngine::seeded(1)),
            || Box::new(RandomEngine::seeded(2)),
            config,
        )
        .expect("series should run");
        assert_eq!(stats.games, 4);
        assert_eq!(stats.outcomes.len(), 4);
        assert_eq!(stats.player1_wins + stats.player2_wins + stats.draws, 4);
        assert!(stats.report().starts_with("games=4 "));
    }
}
