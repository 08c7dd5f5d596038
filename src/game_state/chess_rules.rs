//! Canonical rule constants for Rollerball.

/// Standard starting layout. Black's back rank is row 0, White's is row 6;
/// both sides mirror each other file by file.
pub const STARTING_LAYOUT: &str = "rnbqkbn/ppppppp/7/7/7/PPPPPPP/RNBQKBN w";

/// Score of a won game at a terminal search node.
pub const WIN_SCORE: f64 = 1_000_000.0;

pub const DRAW_SCORE: f64 = 0.0;

/// Default search depth for the computer opponent.
pub const DEFAULT_SEARCH_DEPTH: u8 = 3;
