//! Crate root module declarations for the Rollerball engine.
//!
//! Rollerball is a chess variant on a 7×7 board whose columns wrap around a
//! cylinder while rows stay bounded. This file exposes the rules core, move
//! generation, search, engines, the interactive session and utility helpers.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod geometry;
}

pub mod moves {
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod attack_detection;
    pub mod legal_move_generator;
    pub mod perft;
    pub mod pseudo_moves;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
    pub mod piece_square_tables;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod session {
    pub mod game_session;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod layout;
    pub mod render_board;
}
