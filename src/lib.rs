//! Crate root module declarations for the Parlor Chess rules engine.
//!
//! This file exposes the top-level subsystems (game state, move generation,
//! and utility helpers) so the driver binary, tests, and external tooling can
//! import stable module paths.

pub mod game_state {
    pub mod board;
    pub mod chess_errors;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_engine;
    pub mod game_state;
    pub mod move_record;
}

pub mod move_generation {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod legal_move_checks;
    pub mod move_generator;
    pub mod pawn_moves;
    pub mod perft;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding_moves;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_game_state;
}
