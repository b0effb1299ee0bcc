//! Crate root module declarations for the Stack Mate game engine.
//!
//! Exposes the board model, move validation, computer opponents, the game
//! store and service layer, and the line-protocol host so the binary, tests
//! and benches can import stable module paths.

pub mod config;
pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_record;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_shared;
    pub mod move_validator;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_generator;
}

pub mod search {
    pub mod board_scoring;
}

pub mod engines {
    pub mod computer_agent;
    pub mod engine_greedy;
    pub mod engine_random;
    pub mod engine_trait;
    pub mod seeded_rng;
}

pub mod store {
    pub mod game_store;
}

pub mod service {
    pub mod game_service;
    pub mod lifecycle;
    pub mod turn_coordinator;
}

pub mod protocol {
    pub mod command_loop;
}

pub mod utils {
    pub mod render_board;
}
