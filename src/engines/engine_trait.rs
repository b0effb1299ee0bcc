//! Engine abstraction for the computer side.
//!
//! Every engine sees a board snapshot, the side it plays and a seed, and
//! returns at most one move. Engines never touch the store and never draw on
//! OS entropy, so the same inputs always give the same move.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_generator::CandidateMove;

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchParams {
    pub seed: u64,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<CandidateMove>,
    pub legal_moves: usize,
    pub score: Option<i32>,
}

pub trait Engine: Send + Sync {
    fn name(&self) -> &str;

    fn choose_move(&self, board: &Board, side: Color, params: &SearchParams) -> EngineOutput;
}
