//! Easy engine: a uniformly random legal move.

use rand::prelude::IndexedRandom;
use tracing::debug;

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::engines::seeded_rng::rng_from_seed;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_generator::generate_legal_moves;

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "StackMate Random"
    }

    fn choose_move(&self, board: &Board, side: Color, params: &SearchParams) -> EngineOutput {
        let legal_moves = generate_legal_moves(board, side);
        let mut out = EngineOutput {
            legal_moves: legal_moves.len(),
            ..EngineOutput::default()
        };

        let mut rng = rng_from_seed(params.seed);
        out.best_move = legal_moves.as_slice().choose(&mut rng).copied();

        debug!(
            engine = self.name(),
            legal_moves = out.legal_moves,
            picked = ?out.best_move.map(|m| (m.from, m.to)),
            "random engine picked a move"
        );
        out
    }
}
