//! Move selection for the automated (black) side.

use tracing::debug;

use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::{Engine, SearchParams};
use crate::engines::seeded_rng::seed_for;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Difficulty};
use crate::game_state::game_record::GameId;
use crate::move_generation::legal_move_generator::CandidateMove;

/// Maps a difficulty to its engine and feeds it a seed derived from the game.
pub struct ComputerAgent {
    easy: Box<dyn Engine>,
    hard: Box<dyn Engine>,
}

impl Default for ComputerAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputerAgent {
    pub fn new() -> Self {
        Self {
            easy: Box::new(RandomEngine::new()),
            hard: Box::new(GreedyEngine::new()),
        }
    }

    pub fn engine(&self, difficulty: Difficulty) -> &dyn Engine {
        match difficulty {
            Difficulty::Easy => self.easy.as_ref(),
            Difficulty::Hard => self.hard.as_ref(),
        }
    }

    /// Picks a legal black move, or `None` when black has none. The choice is
    /// a pure function of the board, difficulty, game id and move count.
    pub fn select_move(
        &self,
        board: &Board,
        difficulty: Difficulty,
        game_id: GameId,
        move_count: u32,
    ) -> Option<CandidateMove> {
        let engine = self.engine(difficulty);
        let params = SearchParams {
            seed: seed_for(game_id, move_count),
        };
        let out = engine.choose_move(board, Color::Black, &params);
        debug!(
            game_id,
            move_count,
            engine = engine.name(),
            legal_moves = out.legal_moves,
            score = ?out.score,
            "computer agent consulted engine"
        );
        out.best_move
    }
}
