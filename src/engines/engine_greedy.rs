//! Hard engine: greedy capture with a shallow material check.
//!
//! Moves are ranked by the value of the captured piece first. Among equal
//! captures the resulting position is scored for the mover (material balance
//! minus the most valuable own piece the opponent could take next), and any
//! remaining tie is broken by the seeded generator.

use rand::prelude::IndexedRandom;
use tracing::debug;

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::engines::seeded_rng::rng_from_seed;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_generator::{generate_legal_moves, CandidateMove};
use crate::search::board_scoring::{BoardScorer, MaterialScorer};

pub struct GreedyEngine<S: BoardScorer = MaterialScorer> {
    scorer: S,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self {
            scorer: MaterialScorer,
        }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BoardScorer> GreedyEngine<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }

    fn capture_value(mv: &CandidateMove) -> i32 {
        mv.captured.map(MaterialScorer::piece_value).unwrap_or(0)
    }

    /// Score of the position after `mv`, from `side`'s point of view.
    fn position_value(&self, board: &Board, side: Color, mv: &CandidateMove) -> i32 {
        let next = board.with_move(mv.from, mv.to);
        let exposed = generate_legal_moves(&next, side.opposite())
            .iter()
            .map(Self::capture_value)
            .max()
            .unwrap_or(0);
        self.scorer.score(&next, side) - exposed
    }
}

impl<S: BoardScorer> Engine for GreedyEngine<S> {
    fn name(&self) -> &str {
        "StackMate Greedy"
    }

    fn choose_move(&self, board: &Board, side: Color, params: &SearchParams) -> EngineOutput {
        let legal_moves = generate_legal_moves(board, side);
        let mut out = EngineOutput {
            legal_moves: legal_moves.len(),
            ..EngineOutput::default()
        };

        if legal_moves.is_empty() {
            return out;
        }

        let mut best_key = (i32::MIN, i32::MIN);
        let mut best_moves = Vec::new();

        for mv in &legal_moves {
            let key = (Self::capture_value(mv), self.position_value(board, side, mv));
            if key > best_key {
                best_key = key;
                best_moves.clear();
                best_moves.push(*mv);
            } else if key == best_key {
                best_moves.push(*mv);
            }
        }

        let mut rng = rng_from_seed(params.seed);
        out.best_move = best_moves.as_slice().choose(&mut rng).copied();
        out.score = Some(best_key.1);

        debug!(
            engine = self.name(),
            legal_moves = out.legal_moves,
            candidates = best_moves.len(),
            capture_value = best_key.0,
            position_value = best_key.1,
            "greedy engine picked a move"
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{piece_code, PieceKind};

    fn params() -> SearchParams {
        SearchParams { seed: 3 }
    }

    #[test]
    fn prefers_the_most_valuable_capture() {
        let mut board = Board::new_empty();
        board.set(0, piece_code(Color::Black, PieceKind::King));
        board.set(27, piece_code(Color::Black, PieceKind::Rook));
        board.set(31, piece_code(Color::White, PieceKind::Pawn));
        board.set(59, piece_code(Color::White, PieceKind::Queen));
        board.set(63, piece_code(Color::White, PieceKind::King));

        let out = GreedyEngine::new().choose_move(&board, Color::Black, &params());
        let mv = out.best_move.expect("black has moves");
        assert_eq!((mv.from, mv.to), (27, 59));
        assert_eq!(mv.captured, Some(PieceKind::Queen));
    }

    #[test]
    fn avoids_hanging_a_piece_when_nothing_to_capture() {
        // Knight on b5 (25) could jump to a3 (40) or c3 (42), both covered
        // by the white pawn on b2 (49).
        let mut board = Board::new_empty();
        board.set(25, piece_code(Color::Black, PieceKind::Knight));
        board.set(4, piece_code(Color::Black, PieceKind::King));
        board.set(49, piece_code(Color::White, PieceKind::Pawn));
        board.set(60, piece_code(Color::White, PieceKind::King));

        let engine = GreedyEngine::new();
        for seed in 0..16 {
            let out = engine.choose_move(&board, Color::Black, &SearchParams { seed });
            let mv = out.best_move.expect("black has moves");
            let next = board.with_move(mv.from, mv.to);
            let white_replies = generate_legal_moves(&next, Color::White);
            assert!(
                white_replies.iter().all(|r| r.captured.is_none()),
                "seed {seed} left a piece en prise with {:?}",
                (mv.from, mv.to)
            );
        }
    }

    struct KnightOnF6;

    impl BoardScorer for KnightOnF6 {
        fn score(&self, board: &Board, _side: Color) -> i32 {
            if board.code_at(21) == piece_code(Color::Black, PieceKind::Knight) {
                1000
            } else {
                0
            }
        }
    }

    #[test]
    fn custom_scorer_ranks_quiet_moves() {
        let engine = GreedyEngine::with_scorer(KnightOnF6);
        let out = engine.choose_move(&Board::starting_position(), Color::Black, &params());
        let mv = out.best_move.expect("black has moves");
        assert_eq!((mv.from, mv.to), (6, 21));
        assert_eq!(out.score, Some(1000));
        assert_eq!(out.legal_moves, 20);
    }

    #[test]
    fn returns_nothing_without_legal_moves() {
        let out = GreedyEngine::new().choose_move(&Board::new_empty(), Color::Black, &params());
        assert!(out.best_move.is_none());
    }
}
