//! Guarded mutations: player moves, computer moves and resignation.
//!
//! Preconditions run in a fixed order and the first failure wins:
//! existence, ownership, game status, turn, legality. Each mutation works on a
//! copy of the record and writes it back once, so a rejected call leaves the
//! store untouched.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::errors::{GameError, GameResult};
use crate::game_state::chess_types::*;
use crate::game_state::game_record::{GameId, GameRecord, MoveRecord};
use crate::move_generation::legal_move_generator::has_legal_move;
use crate::moves::move_validator::is_legal;
use crate::service::game_service::GameService;

/// Result of a successful `computer_move` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComputerMove {
    Moved {
        from: Square,
        to: Square,
        captured: PieceCode,
    },
    /// Black had no legal move; the game is now finished.
    NoLegalMove,
}

impl GameService {
    /// Existence then ownership. Returns a private copy to mutate.
    fn owned_game(&self, game_id: GameId, caller: &str) -> GameResult<GameRecord> {
        let record = self.record(game_id)?;
        if record.owner != caller {
            return Err(GameError::NotAuthorized);
        }
        Ok(record.clone())
    }

    fn active_owned_game(&self, game_id: GameId, caller: &str) -> GameResult<GameRecord> {
        let record = self.owned_game(game_id, caller)?;
        if !record.is_active() {
            return Err(GameError::GameOver);
        }
        Ok(record)
    }

    #[instrument(skip(self))]
    pub fn make_move(&mut self, game_id: GameId, from: u32, to: u32, caller: &str) -> GameResult<bool> {
        let mut record = self
            .active_owned_game(game_id, caller)
            .inspect_err(|err| warn!(code = err.code(), "move rejected"))?;
        if !record.white_turn {
            warn!(code = GameError::NotYourTurn.code(), "move rejected");
            return Err(GameError::NotYourTurn);
        }

        let squares = square_from_index(from).zip(square_from_index(to));
        let (Some((from, to)), true) = (squares, is_legal(&record.board, from, to, Color::White)) else {
            warn!(code = GameError::InvalidMove.code(), "move rejected");
            return Err(GameError::InvalidMove);
        };

        let entry = record.record_move(from, to);
        settle_after_move(&mut record, &entry);
        info!(
            move_count = record.move_count,
            captured = entry.captured,
            status = ?record.status,
            "player move accepted"
        );
        self.store.put(record);
        Ok(true)
    }

    #[instrument(skip(self))]
    pub fn computer_move(&mut self, game_id: GameId, caller: &str) -> GameResult<ComputerMove> {
        let mut record = self
            .active_owned_game(game_id, caller)
            .inspect_err(|err| warn!(code = err.code(), "computer move rejected"))?;
        if record.white_turn {
            warn!(code = GameError::NotYourTurn.code(), "computer move rejected");
            return Err(GameError::NotYourTurn);
        }

        let choice = self.agent.select_move(
            &record.board,
            record.difficulty,
            record.game_id,
            record.move_count,
        );

        let Some(choice) = choice else {
            record.status = GameStatus::Finished;
            info!(move_count = record.move_count, "computer has no legal move, game finished");
            self.store.put(record);
            return Ok(ComputerMove::NoLegalMove);
        };

        let entry = record.record_move(choice.from, choice.to);
        settle_after_move(&mut record, &entry);
        info!(
            from = entry.from,
            to = entry.to,
            move_count = record.move_count,
            status = ?record.status,
            "computer move applied"
        );
        self.store.put(record);
        Ok(ComputerMove::Moved {
            from: entry.from,
            to: entry.to,
            captured: entry.captured,
        })
    }

    #[instrument(skip(self))]
    pub fn resign_game(&mut self, game_id: GameId, caller: &str) -> GameResult<bool> {
        let mut record = self
            .active_owned_game(game_id, caller)
            .inspect_err(|err| warn!(code = err.code(), "resignation rejected"))?;

        record.status = GameStatus::Resigned;
        record.winner = Some(Color::Black);
        info!(move_count = record.move_count, "game resigned");
        self.store.put(record);
        Ok(true)
    }
}

/// Ends the game when a king was just taken, or when the side now to move has
/// nothing legal to play.
fn settle_after_move(record: &mut GameRecord, entry: &MoveRecord) {
    if let Some((_, PieceKind::King)) = decode_piece(entry.captured) {
        record.status = GameStatus::Finished;
        record.winner = Some(entry.side);
    } else if !has_legal_move(&record.board, record.side_to_move()) {
        record.status = GameStatus::Finished;
    }
}
