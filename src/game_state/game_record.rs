//! Persistent game record and the read-only projections served to callers.

use serde::{Deserialize, Serialize};

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

pub type GameId = u64;

/// Caller identity as supplied by the host.
pub type PlayerId = String;

/// One accepted move in a game's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: PieceCode,
    pub captured: PieceCode,
    pub side: Color,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_id: GameId,
    pub owner: PlayerId,
    pub board: Board,
    pub difficulty: Difficulty,
    pub white_turn: bool,
    pub status: GameStatus,
    pub move_count: u32,
    pub winner: Option<Color>,
    pub moves: Vec<MoveRecord>,
}

impl GameRecord {
    pub fn new(game_id: GameId, owner: PlayerId, difficulty: Difficulty) -> Self {
        Self {
            game_id,
            owner,
            board: Board::starting_position(),
            difficulty,
            white_turn: true,
            status: GameStatus::Active,
            move_count: 0,
            winner: None,
            moves: Vec::new(),
        }
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        if self.white_turn {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == GameStatus::Active
    }

    /// Applies an already validated move for the side to move: updates the
    /// board, history and counter, and hands the turn over.
    pub fn record_move(&mut self, from: Square, to: Square) -> MoveRecord {
        let side = self.side_to_move();
        let piece = self.board.code_at(from);
        let captured = self.board.apply_move(from, to);
        let entry = MoveRecord {
            from,
            to,
            piece,
            captured,
            side,
        };
        self.moves.push(entry);
        self.move_count += 1;
        self.white_turn = !self.white_turn;
        entry
    }

    pub fn status_record(&self) -> StatusRecord {
        StatusRecord {
            status: self.status,
            white_turn: self.white_turn,
            move_count: self.move_count,
            difficulty: self.difficulty,
            winner: self.winner,
        }
    }

    pub fn board_record(&self) -> BoardRecord {
        BoardRecord {
            board: self.board,
            white_turn: self.white_turn,
            move_count: self.move_count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub status: GameStatus,
    pub white_turn: bool,
    pub move_count: u32,
    pub difficulty: Difficulty,
    pub winner: Option<Color>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRecord {
    pub board: Board,
    pub white_turn: bool,
    pub move_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_starts_active_with_white_to_move() {
        let record = GameRecord::new(1, "alice".to_string(), Difficulty::Easy);
        assert!(record.is_active());
        assert!(record.white_turn);
        assert_eq!(record.move_count, 0);
        assert_eq!(record.board, Board::starting_position());
    }

    #[test]
    fn record_move_toggles_turn_and_tracks_history() {
        let mut record = GameRecord::new(1, "alice".to_string(), Difficulty::Hard);
        let entry = record.record_move(52, 36);

        assert_eq!(entry.side, Color::White);
        assert_eq!(entry.piece, piece_code(Color::White, PieceKind::Pawn));
        assert_eq!(entry.captured, EMPTY);
        assert!(!record.white_turn);
        assert_eq!(record.move_count, 1);
        assert_eq!(record.moves.len(), 1);
        assert_eq!(record.side_to_move(), Color::Black);
    }
}
