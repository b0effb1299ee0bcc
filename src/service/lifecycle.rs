//! Game creation and read-only queries.

use tracing::{info, instrument, warn};

use crate::errors::{GameError, GameResult};
use crate::game_state::chess_types::{square_from_index, Color, Difficulty, PieceCode, Square};
use crate::game_state::game_record::{BoardRecord, GameId, GameRecord, StatusRecord};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_validator::is_legal;
use crate::service::game_service::GameService;

impl GameService {
    /// Creates a game owned by `caller` and makes it the caller's current
    /// game, even if an earlier game of theirs is still active.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, difficulty: u32, caller: &str) -> GameResult<GameId> {
        let difficulty = Difficulty::try_from(difficulty).inspect_err(|_| {
            warn!("rejected unknown difficulty");
        })?;

        let game_id = self.store.allocate_game_id();
        self.store
            .put(GameRecord::new(game_id, caller.to_owned(), difficulty));
        self.store.set_player_game(caller, game_id);

        info!(game_id, ?difficulty, "game started");
        Ok(game_id)
    }

    pub fn get_game(&self, game_id: GameId) -> GameResult<GameRecord> {
        self.record(game_id).cloned()
    }

    pub fn get_game_status(&self, game_id: GameId) -> GameResult<StatusRecord> {
        Ok(self.record(game_id)?.status_record())
    }

    pub fn get_board(&self, game_id: GameId) -> GameResult<BoardRecord> {
        Ok(self.record(game_id)?.board_record())
    }

    pub fn get_piece_at(&self, game_id: GameId, pos: u32) -> GameResult<PieceCode> {
        let record = self.record(game_id)?;
        let square = square_from_index(pos).ok_or(GameError::InvalidPosition)?;
        Ok(record.board.code_at(square))
    }

    pub fn get_player_game(&self, caller: &str) -> GameResult<GameId> {
        self.store
            .player_game(caller)
            .ok_or(GameError::GameNotFound)
    }

    /// Geometric legality for the white side only; ignores ownership, turn
    /// and game status.
    pub fn validate_move(&self, game_id: GameId, from: u32, to: u32) -> GameResult<bool> {
        let record = self.record(game_id)?;
        Ok(is_legal(&record.board, from, to, Color::White))
    }

    /// Every legal white move on the current board.
    pub fn get_legal_moves(&self, game_id: GameId) -> GameResult<Vec<(Square, Square)>> {
        let record = self.record(game_id)?;
        Ok(generate_legal_moves(&record.board, Color::White)
            .into_iter()
            .map(|mv| (mv.from, mv.to))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::GameError;
    use crate::game_state::chess_types::{piece_code, Color, GameStatus, PieceKind};
    use crate::service::game_service::GameService;

    #[test]
    fn unknown_difficulty_is_rejected() {
        let mut service = GameService::new();
        for d in [0, 3, 99] {
            assert_eq!(service.start_game(d, "alice"), Err(GameError::InvalidDifficulty));
        }
        assert!(service.store().is_empty());
        assert_eq!(service.store().last_game_id(), 0);
    }

    #[test]
    fn ids_increase_from_one() {
        let mut service = GameService::new();
        assert_eq!(service.start_game(1, "alice"), Ok(1));
        assert_eq!(service.start_game(2, "bob"), Ok(2));
        assert_eq!(service.start_game(1, "alice"), Ok(3));
    }

    #[test]
    fn new_game_overwrites_player_index() {
        let mut service = GameService::new();
        let first = service.start_game(1, "alice").expect("start");
        let second = service.start_game(2, "alice").expect("start");

        assert_eq!(service.get_player_game("alice"), Ok(second));
        let old = service.get_game_status(first).expect("first game kept");
        assert_eq!(old.status, GameStatus::Active);
        assert_eq!(service.get_player_game("carol"), Err(GameError::GameNotFound));
    }

    #[test]
    fn starting_pieces_are_visible() {
        let mut service = GameService::new();
        let id = service.start_game(1, "alice").expect("start");
        assert_eq!(
            service.get_piece_at(id, 52),
            Ok(piece_code(Color::White, PieceKind::Pawn))
        );
        assert_eq!(
            service.get_piece_at(id, 57),
            Ok(piece_code(Color::White, PieceKind::Knight))
        );
        assert_eq!(service.get_piece_at(id, 30), Ok(0));
    }

    #[test]
    fn piece_query_checks_game_before_position() {
        let mut service = GameService::new();
        let id = service.start_game(1, "alice").expect("start");
        assert_eq!(service.get_piece_at(id, 64), Err(GameError::InvalidPosition));
        assert_eq!(service.get_piece_at(99, 64), Err(GameError::GameNotFound));
    }

    #[test]
    fn validate_move_reports_geometry_only() {
        let mut service = GameService::new();
        let id = service.start_game(1, "alice").expect("start");

        assert_eq!(service.validate_move(id, 52, 36), Ok(true));
        assert_eq!(service.validate_move(id, 57, 42), Ok(true));
        assert_eq!(service.validate_move(id, 52, 52), Ok(false));
        assert_eq!(service.validate_move(id, 36, 28), Ok(false));
        assert_eq!(service.validate_move(id, 100, 50), Ok(false));
        assert_eq!(service.validate_move(42, 52, 36), Err(GameError::GameNotFound));

        service.make_move(id, 52, 36, "alice").expect("move");
        // Still answers for white even though it is black's turn.
        assert_eq!(service.validate_move(id, 57, 42), Ok(true));
    }

    #[test]
    fn queries_fail_for_missing_games() {
        let service = GameService::new();
        assert_eq!(service.get_game(1).map(|_| ()), Err(GameError::GameNotFound));
        assert_eq!(service.get_game_status(1).map(|_| ()), Err(GameError::GameNotFound));
        assert_eq!(service.get_board(1).map(|_| ()), Err(GameError::GameNotFound));
        assert_eq!(service.get_legal_moves(1).map(|_| ()), Err(GameError::GameNotFound));
    }

    #[test]
    fn legal_moves_lists_twenty_opening_moves() {
        let mut service = GameService::new();
        let id = service.start_game(2, "alice").expect("start");
        let moves = service.get_legal_moves(id).expect("moves");
        assert_eq!(moves.len(), 20);
        assert!(moves.contains(&(52, 36)));
        assert!(moves.contains(&(57, 42)));
    }

    #[test]
    fn reads_do_not_change_state() {
        let mut service = GameService::new();
        let id = service.start_game(1, "alice").expect("start");
        let before = service.get_game(id).expect("game");

        let _ = service.get_board(id);
        let _ = service.get_game_status(id);
        let _ = service.validate_move(id, 52, 36);
        let _ = service.get_legal_moves(id);

        assert_eq!(service.get_game(id).expect("game"), before);
    }
}
