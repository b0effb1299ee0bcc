//! Entry point for every game operation.
//!
//! `GameService` owns the store and the computer agent. Mutating operations
//! take `&mut self`: the host must hand the service to one caller at a time,
//! and the service itself holds no lock. Read-only operations take `&self`.
//! Lifecycle and query operations live in `lifecycle.rs`, guarded mutations in
//! `turn_coordinator.rs`.

use crate::engines::computer_agent::ComputerAgent;
use crate::errors::{GameError, GameResult};
use crate::game_state::game_record::{GameId, GameRecord};
use crate::store::game_store::GameStore;

pub struct GameService {
    pub(crate) store: GameStore,
    pub(crate) agent: ComputerAgent,
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}

impl GameService {
    pub fn new() -> Self {
        Self::with_store(GameStore::new())
    }

    pub fn with_store(store: GameStore) -> Self {
        Self {
            store,
            agent: ComputerAgent::new(),
        }
    }

    #[inline]
    pub fn store(&self) -> &GameStore {
        &self.store
    }

    pub(crate) fn record(&self, game_id: GameId) -> GameResult<&GameRecord> {
        self.store.get(game_id).ok_or(GameError::GameNotFound)
    }
}
