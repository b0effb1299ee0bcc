//! Persistent game records.
//!
//! The store owns three things: every game record by id, the index from a
//! caller to their most recently created game, and the id counter. The counter
//! starts at zero and only moves forward, so ids are strictly increasing from
//! 1 and never reused. Records are never removed.
//!
//! The whole store serializes to a JSON snapshot so a host can keep state
//! between process runs.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::HostError;
use crate::game_state::game_record::{GameId, GameRecord, PlayerId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStore {
    last_game_id: GameId,
    games: BTreeMap<GameId, GameRecord>,
    player_games: BTreeMap<PlayerId, GameId>,
}

impl GameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the counter and returns the new id.
    pub fn allocate_game_id(&mut self) -> GameId {
        self.last_game_id += 1;
        self.last_game_id
    }

    #[inline]
    pub fn last_game_id(&self) -> GameId {
        self.last_game_id
    }

    #[inline]
    pub fn get(&self, game_id: GameId) -> Option<&GameRecord> {
        self.games.get(&game_id)
    }

    /// Inserts or replaces the record under its own id.
    pub fn put(&mut self, record: GameRecord) {
        self.games.insert(record.game_id, record);
    }

    #[inline]
    pub fn player_game(&self, player: &str) -> Option<GameId> {
        self.player_games.get(player).copied()
    }

    /// Points `player` at `game_id`, replacing any earlier entry.
    pub fn set_player_game(&mut self, player: &str, game_id: GameId) {
        self.player_games.insert(player.to_owned(), game_id);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Loads a snapshot. Records filed under a key other than their own id,
    /// or whose history length disagrees with the move count, are rejected.
    /// A counter lower than the highest stored id is raised so new ids can
    /// never collide with existing records.
    pub fn load_snapshot(path: &Path) -> Result<Self, HostError> {
        let text = fs::read_to_string(path)?;
        let mut store: GameStore =
            serde_json::from_str(&text).map_err(|source| HostError::SnapshotDecode {
                path: path.to_path_buf(),
                source,
            })?;
        store
            .check_consistency()
            .map_err(|reason| HostError::SnapshotInvalid {
                path: path.to_path_buf(),
                reason,
            })?;
        if let Some(max_id) = store.games.values().map(|record| record.game_id).max() {
            store.last_game_id = store.last_game_id.max(max_id);
        }
        info!(path = %path.display(), games = store.len(), "loaded game snapshot");
        Ok(store)
    }

    fn check_consistency(&self) -> Result<(), String> {
        for (key, record) in &self.games {
            if *key != record.game_id {
                return Err(format!("game {} is stored under key {key}", record.game_id));
            }
            if record.moves.len() != record.move_count as usize {
                return Err(format!(
                    "game {key} lists {} moves but counts {}",
                    record.moves.len(),
                    record.move_count
                ));
            }
        }
        for (player, game_id) in &self.player_games {
            if !self.games.contains_key(game_id) {
                return Err(format!("player {player} points at missing game {game_id}"));
            }
        }
        Ok(())
    }

    /// Writes the snapshot next to `path` first and renames it into place, so
    /// a crash mid-write never leaves a truncated file behind.
    pub fn save_snapshot(&self, path: &Path) -> Result<(), HostError> {
        let json = serde_json::to_string_pretty(self).map_err(HostError::Encode)?;
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;
        debug!(path = %path.display(), games = self.len(), "saved game snapshot");
        Ok(())
    }
}
