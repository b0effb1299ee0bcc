//! Error taxonomy for the game engine and its host.
//!
//! `GameError` is the only error a game operation can return. Its numeric
//! codes are part of the external contract and must stay stable; code 105 is
//! reserved and never produced. Host-side failures (reading or writing a
//! snapshot, stdio) are kept apart in `HostError` so they never leak into the
//! game taxonomy.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("caller does not own this game")]
    NotAuthorized,
    #[error("game not found")]
    GameNotFound,
    #[error("illegal move")]
    InvalidMove,
    #[error("it is not this side's turn")]
    NotYourTurn,
    #[error("game is over")]
    GameOver,
    #[error("difficulty must be 1 (easy) or 2 (hard)")]
    InvalidDifficulty,
    #[error("position is off the board")]
    InvalidPosition,
}

impl GameError {
    /// Stable numeric code reported to callers.
    pub const fn code(self) -> u32 {
        match self {
            GameError::NotAuthorized => 100,
            GameError::GameNotFound => 101,
            GameError::InvalidMove => 102,
            GameError::NotYourTurn => 103,
            GameError::GameOver => 104,
            GameError::InvalidDifficulty => 106,
            GameError::InvalidPosition => 107,
        }
    }
}

pub type GameResult<T> = Result<T, GameError>;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("snapshot {path} could not be decoded: {source}")]
    SnapshotDecode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("snapshot {path} is inconsistent: {reason}")]
    SnapshotInvalid { path: PathBuf, reason: String },
    #[error("could not encode json: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("invalid log filter: {0}")]
    LogFilter(String),
}
