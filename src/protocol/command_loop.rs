//! Line-protocol front-end and command loop.
//!
//! Reads one command per line, routes it to the game service as the current
//! caller and writes one reply: `ok <payload>` on success, `err <code>
//! <message>` for a game error, `error <message>` for a malformed command.
//! Record payloads are JSON. When a state file is configured the store is
//! saved after every accepted mutation.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::HostConfig;
use crate::errors::{GameError, HostError};
use crate::service::game_service::GameService;
use crate::store::game_store::GameStore;
use crate::utils::render_board::render_board;

pub fn run_stdio_loop(config: &HostConfig) -> Result<(), HostError> {
    let store = match &config.state_file {
        Some(path) if path.exists() => GameStore::load_snapshot(path)?,
        _ => GameStore::new(),
    };
    let mut session = CommandSession::new(
        GameService::with_store(store),
        config.caller.clone(),
        config.state_file.clone(),
    );
    info!(caller = %session.caller, "command loop ready");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

#[derive(Debug, Error)]
enum CommandError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Host(#[from] HostError),
}

struct Reply {
    payload: String,
    mutated: bool,
}

impl Reply {
    fn read(payload: impl ToString) -> Self {
        Self {
            payload: payload.to_string(),
            mutated: false,
        }
    }

    fn write(payload: impl ToString) -> Self {
        Self {
            payload: payload.to_string(),
            mutated: true,
        }
    }

    fn json(value: &impl Serialize) -> Result<Self, CommandError> {
        let payload = serde_json::to_string(value).map_err(HostError::Encode)?;
        Ok(Self::read(payload))
    }
}

pub struct CommandSession {
    service: GameService,
    caller: String,
    state_file: Option<PathBuf>,
}

impl CommandSession {
    pub fn new(service: GameService, caller: String, state_file: Option<PathBuf>) -> Self {
        Self {
            service,
            caller,
            state_file,
        }
    }

    pub fn service(&self) -> &GameService {
        &self.service
    }

    /// Handles one line. Returns `true` when the loop should stop.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> Result<bool, HostError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        match cmd {
            "quit" => return Ok(true),
            "as" => match args.first() {
                Some(caller) => {
                    self.caller = (*caller).to_owned();
                    debug!(caller = %self.caller, "caller switched");
                    writeln!(out, "ok {}", self.caller)?;
                }
                None => writeln!(out, "error as needs a caller identity")?,
            },
            "show" => match arg::<u64>(&args, 0, "game-id")
                .and_then(|id| Ok(self.service.get_board(id)?))
            {
                Ok(record) => {
                    writeln!(out, "{}", render_board(&record.board))?;
                    writeln!(out, "ok")?;
                }
                Err(err) => write_failure(out, err)?,
            },
            _ => match self.run_operation(cmd, &args) {
                Ok(reply) => {
                    if reply.mutated {
                        self.persist()?;
                    }
                    writeln!(out, "ok {}", reply.payload)?;
                }
                Err(CommandError::Host(err)) => return Err(err),
                Err(err) => write_failure(out, err)?,
            },
        }

        Ok(false)
    }

    fn run_operation(&mut self, cmd: &str, args: &[&str]) -> Result<Reply, CommandError> {
        let caller = self.caller.as_str();
        let service = &mut self.service;

        match cmd {
            "start-game" => {
                let difficulty = arg(args, 0, "difficulty")?;
                Ok(Reply::write(service.start_game(difficulty, caller)?))
            }
            "make-move" => {
                let (id, from, to) = (arg(args, 0, "game-id")?, arg(args, 1, "from")?, arg(args, 2, "to")?);
                Ok(Reply::write(service.make_move(id, from, to, caller)?))
            }
            "computer-move" => {
                let chosen = service.computer_move(arg(args, 0, "game-id")?, caller)?;
                let mut reply = Reply::json(&chosen)?;
                reply.mutated = true;
                Ok(reply)
            }
            "resign-game" => Ok(Reply::write(service.resign_game(arg(args, 0, "game-id")?, caller)?)),
            "get-game" => Reply::json(&service.get_game(arg(args, 0, "game-id")?)?),
            "get-game-status" => Reply::json(&service.get_game_status(arg(args, 0, "game-id")?)?),
            "get-board" => Reply::json(&service.get_board(arg(args, 0, "game-id")?)?),
            "get-piece-at" => {
                let (id, pos) = (arg(args, 0, "game-id")?, arg(args, 1, "pos")?);
                Ok(Reply::read(service.get_piece_at(id, pos)?))
            }
            "get-player-game" => Ok(Reply::read(service.get_player_game(caller)?)),
            "validate-move" => {
                let (id, from, to) = (arg(args, 0, "game-id")?, arg(args, 1, "from")?, arg(args, 2, "to")?);
                Ok(Reply::read(service.validate_move(id, from, to)?))
            }
            "get-legal-moves" => Reply::json(&service.get_legal_moves(arg(args, 0, "game-id")?)?),
            other => Err(CommandError::Usage(format!("unknown command '{other}'"))),
        }
    }

    fn persist(&self) -> Result<(), HostError> {
        match &self.state_file {
            Some(path) => self.service.store().save_snapshot(path),
            None => Ok(()),
        }
    }
}

fn arg<T: FromStr>(args: &[&str], index: usize, name: &str) -> Result<T, CommandError> {
    let raw = args
        .get(index)
        .ok_or_else(|| CommandError::Usage(format!("missing <{name}>")))?;
    raw.parse()
        .map_err(|_| CommandError::Usage(format!("<{name}> must be a non-negative integer, got '{raw}'")))
}

fn write_failure(out: &mut impl Write, err: CommandError) -> io::Result<()> {
    match err {
        CommandError::Game(game_err) => writeln!(out, "err {} {}", game_err.code(), game_err),
        other => writeln!(out, "error {other}"),
    }
}
