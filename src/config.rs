//! Host configuration and logging setup.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::errors::HostError;

/// Line-protocol host for stack_mate games.
#[derive(Debug, Clone, Parser)]
#[command(name = "stack_mate", version, about)]
pub struct HostConfig {
    /// JSON snapshot to load at start and rewrite after every accepted
    /// mutation. Without it, games live only as long as the process.
    #[arg(long, value_name = "PATH")]
    pub state_file: Option<PathBuf>,

    /// Caller identity used until an `as <caller>` command changes it.
    #[arg(long, default_value = "player")]
    pub caller: String,

    /// Tracing filter directive; `RUST_LOG` takes precedence when set.
    #[arg(long, default_value = "info")]
    pub log_filter: String,
}

/// Installs a stderr subscriber so stdout stays reserved for protocol output.
pub fn init_tracing(config: &HostConfig) -> Result<(), HostError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_filter)
            .map_err(|e| HostError::LogFilter(e.to_string()))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| HostError::LogFilter(e.to_string()))
}
