use clap::Parser;
use tracing::error;

use stack_mate::config::{init_tracing, HostConfig};
use stack_mate::errors::HostError;
use stack_mate::protocol::command_loop::run_stdio_loop;

fn main() -> Result<(), HostError> {
    let config = HostConfig::parse();
    init_tracing(&config)?;

    run_stdio_loop(&config).inspect_err(|e| {
        error!(error = %e, "command loop stopped");
    })
}
