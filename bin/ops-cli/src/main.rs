//! CLI for operating the validator operations engine against a persisted state file.

mod cli;
mod handlers;
mod params;
mod state;

use anyhow::{Error, Result};
use akro_bridge_common::logging::{self, LoggerConfig};
use clap::Parser;

use crate::handlers::{init, ops, status};

fn main() -> Result<(), Error> {
    let mut logger = LoggerConfig::with_base_name("validator-ops-cli");
    // keep stdout readable for command output unless RUST_LOG asks for more
    logger.set_default_filter("warn");
    logging::init(logger);

    let cli = cli::Cli::parse();
    match cli.command {
        cli::Commands::Init(args) => init::handle_init(&cli.files, args),
        cli::Commands::Status(args) => status::handle_status(&cli.files, args),
        cli::Commands::Call(args) => ops::handle_call(&cli.files, args),
        cli::Commands::Cancel(args) => ops::handle_cancel(&cli.files, args),
        cli::Commands::Transfer(args) => ops::handle_transfer(&cli.files, args),
    }
}
