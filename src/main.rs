//! Game binary entrypoint.
//!
//! Parses options, builds the config, takes over the terminal and hands
//! control to the driver. The terminal is restored on every exit path,
//! including a mid-game error.

use anyhow::Result;
use clap::Parser;

use blockfall::backend::{Backend, TerminalBackend};
use blockfall::cli::Options;
use blockfall::driver;

fn main() -> Result<()> {
    let options = Options::parse();
    let config = options.game_config();
    let seed = options.seed();

    let mut backend = TerminalBackend::new();
    backend.init()?;

    let result = driver::run(&mut backend, config, seed, options.one_key_finesse());

    // Always try to restore terminal state.
    let _ = backend.exit();
    result
}
