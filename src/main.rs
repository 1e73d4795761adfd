//! # WorldEdit Demo
//!
//! Generates an in-memory world and runs a player through the navigation
//! operations, logging each result.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release -- [config.json]
//! ```

use std::process::ExitCode;

use log::error;
use worldedit_player::config::WorldEditConfig;

fn main() -> ExitCode {
    worldedit_player::init_logging();

    let config = match std::env::args().nth(1) {
        Some(path) => match WorldEditConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                error!("{}", err);
                return ExitCode::FAILURE;
            }
        },
        None => WorldEditConfig::default(),
    };

    match worldedit_player::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
