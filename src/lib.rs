#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # WorldEdit Player
//!
//! The per-player side of a voxel-world editing tool: player state (position,
//! orientation, held item) and the navigation searches built on it.
//!
//! All world state belongs to the host server. The crate reaches it only through
//! the `ServerInterface` trait, and players are moved only through their own
//! `WorldEditPlayer::set_position_with_rotation`.
//!
//! ## Key Modules
//!
//! * `player` - The `WorldEditPlayer` trait, its movement searches and a reference player
//! * `server` - The host server seam and an in-memory host
//! * `voxels` - Blocks, chunks and the in-memory world behind that host
//! * `config` - Search bounds and world generation settings
//! * `core` - Shared-ownership primitives
//!
//! ## Usage
//!
//! ```rust
//! use cgmath::Point3;
//! use worldedit_player::player::{LocalPlayer, WorldEditPlayer};
//! use worldedit_player::server::{LocalServer, ServerInterface};
//!
//! let server = LocalServer::default();
//! for y in 0..10 {
//!     server.set_block_type(Point3::new(0, y, 0), 1);
//! }
//!
//! let mut player = LocalPlayer::new("steve", server, Point3::new(0.5, 4.0, 0.5));
//! assert!(player.find_free_position());
//! assert_eq!(player.position(), Point3::new(0.5, 10.0, 0.5));
//! ```

use cgmath::Point3;
use log::{info, warn};

use config::WorldEditConfig;
use voxels::block::block_type::BlockType;
use player::{LocalPlayer, WorldEditPlayer};
use server::{LocalServer, ServerInterface};

pub mod config;
pub mod core;
pub mod error;
pub mod player;
pub mod server;
pub mod voxels;

pub use error::{Result, WorldEditError};

/// Name of the player created by `run`.
pub const DEMO_PLAYER_NAME: &str = "demo";

/// Initialises `env_logger` from `RUST_LOG`, writing to stdout.
///
/// Calling this more than once is harmless.
pub fn init_logging() {
    let mut log_builder = env_logger::Builder::new();
    let _ = log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .try_init();
}

/// Generates a world from `config`, spawns a player and walks it through every
/// navigation operation, logging the outcome of each.
///
/// Returns the player so callers can inspect where it ended up.
pub fn run(config: &WorldEditConfig) -> Result<LocalPlayer> {
    config.validate()?;

    let [x, y, z] = config.spawn;
    let server = LocalServer::generated(&config.world, x.floor() as i32, z.floor() as i32);
    let mut player = LocalPlayer::new(DEMO_PLAYER_NAME, server, Point3::new(x, y, z))
        .with_limits(config.movement);
    info!("Spawned {} at {:?}", player.name(), player.position());

    if player.find_free_position() {
        info!("Moved out of the terrain to {:?}", player.position());
    }

    let steps: [(&str, fn(&mut LocalPlayer) -> bool); 4] = [
        ("descend", |p| p.descend_level()),
        ("ascend", |p| p.ascend_level()),
        ("ceiling", |p| p.ascend_to_ceiling(0)),
        ("thru", |p| p.pass_through_forward_wall(6)),
    ];

    for (label, step) in steps {
        if step(&mut player) {
            let msg = format!("{}: now at {:?}", label, player.position());
            player.print(&msg);
        } else {
            player.print_error(&format!("{}: no place to go", label));
        }
    }

    let facing = player.cardinal_direction();
    let standing_on = player.server().block_type(player.block_on());
    match BlockType::try_from(standing_on) {
        Ok(block) => info!("Facing {} standing on {}", facing, block),
        Err(err) => warn!("Facing {} standing on a block the tool does not know: {}", facing, err),
    }

    Ok(player)
}
