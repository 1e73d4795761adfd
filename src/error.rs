//! # Error Module
//!
//! Errors raised while setting up players and their host world. The movement
//! operations themselves never fail with an error; they report whether the
//! player was moved.

use std::path::PathBuf;

use crate::voxels::block::BlockTypeSize;

/// Everything that can go wrong outside of the movement scans.
#[derive(Debug, thiserror::Error)]
pub enum WorldEditError {
    /// The configuration file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for `WorldEditConfig`.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The configuration parsed but describes an impossible setup.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A numeric block id that no `BlockType` variant carries.
    #[error("unknown block id {0}")]
    UnknownBlockId(BlockTypeSize),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, WorldEditError>;
