//! # Block Module
//!
//! This module provides the core block-related functionality for the host world.
//! It includes block type definitions, item ids, and the compact block data structure
//! stored inside chunks.

use block_type::BlockType;

pub mod block_type;
pub mod item_type;

/// The underlying integer type used to represent block types in memory.
/// Hosts exchange blocks as these raw numeric ids.
pub type BlockTypeSize = u16;

/// Represents a single voxel block in the world.
///
/// This is a lightweight structure that stores only the raw block id, so that
/// ids unknown to `BlockType` survive a round trip through the world untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Block {
    /// The type of this block, encoded as a `BlockTypeSize` for compact storage.
    pub block_type: BlockTypeSize,
}

impl Block {
    /// Creates a new block of the specified type.
    ///
    /// # Arguments
    /// * `block_type` - The type of block to create
    pub fn new(block_type: BlockType) -> Self {
        Block {
            block_type: block_type.id(),
        }
    }

    /// Wraps a raw id coming from a host.
    pub fn from_id(id: BlockTypeSize) -> Self {
        Block { block_type: id }
    }

    /// Returns true if this block is air.
    pub fn is_air(&self) -> bool {
        self.block_type == BlockType::AIR.id()
    }
}
