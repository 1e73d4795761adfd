//! # Chunk Creation Module
//!
//! This module provides a builder used by the chunk generators. Blocks are pushed
//! in storage order (x fastest, then y, then z) and the builder keeps the solidity
//! bit vector and the block storage consistent as it goes.

use bitvec::vec::BitVec;
use cgmath::Point3;

use crate::voxels::block::{block_type::BlockType, Block, BlockTypeSize};

use super::{Chunk, CHUNK_DIMENSION, CHUNK_SIZE};

/// A builder for creating and populating chunks block by block.
///
/// The builder ensures that the solid bit vector and the block vector always
/// describe the same blocks.
pub struct ChunkCreationIterator {
    /// The chunk coordinates of the chunk being created
    position: Point3<i32>,
    /// Bit vector where each bit represents whether a block is solid (1) or air (0)
    solid_array: BitVec,
    /// Every block of the chunk, in storage order
    blocks: Vec<Block>,
    /// Current X position within the chunk (0..CHUNK_DIMENSION)
    local_x: i32,
    /// Current Y position within the chunk (0..CHUNK_DIMENSION)
    local_y: i32,
    /// Current Z position within the chunk (0..CHUNK_DIMENSION)
    local_z: i32,
}

impl ChunkCreationIterator {
    /// Creates a new `ChunkCreationIterator` for building a chunk at the given position.
    ///
    /// # Arguments
    /// * `position` - The chunk coordinates of the chunk to create
    pub fn new(position: Point3<i32>) -> Self {
        ChunkCreationIterator {
            position,
            solid_array: BitVec::with_capacity(CHUNK_SIZE as usize),
            blocks: Vec::with_capacity(CHUNK_SIZE as usize),
            local_x: 0,
            local_y: 0,
            local_z: 0,
        }
    }

    /// World-space block position of the next block to be pushed.
    pub fn next_world_position(&self) -> Point3<i32> {
        Point3::new(
            self.local_x + CHUNK_DIMENSION * self.position.x,
            self.local_y + CHUNK_DIMENSION * self.position.y,
            self.local_z + CHUNK_DIMENSION * self.position.z,
        )
    }

    /// Returns true once every block of the chunk has been pushed.
    pub fn is_complete(&self) -> bool {
        self.blocks.len() == CHUNK_SIZE as usize
    }

    /// Finalizes the chunk creation and returns the constructed `Chunk`.
    ///
    /// Positions that were never pushed are filled with air.
    pub fn return_chunk(mut self) -> Chunk {
        while !self.is_complete() {
            self.push_block_type(BlockType::AIR);
        }

        Chunk {
            position: self.position,
            solid_array: self.solid_array,
            blocks: self.blocks,
        }
    }

    /// Adds a block of a known type at the current position and advances the position.
    pub fn push_block_type(&mut self, block_type: BlockType) {
        self.push_block_id(block_type.id());
    }

    /// Adds a block by raw id at the current position and advances the position.
    ///
    /// Pushing past the end of the chunk is ignored.
    pub fn push_block_id(&mut self, id: BlockTypeSize) {
        if self.is_complete() {
            return;
        }

        let block = Block::from_id(id);
        self.solid_array.push(!block.is_air());
        self.blocks.push(block);

        // Move to the next position
        self.local_x += 1;
        if self.local_x == CHUNK_DIMENSION {
            self.local_x = 0;
            self.local_y += 1;
            if self.local_y == CHUNK_DIMENSION {
                self.local_y = 0;
                self.local_z += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_advance_x_then_y_then_z() {
        let mut cci = ChunkCreationIterator::new(Point3::new(1, 0, -1));
        assert_eq!(cci.next_world_position(), Point3::new(16, 0, -16));

        for _ in 0..CHUNK_DIMENSION {
            cci.push_block_type(BlockType::STONE);
        }
        assert_eq!(cci.next_world_position(), Point3::new(16, 1, -16));

        for _ in 0..CHUNK_DIMENSION * (CHUNK_DIMENSION - 1) {
            cci.push_block_type(BlockType::AIR);
        }
        assert_eq!(cci.next_world_position(), Point3::new(16, 0, -15));
    }

    #[test]
    fn unfinished_chunks_are_padded_with_air() {
        let mut cci = ChunkCreationIterator::new(Point3::new(0, 0, 0));
        cci.push_block_type(BlockType::GLASS);
        let chunk = cci.return_chunk();

        assert_eq!(chunk.blocks.len(), CHUNK_SIZE as usize);
        assert_eq!(chunk.solid_array.count_ones(), 1);
        assert_eq!(chunk.get_local(0, 0, 0), BlockType::GLASS.id());
        assert_eq!(chunk.get_local(1, 0, 0), BlockType::AIR.id());
    }
}
