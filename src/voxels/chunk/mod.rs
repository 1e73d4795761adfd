//! # Chunk Module
//!
//! This module provides the `Chunk` struct and related functionality for managing
//! 16x16x16 blocks of voxel data, along with the terrain generators used by the
//! in-memory host world.
//!
//! ## Storage
//!
//! Each chunk keeps two parallel views of its blocks:
//! - `solid_array`: A bit vector (1 bit per block) indicating which blocks are not air
//! - `blocks`: Every block's raw id, in storage order
//!
//! The bit vector answers `World::is_air_at`, which backs the air checks of the
//! vertical scans, without touching block data.

use bitvec::prelude::BitVec;
use cgmath::Point3;
use chunk_creation::ChunkCreationIterator;
use noise::{NoiseFn, Perlin};

use super::block::block_type::BlockType;
use super::block::{Block, BlockTypeSize};

pub mod chunk_creation;

/// The dimension (width, height, depth) of a chunk in blocks.
pub const CHUNK_DIMENSION: i32 = 16;
/// The number of blocks in a single 2D plane of a chunk (CHUNK_DIMENSION²).
pub const CHUNK_PLANE_SIZE: i32 = CHUNK_DIMENSION * CHUNK_DIMENSION;
/// The total number of blocks in a chunk (CHUNK_DIMENSION³).
pub const CHUNK_SIZE: i32 = CHUNK_PLANE_SIZE * CHUNK_DIMENSION;

/// Scaling factor applied to world coordinates when sampling Perlin noise.
pub const PERLIN_SCALE_FACTOR: f64 = 0.02;
/// How far, in blocks, Perlin terrain may rise above or sink below the surface height.
pub const PERLIN_AMPLITUDE: f64 = 12.0;
/// Depth of the dirt layer beneath the grass.
pub const DIRT_DEPTH: i32 = 3;

/// Represents a 16x16x16 collection of voxel blocks in the world.
pub struct Chunk {
    /// The position of this chunk in chunk coordinates (not block coordinates).
    pub position: Point3<i32>,

    /// A bit vector where each bit represents whether the corresponding block is
    /// non-air (1) or air (0). Indexed the same way as `blocks`.
    pub solid_array: BitVec,

    /// The block data for this chunk, stored x fastest, then y, then z.
    pub blocks: Vec<Block>,
}

impl Chunk {
    /// Creates a new, completely empty chunk (all blocks are air).
    pub fn empty(position: &Point3<i32>) -> Self {
        ChunkCreationIterator::new(*position).return_chunk()
    }

    /// Creates a new chunk filled with a single block type.
    pub fn solid(position: &Point3<i32>, block_type: BlockType) -> Self {
        let mut cci = ChunkCreationIterator::new(*position);

        for _ in 0..CHUNK_SIZE {
            cci.push_block_type(block_type);
        }

        cci.return_chunk()
    }

    /// Creates a chunk of flat terrain whose grass layer sits at `surface_height - 1`.
    ///
    /// Layers from the bottom: bedrock at world y 0, stone, `DIRT_DEPTH` blocks of
    /// dirt, one block of grass, then air.
    pub fn flat(position: &Point3<i32>, surface_height: i32) -> Self {
        Self::from_height_fn(position, |_, _| surface_height)
    }

    /// Generates a chunk of rolling terrain from 2D Perlin noise.
    ///
    /// The surface height of each column is `surface_height` offset by the noise
    /// sample scaled by `PERLIN_AMPLITUDE`.
    ///
    /// # Arguments
    /// * `position` - The chunk coordinates where the chunk will be placed
    /// * `perlin` - The seeded noise source shared by every chunk of a world
    /// * `surface_height` - The average height of the terrain
    pub fn perlin(position: &Point3<i32>, perlin: &Perlin, surface_height: i32) -> Self {
        Self::from_height_fn(position, |x, z| {
            let sample = perlin.get(Self::to_perlin_pos(x, z, PERLIN_SCALE_FACTOR));
            surface_height + (sample * PERLIN_AMPLITUDE).round() as i32
        })
    }

    /// Builds a chunk by layering each column up to the height returned by `height_at`.
    fn from_height_fn<F>(position: &Point3<i32>, height_at: F) -> Self
    where
        F: Fn(i32, i32) -> i32,
    {
        let mut cci = ChunkCreationIterator::new(*position);

        while !cci.is_complete() {
            let world = cci.next_world_position();
            let surface = height_at(world.x, world.z);
            cci.push_block_type(Self::layer_at(world.y, surface));
        }

        cci.return_chunk()
    }

    /// The block type found at world height `y` in a column whose surface is `surface`.
    fn layer_at(y: i32, surface: i32) -> BlockType {
        if y == 0 {
            BlockType::BEDROCK
        } else if y >= surface {
            BlockType::AIR
        } else if y == surface - 1 {
            BlockType::GRASS
        } else if y >= surface - 1 - DIRT_DEPTH {
            BlockType::DIRT
        } else {
            BlockType::STONE
        }
    }

    /// Converts world-space column coordinates to Perlin noise sampling coordinates.
    fn to_perlin_pos(x: i32, z: i32, scale_factor: f64) -> [f64; 2] {
        [x as f64 * scale_factor, z as f64 * scale_factor]
    }

    /// Storage index of the chunk-relative coordinates.
    fn index(cx: i32, cy: i32, cz: i32) -> usize {
        (cx + CHUNK_DIMENSION * cy + CHUNK_PLANE_SIZE * cz) as usize
    }

    /// Gets the raw id of the block at the specified chunk-relative coordinates.
    ///
    /// # Panics
    /// Panics if the coordinates are outside `0..CHUNK_DIMENSION`.
    pub fn get_local(&self, cx: i32, cy: i32, cz: i32) -> BlockTypeSize {
        self.blocks[Self::index(cx, cy, cz)].block_type
    }

    /// Replaces the block at the specified chunk-relative coordinates.
    ///
    /// # Panics
    /// Panics if the coordinates are outside `0..CHUNK_DIMENSION`.
    pub fn set_local(&mut self, cx: i32, cy: i32, cz: i32, id: BlockTypeSize) {
        let index = Self::index(cx, cy, cz);
        let block = Block::from_id(id);
        self.solid_array.set(index, !block.is_air());
        self.blocks[index] = block;
    }

    /// Checks if the block at the specified chunk-relative coordinates is not air.
    pub fn is_block_solid(&self, cx: i32, cy: i32, cz: i32) -> bool {
        self.solid_array[Self::index(cx, cy, cz)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_local_keeps_solid_array_in_sync() {
        let mut chunk = Chunk::empty(&Point3::new(0, 0, 0));
        assert!(!chunk.is_block_solid(3, 4, 5));

        chunk.set_local(3, 4, 5, BlockType::GLASS.id());
        assert!(chunk.is_block_solid(3, 4, 5));
        assert_eq!(chunk.get_local(3, 4, 5), BlockType::GLASS.id());

        chunk.set_local(3, 4, 5, BlockType::AIR.id());
        assert!(!chunk.is_block_solid(3, 4, 5));
        assert_eq!(chunk.solid_array.count_ones(), 0);
    }

    #[test]
    fn flat_chunk_layers() {
        let chunk = Chunk::flat(&Point3::new(0, 0, 0), 8);
        assert_eq!(chunk.get_local(0, 0, 0), BlockType::BEDROCK.id());
        assert_eq!(chunk.get_local(0, 3, 0), BlockType::STONE.id());
        assert_eq!(chunk.get_local(0, 4, 0), BlockType::DIRT.id());
        assert_eq!(chunk.get_local(0, 6, 0), BlockType::DIRT.id());
        assert_eq!(chunk.get_local(0, 7, 0), BlockType::GRASS.id());
        assert_eq!(chunk.get_local(0, 8, 0), BlockType::AIR.id());
        assert_eq!(chunk.get_local(15, 15, 15), BlockType::AIR.id());
    }

    #[test]
    fn flat_chunk_above_surface_is_empty() {
        let chunk = Chunk::flat(&Point3::new(2, 1, 2), 8);
        assert_eq!(chunk.solid_array.count_ones(), 0);
    }

    #[test]
    fn perlin_columns_have_grass_on_top() {
        let perlin = Perlin::new(7);
        let chunk = Chunk::perlin(&Point3::new(0, 0, 0), &perlin, 8);
        let mut grass_columns = 0;
        for cz in 0..CHUNK_DIMENSION {
            for cx in 0..CHUNK_DIMENSION {
                let column_has_grass = (0..CHUNK_DIMENSION)
                    .any(|cy| chunk.get_local(cx, cy, cz) == BlockType::GRASS.id());
                if column_has_grass {
                    grass_columns += 1;
                }
            }
        }
        assert!(grass_columns > 0);
        assert_eq!(chunk.get_local(0, 0, 0), BlockType::BEDROCK.id());
    }
}
