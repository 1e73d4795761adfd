//! # World Module
//!
//! This module provides the `World` struct which manages the chunks of the in-memory
//! host world. It serves as the block store behind `LocalServer`.
//!
//! ## Architecture
//!
//! The world uses a sparse storage approach where only chunks that have been
//! generated or written to are kept in memory. Anything else reads as air.
//! Vertically the world spans `0..WORLD_HEIGHT`.
//!
//! ## Chunk Generation
//!
//! Multiple terrain generation strategies are supported (see `GenerationMethod`):
//! - Perlin noise for rolling terrain
//! - Flat layered terrain
//! - Solid chunks (all blocks stone)
//! - Empty chunks (all blocks air)

use std::collections::HashMap;

use cgmath::Point3;
use log::debug;
use noise::Perlin;

use crate::config::{GenerationMethod, WorldGenConfig};
use crate::voxels::block::block_type::BlockType;
use crate::voxels::block::BlockTypeSize;
use crate::voxels::chunk::{Chunk, CHUNK_DIMENSION};

/// Height of the world in blocks. Valid block heights are `0..WORLD_HEIGHT`.
pub const WORLD_HEIGHT: i32 = 128;

/// Number of chunks stacked in every chunk column.
pub const CHUNKS_PER_COLUMN: i32 = WORLD_HEIGHT / CHUNK_DIMENSION;

/// Represents a voxel world composed of multiple chunks.
///
/// # Examples
///
/// ```
/// use cgmath::Point3;
/// use worldedit_player::voxels::world::World;
///
/// let mut world = World::empty();
/// assert!(world.set_block_at(Point3::new(3, 10, -7), 20));
/// assert_eq!(world.get_block_at(Point3::new(3, 10, -7)), 20);
/// assert_eq!(world.get_block_at(Point3::new(3, 11, -7)), 0);
/// ```
pub struct World {
    /// A mapping from chunk coordinates to chunk data.
    pub chunks: HashMap<Point3<i32>, Chunk>,
    /// The method used to generate new chunks.
    generation: GenerationMethod,
    /// Average terrain height for the flat and Perlin generators.
    surface_height: i32,
    /// Noise source shared by every Perlin chunk so that chunk borders line up.
    perlin: Perlin,
}

impl World {
    /// Creates a new world that generates chunks according to `config`.
    ///
    /// No chunks are generated yet; see `generate_area`.
    pub fn new(config: &WorldGenConfig) -> Self {
        let seed = config.resolved_seed();
        debug!(
            "Creating {:?} world with seed {} and surface height {}",
            config.generation, seed, config.surface_height
        );

        World {
            chunks: HashMap::new(),
            generation: config.generation,
            surface_height: config.surface_height,
            perlin: Perlin::new(seed),
        }
    }

    /// Creates a new world whose generated chunks are all air.
    pub fn empty() -> Self {
        World::new(&WorldGenConfig {
            generation: GenerationMethod::Empty,
            seed: Some(0),
            ..WorldGenConfig::default()
        })
    }

    /// Splits a block position into its chunk coordinates and chunk-relative coordinates.
    pub fn to_chunk_coords(pos: Point3<i32>) -> (Point3<i32>, Point3<i32>) {
        let chunk = Point3::new(
            pos.x.div_euclid(CHUNK_DIMENSION),
            pos.y.div_euclid(CHUNK_DIMENSION),
            pos.z.div_euclid(CHUNK_DIMENSION),
        );
        let local = Point3::new(
            pos.x.rem_euclid(CHUNK_DIMENSION),
            pos.y.rem_euclid(CHUNK_DIMENSION),
            pos.z.rem_euclid(CHUNK_DIMENSION),
        );
        (chunk, local)
    }

    /// Returns true if `y` lies within the vertical range of the world.
    pub fn contains_height(y: i32) -> bool {
        (0..WORLD_HEIGHT).contains(&y)
    }

    /// Adds a new chunk at the specified chunk coordinates if one doesn't already exist.
    ///
    /// The chunk is generated using the configured generation method.
    pub fn add_chunk_at(&mut self, position: Point3<i32>) {
        if self.chunks.contains_key(&position) {
            return;
        }

        let chunk = match self.generation {
            GenerationMethod::Perlin => Chunk::perlin(&position, &self.perlin, self.surface_height),
            GenerationMethod::Flat => Chunk::flat(&position, self.surface_height),
            GenerationMethod::Solid => Chunk::solid(&position, BlockType::STONE),
            GenerationMethod::Empty => Chunk::empty(&position),
        };

        self.chunks.insert(position, chunk);
    }

    /// Generates every chunk column within `radius` chunks of the column containing
    /// block coordinates (`x`, `z`).
    ///
    /// Returns the number of chunks that were newly generated.
    pub fn generate_area(&mut self, x: i32, z: i32, radius: i32) -> usize {
        let (center, _) = World::to_chunk_coords(Point3::new(x, 0, z));
        let before = self.chunks.len();

        for cz in center.z - radius..=center.z + radius {
            for cx in center.x - radius..=center.x + radius {
                for cy in 0..CHUNKS_PER_COLUMN {
                    self.add_chunk_at(Point3::new(cx, cy, cz));
                }
            }
        }

        let generated = self.chunks.len() - before;
        debug!("Generated {} chunks around ({}, {})", generated, x, z);
        generated
    }

    /// Retrieves a reference to the chunk at the specified chunk coordinates.
    pub fn get_chunk_at(&self, pos: Point3<i32>) -> Option<&Chunk> {
        self.chunks.get(&pos)
    }

    /// Returns the raw id of the block at `pos`, or air when no chunk holds it.
    pub fn get_block_at(&self, pos: Point3<i32>) -> BlockTypeSize {
        if !World::contains_height(pos.y) {
            return BlockType::AIR.id();
        }

        let (chunk_pos, local) = World::to_chunk_coords(pos);
        match self.get_chunk_at(chunk_pos) {
            Some(chunk) => chunk.get_local(local.x, local.y, local.z),
            None => BlockType::AIR.id(),
        }
    }

    /// Returns true if the block at `pos` is air, reading only the chunk's
    /// solidity bits.
    pub fn is_air_at(&self, pos: Point3<i32>) -> bool {
        if !World::contains_height(pos.y) {
            return true;
        }

        let (chunk_pos, local) = World::to_chunk_coords(pos);
        match self.get_chunk_at(chunk_pos) {
            Some(chunk) => !chunk.is_block_solid(local.x, local.y, local.z),
            None => true,
        }
    }

    /// Places the block `id` at `pos`, creating an empty chunk if needed.
    ///
    /// Returns `false` if `pos` lies outside the vertical range of the world.
    pub fn set_block_at(&mut self, pos: Point3<i32>, id: BlockTypeSize) -> bool {
        if !World::contains_height(pos.y) {
            return false;
        }

        let (chunk_pos, local) = World::to_chunk_coords(pos);
        self.chunks
            .entry(chunk_pos)
            .or_insert_with(|| Chunk::empty(&chunk_pos))
            .set_local(local.x, local.y, local.z, id);
        true
    }

    /// Height of the highest non-air block in the column, if any.
    pub fn highest_block_y(&self, x: i32, z: i32) -> Option<i32> {
        (0..WORLD_HEIGHT)
            .rev()
            .find(|&y| !self.is_air_at(Point3::new(x, y, z)))
    }
}

impl Default for World {
    fn default() -> Self {
        World::empty()
    }
}
