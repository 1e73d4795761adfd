//! # Local Server
//!
//! A `ServerInterface` backed by the in-memory `World`, used by the demo binary
//! and by tests.

use cgmath::Point3;
use log::warn;

use super::ServerInterface;
use crate::config::WorldGenConfig;
use crate::core::MtResource;
use crate::voxels::block::BlockTypeSize;
use crate::voxels::world::World;

/// Host server over a shared in-memory world.
///
/// Cloning a `LocalServer` yields another handle to the same world.
#[derive(Clone)]
pub struct LocalServer {
    world: MtResource<World>,
}

impl LocalServer {
    /// Wraps an existing world.
    pub fn new(world: World) -> Self {
        LocalServer {
            world: MtResource::new(world),
        }
    }

    /// Creates a server whose world is generated according to `config`, with the
    /// area of `config.radius` chunks around (`x`, `z`) generated up front.
    pub fn generated(config: &WorldGenConfig, x: i32, z: i32) -> Self {
        let mut world = World::new(config);
        world.generate_area(x, z, config.radius);
        LocalServer::new(world)
    }

    /// Shared handle to the world behind this server.
    pub fn world(&self) -> &MtResource<World> {
        &self.world
    }
}

impl Default for LocalServer {
    fn default() -> Self {
        LocalServer::new(World::empty())
    }
}

impl ServerInterface for LocalServer {
    fn block_type(&self, pos: Point3<i32>) -> BlockTypeSize {
        self.world.get().get_block_at(pos)
    }

    fn is_air(&self, pos: Point3<i32>) -> bool {
        self.world.get().is_air_at(pos)
    }

    fn set_block_type(&self, pos: Point3<i32>, id: BlockTypeSize) -> bool {
        let placed = self.world.get_mut().set_block_at(pos, id);
        if !placed {
            warn!("Refused to place block {} outside the world at {:?}", id, pos);
        }
        placed
    }
}
