//! # Server Module
//!
//! The seam between the editing tool and the host server that owns the world.
//! Players never touch block storage directly; every lookup and placement goes
//! through a `ServerInterface`.

use cgmath::Point3;

use crate::voxels::block::block_type::BlockType;
use crate::voxels::block::BlockTypeSize;

pub mod local_server;

pub use local_server::LocalServer;

/// Block access provided by the host server.
///
/// Implementations are shared between every player on the server, so both
/// operations take `&self`; hosts synchronise internally.
pub trait ServerInterface: Send + Sync {
    /// Returns the raw id of the block at `pos`.
    ///
    /// Positions the host holds no data for read as air.
    fn block_type(&self, pos: Point3<i32>) -> BlockTypeSize;

    /// Places the block `id` at `pos`.
    ///
    /// Returns `false` if the host refused the change.
    fn set_block_type(&self, pos: Point3<i32>, id: BlockTypeSize) -> bool;

    /// Returns true if the block at `pos` is air.
    ///
    /// Hosts that track air separately from block data can answer this without
    /// a full lookup; the column scans only ever ask this question.
    fn is_air(&self, pos: Point3<i32>) -> bool {
        BlockType::is_air(self.block_type(pos))
    }
}
