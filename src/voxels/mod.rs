//! # Voxels
//!
//! The in-memory voxel world that backs the reference host.
//!
//! * **Block**: Block and item ids, and the predicates the movement searches need
//! * **Chunk**: Fixed-size 3D arrays of blocks plus their terrain generators
//! * **World**: Sparse collection of chunks addressed by block position

pub mod block;
pub mod chunk;
pub mod world;
