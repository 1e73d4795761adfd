//! # Movement Searches
//!
//! Bounded scans over a single vertical column of the host world. Each search
//! only decides where a player should end up; moving the player (and placing a
//! platform) is left to the `WorldEditPlayer` methods built on top of them.

use cgmath::Point3;
use log::debug;

use crate::config::MovementLimits;
use crate::server::ServerInterface;
use crate::voxels::block::block_type::BlockType;

/// A platform to place and where to stand on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CeilingPlatform {
    /// Block position of the platform block.
    pub platform: Point3<i32>,
    /// Position of the player standing on the platform.
    pub destination: Point3<f64>,
}

/// Floors each component of an entity position to get the block containing it.
pub fn block_position(pos: Point3<f64>) -> Point3<i32> {
    Point3::new(
        pos.x.floor() as i32,
        pos.y.floor() as i32,
        pos.z.floor() as i32,
    )
}

/// Position standing at the horizontal centre of block (`x`, `y`, `z`).
pub fn block_center(x: i32, y: i32, z: i32) -> Point3<f64> {
    Point3::new(x as f64 + 0.5, y as f64, z as f64 + 0.5)
}

fn is_air(server: &dyn ServerInterface, x: i32, y: i32, z: i32) -> bool {
    server.is_air(Point3::new(x, y, z))
}

/// Searches upwards from `start` (inclusive) for two consecutive air blocks.
///
/// The hit is ignored when its lower block is `start` itself, so a player who is
/// already standing in free space is only moved if a later gap is found above a
/// solid block.
pub fn find_free_position(
    server: &dyn ServerInterface,
    start: Point3<i32>,
    limits: &MovementLimits,
) -> Option<Point3<f64>> {
    let (x, z) = (start.x, start.z);
    let mut free = 0u32;

    for y in start.y..=limits.max_scan_y {
        if is_air(server, x, y, z) {
            free += 1;
        } else {
            free = 0;
        }

        if free == 2 && y - 1 != start.y {
            debug!("Free position found at ({}, {}, {})", x, y - 1, z);
            return Some(block_center(x, y - 1, z));
        }
    }

    None
}

/// Searches upwards from `start` for the second two-block gap in the column.
///
/// The first gap is normally the one the player occupies. Returns `None` if no
/// second gap exists below `limits.max_scan_y`, or if the block under it is lava.
pub fn ascend_level(
    server: &dyn ServerInterface,
    start: Point3<i32>,
    limits: &MovementLimits,
) -> Option<Point3<f64>> {
    let (x, z) = (start.x, start.z);
    let mut free = 0u32;
    let mut spots = 0u32;

    for y in start.y..=limits.max_scan_y {
        if is_air(server, x, y, z) {
            free += 1;
        } else {
            free = 0;
        }

        if free == 2 {
            spots += 1;
            if spots == 2 {
                let floor = y
                    .checked_sub(2)
                    .map(|floor_y| server.block_type(Point3::new(x, floor_y, z)))
                    .unwrap_or(BlockType::AIR.id());
                if BlockType::is_lava(floor) {
                    debug!("Level above ({}, {}, {}) sits on lava", x, y - 1, z);
                    return None;
                }
                return Some(block_center(x, y - 1, z));
            }
        }
    }

    None
}

/// Searches downwards from the block below `start` for a two-block gap, then
/// drops from that gap onto the first block that is neither air nor lava.
pub fn descend_level(
    server: &dyn ServerInterface,
    start: Point3<i32>,
    limits: &MovementLimits,
) -> Option<Point3<f64>> {
    let (x, z) = (start.x, start.z);
    let mut free = 0u32;

    for y in (limits.min_scan_y..start.y).rev() {
        if is_air(server, x, y, z) {
            free += 1;
        } else {
            free = 0;
        }

        if free == 2 {
            for ground in (limits.ground_floor_y..=y).rev() {
                let id = server.block_type(Point3::new(x, ground, z));
                if !BlockType::is_air(id) && !BlockType::is_lava(id) {
                    return Some(block_center(x, ground + 1, z));
                }
            }

            debug!("No ground below the gap at ({}, {}, {})", x, y, z);
            return None;
        }
    }

    None
}

/// Searches upwards for the ceiling above `start` and picks a platform height
/// leaving `clearance` free blocks between the player's head and the ceiling.
///
/// The platform never goes below `start`. Returns `None` if the block two above
/// `start` is already solid or no ceiling exists below `limits.max_ceiling_y`.
pub fn ascend_to_ceiling(
    server: &dyn ServerInterface,
    start: Point3<i32>,
    clearance: u32,
    limits: &MovementLimits,
) -> Option<CeilingPlatform> {
    let (x, initial_y, z) = (start.x, start.y, start.z);
    let first = initial_y.checked_add(2)?;

    if !is_air(server, x, first, z) {
        return None;
    }

    for y in first..=limits.max_ceiling_y {
        if !is_air(server, x, y, z) {
            let clearance = i32::try_from(clearance).unwrap_or(i32::MAX);
            let platform_y = initial_y.max(y.saturating_sub(3).saturating_sub(clearance));
            debug!("Ceiling found at y {}, platform at y {}", y, platform_y);
            return Some(CeilingPlatform {
                platform: Point3::new(x, platform_y, z),
                destination: block_center(x, platform_y + 1, z),
            });
        }
    }

    None
}
