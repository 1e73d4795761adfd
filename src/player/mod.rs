//! # Player Module
//!
//! The editing tool's view of a player. A host implements the required methods of
//! `WorldEditPlayer` (state, messaging, teleporting); the movement operations used
//! by navigation commands come for free on top of them.
//!
//! ## Identity
//!
//! Players are identified by name alone: two players with the same name are the
//! same player, whatever else differs.

use std::hash::{Hash, Hasher};

use cgmath::Point3;
use log::{info, warn};

use crate::config::MovementLimits;
use crate::server::ServerInterface;
use crate::voxels::block::item_type::{ItemType, ItemTypeSize};

pub mod direction;
pub mod local_player;
pub mod movement;

pub use direction::CardinalDirection;
pub use local_player::{LocalPlayer, Message};

/// A player as seen by the editing tool.
pub trait WorldEditPlayer {
    /// The name of the player.
    fn name(&self) -> &str;

    /// The block being stood upon.
    fn block_on(&self) -> Point3<i32>;

    /// The block being stood in.
    fn block_in(&self) -> Point3<i32>;

    /// The block being looked at within `range` blocks, if any.
    fn block_trace(&self, range: u32) -> Option<Point3<i32>>;

    /// The player's exact position.
    fn position(&self) -> Point3<f64>;

    /// View pitch in degrees.
    fn pitch(&self) -> f64;

    /// View yaw in degrees.
    fn yaw(&self) -> f64;

    /// Id of the item the player is holding.
    fn item_in_hand(&self) -> ItemTypeSize;

    /// Compass direction the player is facing.
    fn cardinal_direction(&self) -> CardinalDirection;

    /// Sends an informational message to the player.
    fn print(&mut self, msg: &str);

    /// Sends an error message to the player.
    fn print_error(&mut self, msg: &str);

    /// Moves the player and sets their view angles.
    fn set_position_with_rotation(&mut self, pos: Point3<f64>, pitch: f64, yaw: f64);

    /// Moves the player through the wall in front of them.
    ///
    /// Returns whether a wall was passed through.
    fn pass_through_forward_wall(&mut self, range: u32) -> bool;

    /// Gives the player `amount` of item `item`.
    fn give_item(&mut self, item: ItemTypeSize, amount: u32);

    /// The host server the player is on.
    fn server(&self) -> &dyn ServerInterface;

    /// Bounds used by the movement searches.
    fn movement_limits(&self) -> MovementLimits {
        MovementLimits::default()
    }

    /// Returns true if the player is holding a pickaxe.
    fn is_holding_pick_axe(&self) -> bool {
        ItemType::is_pickaxe(self.item_in_hand())
    }

    /// Moves the player, keeping their current view angles.
    fn set_position(&mut self, pos: Point3<f64>) {
        let (pitch, yaw) = (self.pitch(), self.yaw());
        self.set_position_with_rotation(pos, pitch, yaw);
    }

    /// Moves the player to the first two-block gap at or above `search_pos`.
    ///
    /// Returns whether the player was moved.
    fn find_free_position_from(&mut self, search_pos: Point3<i32>) -> bool {
        let limits = self.movement_limits();
        match movement::find_free_position(self.server(), search_pos, &limits) {
            Some(destination) => {
                info!("Freeing {} to {:?}", self.name(), destination);
                self.set_position(destination);
                true
            }
            None => false,
        }
    }

    /// Moves the player out of whatever they are stuck in.
    ///
    /// Returns whether the player was moved.
    fn find_free_position(&mut self) -> bool {
        let block_in = self.block_in();
        self.find_free_position_from(block_in)
    }

    /// Goes up one level to the next free space above.
    ///
    /// Returns true if a spot was found.
    fn ascend_level(&mut self) -> bool {
        let limits = self.movement_limits();
        match movement::ascend_level(self.server(), self.block_in(), &limits) {
            Some(destination) => {
                info!("Ascending {} to {:?}", self.name(), destination);
                self.set_position(destination);
                true
            }
            None => false,
        }
    }

    /// Goes down one level to the next free space below.
    ///
    /// Returns true if a spot was found.
    fn descend_level(&mut self) -> bool {
        let limits = self.movement_limits();
        match movement::descend_level(self.server(), self.block_in(), &limits) {
            Some(destination) => {
                info!("Descending {} to {:?}", self.name(), destination);
                self.set_position(destination);
                true
            }
            None => false,
        }
    }

    /// Ascends to the ceiling above, placing a platform to stand on with
    /// `clearance` free blocks above the player's head.
    ///
    /// The player is moved even if the host refuses the platform block.
    ///
    /// Returns whether the player was moved.
    fn ascend_to_ceiling(&mut self, clearance: u32) -> bool {
        let limits = self.movement_limits();
        let Some(found) = movement::ascend_to_ceiling(self.server(), self.block_in(), clearance, &limits)
        else {
            return false;
        };

        if !self
            .server()
            .set_block_type(found.platform, limits.platform_block.id())
        {
            warn!("Host refused the platform for {} at {:?}", self.name(), found.platform);
        }

        info!("Raising {} to the ceiling at {:?}", self.name(), found.destination);
        self.set_position(found.destination);
        true
    }
}

impl PartialEq for dyn WorldEditPlayer + '_ {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for dyn WorldEditPlayer + '_ {}

impl Hash for dyn WorldEditPlayer + '_ {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}
