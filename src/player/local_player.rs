//! # Local Player
//!
//! A complete `WorldEditPlayer` living on a `LocalServer`. It keeps its own
//! position, view angles, held item, inventory and received messages, which makes
//! it the reference implementation for hosts and the player used in tests.

use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use cgmath::{Point3, Vector3};
use log::{debug, info, warn};

use super::direction::{view_vector, CardinalDirection};
use super::movement::{block_center, block_position};
use super::WorldEditPlayer;
use crate::config::MovementLimits;
use crate::server::{LocalServer, ServerInterface};
use crate::voxels::block::item_type::ItemTypeSize;

/// Height of the player's eyes above their feet.
pub const EYE_HEIGHT: f64 = 1.62;

/// Distance between samples when tracing the player's line of sight.
pub const TRACE_STEP: f64 = 0.2;

/// A message delivered to a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Info(String),
    Error(String),
}

/// A player on the in-memory host.
pub struct LocalPlayer {
    name: String,
    server: LocalServer,
    position: Point3<f64>,
    pitch: f64,
    yaw: f64,
    item_in_hand: ItemTypeSize,
    inventory: HashMap<ItemTypeSize, u32>,
    messages: Vec<Message>,
    limits: MovementLimits,
}

impl LocalPlayer {
    /// Creates a player at `position`, looking level along +Z with an empty hand.
    pub fn new(name: impl Into<String>, server: LocalServer, position: Point3<f64>) -> Self {
        LocalPlayer {
            name: name.into(),
            server,
            position,
            pitch: 0.0,
            yaw: 0.0,
            item_in_hand: 0,
            inventory: HashMap::new(),
            messages: Vec::new(),
            limits: MovementLimits::default(),
        }
    }

    /// Replaces the bounds used by the movement searches.
    pub fn with_limits(mut self, limits: MovementLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Turns the player without moving them.
    pub fn set_rotation(&mut self, pitch: f64, yaw: f64) {
        self.pitch = pitch;
        self.yaw = yaw;
    }

    pub fn set_item_in_hand(&mut self, item: ItemTypeSize) {
        self.item_in_hand = item;
    }

    /// Items given to the player so far, by id.
    pub fn inventory(&self) -> &HashMap<ItemTypeSize, u32> {
        &self.inventory
    }

    /// Messages received so far, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Drains the received messages.
    pub fn take_messages(&mut self) -> Vec<Message> {
        std::mem::take(&mut self.messages)
    }

    fn is_free(&self, x: i32, y: i32, z: i32) -> bool {
        self.server.is_air(Point3::new(x, y, z))
            && self.server.is_air(Point3::new(x, y.saturating_add(1), z))
    }
}

impl WorldEditPlayer for LocalPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn block_on(&self) -> Point3<i32> {
        let block_in = self.block_in();
        Point3::new(block_in.x, block_in.y.saturating_sub(1), block_in.z)
    }

    fn block_in(&self) -> Point3<i32> {
        block_position(self.position)
    }

    fn block_trace(&self, range: u32) -> Option<Point3<i32>> {
        let eye = self.position + Vector3::new(0.0, EYE_HEIGHT, 0.0);
        let direction = view_vector(self.pitch, self.yaw);
        let steps = (f64::from(range) / TRACE_STEP).ceil() as u32;

        (1..=steps)
            .map(|step| block_position(eye + direction * (f64::from(step) * TRACE_STEP)))
            .find(|&block| !self.server.is_air(block))
    }

    fn position(&self) -> Point3<f64> {
        self.position
    }

    fn pitch(&self) -> f64 {
        self.pitch
    }

    fn yaw(&self) -> f64 {
        self.yaw
    }

    fn item_in_hand(&self) -> ItemTypeSize {
        self.item_in_hand
    }

    fn cardinal_direction(&self) -> CardinalDirection {
        CardinalDirection::from_yaw(self.yaw)
    }

    fn print(&mut self, msg: &str) {
        info!("[{}] {}", self.name, msg);
        self.messages.push(Message::Info(msg.to_string()));
    }

    fn print_error(&mut self, msg: &str) {
        warn!("[{}] {}", self.name, msg);
        self.messages.push(Message::Error(msg.to_string()));
    }

    fn set_position_with_rotation(&mut self, pos: Point3<f64>, pitch: f64, yaw: f64) {
        debug!("Teleporting {} to {:?}", self.name, pos);
        self.position = pos;
        self.pitch = pitch;
        self.yaw = yaw;
    }

    fn pass_through_forward_wall(&mut self, range: u32) -> bool {
        // Walk along whichever horizontal axis the player faces most.
        let facing = view_vector(0.0, self.yaw);
        let (dx, dz) = if facing.x.abs() > facing.z.abs() {
            (facing.x.signum() as i32, 0)
        } else {
            (0, facing.z.signum() as i32)
        };

        let start = self.block_in();
        let mut hit_wall = false;

        for step in 1..=range as i32 {
            let (x, z) = (start.x + dx * step, start.z + dz * step);

            if !self.is_free(x, start.y, z) {
                hit_wall = true;
            } else if hit_wall {
                self.set_position(block_center(x, start.y, z));
                return true;
            }
        }

        false
    }

    fn give_item(&mut self, item: ItemTypeSize, amount: u32) {
        if amount == 0 {
            return;
        }
        *self.inventory.entry(item).or_insert(0) += amount;
        debug!("Gave {} x{} of item {}", self.name, amount, item);
    }

    fn server(&self) -> &dyn ServerInterface {
        &self.server
    }

    fn movement_limits(&self) -> MovementLimits {
        self.limits
    }
}

impl PartialEq for LocalPlayer {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for LocalPlayer {}

impl Hash for LocalPlayer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::voxels::block::block_type::BlockType;

    fn player_on_floor() -> LocalPlayer {
        let server = LocalServer::default();
        for x in -8..=8 {
            for z in -8..=8 {
                server.set_block_type(Point3::new(x, 9, z), BlockType::STONE.id());
            }
        }
        LocalPlayer::new("alice", server, Point3::new(0.5, 10.0, 0.5))
    }

    #[test]
    fn blocks_in_and_on() {
        let player = player_on_floor();
        assert_eq!(player.block_in(), Point3::new(0, 10, 0));
        assert_eq!(player.block_on(), Point3::new(0, 9, 0));
    }

    #[test]
    fn set_position_keeps_rotation() {
        let mut player = player_on_floor();
        player.set_rotation(30.0, 200.0);
        player.set_position(Point3::new(3.5, 12.0, -1.5));
        assert_eq!(player.position(), Point3::new(3.5, 12.0, -1.5));
        assert_eq!(player.pitch(), 30.0);
        assert_eq!(player.yaw(), 200.0);
        assert_eq!(player.cardinal_direction(), CardinalDirection::East);
    }

    #[test]
    fn pickaxe_detection() {
        let mut player = player_on_floor();
        assert!(!player.is_holding_pick_axe());
        player.set_item_in_hand(278);
        assert!(player.is_holding_pick_axe());
        player.set_item_in_hand(279);
        assert!(!player.is_holding_pick_axe());
    }

    #[test]
    fn trace_looking_down_hits_the_floor() {
        let mut player = player_on_floor();
        player.set_rotation(90.0, 0.0);
        assert_eq!(player.block_trace(5), Some(Point3::new(0, 9, 0)));
    }

    #[test]
    fn trace_into_open_air_finds_nothing() {
        let mut player = player_on_floor();
        player.set_rotation(-90.0, 0.0);
        assert_eq!(player.block_trace(20), None);
    }

    #[test]
    fn trace_respects_range() {
        let mut player = player_on_floor();
        player
            .server
            .set_block_type(Point3::new(0, 11, 6), BlockType::DIRT.id());
        assert_eq!(player.block_trace(3), None);
        assert_eq!(player.block_trace(10), Some(Point3::new(0, 11, 6)));
    }

    #[test]
    fn passes_through_a_wall_ahead() {
        let mut player = player_on_floor();
        for z in 2..=3 {
            for y in 10..=11 {
                player
                    .server
                    .set_block_type(Point3::new(0, y, z), BlockType::STONE.id());
            }
        }

        assert!(player.pass_through_forward_wall(6));
        assert_eq!(player.position(), Point3::new(0.5, 10.0, 4.5));
    }

    #[test]
    fn no_wall_means_no_pass() {
        let mut player = player_on_floor();
        assert!(!player.pass_through_forward_wall(6));
        assert_eq!(player.position(), Point3::new(0.5, 10.0, 0.5));
    }

    #[test]
    fn thick_walls_beyond_range_are_not_passed() {
        let mut player = player_on_floor();
        player.set_rotation(0.0, 90.0);
        for x in -6..=-1 {
            player
                .server
                .set_block_type(Point3::new(x, 10, 0), BlockType::STONE.id());
        }
        assert!(!player.pass_through_forward_wall(6));
        assert!(player.pass_through_forward_wall(7));
        assert_eq!(player.position(), Point3::new(-6.5, 10.0, 0.5));
    }

    #[test]
    fn messages_and_items_accumulate() {
        let mut player = player_on_floor();
        player.print("hello");
        player.print_error("no");
        player.give_item(20, 5);
        player.give_item(20, 3);
        player.give_item(1, 0);

        assert_eq!(
            player.take_messages(),
            vec![Message::Info("hello".into()), Message::Error("no".into())]
        );
        assert!(player.messages().is_empty());
        assert_eq!(player.inventory().get(&20), Some(&8));
        assert_eq!(player.inventory().get(&1), None);
    }

    #[test]
    fn far_off_positions_do_not_overflow() {
        let mut high = LocalPlayer::new("high", LocalServer::default(), Point3::new(0.5, 1e12, 0.5));
        assert!(!high.ascend_to_ceiling(0));
        assert!(!high.ascend_level());
        assert_eq!(high.position(), Point3::new(0.5, 1e12, 0.5));

        let low = LocalPlayer::new("low", LocalServer::default(), Point3::new(0.5, -1e12, 0.5));
        assert_eq!(low.block_on(), Point3::new(0, i32::MIN, 0));
    }

    #[test]
    fn refused_platform_still_moves_the_player() {
        let server = LocalServer::default();
        server.set_block_type(Point3::new(0, 0, 0), BlockType::STONE.id());
        let mut player = LocalPlayer::new("digger", server.clone(), Point3::new(0.5, -3.0, 0.5));

        // The platform lands at y -3, below the world, so the host refuses it.
        assert!(player.ascend_to_ceiling(0));
        assert_eq!(player.position(), Point3::new(0.5, -2.0, 0.5));
        assert_eq!(server.block_type(Point3::new(0, -3, 0)), BlockType::AIR.id());
    }

    #[test]
    fn players_hash_by_name() {
        let server = LocalServer::default();
        let mut players = HashSet::new();
        players.insert(LocalPlayer::new("dave", server.clone(), Point3::new(0.0, 0.0, 0.0)));
        players.insert(LocalPlayer::new("dave", server.clone(), Point3::new(9.0, 9.0, 9.0)));
        players.insert(LocalPlayer::new("erin", server, Point3::new(0.0, 0.0, 0.0)));
        assert_eq!(players.len(), 2);
    }

    #[test]
    fn players_are_identified_by_name() {
        let server = LocalServer::default();
        let a = LocalPlayer::new("bob", server.clone(), Point3::new(0.0, 0.0, 0.0));
        let mut b = LocalPlayer::new("bob", server.clone(), Point3::new(5.0, 5.0, 5.0));
        b.set_item_in_hand(270);
        let c = LocalPlayer::new("carol", server, Point3::new(0.0, 0.0, 0.0));

        assert!(a == b);
        assert!(a != c);

        let players: [&dyn WorldEditPlayer; 3] = [&a, &b, &c];
        assert!(players[0] == players[1]);
        let unique: HashSet<&dyn WorldEditPlayer> = players.into_iter().collect();
        assert_eq!(unique.len(), 2);
    }
}
