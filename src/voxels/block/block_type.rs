//! # Block Type Module
//!
//! This module defines the block types the editing tool knows about, using the
//! classic numeric ids hosts report. It provides conversion from raw ids and the
//! handful of predicates the movement searches rely on (air, lava).

use std::fmt;

use num_derive::FromPrimitive;
use serde::{Deserialize, Serialize};

use super::BlockTypeSize;
use crate::error::WorldEditError;

/// Enumerates the known block types.
///
/// The discriminant of each variant is the numeric id used by hosts. The
/// `FromPrimitive` derive allows conversion back from those ids.
#[allow(non_camel_case_types)]
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u16)]
pub enum BlockType {
    /// Empty space. Players can stand in it.
    AIR = 0,
    STONE = 1,
    GRASS = 2,
    DIRT = 3,
    COBBLESTONE = 4,
    WOOD = 5,
    SAPLING = 6,
    BEDROCK = 7,
    WATER = 8,
    STATIONARY_WATER = 9,
    /// Flowing lava. Never a safe place to put a player.
    LAVA = 10,
    /// Still lava. Never a safe place to put a player.
    STATIONARY_LAVA = 11,
    SAND = 12,
    GRAVEL = 13,
    GOLD_ORE = 14,
    IRON_ORE = 15,
    COAL_ORE = 16,
    LOG = 17,
    LEAVES = 18,
    SPONGE = 19,
    /// Glass, used for the platform created when ascending to a ceiling.
    GLASS = 20,
}

impl BlockType {
    /// Converts a raw id to a `BlockType`, returning `None` for ids this crate
    /// does not model.
    pub fn from_id(id: BlockTypeSize) -> Option<Self> {
        num_traits::FromPrimitive::from_u16(id)
    }

    /// The numeric id hosts use for this block type.
    pub fn id(self) -> BlockTypeSize {
        self as BlockTypeSize
    }

    /// Returns true if `id` is air.
    pub fn is_air(id: BlockTypeSize) -> bool {
        id == BlockType::AIR.id()
    }

    /// Returns true if `id` is flowing or still lava.
    pub fn is_lava(id: BlockTypeSize) -> bool {
        id == BlockType::LAVA.id() || id == BlockType::STATIONARY_LAVA.id()
    }
}

impl TryFrom<BlockTypeSize> for BlockType {
    type Error = WorldEditError;

    fn try_from(id: BlockTypeSize) -> Result<Self, Self::Error> {
        BlockType::from_id(id).ok_or(WorldEditError::UnknownBlockId(id))
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}
