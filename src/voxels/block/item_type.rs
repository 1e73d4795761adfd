//! # Item Type Module
//!
//! Item ids players can hold. Only the tools the editing tool reacts to are
//! modelled; any other id is still accepted as a raw `ItemTypeSize`.

use num_derive::FromPrimitive;

/// Raw numeric item id as reported by hosts.
pub type ItemTypeSize = u16;

/// Pickaxes, which select the block-breaking tool mode.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
#[repr(u16)]
pub enum ItemType {
    IRON_PICKAXE = 257,
    WOOD_PICKAXE = 270,
    STONE_PICKAXE = 274,
    DIAMOND_PICKAXE = 278,
    GOLD_PICKAXE = 285,
}

impl ItemType {
    /// The numeric id hosts use for this item.
    pub fn id(self) -> ItemTypeSize {
        self as ItemTypeSize
    }

    /// Returns true if `id` is any of the pickaxes.
    pub fn is_pickaxe(id: ItemTypeSize) -> bool {
        let item: Option<ItemType> = num_traits::FromPrimitive::from_u16(id);
        item.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pickaxe_is_recognised() {
        for id in [257, 270, 274, 278, 285] {
            assert!(ItemType::is_pickaxe(id), "{id} should be a pickaxe");
        }
    }

    #[test]
    fn other_items_are_not_pickaxes() {
        for id in [0, 256, 258, 269, 271, 277, 284, 286] {
            assert!(!ItemType::is_pickaxe(id), "{id} should not be a pickaxe");
        }
        assert_eq!(ItemType::DIAMOND_PICKAXE.id(), 278);
    }
}
