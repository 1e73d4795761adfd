//! # Configuration
//!
//! Settings for the movement searches and for the in-memory host world, loaded
//! from a JSON file. Every field has a default, so a config file only needs to
//! name what it changes.
//!
//! ```json
//! {
//!     "movement": { "max_scan_y": 129, "platform_block": "glass" },
//!     "world": { "generation": "flat", "seed": 42, "radius": 2, "surface_height": 64 },
//!     "spawn": [0.5, 70.0, 0.5]
//! }
//! ```

use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WorldEditError};
use crate::voxels::block::block_type::BlockType;
use crate::voxels::world::WORLD_HEIGHT;

/// Largest generation radius, in chunks, a config may ask for.
pub const MAX_GENERATION_RADIUS: i32 = 64;

/// Vertical bounds of the column scans and the block placed by `ascend_to_ceiling`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementLimits {
    /// Highest height (inclusive) examined when searching upwards for free space.
    pub max_scan_y: i32,
    /// Highest height (inclusive) examined when searching for a ceiling.
    pub max_ceiling_y: i32,
    /// Lowest height (inclusive) examined when searching downwards for free space.
    pub min_scan_y: i32,
    /// Lowest height (inclusive) examined when looking for ground to land on.
    pub ground_floor_y: i32,
    /// Block placed beneath the player by `ascend_to_ceiling`.
    pub platform_block: BlockType,
}

impl Default for MovementLimits {
    fn default() -> Self {
        MovementLimits {
            max_scan_y: 129,
            max_ceiling_y: 127,
            min_scan_y: 1,
            ground_floor_y: 0,
            platform_block: BlockType::GLASS,
        }
    }
}

/// The method used to generate chunks of the in-memory world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMethod {
    /// Rolling terrain from Perlin noise
    #[default]
    Perlin,
    /// Flat layered terrain
    Flat,
    /// Every block stone
    Solid,
    /// Every block air
    Empty,
}

/// Settings for the in-memory world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldGenConfig {
    pub generation: GenerationMethod,
    /// Noise seed. A random seed is drawn when absent.
    pub seed: Option<u32>,
    /// Radius, in chunks, of the area generated around the spawn point.
    pub radius: i32,
    /// Average terrain height for the flat and Perlin generators.
    pub surface_height: i32,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        WorldGenConfig {
            generation: GenerationMethod::Perlin,
            seed: None,
            radius: 2,
            surface_height: 64,
        }
    }
}

impl WorldGenConfig {
    /// The configured seed, or a freshly drawn one.
    pub fn resolved_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| fastrand::u32(..))
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldEditConfig {
    pub movement: MovementLimits,
    pub world: WorldGenConfig,
    /// Where the demo player starts, in world coordinates.
    pub spawn: [f64; 3],
}

impl Default for WorldEditConfig {
    fn default() -> Self {
        WorldEditConfig {
            movement: MovementLimits::default(),
            world: WorldGenConfig::default(),
            spawn: [0.5, 70.0, 0.5],
        }
    }
}

impl WorldEditConfig {
    /// Reads and validates a JSON config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from {}", path.display());

        let contents = fs::read_to_string(path).map_err(|source| WorldEditError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&contents)?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses and validates a JSON config document.
    pub fn from_json(contents: &str) -> Result<Self> {
        let config: WorldEditConfig = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations the scans or the world cannot honour.
    pub fn validate(&self) -> Result<()> {
        let movement = &self.movement;
        if movement.min_scan_y > movement.max_scan_y {
            return Err(WorldEditError::InvalidConfig(format!(
                "min_scan_y ({}) is above max_scan_y ({})",
                movement.min_scan_y, movement.max_scan_y
            )));
        }
        if movement.ground_floor_y > movement.min_scan_y {
            return Err(WorldEditError::InvalidConfig(format!(
                "ground_floor_y ({}) is above min_scan_y ({})",
                movement.ground_floor_y, movement.min_scan_y
            )));
        }
        if BlockType::is_air(movement.platform_block.id()) {
            return Err(WorldEditError::InvalidConfig(
                "platform_block cannot be air".to_string(),
            ));
        }
        if !(0..=MAX_GENERATION_RADIUS).contains(&self.world.radius) {
            return Err(WorldEditError::InvalidConfig(format!(
                "world radius must lie within 0..={}, got {}",
                MAX_GENERATION_RADIUS, self.world.radius
            )));
        }
        if !(1..WORLD_HEIGHT).contains(&self.world.surface_height) {
            return Err(WorldEditError::InvalidConfig(format!(
                "surface_height must lie within 1..{}, got {}",
                WORLD_HEIGHT, self.world.surface_height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = WorldEditConfig::from_json("{}").unwrap();
        assert_eq!(config, WorldEditConfig::default());
        assert_eq!(config.movement.max_scan_y, 129);
        assert_eq!(config.movement.max_ceiling_y, 127);
        assert_eq!(config.movement.platform_block, BlockType::GLASS);
    }

    #[test]
    fn partial_documents_keep_other_defaults() {
        let config = WorldEditConfig::from_json(
            r#"{ "movement": { "platform_block": "cobblestone" }, "world": { "generation": "flat", "seed": 9 } }"#,
        )
        .unwrap();
        assert_eq!(config.movement.platform_block, BlockType::COBBLESTONE);
        assert_eq!(config.movement.min_scan_y, 1);
        assert_eq!(config.world.generation, GenerationMethod::Flat);
        assert_eq!(config.world.resolved_seed(), 9);
        assert_eq!(config.world.radius, 2);
    }

    #[test]
    fn inverted_scan_bounds_are_rejected() {
        let err = WorldEditConfig::from_json(r#"{ "movement": { "min_scan_y": 200 } }"#)
            .unwrap_err();
        assert!(matches!(err, WorldEditError::InvalidConfig(_)));
    }

    #[test]
    fn oversized_radius_is_rejected() {
        let err = WorldEditConfig::from_json(r#"{ "world": { "radius": 2000000000 } }"#)
            .unwrap_err();
        assert!(matches!(err, WorldEditError::InvalidConfig(_)));

        let edge = format!(r#"{{ "world": {{ "radius": {} }} }}"#, MAX_GENERATION_RADIUS);
        assert!(WorldEditConfig::from_json(&edge).is_ok());
    }

    #[test]
    fn air_platform_is_rejected() {
        let err = WorldEditConfig::from_json(r#"{ "movement": { "platform_block": "air" } }"#)
            .unwrap_err();
        assert!(matches!(err, WorldEditError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = WorldEditConfig::from_json("{ movement: ").unwrap_err();
        assert!(matches!(err, WorldEditError::ConfigParse(_)));
    }

    #[test]
    fn load_reads_files() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "spawn": [1.5, 80.0, -3.5] }}"#).unwrap();

        let config = WorldEditConfig::load(file.path()).unwrap();
        assert_eq!(config.spawn, [1.5, 80.0, -3.5]);
    }

    #[test]
    fn load_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let err = WorldEditConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, WorldEditError::ConfigIo { .. }));
    }
}
