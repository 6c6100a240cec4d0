//! Generator configuration
//!
//! Every field has a default, so a config file only needs to name what it
//! changes.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// Largest accepted `max_rooms`
pub const MAX_ROOMS: u32 = 1024;

/// Largest accepted `level_width` or `level_height`, in tiles
pub const MAX_LEVEL_SIDE: u32 = 4096;

/// Knobs for a single generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Lower bound for the sampled room count
    pub min_rooms: u32,
    /// Upper bound for the sampled room count
    pub max_rooms: u32,
    /// Minimum grid width in tiles
    pub level_width: u32,
    /// Minimum grid height in tiles
    pub level_height: u32,
    /// RNG seed; 0 derives one from the clock
    pub seed: u64,
    /// Join leftover facing doors with extra corridors after placement
    pub connect_all: bool,
    /// Skip the room-footprint overlap test
    pub allow_overlap: bool,
    /// Fail when fewer than `min_rooms` rooms survive
    pub strict_room_count: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_rooms: 5,
            max_rooms: 10,
            level_width: 64,
            level_height: 48,
            seed: 0,
            connect_all: false,
            allow_overlap: false,
            strict_room_count: false,
        }
    }
}

impl GeneratorConfig {
    /// Config with the given room range and seed, everything else default
    pub fn new(min_rooms: u32, max_rooms: u32, seed: u64) -> Self {
        Self {
            min_rooms,
            max_rooms,
            seed,
            ..Self::default()
        }
    }

    /// Parse a config from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, GenerationError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GenerationError::InvalidConfig {
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the room range is usable and every size stays within its cap.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.min_rooms == 0 {
            return Err(GenerationError::InvalidConfig {
                reason: "min_rooms must be at least 1".to_string(),
            });
        }
        if self.min_rooms > self.max_rooms {
            return Err(GenerationError::InvalidConfig {
                reason: format!(
                    "min_rooms ({}) exceeds max_rooms ({})",
                    self.min_rooms, self.max_rooms
                ),
            });
        }
        if self.max_rooms > MAX_ROOMS {
            return Err(GenerationError::InvalidConfig {
                reason: format!("max_rooms ({}) exceeds {}", self.max_rooms, MAX_ROOMS),
            });
        }
        let sides = [
            ("level_width", self.level_width),
            ("level_height", self.level_height),
        ];
        for (field, value) in sides {
            if value > MAX_LEVEL_SIDE {
                return Err(GenerationError::InvalidConfig {
                    reason: format!("{field} ({value}) exceeds {MAX_LEVEL_SIDE}"),
                });
            }
        }
        Ok(())
    }
}
