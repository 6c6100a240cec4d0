//! Furnishing definitions
//!
//! Each furnishing has a one-letter legend used in room art.

use og_core::{FurnishingDefinition, FurnishingLibrary};

/// Static furnishing data
#[derive(Debug, Clone, Copy)]
pub struct Furnishing {
    pub name: &'static str,
    /// Letter that places this furnishing in room art
    pub legend: char,
    pub tile: &'static str,
    /// First entry is the default state
    pub states: &'static [&'static str],
    pub blocks_movement: bool,
}

pub const FURNISHINGS: &[Furnishing] = &[
    Furnishing {
        name: "console",
        legend: 'c',
        tile: "console",
        states: &["off", "on", "broken"],
        blocks_movement: true,
    },
    Furnishing {
        name: "locker",
        legend: 'l',
        tile: "locker",
        states: &["closed", "open", "looted"],
        blocks_movement: true,
    },
    Furnishing {
        name: "bunk",
        legend: 'b',
        tile: "bunk",
        states: &[],
        blocks_movement: true,
    },
    Furnishing {
        name: "table",
        legend: 't',
        tile: "table",
        states: &[],
        blocks_movement: true,
    },
    Furnishing {
        name: "crate",
        legend: 'r',
        tile: "crate",
        states: &["sealed", "open", "looted"],
        blocks_movement: true,
    },
    Furnishing {
        name: "generator",
        legend: 'g',
        tile: "generator",
        states: &["running", "offline"],
        blocks_movement: true,
    },
    Furnishing {
        name: "specimen_tank",
        legend: 's',
        tile: "specimen_tank",
        states: &["occupied", "shattered", "empty"],
        blocks_movement: true,
    },
    Furnishing {
        name: "med_bed",
        legend: 'm',
        tile: "med_bed",
        states: &[],
        blocks_movement: false,
    },
    Furnishing {
        name: "desk",
        legend: 'd',
        tile: "desk",
        states: &[],
        blocks_movement: true,
    },
    Furnishing {
        name: "weapon_rack",
        legend: 'a',
        tile: "weapon_rack",
        states: &["stocked", "empty"],
        blocks_movement: true,
    },
];

/// Get a furnishing by its art legend
pub fn by_legend(legend: char) -> Option<&'static Furnishing> {
    FURNISHINGS.iter().find(|f| f.legend == legend)
}

impl Furnishing {
    pub fn to_definition(&self) -> FurnishingDefinition {
        let mut def = FurnishingDefinition::new(self.name);
        def.tile = Some(self.tile.to_string());
        def.states = self.states.iter().map(|s| s.to_string()).collect();
        def.default_state = self.states.first().map(|s| s.to_string());
        def.blocks_movement = self.blocks_movement;
        def
    }
}

/// All built-in furnishings as a library
pub fn outpost_furnishings() -> FurnishingLibrary {
    FURNISHINGS.iter().map(Furnishing::to_definition).collect::<Vec<_>>().into()
}
