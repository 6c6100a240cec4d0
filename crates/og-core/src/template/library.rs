//! Room library: the read-only set of templates a generator draws from

#[cfg(not(feature = "std"))]
use crate::compat::*;
#[cfg(feature = "std")]
use std::collections::BTreeMap;
#[cfg(feature = "std")]
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::dungeon::TileKind;
use crate::error::LibraryError;

use super::room::RoomDefinition;

fn default_tile_size() -> u32 {
    16
}

fn default_floor_tile() -> String {
    "floor".to_string()
}

fn default_wall_tile() -> String {
    "wall".to_string()
}

/// Named collection of room templates plus shared atlas metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomLibrary {
    pub name: String,
    /// Texture atlas the tile names refer to
    #[serde(default)]
    pub atlas: String,
    /// Tile edge length in pixels
    #[serde(default = "default_tile_size")]
    pub tile_size: u32,
    /// Tile written for synthesized corridor floors
    #[serde(default = "default_floor_tile")]
    pub default_floor_tile: String,
    /// Tile written for synthesized walls
    #[serde(default = "default_wall_tile")]
    pub default_wall_tile: String,
    /// Explicit tile-name classification, consulted before the naming rules
    #[serde(default)]
    pub tile_kinds: BTreeMap<String, TileKind>,
    #[serde(default)]
    pub rooms: Vec<Arc<RoomDefinition>>,
}

impl RoomLibrary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            atlas: String::new(),
            tile_size: default_tile_size(),
            default_floor_tile: default_floor_tile(),
            default_wall_tile: default_wall_tile(),
            tile_kinds: BTreeMap::new(),
            rooms: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_room(mut self, room: RoomDefinition) -> Self {
        self.rooms.push(Arc::new(room));
        self
    }

    #[must_use]
    pub fn with_tile_kind(mut self, tile: impl Into<String>, kind: TileKind) -> Self {
        self.tile_kinds.insert(tile.into(), kind);
        self
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Template by name
    pub fn get(&self, name: &str) -> Option<&Arc<RoomDefinition>> {
        self.rooms.iter().find(|r| r.name == name)
    }

    /// Indices of all entrance templates
    pub fn entrances(&self) -> Vec<usize> {
        self.rooms
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_entrance())
            .map(|(i, _)| i)
            .collect()
    }

    /// Classify a tile name.
    ///
    /// The override table wins; otherwise an empty name or "void" is void, a
    /// name containing "wall" is wall, and anything else is walkable floor.
    pub fn classify(&self, tile: &str) -> TileKind {
        if let Some(kind) = self.tile_kinds.get(tile) {
            return *kind;
        }
        if tile.is_empty() || tile == "void" {
            TileKind::Void
        } else if tile.contains("wall") {
            TileKind::Wall
        } else {
            TileKind::Floor
        }
    }

    /// Check every template and reject duplicate names.
    pub fn validate(&self) -> Result<(), LibraryError> {
        for (i, room) in self.rooms.iter().enumerate() {
            room.validate()?;
            if self.rooms[..i].iter().any(|r| r.name == room.name) {
                return Err(LibraryError::DuplicateName(room.name.clone()));
            }
        }
        Ok(())
    }

    /// Parse and validate a library from JSON
    pub fn from_json_str(json: &str) -> Result<Self, LibraryError> {
        let library: Self = serde_json::from_str(json)?;
        library.validate()?;
        Ok(library)
    }

    /// Load and validate a library from a JSON file
    #[cfg(feature = "std")]
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, LibraryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| LibraryError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json_str(&content)
    }
}
