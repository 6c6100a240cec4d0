//! The generated level and its report
//!
//! A [`GeneratedLevel`] owns everything it contains; nothing in the generator
//! keeps a reference once `generate()` returns.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use serde::{Deserialize, Serialize};

use super::cell::TileKind;
use super::corridor::Corridor;
use super::furnish::PlacedFurnishing;
use super::grid::TileGrid;
use super::placement::{PlacementDeficiency, Strategy};
use super::room::PlacedRoom;

/// How a level came to be: what was asked for, what was given up on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Seed the RNG actually ran with
    pub seed: u64,
    /// Room count sampled from the configured range
    pub requested_rooms: usize,
    /// Template names chosen by the selector, entrance first
    pub selected: Vec<String>,
    /// Selected templates no strategy could place
    pub deficiencies: Vec<PlacementDeficiency>,
    /// Ids of placed rooms removed as unreachable
    pub pruned_rooms: Vec<u32>,
    /// Corridors removed as unreachable
    pub pruned_corridors: usize,
    /// Strategy that placed each non-entrance room, by room id
    pub strategies: Vec<(u32, Strategy)>,
    /// Corridors added by joining facing doors after placement
    pub extra_corridors: usize,
}

impl GenerationReport {
    /// Whether every requested room made it into the level
    pub fn is_complete(&self, placed: usize) -> bool {
        self.deficiencies.is_empty() && self.pruned_rooms.is_empty() && placed >= self.requested_rooms
    }
}

/// A finished level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedLevel {
    pub width: usize,
    pub height: usize,
    /// Pixel size of one tile
    pub tile_size: u32,
    pub default_floor_tile: String,
    pub grid: TileGrid,
    /// Surviving rooms, entrance first
    pub rooms: Vec<PlacedRoom>,
    pub corridors: Vec<Corridor>,
    pub furnishings: Vec<PlacedFurnishing>,
    /// Player spawn in pixels, at the center of the spawn tile
    pub spawn: (f32, f32),
    /// Spawn tile inside the entrance room
    pub spawn_tile: (i32, i32),
    pub report: GenerationReport,
}

impl GeneratedLevel {
    /// Tile names indexed `[row][col]`
    pub fn tiles(&self) -> Vec<Vec<&str>> {
        self.grid.tile_names()
    }

    /// Atlas tile name at (x, y); `None` off the grid
    pub fn tile_at(&self, x: i32, y: i32) -> Option<&str> {
        self.grid.get(x, y).map(|c| c.tile.as_str())
    }

    pub fn kind_at(&self, x: i32, y: i32) -> TileKind {
        self.grid.kind(x, y)
    }

    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.grid.get(x, y).is_some_and(|c| c.is_walkable())
    }

    /// Off-grid cells block sight
    pub fn blocks_sight(&self, x: i32, y: i32) -> bool {
        self.grid.get(x, y).is_none_or(|c| c.blocks_sight())
    }

    pub fn entrance(&self) -> Option<&PlacedRoom> {
        self.rooms.first()
    }

    /// The room whose footprint covers (x, y)
    pub fn room_at(&self, x: i32, y: i32) -> Option<&PlacedRoom> {
        self.rooms.iter().find(|r| r.contains(x, y))
    }

    pub fn room(&self, id: u32) -> Option<&PlacedRoom> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Furnishings standing in the given room
    pub fn furnishings_in(&self, room: u32) -> impl Iterator<Item = &PlacedFurnishing> {
        self.furnishings.iter().filter(move |f| f.room == room)
    }

    pub fn furnishing_at(&self, x: i32, y: i32) -> Option<&PlacedFurnishing> {
        self.furnishings.iter().find(|f| f.x == x && f.y == y)
    }

    /// ASCII picture of the grid, with `@` on the spawn tile and `&` on
    /// furnishings
    pub fn render_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for (y, row) in self.grid.rows().iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (x, y) = (x as i32, y as i32);
                let symbol = if (x, y) == self.spawn_tile {
                    '@'
                } else if self.furnishing_at(x, y).is_some() {
                    '&'
                } else {
                    cell.kind.symbol()
                };
                out.push(symbol);
            }
            out.push('\n');
        }
        out
    }
}

/// Pixel center of a tile
pub fn tile_center_px(tile: (i32, i32), tile_size: u32) -> (f32, f32) {
    let size = tile_size as f32;
    ((tile.0 as f32 + 0.5) * size, (tile.1 as f32 + 0.5) * size)
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(feature = "std")]
    use std::sync::Arc;

    use crate::dungeon::cell::Cell;
    use crate::template::RoomDefinition;

    fn level() -> GeneratedLevel {
        let mut grid = TileGrid::new(5, 4);
        for x in 0..5 {
            grid.set(x, 0, Cell::wall("wall"));
            grid.set(x, 3, Cell::wall("wall"));
        }
        for y in 1..3 {
            grid.set(0, y, Cell::wall("wall"));
            grid.set(4, y, Cell::wall("wall"));
            for x in 1..4 {
                grid.set(x, y, Cell::floor("deck"));
            }
        }
        let def = RoomDefinition::filled("dock", "entrance", 5, 4, "deck");
        GeneratedLevel {
            width: 5,
            height: 4,
            tile_size: 16,
            default_floor_tile: "deck".to_string(),
            grid,
            rooms: vec![PlacedRoom::new(0, Arc::new(def), 0, 0)],
            corridors: Vec::new(),
            furnishings: vec![PlacedFurnishing {
                id: "crate_1".to_string(),
                furnishing: "crate".to_string(),
                room: 0,
                x: 1,
                y: 1,
                state: "default".to_string(),
                blocks_movement: true,
            }],
            spawn: tile_center_px((2, 2), 16),
            spawn_tile: (2, 2),
            report: GenerationReport::default(),
        }
    }

    #[test]
    fn test_queries() {
        let level = level();
        assert_eq!(level.tile_at(1, 1), Some("deck"));
        assert_eq!(level.tile_at(9, 9), None);
        assert_eq!(level.kind_at(0, 0), TileKind::Wall);
        assert!(level.is_walkable(2, 1));
        assert!(!level.is_walkable(0, 1));
        assert!(!level.is_walkable(-1, 1));
        assert!(level.blocks_sight(0, 0));
        assert!(level.blocks_sight(7, 7));
        assert!(!level.blocks_sight(2, 2));
        assert_eq!(level.room_at(3, 2).map(|r| r.id), Some(0));
        assert!(level.room_at(6, 2).is_none());
        assert_eq!(level.entrance().map(|r| r.name()), Some("dock"));
        assert_eq!(level.furnishings_in(0).count(), 1);
        assert_eq!(level.tiles()[1][1], "deck");
    }

    #[test]
    fn test_spawn_pixels() {
        assert_eq!(tile_center_px((2, 2), 16), (40.0, 40.0));
        assert_eq!(tile_center_px((0, 3), 32), (16.0, 112.0));
    }

    #[test]
    fn test_render_ascii() {
        let level = level();
        assert_eq!(level.render_ascii(), "#####\n#&..#\n#.@.#\n#####\n");
    }

    #[test]
    fn test_report_completeness() {
        let mut report = GenerationReport {
            requested_rooms: 2,
            ..GenerationReport::default()
        };
        assert!(report.is_complete(2));
        assert!(!report.is_complete(1));
        report.pruned_rooms.push(1);
        assert!(!report.is_complete(2));
    }
}
