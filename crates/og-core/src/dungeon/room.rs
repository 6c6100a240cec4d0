//! Placed rooms and the occupancy map used while placing them

#[cfg(not(feature = "std"))]
use crate::compat::*;
#[cfg(feature = "std")]
use std::sync::Arc;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::template::{Direction, RoomDefinition};

/// One concrete instance of a room template in world coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedRoom {
    /// Stable id, assigned in placement order
    pub id: u32,
    /// Shared, read-only template
    pub definition: Arc<RoomDefinition>,
    /// X coordinate of the template's top-left cell
    pub x: i32,
    /// Y coordinate of the template's top-left cell
    pub y: i32,
    /// Whether a corridor links this room to the rest of the level
    pub connected: bool,
    /// Connection indices already consumed by a corridor, ascending
    pub used_connections: Vec<usize>,
}

impl PlacedRoom {
    pub fn new(id: u32, definition: Arc<RoomDefinition>, x: i32, y: i32) -> Self {
        Self {
            id,
            definition,
            x,
            y,
            connected: false,
            used_connections: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn width(&self) -> i32 {
        self.definition.width as i32
    }

    pub fn height(&self) -> i32 {
        self.definition.height as i32
    }

    /// Center cell in world coordinates
    pub fn center(&self) -> (i32, i32) {
        let (cx, cy) = self.definition.center();
        (self.x + cx as i32, self.y + cy as i32)
    }

    /// Check if a world cell lies inside the footprint
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width() && y >= self.y && y < self.y + self.height()
    }

    /// Bounds as (left, top, right, bottom), inclusive
    pub fn bounds(&self) -> (i32, i32, i32, i32) {
        (
            self.x,
            self.y,
            self.x + self.width() - 1,
            self.y + self.height() - 1,
        )
    }

    /// Every world cell of the footprint, row by row
    pub fn footprint(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        footprint_at(&self.definition, self.x, self.y)
    }

    /// World position and facing of a connection point
    pub fn door(&self, index: usize) -> Option<((i32, i32), Direction)> {
        self.definition
            .connections
            .get(index)
            .map(|c| ((self.x + c.x as i32, self.y + c.y as i32), c.direction))
    }

    pub fn is_used(&self, index: usize) -> bool {
        self.used_connections.binary_search(&index).is_ok()
    }

    /// Connection indices not yet consumed
    pub fn unused_connections(&self) -> Vec<usize> {
        (0..self.definition.connections.len())
            .filter(|&i| !self.is_used(i))
            .collect()
    }

    /// Record a consumed connection and mark the room as linked
    pub fn use_connection(&mut self, index: usize) {
        if let Err(pos) = self.used_connections.binary_search(&index) {
            self.used_connections.insert(pos, index);
        }
        self.connected = true;
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }
}

/// Footprint of a template placed with its top-left cell at (x, y)
pub fn footprint_at(
    definition: &RoomDefinition,
    x: i32,
    y: i32,
) -> impl Iterator<Item = (i32, i32)> + '_ {
    let (w, h) = (definition.width as i32, definition.height as i32);
    (0..h).flat_map(move |dy| (0..w).map(move |dx| (x + dx, y + dy)))
}

/// World cells already claimed by a room or corridor.
///
/// Lives for a single generation pass and is discarded afterward.
#[derive(Debug, Clone, Default)]
pub struct Occupancy {
    cells: HashSet<(i32, i32)>,
}

impl Occupancy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.cells.contains(&(x, y))
    }

    pub fn occupy(&mut self, x: i32, y: i32) {
        self.cells.insert((x, y));
    }

    pub fn occupy_all<I: IntoIterator<Item = (i32, i32)>>(&mut self, cells: I) {
        self.cells.extend(cells);
    }

    /// Whether none of the given cells are claimed
    pub fn all_free<I: IntoIterator<Item = (i32, i32)>>(&self, cells: I) -> bool {
        cells.into_iter().all(|(x, y)| !self.is_occupied(x, y))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> PlacedRoom {
        let def = RoomDefinition::filled("bay", "chamber", 4, 3, "floor")
            .with_connection(0, 1, Direction::West)
            .with_connection(3, 1, Direction::East);
        PlacedRoom::new(1, Arc::new(def), 10, 20)
    }

    #[test]
    fn test_geometry() {
        let room = room();
        assert_eq!(room.center(), (12, 21));
        assert_eq!(room.bounds(), (10, 20, 13, 22));
        assert!(room.contains(13, 22));
        assert!(!room.contains(14, 22));
        assert_eq!(room.footprint().count(), 12);
    }

    #[test]
    fn test_doors() {
        let room = room();
        assert_eq!(room.door(1), Some(((13, 21), Direction::East)));
        assert_eq!(room.door(2), None);
    }

    #[test]
    fn test_use_connection() {
        let mut room = room();
        assert!(!room.connected);
        assert_eq!(room.unused_connections(), vec![0, 1]);
        room.use_connection(1);
        room.use_connection(1);
        assert!(room.connected);
        assert_eq!(room.used_connections, vec![1]);
        assert_eq!(room.unused_connections(), vec![0]);
    }

    #[test]
    fn test_translate() {
        let mut room = room();
        room.translate(-8, 2);
        assert_eq!((room.x, room.y), (2, 22));
        assert_eq!(room.door(0), Some(((2, 23), Direction::West)));
    }

    #[test]
    fn test_occupancy() {
        let mut occ = Occupancy::new();
        assert!(occ.is_empty());
        occ.occupy_all(room().footprint());
        assert_eq!(occ.len(), 12);
        assert!(occ.is_occupied(10, 20));
        assert!(occ.all_free([(9, 20), (14, 20)]));
        assert!(!occ.all_free([(9, 20), (13, 22)]));
    }
}
