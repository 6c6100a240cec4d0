//! Grid assembly
//!
//! Rasterizes placed rooms and corridors into one tile grid:
//! 1. Rooms, with their own baked-in walls
//! 2. Corridor floors, only into void cells
//! 3. Walls in every void cell around a corridor floor
//! 4. Floors that still touch void become walls (seals unmatched doors)

#[cfg(not(feature = "std"))]
use crate::compat::*;

use crate::PADDING;
use crate::template::RoomLibrary;

use super::cell::{Cell, TileKind};
use super::corridor::Corridor;
use super::grid::{SURROUNDING, TileGrid};
use super::room::PlacedRoom;

/// Inclusive bounding box in world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Bounds {
    fn point(x: i32, y: i32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    fn include(&mut self, x: i32, y: i32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    pub fn width(&self) -> i32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> i32 {
        self.max_y - self.min_y + 1
    }
}

/// Bounding box of every room footprint and corridor tile
pub fn content_bounds(rooms: &[PlacedRoom], corridors: &[Corridor]) -> Option<Bounds> {
    let corners = rooms.iter().flat_map(|r| {
        let (l, t, rr, b) = r.bounds();
        [(l, t), (rr, b)]
    });
    let tiles = corridors.iter().flat_map(|c| c.tiles.iter().copied());

    let mut points = corners.chain(tiles);
    let (x, y) = points.next()?;
    let mut bounds = Bounds::point(x, y);
    for (x, y) in points {
        bounds.include(x, y);
    }
    Some(bounds)
}

/// Shift all content so it starts `PADDING` cells from the top-left.
///
/// Returns the padded content size and the applied offset.
pub fn normalize(rooms: &mut [PlacedRoom], corridors: &mut [Corridor]) -> ((usize, usize), (i32, i32)) {
    let Some(bounds) = content_bounds(rooms, corridors) else {
        return ((0, 0), (0, 0));
    };

    let offset = (PADDING - bounds.min_x, PADDING - bounds.min_y);
    for room in rooms.iter_mut() {
        room.translate(offset.0, offset.1);
    }
    for corridor in corridors.iter_mut() {
        corridor.translate(offset.0, offset.1);
    }

    let size = (
        (bounds.width() + 2 * PADDING) as usize,
        (bounds.height() + 2 * PADDING) as usize,
    );
    (size, offset)
}

/// Build the grid from normalized rooms and corridors.
pub fn assemble(
    library: &RoomLibrary,
    rooms: &[PlacedRoom],
    corridors: &[Corridor],
    width: usize,
    height: usize,
) -> TileGrid {
    let mut grid = TileGrid::new(width, height);

    // Earlier rooms win where overlapping footprints share cells
    for room in rooms.iter().rev() {
        write_room(&mut grid, library, room);
    }

    for &(x, y) in corridors.iter().flat_map(|c| &c.tiles) {
        if grid.kind(x, y).is_void() {
            grid.set(x, y, Cell::floor(library.default_floor_tile.as_str()));
        }
    }

    for &(x, y) in corridors.iter().flat_map(|c| &c.tiles) {
        wall_in_void_neighbors(&mut grid, x, y, &library.default_wall_tile);
    }

    seal_dangling_floors(&mut grid, &library.default_wall_tile);
    grid
}

fn write_room(grid: &mut TileGrid, library: &RoomLibrary, room: &PlacedRoom) {
    for (row, names) in room.definition.tiles.iter().enumerate() {
        for (col, name) in names.iter().enumerate() {
            let kind = library.classify(name);
            if kind.is_void() {
                continue;
            }
            grid.set(
                room.x + col as i32,
                room.y + row as i32,
                Cell {
                    kind,
                    tile: name.clone(),
                },
            );
        }
    }
}

fn wall_in_void_neighbors(grid: &mut TileGrid, x: i32, y: i32, wall_tile: &str) {
    for (dx, dy) in SURROUNDING {
        let (nx, ny) = (x + dx, y + dy);
        if grid.in_bounds(nx, ny) && grid.kind(nx, ny).is_void() {
            grid.set(nx, ny, Cell::wall(wall_tile));
        }
    }
}

/// Turn every floor cell with a void cardinal neighbor into wall.
///
/// Returns the number of cells converted. The void set does not change, so a
/// single pass is enough.
pub fn seal_dangling_floors(grid: &mut TileGrid, wall_tile: &str) -> usize {
    let dangling: Vec<(i32, i32)> = grid
        .positions_of(TileKind::Floor)
        .filter(|&(x, y)| grid.touches_void(x, y))
        .collect();
    for &(x, y) in &dangling {
        grid.set(x, y, Cell::wall(wall_tile));
    }
    dangling.len()
}

/// Wall in every void cell around a floor cell, leaving floors untouched.
///
/// Used after cells were blanked, where turning floors into walls could cut
/// a path that is still in use.
pub fn enclose_floors(grid: &mut TileGrid, wall_tile: &str) {
    let floors: Vec<(i32, i32)> = grid.positions_of(TileKind::Floor).collect();
    for (x, y) in floors {
        wall_in_void_neighbors(grid, x, y, wall_tile);
    }
}
