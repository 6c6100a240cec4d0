//! Reachability from the entrance
//!
//! Flood fill over walkable cells (cardinal steps only), then removal of every
//! room and corridor the fill never touched.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use log::debug;

use super::assembly::enclose_floors;
use super::cell::Cell;
use super::corridor::Corridor;
use super::grid::{CARDINAL, TileGrid};
use super::room::PlacedRoom;

/// Cells reached by a flood fill
#[derive(Debug, Clone)]
pub struct Reachability {
    width: usize,
    visited: Vec<bool>,
    count: usize,
}

impl Reachability {
    pub fn contains(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x as usize >= self.width {
            return false;
        }
        self.visited
            .get(y as usize * self.width + x as usize)
            .copied()
            .unwrap_or(false)
    }

    /// Number of reached cells
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Where the fill starts: the room center if walkable, else its first floor
/// cell in row order.
pub fn flood_start(grid: &TileGrid, room: &PlacedRoom) -> Option<(i32, i32)> {
    let (cx, cy) = room.center();
    if grid.kind(cx, cy).is_floor() {
        return Some((cx, cy));
    }
    room.footprint().find(|&(x, y)| grid.kind(x, y).is_floor())
}

/// Every walkable cell 4-connected to `start`
pub fn flood_fill(grid: &TileGrid, start: (i32, i32)) -> Reachability {
    let (width, height) = (grid.width(), grid.height());
    let mut reach = Reachability {
        width,
        visited: vec![false; width * height],
        count: 0,
    };

    if !grid.kind(start.0, start.1).is_floor() {
        return reach;
    }

    let index = |x: i32, y: i32| y as usize * width + x as usize;
    let mut stack = vec![start];
    reach.visited[index(start.0, start.1)] = true;
    reach.count = 1;

    while let Some((x, y)) = stack.pop() {
        for (dx, dy) in CARDINAL {
            let (nx, ny) = (x + dx, y + dy);
            if !grid.kind(nx, ny).is_floor() {
                continue;
            }
            let i = index(nx, ny);
            if !reach.visited[i] {
                reach.visited[i] = true;
                reach.count += 1;
                stack.push((nx, ny));
            }
        }
    }

    reach
}

/// Result of pruning a level down to what the entrance can reach
#[derive(Debug, Clone, Default)]
pub struct Pruned {
    pub rooms: Vec<PlacedRoom>,
    pub corridors: Vec<Corridor>,
    /// Ids of removed rooms, in placement order
    pub removed_rooms: Vec<u32>,
    pub removed_corridors: usize,
}

/// Drop rooms without a reachable floor cell and corridors without a
/// reachable tile, blanking their unreached cells to void.
///
/// When anything was blanked, the surviving floors are walled in again so no
/// floor is left bordering void.
pub fn prune_unreachable(
    grid: &mut TileGrid,
    reach: &Reachability,
    rooms: Vec<PlacedRoom>,
    corridors: Vec<Corridor>,
    wall_tile: &str,
) -> Pruned {
    let mut pruned = Pruned::default();
    let mut blank = Vec::new();

    for room in rooms {
        let reached = room
            .footprint()
            .any(|(x, y)| grid.kind(x, y).is_floor() && reach.contains(x, y));
        if reached {
            pruned.rooms.push(room);
        } else {
            debug!("pruning unreachable room {} ({})", room.id, room.name());
            blank.extend(room.footprint());
            pruned.removed_rooms.push(room.id);
        }
    }

    for corridor in corridors {
        if corridor.tiles.iter().any(|&(x, y)| reach.contains(x, y)) {
            pruned.corridors.push(corridor);
        } else {
            blank.extend(corridor.tiles.iter().copied());
            pruned.removed_corridors += 1;
        }
    }

    if blank.is_empty() {
        return pruned;
    }

    // Overlapping rooms may share cells with a survivor
    for (x, y) in blank {
        if !reach.contains(x, y)
            && let Some(cell) = grid.get_mut(x, y)
        {
            *cell = Cell::void();
        }
    }
    enclose_floors(grid, wall_tile);

    pruned
}
