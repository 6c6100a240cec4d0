//! Connection-based room placement
//!
//! Each new room is hung off an unused door of a room that is already placed.
//! Strategies are tried in a fixed order until one finds a free spot:
//! 1. `ExactNear`: a door facing back across a 2-tile corridor
//! 2. `ExactFar`: the same, with corridors of 3 to 8 tiles
//! 3. `NearestAny`: the room is dropped beyond the door and its nearest
//!    connection, whatever its facing, is joined by an L-shaped corridor
//!
//! A room no strategy can place is skipped and reported as a deficiency.

#[cfg(not(feature = "std"))]
use crate::compat::*;
#[cfg(feature = "std")]
use std::sync::Arc;

use core::ops::RangeInclusive;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::rng::LevelRng;
use crate::template::{Direction, RoomDefinition};

use super::corridor::{Corridor, DoorRef, exit_tile, synthesize};
use super::room::{Occupancy, PlacedRoom, footprint_at};

/// Corridor length between doors for the primary strategy
pub const CORRIDOR_GAP: i32 = 2;

/// Corridor lengths swept by the fallback strategies
pub const FAR_GAPS: RangeInclusive<i32> = 3..=8;

/// Sideways shifts tried by `NearestAny` at each distance
const LATERAL_SWEEP: [i32; 5] = [0, -2, 2, -4, 4];

/// A placement strategy
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Strategy {
    ExactNear,
    ExactFar,
    NearestAny,
}

impl Strategy {
    /// Strategies in the order they are attempted
    pub const ORDER: [Strategy; 3] = [Strategy::ExactNear, Strategy::ExactFar, Strategy::NearestAny];

    /// Look for a spot for `definition`; `None` when this strategy has nothing.
    pub fn attempt(self, definition: &RoomDefinition, site: &Site<'_>) -> Option<Placement> {
        match self {
            Strategy::ExactNear => exact_match(definition, site, CORRIDOR_GAP..=CORRIDOR_GAP, self),
            Strategy::ExactFar => exact_match(definition, site, FAR_GAPS, self),
            Strategy::NearestAny => nearest_any(definition, site),
        }
    }
}

/// An unused door on a placed room that a new room may attach to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    /// Index into the placed-room list
    pub room: usize,
    /// Connection index on that room
    pub connection: usize,
}

/// Shuffled anchors: rooms in random order, each room's unused doors in
/// random order.
pub fn shuffled_anchors(placed: &[PlacedRoom], rng: &mut LevelRng) -> Vec<Anchor> {
    let mut order: Vec<usize> = (0..placed.len()).collect();
    rng.shuffle(&mut order);

    let mut anchors = Vec::new();
    for room in order {
        let mut unused = placed[room].unused_connections();
        rng.shuffle(&mut unused);
        anchors.extend(unused.into_iter().map(|connection| Anchor { room, connection }));
    }
    anchors
}

/// Read-only view of the level being built, shared by all strategies
#[derive(Debug, Clone, Copy)]
pub struct Site<'a> {
    pub placed: &'a [PlacedRoom],
    pub occupancy: &'a Occupancy,
    pub anchors: &'a [Anchor],
    pub allow_overlap: bool,
}

impl Site<'_> {
    fn anchor_door(&self, anchor: Anchor) -> Option<((i32, i32), Direction)> {
        self.placed.get(anchor.room)?.door(anchor.connection)
    }

    /// Whether a room at (x, y) and its corridor can go here
    fn fits(&self, definition: &RoomDefinition, x: i32, y: i32, corridor: &[(i32, i32)]) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        if !self.allow_overlap && !self.occupancy.all_free(footprint_at(definition, x, y)) {
            return false;
        }
        let (w, h) = (definition.width as i32, definition.height as i32);
        let inside = |&(cx, cy): &(i32, i32)| cx >= x && cx < x + w && cy >= y && cy < y + h;
        corridor
            .iter()
            .all(|tile| !inside(tile) && !self.occupancy.is_occupied(tile.0, tile.1))
    }
}

/// Where a strategy decided to put a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    /// The existing door the room hangs off
    pub anchor: Anchor,
    /// The new room's connection joined to the anchor
    pub connection: usize,
    pub corridor: Vec<(i32, i32)>,
    pub strategy: Strategy,
}

fn exact_match(
    definition: &RoomDefinition,
    site: &Site<'_>,
    gaps: RangeInclusive<i32>,
    strategy: Strategy,
) -> Option<Placement> {
    for &anchor in site.anchors {
        let Some((door, facing)) = site.anchor_door(anchor) else {
            continue;
        };
        let wanted = facing.opposite();
        let (dx, dy) = facing.delta();

        for gap in gaps.clone() {
            let new_door = (door.0 + dx * (gap + 1), door.1 + dy * (gap + 1));
            for connection in definition.connections_facing(wanted) {
                let c = &definition.connections[connection];
                let (x, y) = (new_door.0 - c.x as i32, new_door.1 - c.y as i32);
                let corridor = synthesize(door, facing, new_door, wanted);
                if site.fits(definition, x, y, &corridor) {
                    return Some(Placement {
                        x,
                        y,
                        anchor,
                        connection,
                        corridor,
                        strategy,
                    });
                }
            }
        }
    }
    None
}

/// Top-left corner that puts the room entirely beyond `target` along `facing`,
/// centered across it
fn origin_beyond(definition: &RoomDefinition, target: (i32, i32), facing: Direction) -> (i32, i32) {
    let (w, h) = (definition.width as i32, definition.height as i32);
    match facing {
        Direction::East => (target.0, target.1 - h / 2),
        Direction::West => (target.0 - w + 1, target.1 - h / 2),
        Direction::South => (target.0 - w / 2, target.1),
        Direction::North => (target.0 - w / 2, target.1 - h + 1),
    }
}

/// Index of the connection closest to `point` once the room sits at (x, y)
fn nearest_connection(definition: &RoomDefinition, x: i32, y: i32, point: (i32, i32)) -> Option<usize> {
    definition
        .connections
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let ddx = i64::from(x + c.x as i32 - point.0);
            let ddy = i64::from(y + c.y as i32 - point.1);
            (i, ddx * ddx + ddy * ddy)
        })
        // min_by_key keeps the first of equal distances
        .min_by_key(|&(_, d2)| d2)
        .map(|(i, _)| i)
}

fn nearest_any(definition: &RoomDefinition, site: &Site<'_>) -> Option<Placement> {
    if definition.connections.is_empty() {
        return None;
    }

    for &anchor in site.anchors {
        let Some((door, facing)) = site.anchor_door(anchor) else {
            continue;
        };
        let (dx, dy) = facing.delta();
        // Perpendicular to the door's facing
        let (px, py) = (dy, dx);
        let exit = exit_tile(door, facing);

        for gap in FAR_GAPS {
            for shift in LATERAL_SWEEP {
                let target = (
                    door.0 + dx * (gap + 1) + px * shift,
                    door.1 + dy * (gap + 1) + py * shift,
                );
                let (x, y) = origin_beyond(definition, target, facing);
                let Some(connection) = nearest_connection(definition, x, y, exit) else {
                    continue;
                };
                let c = &definition.connections[connection];
                let new_door = (x + c.x as i32, y + c.y as i32);
                let corridor = synthesize(door, facing, new_door, c.direction);
                if site.fits(definition, x, y, &corridor) {
                    return Some(Placement {
                        x,
                        y,
                        anchor,
                        connection,
                        corridor,
                        strategy: Strategy::NearestAny,
                    });
                }
            }
        }
    }
    None
}

/// A selected room that no strategy could place
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementDeficiency {
    /// Position in the selection list
    pub selection_index: usize,
    pub template: String,
}

/// Everything placement produced for one level
#[derive(Debug, Clone, Default)]
pub struct PlacementOutcome {
    pub rooms: Vec<PlacedRoom>,
    pub corridors: Vec<Corridor>,
    pub occupancy: Occupancy,
    pub deficiencies: Vec<PlacementDeficiency>,
    /// Strategy that placed each room after the entrance, by room id
    pub strategies: Vec<(u32, Strategy)>,
}

/// Place the selected rooms, entrance first at `origin`.
pub fn place_rooms(
    selection: &[Arc<RoomDefinition>],
    origin: (i32, i32),
    allow_overlap: bool,
    rng: &mut LevelRng,
) -> PlacementOutcome {
    let mut outcome = PlacementOutcome::default();
    let Some(entrance) = selection.first() else {
        return outcome;
    };

    let mut root = PlacedRoom::new(0, Arc::clone(entrance), origin.0, origin.1);
    root.connected = true;
    outcome.occupancy.occupy_all(root.footprint());
    outcome.rooms.push(root);

    for (index, definition) in selection.iter().enumerate().skip(1) {
        let anchors = shuffled_anchors(&outcome.rooms, rng);
        let site = Site {
            placed: &outcome.rooms,
            occupancy: &outcome.occupancy,
            anchors: &anchors,
            allow_overlap,
        };

        let Some(placement) = Strategy::ORDER
            .iter()
            .find_map(|strategy| strategy.attempt(definition, &site))
        else {
            warn!(
                "could not place '{}' (selection #{}); continuing without it",
                definition.name, index
            );
            outcome.deficiencies.push(PlacementDeficiency {
                selection_index: index,
                template: definition.name.clone(),
            });
            continue;
        };

        commit(&mut outcome, definition, placement);
    }

    outcome
}

fn commit(outcome: &mut PlacementOutcome, definition: &Arc<RoomDefinition>, placement: Placement) {
    let id = outcome.rooms.len() as u32;
    let mut room = PlacedRoom::new(id, Arc::clone(definition), placement.x, placement.y);
    room.use_connection(placement.connection);

    let anchor_room = &mut outcome.rooms[placement.anchor.room];
    anchor_room.use_connection(placement.anchor.connection);
    let from = DoorRef::new(anchor_room.id, placement.anchor.connection);

    debug!(
        "placed '{}' at ({}, {}) off '{}' door {} via {}",
        definition.name,
        placement.x,
        placement.y,
        anchor_room.name(),
        placement.anchor.connection,
        placement.strategy
    );

    outcome.occupancy.occupy_all(room.footprint());
    outcome.occupancy.occupy_all(placement.corridor.iter().copied());
    outcome.corridors.push(Corridor {
        from,
        to: DoorRef::new(id, placement.connection),
        tiles: placement.corridor,
    });
    outcome.strategies.push((id, placement.strategy));
    outcome.rooms.push(room);
}
