//! Corridor synthesis
//!
//! Corridors start on the tile just outside one door and end on the tile just
//! outside the other. The path always runs horizontally first, then
//! vertically, so a seed reproduces the same corridors. Walls around corridor
//! floors are derived later by the grid assembler.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::template::Direction;

use super::room::{Occupancy, PlacedRoom};

/// Longest extra corridor `link_facing_doors` will dig
pub const MAX_LOOP_CORRIDOR: usize = 12;

/// One end of a corridor: a connection point on a placed room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoorRef {
    /// Placed room id
    pub room: u32,
    /// Connection index within the room's template
    pub connection: usize,
}

impl DoorRef {
    pub fn new(room: u32, connection: usize) -> Self {
        Self { room, connection }
    }
}

/// An ordered path of floor tiles linking two doors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corridor {
    pub from: DoorRef,
    pub to: DoorRef,
    pub tiles: Vec<(i32, i32)>,
}

impl Corridor {
    /// Synthesize the corridor between two doors
    pub fn between(
        from: DoorRef,
        from_door: ((i32, i32), Direction),
        to: DoorRef,
        to_door: ((i32, i32), Direction),
    ) -> Self {
        Self {
            from,
            to,
            tiles: synthesize(from_door.0, from_door.1, to_door.0, to_door.1),
        }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether the corridor touches the given room
    pub fn links(&self, room: u32) -> bool {
        self.from.room == room || self.to.room == room
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        for tile in &mut self.tiles {
            tile.0 += dx;
            tile.1 += dy;
        }
    }
}

/// The tile one step outward from a door
pub fn exit_tile(door: (i32, i32), direction: Direction) -> (i32, i32) {
    let (dx, dy) = direction.delta();
    (door.0 + dx, door.1 + dy)
}

/// Manhattan path from `start` to `end`, horizontal leg first.
///
/// Both endpoints are included; equal endpoints give a single tile.
pub fn l_path(start: (i32, i32), end: (i32, i32)) -> Vec<(i32, i32)> {
    let mut tiles = Vec::with_capacity(
        (start.0.abs_diff(end.0) + start.1.abs_diff(end.1)) as usize + 1,
    );
    let (mut x, mut y) = start;
    tiles.push((x, y));

    while x != end.0 {
        x += (end.0 - x).signum();
        tiles.push((x, y));
    }
    while y != end.1 {
        y += (end.1 - y).signum();
        tiles.push((x, y));
    }

    tiles
}

/// Floor tiles linking two doors by their exit tiles
pub fn synthesize(
    door_a: (i32, i32),
    dir_a: Direction,
    door_b: (i32, i32),
    dir_b: Direction,
) -> Vec<(i32, i32)> {
    l_path(exit_tile(door_a, dir_a), exit_tile(door_b, dir_b))
}

/// Whether door `b` sits in front of door `a` and faces back at it
fn doors_face(a: ((i32, i32), Direction), b: ((i32, i32), Direction)) -> bool {
    if b.1 != a.1.opposite() {
        return false;
    }
    let (dx, dy) = a.1.delta();
    let ahead = (b.0.0 - a.0.0) * dx + (b.0.1 - a.0.1) * dy;
    ahead > 1
}

/// Join still-unused doors on different rooms that face each other.
///
/// A pair is joined only if its corridor is at most [`MAX_LOOP_CORRIDOR`]
/// tiles and every tile is free. Used connections and occupancy are updated
/// as corridors are laid.
pub fn link_facing_doors(rooms: &mut [PlacedRoom], occupancy: &mut Occupancy) -> Vec<Corridor> {
    let mut corridors = Vec::new();

    for i in 0..rooms.len() {
        for j in (i + 1)..rooms.len() {
            for ci in rooms[i].unused_connections() {
                // Earlier pairs may have consumed this door already
                if rooms[i].is_used(ci) {
                    continue;
                }
                let Some(door_a) = rooms[i].door(ci) else {
                    continue;
                };
                for cj in rooms[j].unused_connections() {
                    let Some(door_b) = rooms[j].door(cj) else {
                        continue;
                    };
                    if !doors_face(door_a, door_b) {
                        continue;
                    }

                    let corridor = Corridor::between(
                        DoorRef::new(rooms[i].id, ci),
                        door_a,
                        DoorRef::new(rooms[j].id, cj),
                        door_b,
                    );
                    if corridor.len() > MAX_LOOP_CORRIDOR
                        || !occupancy.all_free(corridor.tiles.iter().copied())
                    {
                        continue;
                    }

                    debug!(
                        "linking {}#{} to {}#{} with a {}-tile corridor",
                        rooms[i].name(),
                        ci,
                        rooms[j].name(),
                        cj,
                        corridor.len()
                    );
                    occupancy.occupy_all(corridor.tiles.iter().copied());
                    rooms[i].use_connection(ci);
                    rooms[j].use_connection(cj);
                    corridors.push(corridor);
                    break;
                }
            }
        }
    }

    corridors
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(feature = "std")]
    use std::sync::Arc;

    use crate::template::RoomDefinition;

    #[test]
    fn test_exit_tile() {
        assert_eq!(exit_tile((5, 5), Direction::North), (5, 4));
        assert_eq!(exit_tile((5, 5), Direction::East), (6, 5));
    }

    #[test]
    fn test_l_path_horizontal_first() {
        let path = l_path((0, 0), (3, 2));
        assert_eq!(
            path,
            vec![(0, 0), (1, 0), (2, 0), (3, 0), (3, 1), (3, 2)]
        );
    }

    #[test]
    fn test_l_path_negative_direction() {
        let path = l_path((4, 4), (2, 1));
        assert_eq!(path.first(), Some(&(4, 4)));
        assert_eq!(path.last(), Some(&(2, 1)));
        assert_eq!(path.len(), 6);
        // Never diagonal
        for w in path.windows(2) {
            let d = (w[1].0 - w[0].0).abs() + (w[1].1 - w[0].1).abs();
            assert_eq!(d, 1);
        }
    }

    #[test]
    fn test_l_path_single_tile() {
        assert_eq!(l_path((2, 2), (2, 2)), vec![(2, 2)]);
    }

    #[test]
    fn test_synthesize_straight_gap() {
        // East door at (3, 1), west door three tiles further east: a 2-tile gap
        let tiles = synthesize((3, 1), Direction::East, (6, 1), Direction::West);
        assert_eq!(tiles, vec![(4, 1), (5, 1)]);
    }

    #[test]
    fn test_corridor_translate() {
        let mut corridor = Corridor::between(
            DoorRef::new(0, 0),
            ((3, 1), Direction::East),
            DoorRef::new(1, 0),
            ((6, 1), Direction::West),
        );
        corridor.translate(1, 2);
        assert_eq!(corridor.tiles, vec![(5, 3), (6, 3)]);
        assert!(corridor.links(1));
        assert!(!corridor.links(2));
    }

    #[test]
    fn test_doors_face() {
        let east = ((3, 1), Direction::East);
        assert!(doors_face(east, ((7, 4), Direction::West)));
        assert!(!doors_face(east, ((1, 4), Direction::West)));
        assert!(!doors_face(east, ((7, 4), Direction::East)));
        // Directly adjacent doors leave no room for a corridor
        assert!(!doors_face(east, ((4, 1), Direction::West)));
    }

    #[test]
    fn test_link_facing_doors() {
        let a = RoomDefinition::filled("a", "chamber", 3, 3, "floor")
            .with_connection(2, 1, Direction::East);
        let b = RoomDefinition::filled("b", "chamber", 3, 3, "floor")
            .with_connection(0, 1, Direction::West);
        let mut rooms = vec![
            PlacedRoom::new(0, Arc::new(a), 0, 0),
            PlacedRoom::new(1, Arc::new(b), 8, 0),
        ];
        let mut occupancy = Occupancy::new();
        for room in &rooms {
            occupancy.occupy_all(room.footprint());
        }

        let corridors = link_facing_doors(&mut rooms, &mut occupancy);
        assert_eq!(corridors.len(), 1);
        assert_eq!(corridors[0].tiles, vec![(3, 1), (4, 1), (5, 1), (6, 1), (7, 1)]);
        assert!(rooms[0].is_used(0));
        assert!(rooms[1].is_used(0));
        assert!(occupancy.is_occupied(5, 1));

        // Nothing left to link
        assert!(link_facing_doors(&mut rooms, &mut occupancy).is_empty());
    }

    #[test]
    fn test_link_facing_doors_respects_occupancy() {
        let a = RoomDefinition::filled("a", "chamber", 3, 3, "floor")
            .with_connection(2, 1, Direction::East);
        let b = RoomDefinition::filled("b", "chamber", 3, 3, "floor")
            .with_connection(0, 1, Direction::West);
        let mut rooms = vec![
            PlacedRoom::new(0, Arc::new(a), 0, 0),
            PlacedRoom::new(1, Arc::new(b), 8, 0),
        ];
        let mut occupancy = Occupancy::new();
        occupancy.occupy(5, 1);

        assert!(link_facing_doors(&mut rooms, &mut occupancy).is_empty());
        assert!(!rooms[0].connected);
    }
}
