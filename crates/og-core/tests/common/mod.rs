#![allow(dead_code)]

use og_core::{Direction, FurnishingDefinition, FurnishingLibrary, FurnishingPlacement};
use og_core::{RoomDefinition, RoomLibrary};

/// Walled room with an interior of `inner_w` x `inner_h` floor tiles and a
/// door in the middle of each listed side
pub fn walled_room(
    name: &str,
    room_type: &str,
    inner_w: u32,
    inner_h: u32,
    doors: &[Direction],
) -> RoomDefinition {
    let (w, h) = (inner_w + 2, inner_h + 2);
    let mut tiles: Vec<Vec<String>> = (0..h)
        .map(|y| {
            (0..w)
                .map(|x| {
                    if x == 0 || y == 0 || x == w - 1 || y == h - 1 {
                        "wall".to_string()
                    } else {
                        "floor".to_string()
                    }
                })
                .collect()
        })
        .collect();

    let mut connections = Vec::new();
    for &d in doors {
        let (x, y) = match d {
            Direction::North => (w / 2, 0),
            Direction::South => (w / 2, h - 1),
            Direction::East => (w - 1, h / 2),
            Direction::West => (0, h / 2),
        };
        tiles[y as usize][x as usize] = "door".to_string();
        connections.push((x, y, d));
    }

    connections
        .into_iter()
        .fold(RoomDefinition::new(name, room_type, tiles), |def, (x, y, d)| {
            def.with_connection(x, y, d)
        })
}

/// A mixed library: one entrance, small and large chambers, a corridor piece
/// and a unique vault
pub fn station_library() -> RoomLibrary {
    use Direction::*;

    RoomLibrary::new("station")
        .with_room(
            walled_room("dock", "entrance", 3, 3, &[North, South, East, West])
                .with_counts(0, Some(1))
                .with_furnishing(FurnishingPlacement::new("console", 1, 1)),
        )
        .with_room(walled_room("cabin", "chamber", 3, 3, &[West, East]).with_weight(2.0))
        .with_room(
            walled_room("hall", "corridor", 7, 1, &[West, East])
                .with_furnishing(FurnishingPlacement::new("crate", 2, 1)),
        )
        .with_room(walled_room("shaft", "corridor", 1, 5, &[North, South]))
        .with_room(walled_room("hub", "hub", 3, 3, &[North, South, East, West]))
        .with_room(walled_room("vault", "chamber", 5, 4, &[South]).with_counts(0, Some(1)))
        .with_room(walled_room("reactor", "reactor", 5, 5, &[North, West]).with_counts(1, Some(1)))
}

pub fn station_furnishings() -> FurnishingLibrary {
    FurnishingLibrary::new()
        .with(FurnishingDefinition::new("console").with_default_state("off"))
        .with(FurnishingDefinition::new("crate").blocking())
}
