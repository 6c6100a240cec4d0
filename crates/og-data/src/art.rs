//! Conversion from room art to `RoomDefinition`

use og_core::{Direction, FurnishingPlacement, LibraryError, RoomDefinition, RoomNarrative};

use crate::furnishings::by_legend;
use crate::rooms::{DOOR_TILE, FLOOR_TILE, RoomArt, VOID_TILE, WALL_TILE};

/// Facing of a door drawn at (x, y), from the edge it sits on
fn edge_direction(x: usize, y: usize, width: usize, height: usize) -> Option<Direction> {
    let on_x_edge = x == 0 || x + 1 == width;
    let on_y_edge = y == 0 || y + 1 == height;
    match (on_x_edge, on_y_edge) {
        (true, true) | (false, false) => None,
        (false, true) if y == 0 => Some(Direction::North),
        (false, true) => Some(Direction::South),
        (true, false) if x == 0 => Some(Direction::West),
        (true, false) => Some(Direction::East),
    }
}

/// Parse one template, validating it on the way out
pub fn parse_room(room: &RoomArt) -> Result<RoomDefinition, LibraryError> {
    let invalid = |reason: String| LibraryError::InvalidTemplate {
        name: room.name.to_string(),
        reason,
    };

    let height = room.art.len();
    let width = room.art.first().map_or(0, |row| row.chars().count());

    let mut tiles = Vec::with_capacity(height);
    let mut doors = Vec::new();
    let mut furnishings = Vec::new();

    for (y, row) in room.art.iter().enumerate() {
        let mut cells = Vec::with_capacity(width);
        for (x, symbol) in row.chars().enumerate() {
            let tile = match symbol {
                '#' => WALL_TILE,
                '.' => FLOOR_TILE,
                ' ' => VOID_TILE,
                '+' => {
                    let direction = edge_direction(x, y, width, height).ok_or_else(|| {
                        invalid(format!("door at ({x}, {y}) is not on an edge"))
                    })?;
                    doors.push((x as u32, y as u32, direction));
                    DOOR_TILE
                }
                other => {
                    let furnishing = by_legend(other).ok_or_else(|| {
                        invalid(format!("unknown symbol '{other}' at ({x}, {y})"))
                    })?;
                    furnishings.push(FurnishingPlacement::new(furnishing.name, x as u32, y as u32));
                    FLOOR_TILE
                }
            };
            cells.push(tile.to_string());
        }
        tiles.push(cells);
    }

    let mut definition = RoomDefinition::new(room.name, room.room_type, tiles)
        .with_weight(room.spawn_weight)
        .with_counts(room.min_count, room.max_count)
        .with_tags(room.tags.iter().copied());
    for (x, y, direction) in doors {
        definition = definition.with_connection(x, y, direction);
    }
    for placement in furnishings {
        definition = definition.with_furnishing(placement);
    }
    if let Some(n) = room.narrative {
        definition = definition.with_narrative(RoomNarrative {
            title: Some(n.title.to_string()),
            on_enter: Some(n.on_enter.to_string()),
            on_search: Some(n.on_search.to_string()),
        });
    }

    definition.validate()?;
    Ok(definition)
}
