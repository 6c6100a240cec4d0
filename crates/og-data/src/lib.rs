//! og-data: Built-in outpost content for og-core
//!
//! Room templates drawn as ASCII art and the furnishings they reference,
//! ready to hand to [`og_core::Generator`].

mod art;
pub mod furnishings;
pub mod rooms;

use log::debug;
use og_core::{LibraryError, RoomLibrary, TileKind};

pub use art::parse_room;
pub use furnishings::{FURNISHINGS, Furnishing, by_legend, outpost_furnishings};
pub use rooms::{
    DOOR_TILE, FLOOR_TILE, Narrative, ROOMS, RoomArt, VOID_TILE, WALL_TILE, get_room,
};

/// Atlas the built-in tile names refer to
pub const ATLAS: &str = "outpost_tiles";

/// Build and validate the library of every built-in room
pub fn outpost_library() -> Result<RoomLibrary, LibraryError> {
    library_from(ROOMS)
}

/// Build and validate a library from a chosen set of rooms
pub fn library_from(rooms: &[RoomArt]) -> Result<RoomLibrary, LibraryError> {
    let mut library = RoomLibrary::new("outpost")
        .with_tile_kind(DOOR_TILE, TileKind::Floor)
        .with_tile_kind(VOID_TILE, TileKind::Void);
    library.atlas = ATLAS.to_string();
    library.default_floor_tile = FLOOR_TILE.to_string();
    library.default_wall_tile = WALL_TILE.to_string();

    for room in rooms {
        library = library.with_room(parse_room(room)?);
    }
    library.validate()?;
    debug!("built-in library ready with {} rooms", library.len());
    Ok(library)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outpost_library_builds() {
        let library = outpost_library().unwrap();
        assert_eq!(library.len(), ROOMS.len());
        assert_eq!(library.classify(WALL_TILE), TileKind::Wall);
        assert_eq!(library.classify(FLOOR_TILE), TileKind::Floor);
        assert_eq!(library.classify(DOOR_TILE), TileKind::Floor);
        assert_eq!(library.classify(VOID_TILE), TileKind::Void);
        assert!(!library.entrances().is_empty());
    }

    #[test]
    fn test_every_furnishing_resolves() {
        use og_core::FurnishingLookup;

        let library = outpost_library().unwrap();
        let furniture = outpost_furnishings();
        for room in &library.rooms {
            for item in &room.furnishings {
                assert!(
                    furniture.furnishing(&item.furnishing).is_some(),
                    "{} in {}",
                    item.furnishing,
                    room.name
                );
            }
        }
    }

    #[test]
    fn test_every_room_has_a_door() {
        let library = outpost_library().unwrap();
        assert!(library.rooms.iter().all(|r| !r.connections.is_empty()));
    }
}
