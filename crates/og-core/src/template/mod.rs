//! Room template model
//!
//! Immutable, authored data: room layouts, their connection points and the
//! furnishings they reference.

mod furnishing;
mod library;
mod room;

pub use furnishing::{DEFAULT_STATE, FurnishingDefinition, FurnishingLibrary, FurnishingLookup};
pub use library::RoomLibrary;
pub use room::{ConnectionPoint, Direction, FurnishingPlacement, RoomDefinition, RoomNarrative};
