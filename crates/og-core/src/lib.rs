//! og-core: Template-based outpost level generation
//!
//! Assembles a playable level from a library of hand-authored room templates:
//! rooms are chained together door-to-door with short corridors, rasterized
//! into one tile grid, walled in, and pruned to what is reachable from the
//! entrance.
//!
//! The crate performs no I/O during generation. Supports `no_std` environments
//! by disabling the default `std` feature; file loading and wall-clock seeding
//! are gated behind `cfg(feature = "std")`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

/// Re-exports of alloc types needed when building without std.
/// In std mode, these are provided by the std prelude.
#[cfg(not(feature = "std"))]
pub(crate) mod compat {
    pub use alloc::borrow::ToOwned;
    pub use alloc::boxed::Box;
    pub use alloc::collections::BTreeMap;
    pub use alloc::format;
    pub use alloc::string::{String, ToString};
    pub use alloc::sync::Arc;
    pub use alloc::vec;
    pub use alloc::vec::Vec;
}

pub mod config;
pub mod dungeon;
pub mod error;
pub mod template;

mod rng;

pub use config::GeneratorConfig;
pub use dungeon::{
    Cell, Corridor, GeneratedLevel, GenerationReport, Generator, PlacedFurnishing, PlacedRoom,
    Strategy, TileFlags, TileGrid, TileKind,
};
pub use error::{GenerationError, LibraryError};
pub use rng::LevelRng;
pub use template::{
    ConnectionPoint, Direction, FurnishingDefinition, FurnishingLibrary, FurnishingLookup,
    FurnishingPlacement, RoomDefinition, RoomLibrary, RoomNarrative,
};

/// Blank cells kept around all placed content, reserved for border walls.
pub const PADDING: i32 = 2;

/// Room type that marks a template as a possible level entrance.
pub const ENTRANCE_TYPE: &str = "entrance";
