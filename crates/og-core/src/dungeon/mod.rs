//! Level layout and assembly
//!
//! Contains the placement search, corridor synthesis, grid assembly and the
//! connectivity pass that together turn a room library into a level.

pub mod assembly;
pub mod connectivity;
pub mod corridor;
pub mod furnish;
pub mod placement;
pub mod selector;

mod cell;
mod generation;
mod grid;
mod level;
mod room;

pub use cell::{Cell, TileFlags, TileKind};
pub use corridor::{Corridor, DoorRef, MAX_LOOP_CORRIDOR};
pub use furnish::PlacedFurnishing;
pub use generation::Generator;
pub use grid::{CARDINAL, SURROUNDING, TileGrid};
pub use level::{GeneratedLevel, GenerationReport};
pub use placement::{PlacementDeficiency, Strategy};
pub use room::{Occupancy, PlacedRoom};
