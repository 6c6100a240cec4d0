//! Grid cells

#[cfg(not(feature = "std"))]
use crate::compat::*;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Structural class of a tile
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum TileKind {
    /// Nothing here; never rendered
    #[default]
    Void = 0,
    Floor = 1,
    Wall = 2,
}

bitflags! {
    /// Tile properties read by movement and sight code
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TileFlags: u8 {
        const WALKABLE = 0x01;
        const BLOCKS_SIGHT = 0x02;
    }
}

impl TileKind {
    pub const fn flags(self) -> TileFlags {
        match self {
            TileKind::Void | TileKind::Wall => TileFlags::BLOCKS_SIGHT,
            TileKind::Floor => TileFlags::WALKABLE,
        }
    }

    pub const fn is_floor(self) -> bool {
        matches!(self, TileKind::Floor)
    }

    pub const fn is_void(self) -> bool {
        matches!(self, TileKind::Void)
    }

    /// Debug glyph
    pub const fn symbol(self) -> char {
        match self {
            TileKind::Void => ' ',
            TileKind::Floor => '.',
            TileKind::Wall => '#',
        }
    }
}

/// A single grid cell: its class plus the atlas tile name drawn there
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub kind: TileKind,
    /// Atlas tile name; empty for void
    pub tile: String,
}

impl Cell {
    /// Create a void cell
    pub const fn void() -> Self {
        Self {
            kind: TileKind::Void,
            tile: String::new(),
        }
    }

    pub fn floor(tile: impl Into<String>) -> Self {
        Self {
            kind: TileKind::Floor,
            tile: tile.into(),
        }
    }

    pub fn wall(tile: impl Into<String>) -> Self {
        Self {
            kind: TileKind::Wall,
            tile: tile.into(),
        }
    }

    pub fn is_void(&self) -> bool {
        self.kind.is_void()
    }

    pub fn is_floor(&self) -> bool {
        self.kind.is_floor()
    }

    pub fn is_walkable(&self) -> bool {
        self.kind.flags().contains(TileFlags::WALKABLE)
    }

    pub fn blocks_sight(&self) -> bool {
        self.kind.flags().contains(TileFlags::BLOCKS_SIGHT)
    }
}
