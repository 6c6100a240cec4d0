//! Room templates
//!
//! A `RoomDefinition` is an authored room layout: a tile-name grid, the edge
//! cells where corridors may attach, and the furnishings it carries. Templates
//! are never mutated after the library is loaded.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::ENTRANCE_TYPE;
use crate::error::LibraryError;

/// Outward facing of a connection point
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All four directions
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The direction facing back the other way
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Unit step in tile coordinates (y grows southward)
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// Whether this direction moves along the x axis
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::East | Direction::West)
    }
}

fn default_connection_type() -> String {
    "door".to_string()
}

/// A door cell on a room template where a corridor may attach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionPoint {
    /// Column within the template
    pub x: u32,
    /// Row within the template
    pub y: u32,
    /// Outward facing
    pub direction: Direction,
    /// Free-form connection kind ("door", "airlock", ...)
    #[serde(rename = "type", default = "default_connection_type")]
    pub kind: String,
}

impl ConnectionPoint {
    pub fn new(x: u32, y: u32, direction: Direction) -> Self {
        Self {
            x,
            y,
            direction,
            kind: default_connection_type(),
        }
    }
}

/// A furnishing to instantiate when the room is placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FurnishingPlacement {
    /// Name of the furnishing definition
    #[serde(alias = "name")]
    pub furnishing: String,
    /// Column offset from the room origin
    pub x: u32,
    /// Row offset from the room origin
    pub y: u32,
    /// Explicit instance id; generated when absent
    #[serde(default)]
    pub id: Option<String>,
    /// Initial state; falls back to the definition's default
    #[serde(default)]
    pub state: Option<String>,
}

impl FurnishingPlacement {
    pub fn new(furnishing: impl Into<String>, x: u32, y: u32) -> Self {
        Self {
            furnishing: furnishing.into(),
            x,
            y,
            id: None,
            state: None,
        }
    }
}

/// Text shown by the narrative layer; carried through generation untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomNarrative {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub on_enter: Option<String>,
    #[serde(default)]
    pub on_search: Option<String>,
}

/// An authored room template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomDefinition {
    pub name: String,
    /// Room type, e.g. "entrance" or "chamber"
    #[serde(rename = "type")]
    pub room_type: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub width: u32,
    pub height: u32,
    /// Tile names indexed `[row][col]`
    pub tiles: Vec<Vec<String>>,
    #[serde(default)]
    pub connections: Vec<ConnectionPoint>,
    #[serde(default)]
    pub furnishings: Vec<FurnishingPlacement>,
    /// Relative selection weight; unset or non-positive counts as 1
    #[serde(default)]
    pub spawn_weight: Option<f64>,
    #[serde(default)]
    pub min_count: u32,
    /// Unset means unlimited
    #[serde(default)]
    pub max_count: Option<u32>,
    #[serde(default)]
    pub narrative: Option<RoomNarrative>,
}

impl RoomDefinition {
    /// Create a template from its tile grid; width and height come from the grid.
    pub fn new(name: impl Into<String>, room_type: impl Into<String>, tiles: Vec<Vec<String>>) -> Self {
        let height = tiles.len() as u32;
        let width = tiles.first().map_or(0, |row| row.len() as u32);
        Self {
            name: name.into(),
            room_type: room_type.into(),
            tags: Vec::new(),
            width,
            height,
            tiles,
            connections: Vec::new(),
            furnishings: Vec::new(),
            spawn_weight: None,
            min_count: 0,
            max_count: None,
            narrative: None,
        }
    }

    /// Template filled with one tile name
    pub fn filled(
        name: impl Into<String>,
        room_type: impl Into<String>,
        width: u32,
        height: u32,
        tile: &str,
    ) -> Self {
        let tiles = vec![vec![tile.to_string(); width as usize]; height as usize];
        Self::new(name, room_type, tiles)
    }

    #[must_use]
    pub fn with_connection(mut self, x: u32, y: u32, direction: Direction) -> Self {
        self.connections.push(ConnectionPoint::new(x, y, direction));
        self
    }

    #[must_use]
    pub fn with_furnishing(mut self, placement: FurnishingPlacement) -> Self {
        self.furnishings.push(placement);
        self
    }

    #[must_use]
    pub fn with_counts(mut self, min_count: u32, max_count: Option<u32>) -> Self {
        self.min_count = min_count;
        self.max_count = max_count;
        self
    }

    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.spawn_weight = Some(weight);
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_narrative(mut self, narrative: RoomNarrative) -> Self {
        self.narrative = Some(narrative);
        self
    }

    /// Whether this template can start a level
    pub fn is_entrance(&self) -> bool {
        self.room_type == ENTRANCE_TYPE
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Selection weight with the "unset or non-positive means 1" rule applied
    pub fn effective_weight(&self) -> f64 {
        match self.spawn_weight {
            Some(w) if w.is_finite() && w > 0.0 => w,
            _ => 1.0,
        }
    }

    /// Whether `used` copies already reach the template's maximum
    pub fn at_max(&self, used: u32) -> bool {
        self.max_count.is_some_and(|max| used >= max)
    }

    /// Tile name at a template-local cell
    pub fn tile(&self, x: u32, y: u32) -> Option<&str> {
        self.tiles
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .map(String::as_str)
    }

    /// Template-local center cell
    pub fn center(&self) -> (u32, u32) {
        (self.width / 2, self.height / 2)
    }

    /// Indices of connections facing `direction`
    pub fn connections_facing(&self, direction: Direction) -> impl Iterator<Item = usize> + '_ {
        self.connections
            .iter()
            .enumerate()
            .filter(move |(_, c)| c.direction == direction)
            .map(|(i, _)| i)
    }

    /// Check the template's structural invariants.
    pub fn validate(&self) -> Result<(), LibraryError> {
        let invalid = |reason: String| LibraryError::InvalidTemplate {
            name: self.name.clone(),
            reason,
        };

        if self.width == 0 || self.height == 0 {
            return Err(invalid("width and height must be non-zero".to_string()));
        }
        if self.tiles.len() != self.height as usize {
            return Err(invalid(format!(
                "tile grid has {} rows, expected {}",
                self.tiles.len(),
                self.height
            )));
        }
        if let Some((row, cells)) = self
            .tiles
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != self.width as usize)
        {
            return Err(invalid(format!(
                "row {} has {} columns, expected {}",
                row,
                cells.len(),
                self.width
            )));
        }
        for (i, c) in self.connections.iter().enumerate() {
            if c.x >= self.width || c.y >= self.height {
                return Err(invalid(format!(
                    "connection {} at ({}, {}) lies outside {}x{}",
                    i, c.x, c.y, self.width, self.height
                )));
            }
        }
        for f in &self.furnishings {
            if f.x >= self.width || f.y >= self.height {
                return Err(invalid(format!(
                    "furnishing '{}' at ({}, {}) lies outside {}x{}",
                    f.furnishing, f.x, f.y, self.width, self.height
                )));
            }
        }
        if let Some(max) = self.max_count
            && self.min_count > max
        {
            return Err(invalid(format!(
                "min_count {} exceeds max_count {}",
                self.min_count, max
            )));
        }
        Ok(())
    }
}
