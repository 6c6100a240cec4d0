//! Furnishing definitions
//!
//! Rooms only name their furnishings; the definitions live in a separate,
//! optional library so new furniture can be added without touching templates.

#[cfg(not(feature = "std"))]
use crate::compat::*;
#[cfg(feature = "std")]
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::LibraryError;

/// State assigned when neither the placement nor the definition names one
pub const DEFAULT_STATE: &str = "default";

/// A kind of furnishing that rooms can reference by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FurnishingDefinition {
    pub name: String,
    /// Atlas tile drawn for this furnishing
    #[serde(default)]
    pub tile: Option<String>,
    #[serde(default)]
    pub default_state: Option<String>,
    /// Every state the furnishing can be in; empty means unconstrained
    #[serde(default)]
    pub states: Vec<String>,
    #[serde(default)]
    pub blocks_movement: bool,
}

impl FurnishingDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tile: None,
            default_state: None,
            states: Vec::new(),
            blocks_movement: false,
        }
    }

    #[must_use]
    pub fn with_default_state(mut self, state: impl Into<String>) -> Self {
        self.default_state = Some(state.into());
        self
    }

    #[must_use]
    pub fn blocking(mut self) -> Self {
        self.blocks_movement = true;
        self
    }
}

/// Lookup of furnishing definitions by name.
///
/// Generation only needs to resolve names; anything that can do that may
/// stand in for a [`FurnishingLibrary`].
pub trait FurnishingLookup {
    fn furnishing(&self, name: &str) -> Option<&FurnishingDefinition>;
}

/// Named collection of furnishing definitions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<FurnishingDefinition>", into = "Vec<FurnishingDefinition>")]
pub struct FurnishingLibrary {
    definitions: BTreeMap<String, FurnishingDefinition>,
}

impl FurnishingLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a definition, replacing any previous one with the same name
    pub fn insert(&mut self, definition: FurnishingDefinition) {
        self.definitions.insert(definition.name.clone(), definition);
    }

    #[must_use]
    pub fn with(mut self, definition: FurnishingDefinition) -> Self {
        self.insert(definition);
        self
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FurnishingDefinition> {
        self.definitions.values()
    }

    /// Parse a JSON array of definitions
    pub fn from_json_str(json: &str) -> Result<Self, LibraryError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<Vec<FurnishingDefinition>> for FurnishingLibrary {
    fn from(list: Vec<FurnishingDefinition>) -> Self {
        let mut library = Self::new();
        for definition in list {
            library.insert(definition);
        }
        library
    }
}

impl From<FurnishingLibrary> for Vec<FurnishingDefinition> {
    fn from(library: FurnishingLibrary) -> Self {
        library.definitions.into_values().collect()
    }
}

impl FurnishingLookup for FurnishingLibrary {
    fn furnishing(&self, name: &str) -> Option<&FurnishingDefinition> {
        self.definitions.get(name)
    }
}

impl FurnishingLookup for BTreeMap<String, FurnishingDefinition> {
    fn furnishing(&self, name: &str) -> Option<&FurnishingDefinition> {
        self.get(name)
    }
}

impl FurnishingLookup for hashbrown::HashMap<String, FurnishingDefinition> {
    fn furnishing(&self, name: &str) -> Option<&FurnishingDefinition> {
        self.get(name)
    }
}

/// A lookup that knows no furnishings; every placement is skipped.
impl FurnishingLookup for () {
    fn furnishing(&self, _name: &str) -> Option<&FurnishingDefinition> {
        None
    }
}
