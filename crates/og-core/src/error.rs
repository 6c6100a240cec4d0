//! Error types for library loading and level generation

#[cfg(not(feature = "std"))]
use crate::compat::*;

use thiserror::Error;

/// Errors that abort a `generate()` call. No partial level is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("room library is empty")]
    EmptyLibrary,

    #[error("room library has no room of type \"{expected}\"")]
    NoEntrance { expected: String },

    #[error("invalid generator config: {reason}")]
    InvalidConfig { reason: String },

    #[error("invalid room template '{name}': {reason}")]
    InvalidTemplate { name: String, reason: String },

    #[error("only {placed} rooms survived generation, at least {required} required")]
    TooFewRooms { placed: usize, required: usize },
}

impl GenerationError {
    /// Whether this error comes from the library or config rather than from
    /// the outcome of the layout search.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, GenerationError::TooFewRooms { .. })
    }
}

/// Errors raised while loading or validating a room/furnishing library.
#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("could not read '{path}': {reason}")]
    Io { path: String, reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid room template '{name}': {reason}")]
    InvalidTemplate { name: String, reason: String },

    #[error("duplicate room template name '{0}'")]
    DuplicateName(String),
}

impl From<LibraryError> for GenerationError {
    fn from(err: LibraryError) -> Self {
        match err {
            LibraryError::InvalidTemplate { name, reason } => {
                GenerationError::InvalidTemplate { name, reason }
            }
            LibraryError::DuplicateName(name) => GenerationError::InvalidTemplate {
                name,
                reason: "duplicate template name".to_string(),
            },
            other => GenerationError::InvalidConfig {
                reason: other.to_string(),
            },
        }
    }
}
