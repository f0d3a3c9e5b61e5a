//! Errors surfaced by the generator.

use galactic_data::{DataError, UniverseAttribute};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FakerError {
    /// The requested universe is not registered.
    #[error("Unknown universe '{name}'. Available: {available:?}")]
    UnknownUniverse { name: String, available: Vec<String> },

    /// Every candidate list for the attribute was empty.
    #[error("No candidates available for {attribute}")]
    EmptySelection { attribute: UniverseAttribute },

    #[error("Cannot make a weighted choice for {attribute}: {reason}")]
    InvalidWeights {
        attribute: UniverseAttribute,
        reason: String,
    },

    #[error(transparent)]
    Data(#[from] DataError),
}

pub type Result<T> = std::result::Result<T, FakerError>;
