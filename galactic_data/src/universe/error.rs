//! Errors raised while building universes and registries.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("Universe '{0}' is registered more than once")]
    DuplicateUniverse(String),

    #[error("Universe '{universe}' is invalid: {reason}")]
    InvalidUniverse { universe: String, reason: String },

    #[error("Failed to parse universe definitions: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to read universe file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
