//! # Galactic Faker
//!
//! Science fiction themed fake data, scoped to a fictional universe or mixed across
//! every registered one.
//!
//! ## Core Components
//!
//! - **resolver**: Universe-scoped attribute lookup with fallback to mixed mode
//! - **random**: Uniform and weighted picks plus `bothify` pattern expansion
//! - **faker**: `SciFiFaker`, the seeded generator for names, ships, places and characters
//! - **config**: TOML configuration for seeds and extra universes
//!
//! ## Example
//!
//! ```
//! use galactic_faker::{RegistryPart, SciFiFaker};
//!
//! let mut faker = SciFiFaker::seeded(42);
//! let captain = faker.name(Some("startrek")).unwrap();
//! let prefix = faker.starship_registry(Some("startrek"), RegistryPart::Prefix).unwrap();
//! assert!(captain.contains(' '));
//! assert!(prefix.chars().all(|c| c.is_ascii_alphabetic()));
//! ```

pub mod config;
pub mod error;
pub mod faker;
pub mod random;
pub mod resolver;

#[cfg(test)]
mod test_support;

pub use config::*;
pub use error::*;
pub use faker::*;
pub use resolver::*;

pub use galactic_data::{
    AttributeKind, CanonicalCharacter, DataError, RegistryPattern, Universe, UniverseAttribute,
    UniverseRegistry,
};
