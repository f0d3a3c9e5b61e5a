//! # Galactic Data
//!
//! The data crate behind Galactic Faker - universe tables, canonical characters and the
//! universe registry. This crate holds no randomness; sampling lives in `galactic_faker`.

pub mod attributes;
pub mod entities;
pub mod universe;

pub use attributes::*;
pub use entities::*;
pub use universe::*;
