//! Record types stored inside a universe.

mod character;

pub use character::*;

use serde::{Deserialize, Serialize};

/// A starship registry template and its relative selection weight.
///
/// Patterns use `?` for a letter and `#` for a digit, e.g. `NCC-####`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryPattern {
    pub pattern: String,
    /// Must be positive and finite.
    pub weight: f64,
}

impl RegistryPattern {
    /// Create a registry pattern with the given weight.
    pub fn new(pattern: impl Into<String>, weight: f64) -> Self {
        Self {
            pattern: pattern.into(),
            weight,
        }
    }

    /// Check that the weight can take part in a weighted draw.
    pub fn has_valid_weight(&self) -> bool {
        self.weight.is_finite() && self.weight > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_weight_validity() {
        assert!(RegistryPattern::new("NCC-####", 10.0).has_valid_weight());
        assert!(RegistryPattern::new("NX-##", 0.5).has_valid_weight());
        assert!(!RegistryPattern::new("NCC-####", 0.0).has_valid_weight());
        assert!(!RegistryPattern::new("NCC-####", -1.0).has_valid_weight());
        assert!(!RegistryPattern::new("NCC-####", f64::NAN).has_valid_weight());
        assert!(!RegistryPattern::new("NCC-####", f64::INFINITY).has_valid_weight());
    }
}
