//! Attribute kinds a universe can provide.

use serde::{Deserialize, Serialize};

/// Every kind of data a universe exposes to the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UniverseAttribute {
    // Names
    FirstNamesMale,
    FirstNamesFemale,
    LastNamesMale,
    LastNamesFemale,

    // Organization
    Ranks,

    // Vessels
    Starships,
    StarshipClasses,
    StarshipRegistries,

    // Places
    BaseLocations,
    LocationDetails,

    // Culture
    Languages,
    Quotes,

    CanonicalCharacters,
}

/// Shape of the values stored for an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// Plain strings.
    Text,
    /// Weighted registry patterns.
    Registry,
    /// Full canonical character records.
    Character,
}

impl UniverseAttribute {
    /// All attribute kinds in declaration order.
    pub fn all() -> &'static [UniverseAttribute] {
        use UniverseAttribute::*;
        &[
            FirstNamesMale,
            FirstNamesFemale,
            LastNamesMale,
            LastNamesFemale,
            Ranks,
            Starships,
            StarshipClasses,
            StarshipRegistries,
            BaseLocations,
            LocationDetails,
            Languages,
            Quotes,
            CanonicalCharacters,
        ]
    }

    /// Stable snake_case key, matching the field name in universe TOML files.
    pub fn as_str(&self) -> &'static str {
        match self {
            UniverseAttribute::FirstNamesMale => "first_names_male",
            UniverseAttribute::FirstNamesFemale => "first_names_female",
            UniverseAttribute::LastNamesMale => "last_names_male",
            UniverseAttribute::LastNamesFemale => "last_names_female",
            UniverseAttribute::Ranks => "ranks",
            UniverseAttribute::Starships => "starships",
            UniverseAttribute::StarshipClasses => "starship_classes",
            UniverseAttribute::StarshipRegistries => "starship_registries",
            UniverseAttribute::BaseLocations => "base_locations",
            UniverseAttribute::LocationDetails => "location_details",
            UniverseAttribute::Languages => "languages",
            UniverseAttribute::Quotes => "quotes",
            UniverseAttribute::CanonicalCharacters => "canonical_characters",
        }
    }

    /// The value shape for this attribute.
    pub fn kind(&self) -> AttributeKind {
        match self {
            UniverseAttribute::StarshipRegistries => AttributeKind::Registry,
            UniverseAttribute::CanonicalCharacters => AttributeKind::Character,
            _ => AttributeKind::Text,
        }
    }
}

impl std::fmt::Display for UniverseAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
