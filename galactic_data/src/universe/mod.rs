//! Universe definitions - the flat data tables behind every generator call.

mod error;
mod registry;
mod startrek;

pub use error::*;
pub use registry::*;

use serde::{Deserialize, Serialize};

use crate::attributes::UniverseAttribute;
use crate::entities::{CanonicalCharacter, RegistryPattern};

/// A named fictional setting and all of its data tables.
///
/// Every list defaults to empty when deserialized. An empty list is not an error;
/// the resolver falls back to mixed mode for that attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Universe {
    pub name: String,

    #[serde(default)]
    pub first_names_male: Vec<String>,
    #[serde(default)]
    pub first_names_female: Vec<String>,
    #[serde(default)]
    pub last_names_male: Vec<String>,
    #[serde(default)]
    pub last_names_female: Vec<String>,

    #[serde(default)]
    pub ranks: Vec<String>,

    #[serde(default)]
    pub starships: Vec<String>,
    #[serde(default)]
    pub starship_classes: Vec<String>,
    #[serde(default)]
    pub starship_registries: Vec<RegistryPattern>,

    #[serde(default)]
    pub base_locations: Vec<String>,
    #[serde(default)]
    pub location_details: Vec<String>,

    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub quotes: Vec<String>,

    #[serde(default)]
    pub canonical_characters: Vec<CanonicalCharacter>,
}

/// Borrowed view of one attribute's data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeData<'a> {
    Text(&'a [String]),
    Registries(&'a [RegistryPattern]),
    Characters(&'a [CanonicalCharacter]),
}

impl AttributeData<'_> {
    pub fn len(&self) -> usize {
        match self {
            AttributeData::Text(values) => values.len(),
            AttributeData::Registries(values) => values.len(),
            AttributeData::Characters(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Universe {
    /// Create a universe with no data.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            first_names_male: Vec::new(),
            first_names_female: Vec::new(),
            last_names_male: Vec::new(),
            last_names_female: Vec::new(),
            ranks: Vec::new(),
            starships: Vec::new(),
            starship_classes: Vec::new(),
            starship_registries: Vec::new(),
            base_locations: Vec::new(),
            location_details: Vec::new(),
            languages: Vec::new(),
            quotes: Vec::new(),
            canonical_characters: Vec::new(),
        }
    }

    /// Read the data stored for an attribute.
    pub fn attribute(&self, attr: UniverseAttribute) -> AttributeData<'_> {
        match attr {
            UniverseAttribute::StarshipRegistries => {
                AttributeData::Registries(&self.starship_registries)
            }
            UniverseAttribute::CanonicalCharacters => {
                AttributeData::Characters(&self.canonical_characters)
            }
            text => AttributeData::Text(self.text_list(text).map(Vec::as_slice).unwrap_or(&[])),
        }
    }

    /// Replace a text attribute's values.
    ///
    /// Registry and character attributes are left untouched; use
    /// [`Universe::with_registries`] and [`Universe::with_characters`] for those.
    pub fn with_text<I, S>(mut self, attr: UniverseAttribute, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(list) = self.text_list_mut(attr) {
            *list = values.into_iter().map(Into::into).collect();
        }
        self
    }

    pub fn with_registries(
        mut self,
        registries: impl IntoIterator<Item = RegistryPattern>,
    ) -> Self {
        self.starship_registries = registries.into_iter().collect();
        self
    }

    pub fn with_characters(
        mut self,
        characters: impl IntoIterator<Item = CanonicalCharacter>,
    ) -> Self {
        self.canonical_characters = characters.into_iter().collect();
        self
    }

    /// Attributes for which this universe has no data.
    pub fn missing_attributes(&self) -> Vec<UniverseAttribute> {
        UniverseAttribute::all()
            .iter()
            .copied()
            .filter(|attr| self.attribute(*attr).is_empty())
            .collect()
    }

    /// Check the contents of every table.
    ///
    /// Empty tables pass; blank strings, unusable registry weights and nameless
    /// characters do not.
    pub fn validate(&self) -> Result<(), DataError> {
        if self.name.trim().is_empty() {
            return Err(self.invalid("universe name is blank"));
        }

        for attr in UniverseAttribute::all() {
            match self.attribute(*attr) {
                AttributeData::Text(values) => {
                    if let Some(index) = values.iter().position(|v| v.trim().is_empty()) {
                        return Err(self.invalid(format!("{attr}[{index}] is blank")));
                    }
                }
                AttributeData::Registries(registries) => {
                    for registry in registries {
                        if registry.pattern.trim().is_empty() {
                            return Err(self.invalid(format!("{attr} contains a blank pattern")));
                        }
                        if !registry.has_valid_weight() {
                            return Err(self.invalid(format!(
                                "{attr} pattern '{}' has non-positive weight {}",
                                registry.pattern, registry.weight
                            )));
                        }
                    }
                }
                AttributeData::Characters(characters) => {
                    for character in characters {
                        if character.first_name.trim().is_empty()
                            || character.last_name.trim().is_empty()
                        {
                            return Err(self.invalid(format!(
                                "{attr} contains a character without a full name ('{}')",
                                character.name().trim()
                            )));
                        }
                    }
                }
            }
        }

        Ok(())
    }

    fn invalid(&self, reason: impl Into<String>) -> DataError {
        DataError::InvalidUniverse {
            universe: self.name.clone(),
            reason: reason.into(),
        }
    }

    fn text_list(&self, attr: UniverseAttribute) -> Option<&Vec<String>> {
        let list = match attr {
            UniverseAttribute::FirstNamesMale => &self.first_names_male,
            UniverseAttribute::FirstNamesFemale => &self.first_names_female,
            UniverseAttribute::LastNamesMale => &self.last_names_male,
            UniverseAttribute::LastNamesFemale => &self.last_names_female,
            UniverseAttribute::Ranks => &self.ranks,
            UniverseAttribute::Starships => &self.starships,
            UniverseAttribute::StarshipClasses => &self.starship_classes,
            UniverseAttribute::BaseLocations => &self.base_locations,
            UniverseAttribute::LocationDetails => &self.location_details,
            UniverseAttribute::Languages => &self.languages,
            UniverseAttribute::Quotes => &self.quotes,
            UniverseAttribute::StarshipRegistries | UniverseAttribute::CanonicalCharacters => {
                return None
            }
        };
        Some(list)
    }

    fn text_list_mut(&mut self, attr: UniverseAttribute) -> Option<&mut Vec<String>> {
        let list = match attr {
            UniverseAttribute::FirstNamesMale => &mut self.first_names_male,
            UniverseAttribute::FirstNamesFemale => &mut self.first_names_female,
            UniverseAttribute::LastNamesMale => &mut self.last_names_male,
            UniverseAttribute::LastNamesFemale => &mut self.last_names_female,
            UniverseAttribute::Ranks => &mut self.ranks,
            UniverseAttribute::Starships => &mut self.starships,
            UniverseAttribute::StarshipClasses => &mut self.starship_classes,
            UniverseAttribute::BaseLocations => &mut self.base_locations,
            UniverseAttribute::LocationDetails => &mut self.location_details,
            UniverseAttribute::Languages => &mut self.languages,
            UniverseAttribute::Quotes => &mut self.quotes,
            UniverseAttribute::StarshipRegistries | UniverseAttribute::CanonicalCharacters => {
                return None
            }
        };
        Some(list)
    }
}
