//! Universe registry - the read-only name lookup shared by every generator.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::OnceLock;

use super::{startrek, DataError, Universe};

static BUILTIN: OnceLock<UniverseRegistry> = OnceLock::new();

/// Ordered collection of universes, immutable once built.
///
/// Iteration follows insertion order; mixed-mode lookups concatenate in that order.
#[derive(Debug, Clone, Default)]
pub struct UniverseRegistry {
    universes: Vec<Universe>,
    index: HashMap<String, usize>,
}

impl UniverseRegistry {
    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// The process-wide registry of universes shipped with the crate.
    pub fn builtin() -> &'static UniverseRegistry {
        BUILTIN.get_or_init(|| Self::from_parts(Self::builtin_universes()))
    }

    /// Fresh copies of the built-in universes, in registry order.
    pub fn builtin_universes() -> Vec<Universe> {
        vec![startrek::universe()]
    }

    /// Build a registry from the `[[universe]]` tables of a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, DataError> {
        Self::builder().with_toml_str(text)?.build()
    }

    pub fn get(&self, name: &str) -> Option<&Universe> {
        self.index.get(name).map(|&i| &self.universes[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Universe names in registry order.
    pub fn names(&self) -> Vec<String> {
        self.universes.iter().map(|u| u.name.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Universe> {
        self.universes.iter()
    }

    pub fn len(&self) -> usize {
        self.universes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.universes.is_empty()
    }

    // Callers guarantee unique names.
    fn from_parts(universes: Vec<Universe>) -> Self {
        let index = universes
            .iter()
            .enumerate()
            .map(|(i, u)| (u.name.clone(), i))
            .collect();
        Self { universes, index }
    }
}

/// On-disk layout of a universe definition file.
#[derive(Debug, Deserialize)]
struct UniverseFile {
    #[serde(default, rename = "universe")]
    universes: Vec<Universe>,
}

/// Collects universes and validates them into a [`UniverseRegistry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    universes: Vec<Universe>,
}

impl RegistryBuilder {
    /// Append a universe.
    pub fn with_universe(mut self, universe: Universe) -> Self {
        self.universes.push(universe);
        self
    }

    /// Append several universes, keeping their order.
    pub fn with_universes(mut self, universes: impl IntoIterator<Item = Universe>) -> Self {
        self.universes.extend(universes);
        self
    }

    /// Append the built-in universes.
    pub fn with_builtin(self) -> Self {
        self.with_universes(UniverseRegistry::builtin_universes())
    }

    /// Append every `[[universe]]` table of a TOML document.
    pub fn with_toml_str(self, text: &str) -> Result<Self, DataError> {
        let file: UniverseFile = toml::from_str(text)?;
        Ok(self.with_universes(file.universes))
    }

    /// Append every `[[universe]]` table of a TOML file.
    pub fn with_toml_file(self, path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.with_toml_str(&text)
    }

    /// Validate every universe and freeze the registry.
    pub fn build(self) -> Result<UniverseRegistry, DataError> {
        let mut seen = HashSet::new();

        for universe in &self.universes {
            universe.validate()?;
            if !seen.insert(universe.name.as_str()) {
                return Err(DataError::DuplicateUniverse(universe.name.clone()));
            }

            let missing = universe.missing_attributes();
            if missing.is_empty() {
                log::debug!("Registered universe '{}'", universe.name);
            } else {
                log::debug!(
                    "Registered universe '{}' without {:?}",
                    universe.name,
                    missing.iter().map(|a| a.as_str()).collect::<Vec<_>>()
                );
            }
        }

        Ok(UniverseRegistry::from_parts(self.universes))
    }
}
