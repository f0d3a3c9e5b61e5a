//! The themed data generator.

use galactic_data::{CanonicalCharacter, UniverseAttribute, UniverseRegistry};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::FakerConfig;
use crate::error::Result;
use crate::random::{bothify, pick, pick_weighted};
use crate::resolver::Resolver;

/// Separator between a registry prefix and its number.
pub const REGISTRY_SEPARATOR: char = '-';

/// Which part of a generated registry to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistryPart {
    /// The whole registry, e.g. `NCC-1701`.
    #[default]
    Full,
    /// Text before the first separator, e.g. `NCC`.
    Prefix,
    /// Text after the first separator, e.g. `1701`.
    Number,
}

impl RegistryPart {
    /// Cut the requested part out of an expanded registry.
    ///
    /// Without a separator the prefix is the whole string and the number is empty.
    pub fn extract(self, registry: &str) -> &str {
        match (self, registry.split_once(REGISTRY_SEPARATOR)) {
            (RegistryPart::Full, _) => registry,
            (RegistryPart::Prefix, Some((prefix, _))) => prefix,
            (RegistryPart::Prefix, None) => registry,
            (RegistryPart::Number, Some((_, number))) => number,
            (RegistryPart::Number, None) => "",
        }
    }
}

/// Generates science fiction data from a universe registry.
///
/// Every method takes an optional universe name. `None` samples from all universes;
/// a name that is not registered fails with [`crate::FakerError::UnknownUniverse`].
#[derive(Debug, Clone)]
pub struct SciFiFaker<'r> {
    resolver: Resolver<'r>,
    rng: ChaCha8Rng,
}

impl SciFiFaker<'static> {
    /// Generator over the built-in universes, seeded from entropy.
    pub fn new() -> Self {
        Self::with_registry(UniverseRegistry::builtin())
    }

    /// Generator over the built-in universes with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_registry_seeded(UniverseRegistry::builtin(), seed)
    }
}

impl Default for SciFiFaker<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> SciFiFaker<'r> {
    pub fn with_registry(registry: &'r UniverseRegistry) -> Self {
        Self {
            resolver: Resolver::new(registry),
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn with_registry_seeded(registry: &'r UniverseRegistry, seed: u64) -> Self {
        Self {
            resolver: Resolver::new(registry),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generator over `registry`, seeded as the config says.
    pub fn from_config(config: &FakerConfig, registry: &'r UniverseRegistry) -> Self {
        match config.seed {
            Some(seed) => Self::with_registry_seeded(registry, seed),
            None => Self::with_registry(registry),
        }
    }

    /// Reset the random source. The same seed replays the same sequence of values.
    pub fn seed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    pub fn resolver(&self) -> Resolver<'r> {
        self.resolver
    }

    // Names

    /// First name of any gender.
    pub fn first_name(&mut self, universe: Option<&str>) -> Result<String> {
        self.pick_text_from(
            &[UniverseAttribute::FirstNamesMale, UniverseAttribute::FirstNamesFemale],
            universe,
        )
    }

    pub fn first_name_male(&mut self, universe: Option<&str>) -> Result<String> {
        self.pick_text(UniverseAttribute::FirstNamesMale, universe)
    }

    pub fn first_name_female(&mut self, universe: Option<&str>) -> Result<String> {
        self.pick_text(UniverseAttribute::FirstNamesFemale, universe)
    }

    /// Last name of any gender.
    pub fn last_name(&mut self, universe: Option<&str>) -> Result<String> {
        self.pick_text_from(
            &[UniverseAttribute::LastNamesMale, UniverseAttribute::LastNamesFemale],
            universe,
        )
    }

    pub fn last_name_male(&mut self, universe: Option<&str>) -> Result<String> {
        self.pick_text(UniverseAttribute::LastNamesMale, universe)
    }

    pub fn last_name_female(&mut self, universe: Option<&str>) -> Result<String> {
        self.pick_text(UniverseAttribute::LastNamesFemale, universe)
    }

    /// Full name: a first name and a last name joined by a space.
    pub fn name(&mut self, universe: Option<&str>) -> Result<String> {
        let first = self.first_name(universe)?;
        let last = self.last_name(universe)?;
        Ok(format!("{} {}", first, last))
    }

    // Organization and vessels

    pub fn rank(&mut self, universe: Option<&str>) -> Result<String> {
        self.pick_text(UniverseAttribute::Ranks, universe)
    }

    pub fn starship(&mut self, universe: Option<&str>) -> Result<String> {
        self.pick_text(UniverseAttribute::Starships, universe)
    }

    pub fn starship_class(&mut self, universe: Option<&str>) -> Result<String> {
        self.pick_text(UniverseAttribute::StarshipClasses, universe)
    }

    /// Starship registry such as `NCC-1701`, or just its prefix or number.
    ///
    /// The pattern is chosen by weight, then its placeholders are filled in.
    pub fn starship_registry(
        &mut self,
        universe: Option<&str>,
        part: RegistryPart,
    ) -> Result<String> {
        let attr = UniverseAttribute::StarshipRegistries;
        let registries = self
            .resolver
            .resolve(attr, universe)?
            .into_registries()
            .unwrap_or_default();

        let pattern = pick_weighted(&mut self.rng, attr, &registries)?;
        let registry = bothify(&mut self.rng, &pattern.pattern);
        Ok(part.extract(&registry).to_string())
    }

    // Places and culture

    /// A starship or base location followed by a detail, e.g. `USS Enterprise Holodeck`.
    pub fn location(&mut self, universe: Option<&str>) -> Result<String> {
        let mut bases = self.text(UniverseAttribute::Starships, universe)?;
        bases.extend(self.text(UniverseAttribute::BaseLocations, universe)?);
        let details = self.text(UniverseAttribute::LocationDetails, universe)?;

        let base = pick(&mut self.rng, UniverseAttribute::BaseLocations, &bases)?;
        let detail = pick(&mut self.rng, UniverseAttribute::LocationDetails, &details)?;
        Ok(format!("{} {}", base, detail))
    }

    pub fn language(&mut self, universe: Option<&str>) -> Result<String> {
        self.pick_text(UniverseAttribute::Languages, universe)
    }

    pub fn quote(&mut self, universe: Option<&str>) -> Result<String> {
        self.pick_text(UniverseAttribute::Quotes, universe)
    }

    /// A canonical character, returned exactly as stored in the registry.
    pub fn canonical_character(
        &mut self,
        universe: Option<&str>,
    ) -> Result<&'r CanonicalCharacter> {
        let attr = UniverseAttribute::CanonicalCharacters;
        let characters = self
            .resolver
            .resolve(attr, universe)?
            .into_characters()
            .unwrap_or_default();

        pick(&mut self.rng, attr, &characters).map(|character| *character)
    }

    fn text(&self, attr: UniverseAttribute, universe: Option<&str>) -> Result<Vec<&'r str>> {
        Ok(self
            .resolver
            .resolve(attr, universe)?
            .into_text()
            .unwrap_or_default())
    }

    fn pick_text(&mut self, attr: UniverseAttribute, universe: Option<&str>) -> Result<String> {
        self.pick_text_from(&[attr], universe)
    }

    /// Pool several text attributes and pick one value.
    fn pick_text_from(
        &mut self,
        attrs: &[UniverseAttribute],
        universe: Option<&str>,
    ) -> Result<String> {
        let mut pool = Vec::new();
        for attr in attrs {
            pool.extend(self.text(*attr, universe)?);
        }

        // Empty pools are reported against the first attribute.
        let reported = attrs.first().copied().unwrap_or(UniverseAttribute::FirstNamesMale);
        pick(&mut self.rng, reported, &pool).map(|value| value.to_string())
    }
}
