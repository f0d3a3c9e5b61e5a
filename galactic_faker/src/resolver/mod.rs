//! Universe attribute resolution.
//!
//! A lookup is either scoped to one universe or mixed across the whole registry:
//! 1. **Scoped**: the named universe must exist; its data for the attribute is returned
//! 2. **Fallback**: if that data is empty, a warning is logged and the lookup turns mixed
//! 3. **Mixed**: every universe's data is concatenated in registry order

use galactic_data::{
    AttributeData, AttributeKind, CanonicalCharacter, RegistryPattern, UniverseAttribute,
    UniverseRegistry,
};

use crate::error::{FakerError, Result};

/// Candidate values for one attribute, borrowed from the registry.
#[derive(Debug, Clone, PartialEq)]
pub enum Candidates<'r> {
    Text(Vec<&'r str>),
    Registries(Vec<&'r RegistryPattern>),
    Characters(Vec<&'r CanonicalCharacter>),
}

impl<'r> Candidates<'r> {
    /// An empty candidate list of the given shape.
    pub fn empty(kind: AttributeKind) -> Self {
        match kind {
            AttributeKind::Text => Candidates::Text(Vec::new()),
            AttributeKind::Registry => Candidates::Registries(Vec::new()),
            AttributeKind::Character => Candidates::Characters(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Candidates::Text(values) => values.len(),
            Candidates::Registries(values) => values.len(),
            Candidates::Characters(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append data of the same shape. Data of another shape is ignored.
    pub fn extend(&mut self, data: AttributeData<'r>) {
        match (self, data) {
            (Candidates::Text(values), AttributeData::Text(more)) => {
                values.extend(more.iter().map(String::as_str))
            }
            (Candidates::Registries(values), AttributeData::Registries(more)) => {
                values.extend(more.iter())
            }
            (Candidates::Characters(values), AttributeData::Characters(more)) => {
                values.extend(more.iter())
            }
            _ => {}
        }
    }

    pub fn into_text(self) -> Option<Vec<&'r str>> {
        match self {
            Candidates::Text(values) => Some(values),
            _ => None,
        }
    }

    pub fn into_registries(self) -> Option<Vec<&'r RegistryPattern>> {
        match self {
            Candidates::Registries(values) => Some(values),
            _ => None,
        }
    }

    pub fn into_characters(self) -> Option<Vec<&'r CanonicalCharacter>> {
        match self {
            Candidates::Characters(values) => Some(values),
            _ => None,
        }
    }
}

impl<'r> From<AttributeData<'r>> for Candidates<'r> {
    fn from(data: AttributeData<'r>) -> Self {
        let mut candidates = match data {
            AttributeData::Text(_) => Candidates::empty(AttributeKind::Text),
            AttributeData::Registries(_) => Candidates::empty(AttributeKind::Registry),
            AttributeData::Characters(_) => Candidates::empty(AttributeKind::Character),
        };
        candidates.extend(data);
        candidates
    }
}

/// Read-only attribute lookup over a universe registry.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'r> {
    registry: &'r UniverseRegistry,
}

impl Resolver<'static> {
    /// Resolver over the built-in universes.
    pub fn builtin() -> Self {
        Self::new(UniverseRegistry::builtin())
    }
}

impl<'r> Resolver<'r> {
    pub fn new(registry: &'r UniverseRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r UniverseRegistry {
        self.registry
    }

    /// Collect the candidates for an attribute.
    ///
    /// `None` or an empty name selects mixed mode. An unknown name is the only error;
    /// an empty result is returned as-is.
    pub fn resolve(
        &self,
        attr: UniverseAttribute,
        universe: Option<&str>,
    ) -> Result<Candidates<'r>> {
        if let Some(name) = universe.filter(|name| !name.is_empty()) {
            let scoped = self
                .registry
                .get(name)
                .ok_or_else(|| FakerError::UnknownUniverse {
                    name: name.to_string(),
                    available: self.registry.names(),
                })?;

            let data = scoped.attribute(attr);
            if !data.is_empty() {
                return Ok(Candidates::from(data));
            }

            log::warn!(
                "Universe '{}' does not provide {}. Falling back to mixed universe mode.",
                name,
                attr
            );
        }

        Ok(self.resolve_mixed(attr))
    }

    /// Concatenate an attribute's data across every universe, in registry order.
    pub fn resolve_mixed(&self, attr: UniverseAttribute) -> Candidates<'r> {
        let mut candidates = Candidates::empty(attr.kind());
        for universe in self.registry.iter() {
            candidates.extend(universe.attribute(attr));
        }
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{init_logger, logged};
    use galactic_data::Universe;
    use log::Level;

    fn fleet() -> UniverseRegistry {
        UniverseRegistry::builder()
            .with_universe(
                Universe::new("alpha")
                    .with_text(UniverseAttribute::Ranks, ["Warden", "Pilot"])
                    .with_text(UniverseAttribute::Quotes, ["Hold the line."])
                    .with_registries([RegistryPattern::new("AQ-##", 3.0)])
                    .with_characters([CanonicalCharacter::new("Mira", "Kestrel")]),
            )
            .with_universe(
                Universe::new("beta")
                    .with_text(UniverseAttribute::Ranks, ["Marshal"])
                    .with_registries([RegistryPattern::new("BX-###", 1.0)])
                    .with_characters([CanonicalCharacter::new("Oren", "Vale")]),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_scoped_returns_universe_data() {
        let registry = fleet();
        let resolver = Resolver::new(&registry);

        for universe in registry.iter() {
            for attr in UniverseAttribute::all() {
                let data = universe.attribute(*attr);
                if data.is_empty() {
                    continue;
                }
                let resolved = resolver.resolve(*attr, Some(universe.name.as_str())).unwrap();
                assert_eq!(resolved, Candidates::from(data), "{} / {}", universe.name, attr);
            }
        }
    }

    #[test]
    fn test_mixed_concatenates_in_registry_order() {
        let registry = fleet();
        let resolver = Resolver::new(&registry);

        let ranks = resolver.resolve(UniverseAttribute::Ranks, None).unwrap();
        assert_eq!(ranks.into_text(), Some(vec!["Warden", "Pilot", "Marshal"]));

        let registries = resolver
            .resolve(UniverseAttribute::StarshipRegistries, None)
            .unwrap()
            .into_registries()
            .unwrap();
        let patterns: Vec<_> = registries.iter().map(|r| r.pattern.as_str()).collect();
        assert_eq!(patterns, vec!["AQ-##", "BX-###"]);

        let characters = resolver
            .resolve(UniverseAttribute::CanonicalCharacters, None)
            .unwrap()
            .into_characters()
            .unwrap();
        assert_eq!(characters.len(), 2);
        assert_eq!(characters[0].name(), "Mira Kestrel");
        assert_eq!(characters[1].name(), "Oren Vale");
    }

    #[test]
    fn test_empty_name_is_mixed_mode() {
        let registry = fleet();
        let resolver = Resolver::new(&registry);

        assert_eq!(
            resolver.resolve(UniverseAttribute::Ranks, Some("")).unwrap(),
            resolver.resolve(UniverseAttribute::Ranks, None).unwrap()
        );
    }

    #[test]
    fn test_unknown_universe() {
        let registry = fleet();
        let resolver = Resolver::new(&registry);

        let err = resolver
            .resolve(UniverseAttribute::Ranks, Some("starwars"))
            .unwrap_err();

        match &err {
            FakerError::UnknownUniverse { name, available } => {
                assert_eq!(name, "starwars");
                assert_eq!(available, &vec!["alpha".to_string(), "beta".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let message = err.to_string();
        assert!(message.contains("Unknown universe"));
        assert!(message.contains("starwars"));
        assert!(message.contains("Available"));
        assert!(message.contains("alpha"));
        assert!(message.contains("beta"));
    }

    #[test]
    fn test_unknown_universe_builtin() {
        let err = Resolver::builtin()
            .resolve(UniverseAttribute::FirstNamesMale, Some("starwars"))
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("starwars"));
        assert!(message.contains("Available"));
        assert!(message.contains("startrek"));
    }

    #[test]
    fn test_empty_attribute_falls_back_to_mixed() {
        init_logger();
        let registry = fleet();
        let resolver = Resolver::new(&registry);

        // beta has no quotes
        let scoped = resolver.resolve(UniverseAttribute::Quotes, Some("beta")).unwrap();
        let mixed = resolver.resolve(UniverseAttribute::Quotes, None).unwrap();
        assert_eq!(scoped, mixed);
        assert_eq!(scoped.into_text(), Some(vec!["Hold the line."]));
    }

    #[test]
    fn test_fallback_logs_warning() {
        init_logger();
        let registry = fleet();
        let resolver = Resolver::new(&registry);

        resolver.resolve(UniverseAttribute::Quotes, Some("beta")).unwrap();

        let expected =
            "Universe 'beta' does not provide quotes. Falling back to mixed universe mode.";
        assert!(
            logged(Level::Warn).iter().any(|message| message == expected),
            "missing warning: {expected}"
        );
    }

    #[test]
    fn test_scoped_hit_does_not_warn() {
        init_logger();
        let registry = UniverseRegistry::builder()
            .with_universe(Universe::new("gamma").with_text(UniverseAttribute::Ranks, ["Envoy"]))
            .build()
            .unwrap();
        let resolver = Resolver::new(&registry);

        resolver.resolve(UniverseAttribute::Ranks, Some("gamma")).unwrap();
        resolver.resolve(UniverseAttribute::Ranks, None).unwrap();

        let warnings = logged(Level::Warn);
        assert!(!warnings.iter().any(|message| message.contains("'gamma'")));
    }

    #[test]
    fn test_all_empty_is_a_valid_result() {
        init_logger();
        let registry = fleet();
        let resolver = Resolver::new(&registry);

        let languages = resolver.resolve(UniverseAttribute::Languages, Some("alpha")).unwrap();
        assert!(languages.is_empty());
        assert_eq!(languages, Candidates::empty(AttributeKind::Text));
    }

    #[test]
    fn test_builtin_scoped_matches_universe() {
        let resolver = Resolver::builtin();
        let startrek = resolver.registry().get("startrek").unwrap();

        for attr in UniverseAttribute::all() {
            let resolved = resolver.resolve(*attr, Some("startrek")).unwrap();
            assert_eq!(resolved, Candidates::from(startrek.attribute(*attr)));
            assert!(!resolved.is_empty());
        }
    }

    #[test]
    fn test_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UniverseRegistry>();
        assert_send_sync::<Resolver<'static>>();
        assert_send_sync::<Candidates<'static>>();

        let expected = Resolver::builtin()
            .resolve(UniverseAttribute::Ranks, Some("startrek"))
            .unwrap();

        let results: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(|| {
                        Resolver::builtin()
                            .resolve(UniverseAttribute::Ranks, Some("startrek"))
                            .unwrap()
                    })
                })
                .collect();
            handles.into_iter().map(|handle| handle.join().unwrap()).collect()
        });

        assert_eq!(results.len(), 4);
        for resolved in results {
            assert_eq!(resolved, expected);
        }
    }

    #[test]
    fn test_borrowed_registry_across_threads() {
        let registry = fleet();
        let resolver = Resolver::new(&registry);

        std::thread::scope(|scope| {
            for (attr, count) in [
                (UniverseAttribute::Ranks, 3),
                (UniverseAttribute::StarshipRegistries, 2),
            ] {
                scope.spawn(move || {
                    let resolved = resolver.resolve(attr, None).unwrap();
                    assert_eq!(resolved.len(), count);
                    assert_eq!(resolved, resolver.resolve_mixed(attr));
                });
            }
        });
    }

    #[test]
    fn test_extend_ignores_other_shapes() {
        let registry = fleet();
        let alpha = registry.get("alpha").unwrap();

        let mut candidates = Candidates::empty(AttributeKind::Text);
        candidates.extend(alpha.attribute(UniverseAttribute::CanonicalCharacters));
        assert!(candidates.is_empty());
    }
}
