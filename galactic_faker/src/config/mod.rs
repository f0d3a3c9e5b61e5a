//! Generator configuration, read from TOML.
//!
//! ```toml
//! seed = 42
//! include_builtin = true
//! universe_files = ["universes/babylon5.toml"]
//!
//! [[universe]]
//! name = "firefly"
//! ranks = ["Captain", "Sergeant"]
//! ```

use galactic_data::{DataError, Universe, UniverseRegistry};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Settings for building a registry and seeding a generator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FakerConfig {
    /// Fixed seed for reproducible output. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Register the universes shipped with the crate first.
    pub include_builtin: bool,

    /// TOML files holding `[[universe]]` tables, loaded after the built-ins.
    pub universe_files: Vec<PathBuf>,

    /// Universes declared inline, loaded last.
    #[serde(rename = "universe")]
    pub universes: Vec<Universe>,
}

impl Default for FakerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            include_builtin: true,
            universe_files: Vec::new(),
            universes: Vec::new(),
        }
    }
}

impl FakerConfig {
    /// Parse a config from TOML text. Relative file paths are kept as written.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config = toml::from_str(text).map_err(DataError::from)?;
        Ok(config)
    }

    /// Read a config file. Relative `universe_files` resolve against its directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_toml_str(&text)?;
        if let Some(base) = path.parent() {
            for file in &mut config.universe_files {
                if file.is_relative() {
                    *file = base.join(&*file);
                }
            }
        }

        log::debug!(
            "Loaded faker config from {} ({} universe files, {} inline universes)",
            path.display(),
            config.universe_files.len(),
            config.universes.len()
        );
        Ok(config)
    }

    /// Build the registry this config describes: built-ins, then files, then inline tables.
    pub fn build_registry(&self) -> Result<UniverseRegistry> {
        let mut builder = UniverseRegistry::builder();
        if self.include_builtin {
            builder = builder.with_builtin();
        }
        for file in &self.universe_files {
            builder = builder.with_toml_file(file)?;
        }

        let registry = builder.with_universes(self.universes.iter().cloned()).build()?;
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FakerError;
    use crate::faker::SciFiFaker;
    use galactic_data::UniverseAttribute;

    const CONFIG: &str = r#"
        seed = 42
        include_builtin = false

        [[universe]]
        name = "firefly"
        ranks = ["Captain", "Sergeant"]
        starships = ["Serenity"]

        [[universe]]
        name = "expanse"
        ranks = ["Admiral"]
    "#;

    #[test]
    fn test_defaults() {
        let config = FakerConfig::from_toml_str("").unwrap();
        assert_eq!(config, FakerConfig::default());
        assert!(config.include_builtin);
        assert!(config.seed.is_none());

        let registry = config.build_registry().unwrap();
        assert_eq!(registry.names(), UniverseRegistry::builtin().names());
    }

    #[test]
    fn test_inline_universes() {
        let config = FakerConfig::from_toml_str(CONFIG).unwrap();
        assert_eq!(config.seed, Some(42));

        let registry = config.build_registry().unwrap();
        assert_eq!(registry.names(), vec!["firefly", "expanse"]);

        let mut faker = SciFiFaker::from_config(&config, &registry);
        assert_eq!(faker.starship(Some("expanse")).unwrap(), "Serenity");
        assert_eq!(faker.rank(Some("expanse")).unwrap(), "Admiral");
    }

    #[test]
    fn test_builtin_first() {
        let config = FakerConfig::from_toml_str(
            r#"
            [[universe]]
            name = "babylon5"
            ranks = ["Ranger"]
            "#,
        )
        .unwrap();

        let registry = config.build_registry().unwrap();
        assert_eq!(registry.names(), vec!["startrek", "babylon5"]);
    }

    #[test]
    fn test_duplicate_builtin_rejected() {
        let config = FakerConfig::from_toml_str(
            r#"
            [[universe]]
            name = "startrek"
            "#,
        )
        .unwrap();

        let err = config.build_registry().unwrap_err();
        assert!(matches!(err, FakerError::Data(DataError::DuplicateUniverse(_))));
    }

    #[test]
    fn test_invalid_toml() {
        let err = FakerConfig::from_toml_str("seed = \"soon\"").unwrap_err();
        assert!(matches!(err, FakerError::Data(DataError::Toml(_))));
    }

    #[test]
    fn test_load_resolves_relative_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("frontier.toml"),
            r#"
            [[universe]]
            name = "frontier"
            languages = ["Trade Pidgin"]
            "#,
        )
        .unwrap();
        let config_path = dir.path().join("faker.toml");
        std::fs::write(
            &config_path,
            "seed = 5\ninclude_builtin = false\nuniverse_files = [\"frontier.toml\"]\n",
        )
        .unwrap();

        let config = FakerConfig::load(&config_path).unwrap();
        assert_eq!(config.universe_files, vec![dir.path().join("frontier.toml")]);

        let registry = config.build_registry().unwrap();
        let frontier = registry.get("frontier").unwrap();
        assert_eq!(frontier.attribute(UniverseAttribute::Languages).len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let err = FakerConfig::load("/nonexistent/faker.toml").unwrap_err();
        assert!(matches!(err, FakerError::Data(DataError::Io { .. })));
    }
}
