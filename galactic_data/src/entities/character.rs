//! Canonical character profiles.

use serde::{Deserialize, Serialize};

/// A complete profile for a character who appears in a universe's canon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalCharacter {
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starship: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starship_registry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starship_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quotes: Option<Vec<String>>,
}

impl CanonicalCharacter {
    /// Create a character with only the required name fields.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            rank: None,
            starship: None,
            starship_registry: None,
            starship_class: None,
            language: None,
            quotes: None,
        }
    }

    /// Full character name.
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn with_rank(mut self, rank: impl Into<String>) -> Self {
        self.rank = Some(rank.into());
        self
    }

    /// Set the starship and its registry together.
    pub fn with_starship(
        mut self,
        starship: impl Into<String>,
        registry: impl Into<String>,
    ) -> Self {
        self.starship = Some(starship.into());
        self.starship_registry = Some(registry.into());
        self
    }

    pub fn with_starship_class(mut self, class: impl Into<String>) -> Self {
        self.starship_class = Some(class.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the character's quotes, replacing any existing ones.
    pub fn with_quotes<I, S>(mut self, quotes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.quotes = Some(quotes.into_iter().map(Into::into).collect());
        self
    }
}
