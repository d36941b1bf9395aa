//! Culture identifiers.

use serde::{
    Deserialize,
    Serialize,
};

/// A locale identifier (BCP 47 style tag) partitioning translations.
///
/// Tags are normalized on construction: surrounding whitespace is
/// trimmed, ASCII letters are lowercased, and `_` separators become
/// `-`, so `en-US`, `en_US` and ` EN-us ` all denote the same culture.
///
/// Comparison is normalized-tag equality only. There is no inheritance
/// chain: `en-gb` does not fall back to `en`; the only fallback is the
/// collection's default culture.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Culture(
    /// Normalized tag.
    String,
);

impl Culture {
    /// Creates a culture from a tag, normalizing it.
    #[must_use]
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self(tag.as_ref().trim().to_ascii_lowercase().replace('_', "-"))
    }

    /// Returns the normalized tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Culture {
    /// The neutral `en` tag, used when a builder finalizes without a
    /// configured default culture.
    fn default() -> Self {
        Self("en".to_string())
    }
}

impl std::fmt::Display for Culture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Culture {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for Culture {
    fn from(tag: String) -> Self {
        Self::new(tag)
    }
}

impl From<Culture> for String {
    fn from(culture: Culture) -> Self {
        culture.0
    }
}
