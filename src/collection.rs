//! The finalized localization collection.

use crate::culture::Culture;
use crate::key::HashedKey;
use crate::set::LocalizationSet;

/// The builder's output: an ordered sequence of localization sets plus
/// the configured default culture.
///
/// Immutable once built, and therefore safe to read concurrently.
/// Insertion order matters only for conflict resolution: when two sets
/// of the same culture define the same key, the set added later wins.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalizationCollection {
    /// Fallback culture for lookups, fixed at build time.
    default_culture: Culture,
    /// Sets, in insertion order.
    sets: Vec<LocalizationSet>,
}

impl LocalizationCollection {
    /// Creates a collection from finalized builder state.
    pub(crate) const fn new(default_culture: Culture, sets: Vec<LocalizationSet>) -> Self {
        Self { default_culture, sets }
    }

    /// Returns the configured default culture.
    #[must_use]
    pub const fn default_culture(&self) -> &Culture {
        &self.default_culture
    }

    /// Returns the sets in insertion order.
    #[must_use]
    pub fn sets(&self) -> &[LocalizationSet] {
        &self.sets
    }

    /// Resolves a key against a specific culture.
    ///
    /// Sets of the requested culture are scanned in reverse insertion
    /// order, so the set added last wins. The outer `Option` is entry
    /// presence; the inner one is whether the entry carries a
    /// translated value.
    #[must_use]
    pub fn resolve(&self, culture: &Culture, key: HashedKey) -> Option<Option<&str>> {
        self.sets
            .iter()
            .rev()
            .filter(|set| set.culture() == culture)
            .find_map(|set| set.get(key))
    }
}
