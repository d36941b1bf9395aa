//! Localization sets.

use crate::culture::Culture;
use crate::key::{
    HashedKey,
    KeyMap,
};

/// An immutable, culture-scoped bundle of translation entries.
///
/// The optional name acts as a namespace, disambiguating equal keys
/// across resource bundles. An entry with a `None` value is a key that
/// is present but untranslated. Sets are created once per source during
/// the build phase; the culture is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalizationSet {
    /// Normalized namespace, if any.
    name: Option<String>,
    /// The culture this set belongs to.
    culture: Culture,
    /// Hashed-key entries.
    entries: KeyMap<Option<String>>,
}

impl LocalizationSet {
    /// Creates a set from already-hashed entries.
    ///
    /// The name is normalized (trimmed, lowercased); a name that trims
    /// to nothing becomes `None`.
    #[must_use]
    pub fn new(name: Option<&str>, culture: Culture, entries: KeyMap<Option<String>>) -> Self {
        Self { name: normalize_name(name), culture, entries }
    }

    /// Creates a set by hashing original-string keys.
    ///
    /// Duplicate keys from the same source are rejected silently; the
    /// first occurrence wins within the set.
    #[must_use]
    pub fn from_pairs<K, I>(name: Option<&str>, culture: Culture, pairs: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, Option<String>)>,
    {
        let mut entries = KeyMap::default();

        for (key, value) in pairs {
            let hashed = HashedKey::of(key.as_ref());

            if let std::collections::hash_map::Entry::Vacant(slot) = entries.entry(hashed) {
                slot.insert(value);
            } else {
                tracing::debug!(key = key.as_ref(), "dropping duplicate key within set");
            }
        }

        Self { name: normalize_name(name), culture, entries }
    }

    /// Returns the set's namespace.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the set's culture.
    #[must_use]
    pub const fn culture(&self) -> &Culture {
        &self.culture
    }

    /// Looks up an entry by hashed key.
    ///
    /// The outer `Option` is entry presence; the inner one is whether
    /// the key carries a translated value.
    #[must_use]
    pub fn get(&self, key: HashedKey) -> Option<Option<&str>> {
        self.entries.get(&key).map(Option::as_deref)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the set has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Trims and lowercases a set name; empty results become `None`.
fn normalize_name(name: Option<&str>) -> Option<String> {
    name.map(str::trim).filter(|trimmed| !trimmed.is_empty()).map(str::to_lowercase)
}
