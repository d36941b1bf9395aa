//! Runtime string resolution.

use std::sync::{
    PoisonError,
    RwLock,
};

use crate::collection::LocalizationCollection;
use crate::culture::Culture;
use crate::key::HashedKey;

/// The consumer-facing localization surface.
///
/// Host frameworks read and write the active culture through this trait
/// and display the returned strings; alternate implementations (a
/// fixed-translation test double, for instance) can be substituted at
/// the same seam.
pub trait Localizer: Send + Sync {
    /// Resolves a string by its original text.
    ///
    /// Total: a missing translation degrades to a defined fallback
    /// value instead of failing the caller.
    fn get_string(&self, key: &str) -> String;

    /// Returns the active culture.
    fn culture(&self) -> Culture;

    /// Replaces the active culture for subsequent lookups.
    fn set_culture(&self, culture: Culture);
}

/// Resolves translated strings against a built collection.
///
/// Constructed once by the host's composition root and shared as the
/// host sees fit (typically behind an `Arc`). The collection is
/// immutable, so lookups are safe from any number of threads; the only
/// mutable state is the active-culture slot, a plain synchronized
/// replace. Lookups are computed fresh on every call, so switching the
/// culture never invalidates previously returned strings.
#[derive(Debug)]
pub struct LocalizationProvider {
    /// The finalized collection.
    localizations: LocalizationCollection,
    /// Active culture slot.
    current_culture: RwLock<Culture>,
}

impl LocalizationProvider {
    /// Creates a provider.
    ///
    /// The active culture starts as the collection's default culture.
    #[must_use]
    pub fn new(localizations: LocalizationCollection) -> Self {
        let current_culture = RwLock::new(localizations.default_culture().clone());

        Self { localizations, current_culture }
    }

    /// Returns the underlying collection.
    #[must_use]
    pub const fn localizations(&self) -> &LocalizationCollection {
        &self.localizations
    }

    /// Resolves `key` under an explicit culture instead of the active
    /// one, with the same fallback chain.
    #[must_use]
    pub fn get_string_for(&self, culture: &Culture, key: &str) -> String {
        self.resolve(culture, key)
    }

    /// Applies the fallback chain: the requested culture, then the
    /// default culture, then the key's original text.
    ///
    /// An entry that is present but untranslated also degrades to the
    /// original text: registering an untranslated key is a statement
    /// that the culture covers it, not a gap to fill from the default
    /// culture.
    fn resolve(&self, culture: &Culture, key: &str) -> String {
        let hashed = HashedKey::of(key);

        let entry = self.localizations.resolve(culture, hashed).or_else(|| {
            let default_culture = self.localizations.default_culture();

            (default_culture != culture)
                .then(|| self.localizations.resolve(default_culture, hashed))
                .flatten()
        });

        match entry {
            Some(Some(value)) => value.to_string(),
            Some(None) => {
                tracing::debug!(key, culture = %culture, "key present but untranslated, using original text");
                key.to_string()
            }
            None => {
                tracing::debug!(key, culture = %culture, "no translation found, using original text");
                key.to_string()
            }
        }
    }
}

impl Localizer for LocalizationProvider {
    fn get_string(&self, key: &str) -> String {
        let culture = self.culture();

        self.resolve(&culture, key)
    }

    fn culture(&self) -> Culture {
        self.current_culture.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set_culture(&self, culture: Culture) {
        *self.current_culture.write().unwrap_or_else(PoisonError::into_inner) = culture;
    }
}
