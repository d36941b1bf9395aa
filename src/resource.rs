//! Compiled resource bundles.
//!
//! The bundle storage format is owned by the host application; the core
//! only consumes key/value pairs through the [`ResourceBundle`]
//! collaborator interface.

use std::collections::HashMap;

use crate::culture::Culture;

/// Boxed error surfaced by resource collaborators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// External collaborator interface for compiled resource bundles.
///
/// Implementations receive the target culture as an explicit argument
/// and must not consult any ambient locale state.
pub trait ResourceBundle {
    /// Loads the key/value pairs of `base_name` for `culture`.
    ///
    /// Returns `Ok(None)` when the bundle/culture combination does not
    /// exist. A `None` pair value marks a key as present but
    /// untranslated.
    ///
    /// # Errors
    /// Any failure of the underlying storage.
    fn load(
        &self,
        base_name: &str,
        culture: &Culture,
    ) -> Result<Option<Vec<(String, Option<String>)>>, BoxError>;
}

/// In-memory [`ResourceBundle`] keyed by base name and culture.
///
/// Reference implementation for hosts that assemble translations
/// programmatically, and the fixture used by the test suite. Base names
/// are matched case-insensitively.
#[derive(Debug, Default)]
pub struct StaticResourceBundle {
    /// (lowercased base name, culture) to entries.
    bundles: HashMap<(String, Culture), Vec<(String, Option<String>)>>,
}

impl StaticResourceBundle {
    /// Creates an empty bundle store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the entries of `base_name` under `culture`, replacing
    /// any previous registration for the pair.
    pub fn insert<I, K, V>(&mut self, base_name: &str, culture: Culture, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Option<String>>,
    {
        let entries =
            entries.into_iter().map(|(key, value)| (key.into(), value.into())).collect();
        self.bundles.insert((base_name.to_lowercase(), culture), entries);
    }
}

impl ResourceBundle for StaticResourceBundle {
    fn load(
        &self,
        base_name: &str,
        culture: &Culture,
    ) -> Result<Option<Vec<(String, Option<String>)>>, BoxError> {
        Ok(self.bundles.get(&(base_name.to_lowercase(), culture.clone())).cloned())
    }
}
