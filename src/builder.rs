//! Accumulating translation sources into a collection.

use thiserror::Error;

use crate::collection::LocalizationCollection;
use crate::culture::Culture;
use crate::json;
use crate::parser;
use crate::resource::{
    BoxError,
    ResourceBundle,
};
use crate::set::LocalizationSet;

/// Errors raised while assembling a [`LocalizationCollection`].
///
/// Build-time structural failures always propagate to the caller of the
/// build step; they are never swallowed. Lookup-time misses are not
/// errors — they resolve to the fallback rules instead.
#[derive(Error, Debug)]
pub enum BuilderError {
    /// The requested bundle/culture combination does not exist.
    #[error("no resources found for base name \"{base_name}\" under culture \"{culture}\"")]
    ResourceNotFound {
        /// Base name of the requested bundle.
        base_name: String,
        /// Culture the bundle was requested for.
        culture: Culture,
    },

    /// The resource collaborator failed while loading a bundle.
    #[error("failed to register translation resources for \"{culture}\"")]
    Resource {
        /// Culture the bundle was requested for.
        culture: Culture,
        /// Underlying collaborator failure.
        #[source]
        source: BoxError,
    },

    /// A JSON translation document could not be parsed.
    #[error("failed to parse JSON translation document")]
    Json(#[from] serde_json::Error),
}

/// Accumulates localization sets from heterogeneous sources and
/// produces a finalized [`LocalizationCollection`].
///
/// The build phase is expected to run once, sequentially, before any
/// provider is published; the `&mut self` methods make concurrent
/// mutation unrepresentable.
#[derive(Debug, Default)]
pub struct LocalizationBuilder {
    /// Configured default culture; unset until [`Self::set_culture`].
    default_culture: Option<Culture>,
    /// Accumulated sets, in insertion order.
    sets: Vec<LocalizationSet>,
}

impl LocalizationBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default culture used as the lookup fallback.
    ///
    /// Meaningful once per build; calling it again replaces the
    /// previous value without error.
    pub fn set_culture(&mut self, culture: Culture) -> &mut Self {
        self.default_culture = Some(culture);
        self
    }

    /// Appends a localization set.
    ///
    /// Duplicate (name, culture) pairs are permitted; conflicts between
    /// sets are resolved by last-write-wins at lookup time, not at
    /// insertion time.
    pub fn add_localization(&mut self, set: LocalizationSet) -> &mut Self {
        tracing::debug!(
            name = set.name().unwrap_or_default(),
            culture = %set.culture(),
            entries = set.len(),
            "registering localization set"
        );
        self.sets.push(set);
        self
    }

    /// Adds raw original-string entries for a culture.
    pub fn add_entries<K, I>(&mut self, culture: Culture, entries: I) -> &mut Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, Option<String>)>,
    {
        self.add_localization(LocalizationSet::from_pairs(None, culture, entries))
    }

    /// Adds named original-string entries for a culture.
    ///
    /// The name is normalized (trimmed, lowercased) and namespaces
    /// equal keys across sources.
    pub fn add_named_entries<K, I>(&mut self, name: &str, culture: Culture, entries: I) -> &mut Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, Option<String>)>,
    {
        self.add_localization(LocalizationSet::from_pairs(Some(name), culture, entries))
    }

    /// Parses a line-format text blob and adds the result.
    ///
    /// Parsing is lenient: malformed lines and duplicate keys are
    /// dropped per the parser's rules. Use the parser's strict mode
    /// separately when diagnostics matter.
    pub fn add_text(&mut self, name: Option<&str>, culture: Culture, content: &str) -> &mut Self {
        let entries =
            parser::parse_text(content).into_iter().map(|(key, value)| (key, Some(value))).collect();

        self.add_localization(LocalizationSet::new(name, culture, entries))
    }

    /// Parses a JSON translation document and adds the result.
    ///
    /// Nested objects flatten into dot-separated keys; a JSON `null`
    /// registers its key as present but untranslated.
    ///
    /// # Errors
    /// [`BuilderError::Json`] when the document is not valid JSON; the
    /// builder is left untouched.
    pub fn add_json(
        &mut self,
        name: Option<&str>,
        culture: Culture,
        content: &str,
    ) -> Result<&mut Self, BuilderError> {
        let document = serde_json::from_str::<serde_json::Value>(content)?;
        let pairs = json::flatten(&document, json::DEFAULT_SEPARATOR);

        Ok(self.add_localization(LocalizationSet::from_pairs(name, culture, pairs)))
    }

    /// Loads a compiled resource bundle for a culture and adds it.
    ///
    /// The target culture is passed to the collaborator explicitly; the
    /// resulting set is named after the lowercased base name. The add
    /// is atomic: on failure nothing is appended and already-added sets
    /// are unaffected.
    ///
    /// # Errors
    /// - [`BuilderError::ResourceNotFound`] when the bundle/culture
    ///   combination does not exist.
    /// - [`BuilderError::Resource`] when the collaborator itself fails;
    ///   the underlying cause is preserved.
    pub fn add_resource(
        &mut self,
        resources: &dyn ResourceBundle,
        base_name: &str,
        culture: Culture,
    ) -> Result<&mut Self, BuilderError> {
        let loaded = resources
            .load(base_name, &culture)
            .map_err(|source| BuilderError::Resource { culture: culture.clone(), source })?;

        let Some(pairs) = loaded else {
            return Err(BuilderError::ResourceNotFound {
                base_name: base_name.to_string(),
                culture,
            });
        };

        Ok(self.add_localization(LocalizationSet::from_pairs(Some(base_name), culture, pairs)))
    }

    /// Finalizes the accumulated sources into a collection.
    ///
    /// Idempotent: repeated calls on an unmodified builder return equal
    /// snapshots. When no default culture was configured the neutral
    /// `en` tag is used.
    #[must_use]
    pub fn build(&self) -> LocalizationCollection {
        LocalizationCollection::new(
            self.default_culture.clone().unwrap_or_default(),
            self.sets.clone(),
        )
    }
}
