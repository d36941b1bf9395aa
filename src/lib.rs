//! string-localizer
//!
//! Runtime string localization: translation sources (in-memory maps,
//! compiled resource bundles, line-format text blobs, JSON documents)
//! are aggregated by a [`LocalizationBuilder`] into an immutable,
//! culture-indexed [`LocalizationCollection`]; a
//! [`LocalizationProvider`] then resolves original-text keys against
//! the active culture, falling back to the default culture and finally
//! to the original text itself.
//!
//! ```
//! use string_localizer::{Culture, LocalizationBuilder, LocalizationProvider, Localizer};
//!
//! let mut builder = LocalizationBuilder::new();
//! builder
//!     .set_culture(Culture::new("en"))
//!     .add_text(None, Culture::new("pl"), "Hello: Cześć\nGoodbye: Do widzenia");
//!
//! let provider = LocalizationProvider::new(builder.build());
//! provider.set_culture(Culture::new("pl"));
//!
//! assert_eq!(provider.get_string("Hello"), "Cześć");
//! assert_eq!(provider.get_string("Missing"), "Missing");
//! ```

pub mod builder;
pub mod collection;
pub mod culture;
pub mod json;
pub mod key;
pub mod parser;
pub mod provider;
pub mod resource;
pub mod set;

pub use builder::{
    BuilderError,
    LocalizationBuilder,
};
pub use collection::LocalizationCollection;
pub use culture::Culture;
pub use key::{
    HashedKey,
    KeyMap,
};
pub use parser::ParseError;
pub use provider::{
    LocalizationProvider,
    Localizer,
};
pub use resource::{
    BoxError,
    ResourceBundle,
    StaticResourceBundle,
};
pub use set::LocalizationSet;
