//! End-to-end tests for the build-then-resolve pipeline.

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]
#![allow(missing_docs)]

use std::sync::Arc;

use googletest::prelude::*;
use string_localizer::{
    Culture,
    LocalizationBuilder,
    LocalizationProvider,
    Localizer,
    StaticResourceBundle,
};

/// Builds the multi-source collection used across these tests: raw
/// entries, a line-format blob, a JSON document, and a resource bundle.
fn build_provider() -> LocalizationProvider {
    let mut bundles = StaticResourceBundle::new();
    bundles.insert(
        "Resources.Strings",
        Culture::new("de"),
        [("Save".to_string(), Some("Speichern".to_string()))],
    );

    let mut builder = LocalizationBuilder::new();
    builder
        .set_culture(Culture::new("en"))
        .add_entries(
            Culture::new("en"),
            [
                ("Save".to_string(), Some("Save".to_string())),
                ("Open".to_string(), Some("Open".to_string())),
            ],
        )
        .add_text(None, Culture::new("pl"), "Save: Zapisz\nOpen: Otwórz")
        .add_json(Some("menu"), Culture::new("pl"), r#"{"dialog": {"Cancel": "Anuluj"}}"#)
        .unwrap()
        .add_resource(&bundles, "Resources.Strings", Culture::new("de"))
        .unwrap();

    LocalizationProvider::new(builder.build())
}

#[googletest::test]
fn resolves_each_source_kind_under_its_culture() {
    let provider = build_provider();

    provider.set_culture(Culture::new("pl"));
    expect_that!(provider.get_string("Save"), eq("Zapisz"));
    expect_that!(provider.get_string("dialog.Cancel"), eq("Anuluj"));

    provider.set_culture(Culture::new("de"));
    expect_that!(provider.get_string("Save"), eq("Speichern"));
}

#[googletest::test]
fn falls_back_through_default_culture_to_original_text() {
    let provider = build_provider();
    provider.set_culture(Culture::new("de"));

    // Missing under "de", present under the default culture.
    expect_that!(provider.get_string("Open"), eq("Open"));
    // Missing everywhere: the original text is the display value.
    expect_that!(provider.get_string("Quit"), eq("Quit"));
}

#[googletest::test]
fn later_sources_override_earlier_ones_for_the_same_culture() {
    let mut builder = LocalizationBuilder::new();
    builder
        .set_culture(Culture::new("en"))
        .add_text(None, Culture::new("en"), "greeting: Hello")
        .add_text(None, Culture::new("en"), "greeting: Howdy");

    let provider = LocalizationProvider::new(builder.build());

    expect_that!(provider.get_string("greeting"), eq("Howdy"));
}

#[googletest::test]
fn provider_serves_concurrent_readers() {
    let provider = Arc::new(build_provider());
    provider.set_culture(Culture::new("pl"));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let provider = Arc::clone(&provider);
            std::thread::spawn(move || provider.get_string("Save"))
        })
        .collect();

    for handle in handles {
        expect_that!(handle.join().unwrap(), eq("Zapisz"));
    }
}

/// A fixed-translation double, standing in for the provider behind the
/// [`Localizer`] seam.
struct FixedLocalizer;

impl Localizer for FixedLocalizer {
    fn get_string(&self, _key: &str) -> String {
        "translated".to_string()
    }

    fn culture(&self) -> Culture {
        Culture::new("zz")
    }

    fn set_culture(&self, _culture: Culture) {}
}

/// The kind of call site a host framework would have.
fn display_label(localizer: &dyn Localizer, key: &str) -> String {
    localizer.get_string(key)
}

#[googletest::test]
fn localizer_trait_accepts_test_doubles() {
    let provider = build_provider();

    expect_that!(display_label(&provider, "Save"), eq("Save"));
    expect_that!(display_label(&FixedLocalizer, "Save"), eq("translated"));
}
