//! Host-facing filter surface for templating engines.
//!
//! A templating engine integrates by constructing the filters it wants at
//! startup, registering them in a [`FilterRegistry`], and dispatching template
//! filter invocations through [`FilterRegistry::apply`]. Base URLs are
//! resolved once at construction time; filters hold no references to global
//! configuration.

use std::collections::BTreeMap;

use crate::config::SiteConfig;
use crate::rewrite::absolute_urls;

/// Trait describing a named text transformation callable from template markup.
pub trait TemplateFilter {
    /// Name the filter is registered under in template markup.
    fn name(&self) -> &str;

    /// Apply the filter to rendered template text, returning the transformed text.
    fn apply(&self, input: &str) -> String;
}

/// Filter rewriting relative `/assets/` references into absolute URLs.
#[derive(Debug, Clone)]
pub struct AbsoluteUrls {
    base_url: String,
}

impl AbsoluteUrls {
    /// Create the filter with a fixed base URL supplied at registration time.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Create the filter from site configuration, resolving the `url` key once.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::with_base_url(config.base_url())
    }

    /// The base URL this filter substitutes for the asset marker.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl TemplateFilter for AbsoluteUrls {
    fn name(&self) -> &str {
        "absolute_urls"
    }

    fn apply(&self, input: &str) -> String {
        absolute_urls(input, &self.base_url)
    }
}

/// Lookup table mapping filter names to implementations.
///
/// Hosts populate the registry during startup and resolve filters by the name
/// used in template markup when rendering.
#[derive(Default)]
pub struct FilterRegistry {
    filters: BTreeMap<String, Box<dyn TemplateFilter>>,
}

impl FilterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a filter under its own name, replacing any previous entry.
    pub fn register(&mut self, filter: Box<dyn TemplateFilter>) {
        self.filters.insert(filter.name().to_string(), filter);
    }

    /// Look up a registered filter by name.
    pub fn get(&self, name: &str) -> Option<&dyn TemplateFilter> {
        self.filters.get(name).map(Box::as_ref)
    }

    /// Apply the named filter to `input`, or `None` when no such filter exists.
    pub fn apply(&self, name: &str, input: &str) -> Option<String> {
        self.get(name).map(|filter| filter.apply(input))
    }
}
