//! Template definitions and the placeholder substitution pass.
//!
//! A [`TemplateDefinition`] pairs a component name with its raw markup.
//! Definitions are built lazily, once per name, and are immutable after
//! construction; the registry owns them and stamps instances from them.
//!
//! ## Substitution
//!
//! The placeholder token is the literal sequence `{{key}}` — no whitespace
//! trimming, no nesting, no expressions. A substitution pass always starts
//! from the original raw markup and applies the full attribute map, in
//! attribute insertion order. Every occurrence of a token is replaced;
//! tokens without a matching attribute survive the pass literally.

use indexmap::IndexMap;

/// An immutable named template.
///
/// Built once per component name on first use and cached by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDefinition {
    name: String,
    raw_markup: String,
}

impl TemplateDefinition {
    /// Creates a definition from a name and its raw markup.
    pub fn new(name: impl Into<String>, raw_markup: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_markup: raw_markup.into(),
        }
    }

    /// The component name this definition is registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unsubstituted markup text.
    pub fn raw_markup(&self) -> &str {
        &self.raw_markup
    }
}

/// Runs one full substitution pass over `raw` with the given attributes.
///
/// Attributes are applied in insertion order; each `{{key}}` token is
/// replaced everywhere it occurs.
pub(crate) fn substitute(raw: &str, attributes: &IndexMap<String, String>) -> String {
    let mut text = raw.to_string();
    for (key, value) in attributes {
        let token = format!("{{{{{}}}}}", key);
        if text.contains(&token) {
            text = text.replace(&token, value);
        }
    }
    text
}
