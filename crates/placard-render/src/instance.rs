//! Live component instances.
//!
//! A [`ComponentInstance`] is one independently mutable rendering of a
//! template: it owns its own markup buffer and attribute map, so sibling
//! instances never leak into each other. Cloning an instance yields another
//! fully independent one (the value-type analogue of deep node cloning).
//!
//! ## Re-render discipline
//!
//! [`set_attr`](ComponentInstance::set_attr) re-serializes immediately, but
//! only when the value actually changed — the re-render count equals the
//! number of *distinct* values ever set per key, not the number of calls.
//! For batched updates, apply attributes with
//! [`set_attr_silent`](ComponentInstance::set_attr_silent) and finish with
//! one [`refresh`](ComponentInstance::refresh).

use indexmap::IndexMap;

use crate::template::{self, TemplateDefinition};

/// One live, independently mutable rendering of a component.
///
/// # Example
///
/// ```rust
/// use placard_render::{ComponentRegistry, InlineSource};
///
/// let mut source = InlineSource::new();
/// source.add("greeting", "Hello {{name}}!");
/// let mut registry = ComponentRegistry::new(source);
///
/// let mut greeting = registry.instantiate("greeting").unwrap();
/// assert_eq!(greeting.rendered(), "Hello {{name}}!");
///
/// greeting.set_attr("name", "World");
/// assert_eq!(greeting.rendered(), "Hello World!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentInstance {
    component: String,
    raw: String,
    rendered: String,
    attributes: IndexMap<String, String>,
    renders: usize,
}

impl ComponentInstance {
    /// Stamps a fresh instance from a cached definition. The initial
    /// rendered content equals the raw markup; no attributes are applied.
    pub(crate) fn from_template(template: &TemplateDefinition) -> Self {
        Self {
            component: template.name().to_string(),
            raw: template.raw_markup().to_string(),
            rendered: template.raw_markup().to_string(),
            attributes: IndexMap::new(),
            renders: 0,
        }
    }

    /// Name of the component this instance was stamped from.
    pub fn component(&self) -> &str {
        &self.component
    }

    /// The current rendered markup.
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    /// The stored value for an attribute key, if set.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Applied attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// How many serialization passes this instance has run.
    pub fn render_count(&self) -> usize {
        self.renders
    }

    /// Stores an attribute and re-renders immediately.
    ///
    /// A call with the already-stored value is a strict no-op: nothing is
    /// stored and no re-render happens.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        if self.store(key.into(), value.into()) {
            self.serialize();
        }
    }

    /// Stores an attribute without re-rendering.
    ///
    /// Intended for batched application followed by one explicit
    /// [`refresh`](Self::refresh).
    pub fn set_attr_silent(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.store(key.into(), value.into());
    }

    /// Forces one unconditional serialization pass.
    pub fn refresh(&mut self) {
        self.serialize();
    }

    /// Returns true if the value was new or changed. Last write wins; a
    /// re-set key keeps its original insertion position.
    fn store(&mut self, key: String, value: String) -> bool {
        if self.attributes.get(&key) == Some(&value) {
            return false;
        }
        self.attributes.insert(key, value);
        true
    }

    /// Full substitution pass over the original raw markup with the full
    /// attribute map. Never incremental.
    fn serialize(&mut self) {
        self.rendered = template::substitute(&self.raw, &self.attributes);
        self.renders += 1;
    }
}
