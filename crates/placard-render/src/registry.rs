//! Component registry and instantiation.
//!
//! [`ComponentRegistry`] is the service object at the center of the engine.
//! It owns an injected [`TemplateSource`], a lazy per-name cache of
//! [`TemplateDefinition`]s, and a diagnostic sink. There is no hidden
//! global state: construct one registry per application (or per test case)
//! and pass it by reference to whoever needs to stamp out components.
//!
//! ## Lookup contract
//!
//! The first lookup for a name consults the source and caches the
//! definition; every later lookup hits the cache and never re-fetches.
//! A name the source doesn't know yields [`ComponentError::NotFound`]
//! plus one warning diagnostic — never a panic. Misses are not cached,
//! so a fragment added to the source later will still resolve.
//!
//! ## Append family
//!
//! [`append`](ComponentRegistry::append),
//! [`append_if`](ComponentRegistry::append_if),
//! [`append_if_else`](ComponentRegistry::append_if_else) and
//! [`for_each`](ComponentRegistry::for_each) instantiate and mount in one
//! step. `for_each` batches: each instance gets its row's attributes via
//! the silent setter and exactly one refresh, so N rows cost N re-renders
//! in total rather than N times the attribute count.

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;

use crate::diag::{default_sink, Diagnostic, DiagnosticSink};
use crate::error::ComponentError;
use crate::instance::ComponentInstance;
use crate::node::Container;
use crate::source::TemplateSource;
use crate::template::TemplateDefinition;

/// An insertion-ordered attribute map, as consumed by
/// [`ComponentRegistry::for_each`].
pub type Attributes = IndexMap<String, String>;

/// Caches template definitions and stamps out component instances.
///
/// # Example
///
/// ```rust
/// use placard_render::{ComponentRegistry, Container, InlineSource};
///
/// let mut source = InlineSource::new();
/// source.add("card", "<li>{{label}}</li>");
///
/// let mut registry = ComponentRegistry::new(source);
/// let mut list = Container::new();
///
/// let card = registry.append("card", &mut list).unwrap();
/// card.set_attr("label", "First");
///
/// assert_eq!(list.children()[0].rendered(), "<li>First</li>");
/// ```
pub struct ComponentRegistry {
    source: Box<dyn TemplateSource>,
    cache: HashMap<String, TemplateDefinition>,
    sink: Arc<dyn DiagnosticSink>,
}

impl ComponentRegistry {
    /// Creates a registry over the given source, reporting diagnostics
    /// to stderr.
    pub fn new(source: impl TemplateSource + 'static) -> Self {
        Self::with_sink(source, default_sink())
    }

    /// Creates a registry that reports diagnostics through `sink`.
    pub fn with_sink(source: impl TemplateSource + 'static, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            source: Box::new(source),
            cache: HashMap::new(),
            sink,
        }
    }

    /// Looks up the cached definition for `name`, building it from the
    /// source on first use.
    ///
    /// # Errors
    ///
    /// [`ComponentError::NotFound`] (plus one warning diagnostic) when the
    /// source has no markup under `name`.
    pub fn template(&mut self, name: &str) -> Result<&TemplateDefinition, ComponentError> {
        if !self.cache.contains_key(name) {
            match self.source.raw_markup(name) {
                Some(markup) => {
                    self.cache
                        .insert(name.to_string(), TemplateDefinition::new(name, markup));
                }
                None => {
                    self.sink.report(Diagnostic::warning(format!(
                        "component \"{}\" does not exist",
                        name
                    )));
                    return Err(ComponentError::NotFound(name.to_string()));
                }
            }
        }
        Ok(&self.cache[name])
    }

    /// True if a definition for `name` has already been built and cached.
    pub fn is_cached(&self, name: &str) -> bool {
        self.cache.contains_key(name)
    }

    /// Produces a fresh, independent instance of `name`.
    ///
    /// The instance's initial rendered content equals the raw markup; no
    /// attributes are applied yet.
    pub fn instantiate(&mut self, name: &str) -> Result<ComponentInstance, ComponentError> {
        self.template(name).map(ComponentInstance::from_template)
    }

    /// Instantiates `name` and appends it as the last child of `container`.
    ///
    /// On [`ComponentError::NotFound`] the container is untouched and the
    /// error is returned; otherwise a handle to the mounted instance comes
    /// back.
    pub fn append<'c>(
        &mut self,
        name: &str,
        container: &'c mut Container,
    ) -> Result<&'c mut ComponentInstance, ComponentError> {
        let instance = self.instantiate(name)?;
        Ok(container.push(instance))
    }

    /// Appends `name` only when `condition` holds.
    pub fn append_if<'c>(
        &mut self,
        name: &str,
        condition: bool,
        container: &'c mut Container,
    ) -> Result<Option<&'c mut ComponentInstance>, ComponentError> {
        if condition {
            self.append(name, container).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Appends exactly one of the two components, chosen by `condition`.
    pub fn append_if_else<'c>(
        &mut self,
        name_if_true: &str,
        name_if_false: &str,
        condition: bool,
        container: &'c mut Container,
    ) -> Result<&'c mut ComponentInstance, ComponentError> {
        let name = if condition { name_if_true } else { name_if_false };
        self.append(name, container)
    }

    /// Returns a deferred action that stamps one instance of `name` per
    /// row into whatever container it is eventually invoked with.
    ///
    /// Each row's pairs are applied via the silent setter followed by a
    /// single refresh, and instances are appended in row order. Rows for a
    /// name the source doesn't know are skipped (with the registry's usual
    /// not-found diagnostic).
    ///
    /// # Example
    ///
    /// ```rust
    /// use placard_render::{Attributes, ComponentRegistry, Container, InlineSource};
    ///
    /// let mut source = InlineSource::new();
    /// source.add("row", "<li>{{label}}</li>");
    /// let mut registry = ComponentRegistry::new(source);
    ///
    /// let rows: Vec<Attributes> = vec![
    ///     Attributes::from_iter([("label".to_string(), "one".to_string())]),
    ///     Attributes::from_iter([("label".to_string(), "two".to_string())]),
    /// ];
    ///
    /// let mut list = Container::new();
    /// registry.for_each("row", rows)(&mut list);
    ///
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.children()[1].rendered(), "<li>two</li>");
    /// ```
    pub fn for_each<'a>(
        &'a mut self,
        name: impl Into<String>,
        rows: Vec<Attributes>,
    ) -> impl FnOnce(&mut Container) + 'a {
        let name = name.into();
        move |container: &mut Container| {
            for row in rows {
                let mut instance = match self.instantiate(&name) {
                    Ok(instance) => instance,
                    Err(_) => continue,
                };
                for (key, value) in row {
                    instance.set_attr_silent(key, value);
                }
                instance.refresh();
                container.push(instance);
            }
        }
    }

    /// Instantiates `name` with attributes taken from a serializable value.
    ///
    /// `data` must serialize to a map; each top-level field is applied as
    /// an attribute (scalars as their text form, nested values as JSON),
    /// followed by one refresh, then the instance is appended.
    ///
    /// # Errors
    ///
    /// [`ComponentError::NotFound`] for an unknown component, or
    /// [`ComponentError::Data`] when `data` does not serialize to a map.
    pub fn append_data<'c, T: Serialize>(
        &mut self,
        name: &str,
        data: &T,
        container: &'c mut Container,
    ) -> Result<&'c mut ComponentInstance, ComponentError> {
        let value = serde_json::to_value(data)?;
        let fields = match value {
            serde_json::Value::Object(fields) => fields,
            other => {
                return Err(ComponentError::Data(format!(
                    "expected a map-like value with named fields, got {}",
                    json_kind(&other)
                )));
            }
        };

        let mut instance = self.instantiate(name)?;
        for (key, field) in fields {
            instance.set_attr_silent(key, scalar_text(&field));
        }
        instance.refresh();
        Ok(container.push(instance))
    }
}

/// Text form of a JSON field for attribute substitution.
fn scalar_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => String::new(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => value.to_string(),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a list",
        serde_json::Value::Object(_) => "a map",
    }
}
