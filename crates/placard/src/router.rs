//! Client-side routing between full-page components.
//!
//! A [`Router`] owns a route table (route key → component name) and a
//! single mount container whose children represent "the current page."
//! Navigation clears the mount, then asks a [`ComponentRegistry`] to
//! append the mapped component — clearing strictly precedes appending, so
//! an observer can never see two routes' content at once.
//!
//! The router keeps no hidden globals: construct one per application (or
//! per test case) and hand it the registry at navigation time.
//!
//! Execution is synchronous and run-to-completion. Do not call navigation
//! recursively from within a navigation continuation; the `&mut` receivers
//! make that structurally impossible in safe code.

use std::collections::HashMap;
use std::sync::Arc;

use placard_render::{
    ComponentRegistry, Container, Diagnostic, DiagnosticSink, StderrSink,
};

/// Errors for route registration and navigation.
///
/// Every variant is recoverable: the offending call is a no-op, a
/// diagnostic is reported, and the router's state is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    /// Route key was empty or whitespace-only.
    #[error("route key must not be blank")]
    BlankRouteKey,

    /// Component name was empty or whitespace-only.
    #[error("component name for route \"{0}\" must not be blank")]
    BlankComponentName(String),

    /// Navigation target is not in the route table.
    #[error("invalid route: \"{0}\" does not exist")]
    UnknownRoute(String),
}

/// Maps route keys to component names and swaps the mounted page.
///
/// # Example
///
/// ```rust
/// use placard::Router;
/// use placard_render::{ComponentRegistry, InlineSource};
///
/// let mut source = InlineSource::new();
/// source.add("home", "<h1>Home</h1>");
/// source.add("about", "<h1>About</h1>");
/// let mut components = ComponentRegistry::new(source);
///
/// let mut router = Router::new();
/// router.map_routes([("/", "home"), ("/about", "about")]);
///
/// router.goto(&mut components, "/about").unwrap();
/// assert_eq!(router.mount().children()[0].rendered(), "<h1>About</h1>");
/// ```
pub struct Router {
    routes: HashMap<String, String>,
    mount: Container,
    sink: Arc<dyn DiagnosticSink>,
}

impl Router {
    /// Creates a router with an empty route table and a fresh mount
    /// container, reporting diagnostics to stderr.
    pub fn new() -> Self {
        Self::with_sink(Arc::new(StderrSink))
    }

    /// Creates a router that reports diagnostics through `sink`.
    ///
    /// Share the same sink with the component registry to observe both
    /// layers' diagnostics in one place.
    pub fn with_sink(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            routes: HashMap::new(),
            mount: Container::new(),
            sink,
        }
    }

    /// Bulk-registers routes from `(route key, component name)` entries.
    ///
    /// Each entry is validated; an invalid entry is skipped with one
    /// warning diagnostic while the rest still upsert. Later entries for
    /// the same key overwrite silently.
    pub fn map_routes<K, V>(&mut self, entries: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (key, name) in entries {
            let (key, name) = (key.into(), name.into());
            if let Err(err) = self.insert(key.clone(), name) {
                self.sink.report(Diagnostic::warning(format!(
                    "route \"{}\" not added: {}",
                    key, err
                )));
            }
        }
    }

    /// Registers one route, overwriting any existing entry for the key.
    ///
    /// # Errors
    ///
    /// A blank key or component name yields a warning diagnostic plus a
    /// typed error, and the table is unchanged.
    pub fn add_route(
        &mut self,
        key: impl Into<String>,
        component: impl Into<String>,
    ) -> Result<(), RouterError> {
        let key = key.into();
        let result = self.insert(key.clone(), component.into());
        if let Err(ref err) = result {
            self.sink.report(Diagnostic::warning(format!(
                "route \"{}\" not added: {}",
                key, err
            )));
        }
        result
    }

    /// Removes a route. A key not in the table is a no-op.
    pub fn delete_route(&mut self, key: &str) {
        self.routes.remove(key);
    }

    /// The component name mapped to `key`, if registered.
    pub fn route(&self, key: &str) -> Option<&str> {
        self.routes.get(key).map(String::as_str)
    }

    /// Number of registered routes.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// The mount container holding the current page's content.
    pub fn mount(&self) -> &Container {
        &self.mount
    }

    /// Navigates to `key`: clears the mount, then instantiates and appends
    /// the mapped component.
    ///
    /// An unknown key emits one error diagnostic and leaves the mount
    /// untouched — no partial clear. A known key whose component template
    /// has since vanished leaves the mount cleared but empty (the registry
    /// reports the missing component); callers detect this by observing an
    /// empty mount.
    pub fn goto(
        &mut self,
        components: &mut ComponentRegistry,
        key: &str,
    ) -> Result<(), RouterError> {
        let name = match self.routes.get(key) {
            Some(name) => name.clone(),
            None => {
                self.sink.report(Diagnostic::error(format!(
                    "invalid route: \"{}\" does not exist",
                    key
                )));
                return Err(RouterError::UnknownRoute(key.to_string()));
            }
        };

        self.mount.clear();
        let _ = components.append(&name, &mut self.mount);
        Ok(())
    }

    fn insert(&mut self, key: String, component: String) -> Result<(), RouterError> {
        validate_entry(&key, &component)?;
        self.routes.insert(key, component);
        Ok(())
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

/// Type-shape validation applied at the registration boundary.
fn validate_entry(key: &str, component: &str) -> Result<(), RouterError> {
    if key.trim().is_empty() {
        return Err(RouterError::BlankRouteKey);
    }
    if component.trim().is_empty() {
        return Err(RouterError::BlankComponentName(key.to_string()));
    }
    Ok(())
}
