//! Template source collaborators.
//!
//! A [`TemplateSource`] answers one question: "what is the raw markup for
//! this component name?" The engine treats the answer as opaque text with
//! placeholder tokens; it never parses or validates the markup's structure.
//!
//! Two implementations are provided:
//!
//! - [`InlineSource`]: an in-memory name → markup map, the usual choice for
//!   tests and for applications that embed their fragments at compile time.
//! - [`DirSource`]: lazy per-name lookup against a directory of fragment
//!   files, resolved by extension priority.
//!
//! The registry caches a definition the first time a name resolves, so a
//! source is consulted at most once per name (see
//! [`ComponentRegistry::template`](crate::ComponentRegistry::template)).

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Recognized fragment file extensions in priority order.
///
/// When multiple files exist with the same base name, the extension
/// appearing earlier in this list wins.
pub const SOURCE_EXTENSIONS: &[&str] = &[".html", ".fragment", ".txt"];

/// Provides raw markup for component names.
///
/// Returning `None` means "no markup under that name" — an expected
/// condition the registry reports as a diagnostic, never a panic.
pub trait TemplateSource: Send + Sync {
    /// Returns the raw markup registered under `name`, if any.
    fn raw_markup(&self, name: &str) -> Option<String>;

    /// True if markup exists under `name`.
    fn contains(&self, name: &str) -> bool {
        self.raw_markup(name).is_some()
    }
}

/// In-memory template source.
///
/// # Example
///
/// ```rust
/// use placard_render::{InlineSource, TemplateSource};
///
/// let mut source = InlineSource::new();
/// source.add("greeting", "Hello {{name}}!");
///
/// assert!(source.contains("greeting"));
/// assert_eq!(source.raw_markup("greeting").unwrap(), "Hello {{name}}!");
/// ```
#[derive(Debug, Clone, Default)]
pub struct InlineSource {
    templates: HashMap<String, String>,
}

impl InlineSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers markup under `name`. A later registration for the same
    /// name overwrites silently.
    pub fn add(&mut self, name: impl Into<String>, markup: impl Into<String>) {
        self.templates.insert(name.into(), markup.into());
    }

    /// Builds a source from `(name, markup)` pairs.
    pub fn from_entries(entries: &[(&str, &str)]) -> Self {
        let mut source = Self::new();
        for (name, markup) in entries {
            source.add(*name, *markup);
        }
        source
    }

    /// Number of registered fragments.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// True if no fragments are registered.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl TemplateSource for InlineSource {
    fn raw_markup(&self, name: &str) -> Option<String> {
        self.templates.get(name).cloned()
    }

    fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }
}

/// Template source backed by a directory of fragment files.
///
/// A name resolves to the first readable file among, in order:
///
/// 1. `<root>/<name>` exactly as given (for names carrying an extension)
/// 2. `<root>/<name><ext>` for each entry of [`SOURCE_EXTENSIONS`]
///
/// Files are read on demand; an unreadable or missing file is simply
/// "not found". Names containing `..` never resolve.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    /// Creates a source rooted at `root`. The directory is not required to
    /// exist yet; lookups against a missing directory are all not-found.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory this source resolves against.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    fn candidates(&self, name: &str) -> Vec<PathBuf> {
        let mut paths = vec![self.root.join(name)];
        for ext in SOURCE_EXTENSIONS {
            paths.push(self.root.join(format!("{}{}", name, ext)));
        }
        paths
    }
}

impl TemplateSource for DirSource {
    fn raw_markup(&self, name: &str) -> Option<String> {
        if name.is_empty() || name.split('/').any(|part| part == "..") {
            return None;
        }
        for path in self.candidates(name) {
            if path.is_file() {
                if let Ok(markup) = fs::read_to_string(&path) {
                    return Some(markup);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    // =========================================================================
    // InlineSource tests
    // =========================================================================

    #[test]
    fn test_inline_add_and_lookup() {
        let mut source = InlineSource::new();
        source.add("header", "<h1>{{title}}</h1>");

        assert_eq!(source.len(), 1);
        assert_eq!(source.raw_markup("header").unwrap(), "<h1>{{title}}</h1>");
    }

    #[test]
    fn test_inline_overwrites() {
        let mut source = InlineSource::new();
        source.add("header", "first");
        source.add("header", "second");

        assert_eq!(source.len(), 1);
        assert_eq!(source.raw_markup("header").unwrap(), "second");
    }

    #[test]
    fn test_inline_missing_is_none() {
        let source = InlineSource::new();
        assert!(source.raw_markup("nope").is_none());
        assert!(!source.contains("nope"));
    }

    #[test]
    fn test_from_entries() {
        let source = InlineSource::from_entries(&[("a", "A"), ("b", "B")]);
        assert_eq!(source.len(), 2);
        assert_eq!(source.raw_markup("b").unwrap(), "B");
    }

    // =========================================================================
    // DirSource tests
    // =========================================================================

    #[test]
    fn test_dir_resolves_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("home.html"), "<p>home</p>").unwrap();

        let source = DirSource::new(dir.path());
        assert_eq!(source.raw_markup("home").unwrap(), "<p>home</p>");
    }

    #[test]
    fn test_dir_extension_priority() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("home.txt"), "txt").unwrap();
        fs::write(dir.path().join("home.html"), "html").unwrap();

        let source = DirSource::new(dir.path());
        assert_eq!(source.raw_markup("home").unwrap(), "html");
    }

    #[test]
    fn test_dir_exact_name_with_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("home.txt"), "txt").unwrap();
        fs::write(dir.path().join("home.html"), "html").unwrap();

        let source = DirSource::new(dir.path());
        assert_eq!(source.raw_markup("home.txt").unwrap(), "txt");
    }

    #[test]
    fn test_dir_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirSource::new(dir.path());
        assert!(source.raw_markup("absent").is_none());
    }

    #[test]
    fn test_dir_missing_root_is_none() {
        let source = DirSource::new("/definitely/not/a/real/dir");
        assert!(source.raw_markup("home").is_none());
    }

    #[test]
    fn test_dir_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirSource::new(dir.path().join("fragments"));
        assert!(source.raw_markup("../secrets").is_none());
    }
}
