//! # Placard Render - Component Templates and Instances
//!
//! `placard-render` is the component engine behind the `placard`
//! micro-framework. It turns named markup fragments into reusable
//! components: register raw markup under a name, stamp out independent
//! instances, and substitute `{{key}}` placeholders with attribute values.
//!
//! This crate is router-agnostic and can be used on its own wherever named
//! fragments with key/value substitution are enough.
//!
//! ## Core Concepts
//!
//! - [`TemplateSource`]: collaborator answering "what markup lives under
//!   this name?" ([`InlineSource`] in memory, [`DirSource`] from disk)
//! - [`ComponentRegistry`]: lazily builds and caches one
//!   [`TemplateDefinition`] per name, stamps out instances
//! - [`ComponentInstance`]: one live rendering with its own attribute map
//!   and markup buffer
//! - [`Container`]: generic mount point instances are appended to
//! - [`DiagnosticSink`]: where recoverable failures are reported
//!
//! ## Quick Start
//!
//! ```rust
//! use placard_render::{ComponentRegistry, Container, InlineSource};
//!
//! let mut source = InlineSource::new();
//! source.add("greeting", "Hello {{name}}!");
//!
//! let mut registry = ComponentRegistry::new(source);
//! let mut page = Container::new();
//!
//! let greeting = registry.append("greeting", &mut page).unwrap();
//! greeting.set_attr("name", "World");
//!
//! assert_eq!(page.children()[0].rendered(), "Hello World!");
//! ```
//!
//! ## Re-render Discipline
//!
//! Setting an attribute re-renders immediately, but setting the same value
//! twice re-renders once: the engine's invariant is one serialization pass
//! per distinct value. Batch with the silent setter plus one refresh, or
//! let [`ComponentRegistry::for_each`] do that for a whole list:
//!
//! ```rust
//! use placard_render::{Attributes, ComponentRegistry, Container, InlineSource};
//!
//! let mut source = InlineSource::new();
//! source.add("todo", "<li>{{title}}</li>");
//! let mut registry = ComponentRegistry::new(source);
//!
//! let rows: Vec<Attributes> = ["groceries", "taxes"]
//!     .iter()
//!     .map(|t| Attributes::from_iter([("title".to_string(), t.to_string())]))
//!     .collect();
//!
//! let mut list = Container::new();
//! registry.for_each("todo", rows)(&mut list);
//!
//! assert_eq!(list.len(), 2);
//! assert_eq!(list.children()[0].render_count(), 1);
//! ```
//!
//! ## Execution Model
//!
//! Everything is synchronous and runs to completion; there is no background
//! work and no interior mutability in the engine itself. Shared state
//! (template cache, containers) is plain owned data behind `&mut`.

pub mod diag;
mod error;
mod instance;
pub mod node;
pub mod registry;
pub mod source;
mod template;

pub use diag::{Diagnostic, DiagnosticSink, RecordingSink, Severity, StderrSink};
pub use error::ComponentError;
pub use instance::ComponentInstance;
pub use node::Container;
pub use registry::{Attributes, ComponentRegistry};
pub use source::{DirSource, InlineSource, TemplateSource, SOURCE_EXTENSIONS};
pub use template::TemplateDefinition;
