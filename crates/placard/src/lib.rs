//! # Placard - Minimal Component Templating and Routing
//!
//! Placard is a micro-framework for building page-oriented applications
//! out of named markup fragments. Register fragments as components,
//! stamp out instances with `{{key}}` attribute substitution, and switch
//! between full-page components with a client-side router.
//!
//! Two loosely coupled layers:
//!
//! - The component engine (re-exported from `placard-render`):
//!   [`ComponentRegistry`], [`ComponentInstance`], [`Container`],
//!   template sources and diagnostics.
//! - The [`Router`]: a route table plus a single mount container; each
//!   navigation fully replaces the mounted page.
//!
//! ## Quick Start
//!
//! ```rust
//! use placard::{ComponentRegistry, InlineSource, Router};
//!
//! let mut source = InlineSource::new();
//! source.add("home", "<h1>{{title}}</h1>");
//! source.add("about", "<p>All about us.</p>");
//!
//! let mut components = ComponentRegistry::new(source);
//! let mut router = Router::new();
//! router.map_routes([("/", "home"), ("/about", "about")]);
//!
//! router.goto(&mut components, "/").unwrap();
//! assert_eq!(router.mount().len(), 1);
//!
//! router.goto(&mut components, "/about").unwrap();
//! assert_eq!(router.mount().children()[0].rendered(), "<p>All about us.</p>");
//! ```
//!
//! ## Design Notes
//!
//! There is no global application state: registries, routers and
//! containers are plain values you construct and pass around, which keeps
//! tests isolated. Expected failures (unknown component, unknown route,
//! malformed route entry) are reported through a
//! [`DiagnosticSink`](placard_render::DiagnosticSink) and surface as typed
//! `Result`s; nothing panics for them.
//!
//! Out of scope by design: virtual-DOM diffing, nested component trees,
//! two-way binding, history/URL integration, and asynchronous route
//! loading.

mod router;

pub mod prelude;

pub use router::{Router, RouterError};

// Component engine surface, re-exported from placard-render.
pub use placard_render::{
    Attributes, ComponentError, ComponentInstance, ComponentRegistry, Container, Diagnostic,
    DiagnosticSink, DirSource, InlineSource, RecordingSink, Severity, StderrSink,
    TemplateDefinition, TemplateSource, SOURCE_EXTENSIONS,
};
