//! Convenience re-exports for typical applications.
//!
//! ```rust,ignore
//! use placard::prelude::*;
//!
//! let mut components = ComponentRegistry::new(source);
//! let mut router = Router::new();
//! router.map_routes([("/", "home")]);
//! router.goto(&mut components, "/")?;
//! ```

pub use crate::router::{Router, RouterError};

pub use placard_render::{
    Attributes, ComponentError, ComponentInstance, ComponentRegistry, Container, DirSource,
    InlineSource, TemplateSource,
};
