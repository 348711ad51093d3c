//! Generic mount containers.
//!
//! A [`Container`] is the rendering target the engine appends instances to.
//! It deliberately models only the capabilities the engine needs — create
//! empty, clear, append as last child, inspect children — with no ties to
//! any platform element model. "The current page" is simply a container's
//! current children.

use crate::instance::ComponentInstance;

/// An ordered container of mounted component instances.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    children: Vec<ComponentInstance>,
}

impl Container {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all children. Removal is the only teardown an instance gets.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Appends an instance as the last child and returns a handle to the
    /// mounted instance.
    pub fn push(&mut self, instance: ComponentInstance) -> &mut ComponentInstance {
        self.children.push(instance);
        self.children.last_mut().expect("just pushed")
    }

    /// The mounted instances, in append order.
    pub fn children(&self) -> &[ComponentInstance] {
        &self.children
    }

    /// Mutable handle to the child at `index`, if present.
    pub fn child_mut(&mut self, index: usize) -> Option<&mut ComponentInstance> {
        self.children.get_mut(index)
    }

    /// Number of mounted children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True if nothing is mounted.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
