//! Error types for component resolution and instantiation.
//!
//! This module provides [`ComponentError`], the error type returned by the
//! registry's instantiation operations. "Not found" is an expected condition
//! and travels through `Result` values; nothing in this crate panics for it.

use std::fmt;

/// Error type for component registry operations.
///
/// The registry never panics for an unknown component name. Callers check
/// the returned `Result` and treat [`ComponentError::NotFound`] as
/// "component unavailable, do nothing further."
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentError {
    /// No template source provides markup under this component name.
    NotFound(String),

    /// Data-driven attribute application received a value that cannot be
    /// flattened into attributes (e.g. a bare list or scalar).
    Data(String),
}

impl fmt::Display for ComponentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentError::NotFound(name) => write!(f, "component not found: {}", name),
            ComponentError::Data(msg) => write!(f, "component data error: {}", msg),
        }
    }
}

impl std::error::Error for ComponentError {}

impl From<serde_json::Error> for ComponentError {
    fn from(err: serde_json::Error) -> Self {
        ComponentError::Data(err.to_string())
    }
}
