//! Diagnostic reporting for recoverable failures.
//!
//! The engine's contract for expected failures (unknown component name,
//! malformed route entry) is "report and carry on": the operation becomes a
//! no-op and a diagnostic is emitted through a [`DiagnosticSink`]. Nothing
//! is thrown, and the caller's control flow is never aborted.
//!
//! The default sink, [`StderrSink`], writes styled lines to stderr.
//! [`RecordingSink`] captures diagnostics in memory so tests (and embedding
//! applications) can assert exactly what was reported.
//!
//! Sinks are shared via `Arc<dyn DiagnosticSink>` so a registry and a router
//! can report through one channel.

use std::fmt;
use std::sync::{Arc, Mutex};

use console::style;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Recoverable: the operation was skipped but the caller can proceed.
    Warning,
    /// The requested operation could not be performed at all.
    Error,
}

/// A single reported diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    /// Creates a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    /// Creates an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Warning => write!(f, "warning: {}", self.message),
            Severity::Error => write!(f, "error: {}", self.message),
        }
    }
}

/// Destination for recoverable-failure diagnostics.
///
/// Implementations must be `Send + Sync` so a registry holding a sink can
/// still move across threads.
pub trait DiagnosticSink: Send + Sync {
    /// Delivers one diagnostic.
    fn report(&self, diagnostic: Diagnostic);
}

/// Sink that writes styled diagnostics to stderr.
///
/// Warnings are prefixed in yellow, errors in red. This is the default
/// sink for registries and routers constructed without an explicit one.
#[derive(Debug, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Warning => {
                eprintln!("{} {}", style("warning:").yellow().bold(), diagnostic.message)
            }
            Severity::Error => {
                eprintln!("{} {}", style("error:").red().bold(), diagnostic.message)
            }
        }
    }
}

/// Sink that records diagnostics in memory.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use placard_render::{Diagnostic, DiagnosticSink, RecordingSink};
///
/// let sink = Arc::new(RecordingSink::new());
/// sink.report(Diagnostic::warning("component \"nav\" does not exist"));
///
/// assert_eq!(sink.len(), 1);
/// assert!(sink.entries()[0].message.contains("nav"));
/// ```
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of everything reported so far.
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.lock().expect("diagnostic sink poisoned").clone()
    }

    /// Number of diagnostics reported so far.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("diagnostic sink poisoned").len()
    }

    /// True if nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of diagnostics with the given severity.
    pub fn count_of(&self, severity: Severity) -> usize {
        self.entries
            .lock()
            .expect("diagnostic sink poisoned")
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// Drops everything recorded so far.
    pub fn clear(&self) {
        self.entries.lock().expect("diagnostic sink poisoned").clear();
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.entries
            .lock()
            .expect("diagnostic sink poisoned")
            .push(diagnostic);
    }
}

/// The default sink used when none is injected.
pub(crate) fn default_sink() -> Arc<dyn DiagnosticSink> {
    Arc::new(StderrSink)
}
