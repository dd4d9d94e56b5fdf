//! Structured diagnostic events emitted while scanning a page.
//!
//! Nothing here is fatal. The scanner reports what it had to drop and keeps
//! going; the sink decides whether anyone hears about it.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// `\*X`, `\*(XX` or `\*[name]` with no definition and no built-in.
    UndefinedString { key: String },
    /// A user-string reference cut off by the end of the line.
    UnterminatedString { key: String },
    /// A `.so` target that exists in no search-path directory.
    RedirectionNotFound { target: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UndefinedString { key } => {
                write!(f, "UNDEFINED user defined string: {}", key)
            }
            Diagnostic::UnterminatedString { key } => {
                write!(f, "unterminated user defined string: {}", key)
            }
            Diagnostic::RedirectionNotFound { target } => {
                write!(f, ".so target not found in MANPATH: {}", target)
            }
        }
    }
}

/// Receiver for diagnostic events.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

/// Collects events in order, used by tests.
impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Forwards every event to `tracing` at debug level.
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(kind = ?diagnostic, "{}", diagnostic);
    }
}
