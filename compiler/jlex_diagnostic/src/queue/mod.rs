//! Diagnostic queue for collecting and ordering diagnostics.
//!
//! Diagnostics can arrive out of source order (a pre-pass issue is found
//! before the token that covers it is cooked). The queue keys each entry by
//! its [`Position`] and hands them back sorted.

use jlex_ir::Position;

use crate::Diagnostic;

/// Configuration for diagnostic processing.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors to keep (0 = unlimited).
    pub error_limit: usize,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig { error_limit: 100 }
    }
}

impl DiagnosticConfig {
    /// Create a config with no limits.
    pub fn unlimited() -> Self {
        DiagnosticConfig { error_limit: 0 }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
struct QueuedDiagnostic {
    diagnostic: Diagnostic,
    position: Position,
    /// Insertion order, to keep the sort stable for equal positions.
    seq: usize,
}

/// Queue for collecting and sorting diagnostics.
///
/// ```
/// use jlex_diagnostic::queue::DiagnosticQueue;
/// use jlex_diagnostic::{Diagnostic, ErrorCode};
/// use jlex_ir::Position;
///
/// let mut queue = DiagnosticQueue::new();
/// queue.add(Diagnostic::error(ErrorCode::E0008), Position::new(2, 1, 10));
/// queue.add(Diagnostic::error(ErrorCode::E0001), Position::new(1, 5, 4));
///
/// let sorted = queue.flush();
/// assert_eq!(sorted[0].code, ErrorCode::E0001);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    diagnostics: Vec<QueuedDiagnostic>,
    error_count: usize,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    /// Create a new diagnostic queue with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a diagnostic queue with custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Add a diagnostic located at `position`.
    ///
    /// Returns `false` if the error limit was already reached.
    pub fn add(&mut self, diagnostic: Diagnostic, position: Position) -> bool {
        if self.limit_reached() {
            return false;
        }
        self.error_count += 1;
        let seq = self.diagnostics.len();
        self.diagnostics.push(QueuedDiagnostic {
            diagnostic,
            position,
            seq,
        });
        true
    }

    /// Check if the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Drain all diagnostics, sorted by source position.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut queued = std::mem::take(&mut self.diagnostics);
        queued.sort_by_key(|q| (q.position.line, q.position.column, q.seq));
        self.error_count = 0;
        queued.into_iter().map(|q| q.diagnostic).collect()
    }
}

#[cfg(test)]
mod tests;
