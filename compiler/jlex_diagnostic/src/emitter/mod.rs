//! Diagnostic emitters.
//!
//! Each emitter implements [`DiagnosticEmitter`]. The terminal emitter is
//! the only output format; it renders source snippets when it is given the
//! text the diagnostics were produced from.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit the closing error count line.
    fn emit_summary(&mut self, error_count: usize);
}
