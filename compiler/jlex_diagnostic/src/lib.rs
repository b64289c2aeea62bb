//! Diagnostic system for lexical error reporting.
//!
//! Every lexical failure becomes a [`Diagnostic`] with:
//! - an [`ErrorCode`] for searchability
//! - a message saying what went wrong
//! - a primary label saying where it went wrong
//!
//! Diagnostics are collected and ordered by [`queue::DiagnosticQueue`] and
//! rendered by an [`emitter::DiagnosticEmitter`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod queue;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
