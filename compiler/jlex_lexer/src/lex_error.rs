//! Lexical errors reported alongside the token stream.
//!
//! Each erroneous raw token produces exactly one `LexError` and one
//! `Invalid` token. The error holds enough location data to render a
//! diagnostic without going back to the lexer.

use jlex_diagnostic::{Diagnostic, ErrorCode};
use jlex_ir::{LexErrorKind, Position, Span};

/// One lexical problem, located in the original source.
///
/// `span` is the byte range of the offending text; `position` is where it
/// starts and `len` is its length in codepoints.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{position}: {message}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub message: String,
    pub position: Position,
    pub span: Span,
    pub len: u32,
}

impl LexError {
    #[cold]
    pub fn new(kind: LexErrorKind, span: Span, position: Position, len: u32) -> Self {
        LexError {
            kind,
            message: kind.title().to_string(),
            position,
            span,
            len,
        }
    }

    /// A character that cannot start any token. The message names its code
    /// point the way `\u` escapes are written.
    #[cold]
    pub fn unrecognized_character(ch: char, span: Span, position: Position) -> Self {
        let message = match u16::try_from(u32::from(ch)) {
            Ok(unit) => format!("illegal character: '\\u{unit:04x}'"),
            Err(_) => format!("illegal character: U+{:X}", u32::from(ch)),
        };
        LexError {
            kind: LexErrorKind::UnrecognizedCharacter,
            message,
            position,
            span,
            len: 1,
        }
    }

    /// Render as a diagnostic with the span as its primary label.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(ErrorCode::from(self.kind))
            .with_message(self.message.clone())
            .with_label(self.span, self.kind.title())
    }
}
