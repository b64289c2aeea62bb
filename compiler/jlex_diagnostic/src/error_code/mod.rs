//! Error codes for lexical diagnostics.
//!
//! One code per [`LexErrorKind`], so `E0005` always means the same failure
//! no matter which literal it was found in.

use std::fmt;

use jlex_ir::LexErrorKind;

/// Error codes for all lexer diagnostics.
///
/// Format: `E00xx`. The numbering follows [`LexErrorKind::ALL`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ErrorCode {
    /// Unterminated string literal
    E0001,
    /// Unterminated character literal
    E0002,
    /// Unterminated block comment
    E0003,
    /// Unterminated text block
    E0004,
    /// Invalid escape sequence
    E0005,
    /// Malformed numeric literal
    E0006,
    /// Misplaced underscore in a numeric literal
    E0007,
    /// Character that cannot start a token
    E0008,
    /// Empty character literal
    E0009,
    /// Text block opening not followed by a line terminator
    E0010,
}

impl ErrorCode {
    /// Get the string representation of this error code.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E0007 => "E0007",
            ErrorCode::E0008 => "E0008",
            ErrorCode::E0009 => "E0009",
            ErrorCode::E0010 => "E0010",
        }
    }

    /// The error category this code stands for.
    pub const fn kind(self) -> LexErrorKind {
        match self {
            ErrorCode::E0001 => LexErrorKind::UnterminatedString,
            ErrorCode::E0002 => LexErrorKind::UnterminatedChar,
            ErrorCode::E0003 => LexErrorKind::UnterminatedBlockComment,
            ErrorCode::E0004 => LexErrorKind::UnterminatedTextBlock,
            ErrorCode::E0005 => LexErrorKind::InvalidEscapeSequence,
            ErrorCode::E0006 => LexErrorKind::MalformedNumericLiteral,
            ErrorCode::E0007 => LexErrorKind::InvalidUnderscorePlacement,
            ErrorCode::E0008 => LexErrorKind::UnrecognizedCharacter,
            ErrorCode::E0009 => LexErrorKind::EmptyCharLiteral,
            ErrorCode::E0010 => LexErrorKind::InvalidTextBlockOpening,
        }
    }
}

impl From<LexErrorKind> for ErrorCode {
    fn from(kind: LexErrorKind) -> Self {
        match kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnterminatedChar => ErrorCode::E0002,
            LexErrorKind::UnterminatedBlockComment => ErrorCode::E0003,
            LexErrorKind::UnterminatedTextBlock => ErrorCode::E0004,
            LexErrorKind::InvalidEscapeSequence => ErrorCode::E0005,
            LexErrorKind::MalformedNumericLiteral => ErrorCode::E0006,
            LexErrorKind::InvalidUnderscorePlacement => ErrorCode::E0007,
            LexErrorKind::UnrecognizedCharacter => ErrorCode::E0008,
            LexErrorKind::EmptyCharLiteral => ErrorCode::E0009,
            LexErrorKind::InvalidTextBlockOpening => ErrorCode::E0010,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
