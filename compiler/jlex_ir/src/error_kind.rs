//! Lexical error categories.

use std::fmt;

/// What went wrong in an `Invalid` token.
///
/// Shared between the token model (`TokenKind::Invalid`) and the diagnostic
/// list so both sides name the same failure.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// String literal reached a line terminator or end of input.
    UnterminatedString,
    /// Character literal not closed after one character.
    UnterminatedChar,
    /// `/*` without a matching `*/`.
    UnterminatedBlockComment,
    /// `"""` without a closing `"""`.
    UnterminatedTextBlock,
    /// Unknown backslash escape, or a malformed `\u` escape.
    InvalidEscapeSequence,
    /// Bad digits, missing digits, out-of-range value, or disabled form.
    MalformedNumericLiteral,
    /// Underscore not strictly between two digits.
    InvalidUnderscorePlacement,
    /// Character that cannot start any token.
    UnrecognizedCharacter,
    /// `''`
    EmptyCharLiteral,
    /// Text-block opening delimiter followed by something other than a line
    /// terminator.
    InvalidTextBlockOpening,
}

impl LexErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [LexErrorKind; 10] = [
        LexErrorKind::UnterminatedString,
        LexErrorKind::UnterminatedChar,
        LexErrorKind::UnterminatedBlockComment,
        LexErrorKind::UnterminatedTextBlock,
        LexErrorKind::InvalidEscapeSequence,
        LexErrorKind::MalformedNumericLiteral,
        LexErrorKind::InvalidUnderscorePlacement,
        LexErrorKind::UnrecognizedCharacter,
        LexErrorKind::EmptyCharLiteral,
        LexErrorKind::InvalidTextBlockOpening,
    ];

    /// Short human-readable title.
    pub const fn title(self) -> &'static str {
        match self {
            LexErrorKind::UnterminatedString => "unclosed string literal",
            LexErrorKind::UnterminatedChar => "unclosed character literal",
            LexErrorKind::UnterminatedBlockComment => "unclosed comment",
            LexErrorKind::UnterminatedTextBlock => "unclosed text block",
            LexErrorKind::InvalidEscapeSequence => "illegal escape character",
            LexErrorKind::MalformedNumericLiteral => "malformed numeric literal",
            LexErrorKind::InvalidUnderscorePlacement => "illegal underscore",
            LexErrorKind::UnrecognizedCharacter => "illegal character",
            LexErrorKind::EmptyCharLiteral => "empty character literal",
            LexErrorKind::InvalidTextBlockOpening => "illegal text block open delimiter sequence",
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
