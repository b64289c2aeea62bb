//! Tokens and the trivia attached to them.
//!
//! A [`Token`] borrows its lexeme from the original source text, so
//! concatenating every token's leading trivia and lexeme in order gives back
//! the source byte-for-byte.

/// Declares a fieldless enum whose variants each have one fixed spelling.
macro_rules! word_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => $text:literal,)* }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $(
                #[doc = concat!("`", $text, "`")]
                $variant,
            )*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// Source spelling.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

mod flags;
mod keyword;
mod kind;
mod literal;
mod operator;

pub use flags::TokenFlags;
pub use keyword::{ContextualKeyword, Keyword};
pub use kind::TokenKind;
pub use literal::LiteralValue;
pub use operator::{Operator, Punctuator};

use std::fmt;

use smallvec::SmallVec;

use crate::{Position, Span};

/// Kind of a trivia run.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TriviaKind {
    /// Spaces, tabs, form feeds, and a trailing `\x1a`.
    Whitespace,
    /// One `\n`, `\r`, or `\r\n`.
    Newline,
    LineComment,
    BlockComment,
    DocComment,
}

impl TriviaKind {
    pub const fn is_comment(self) -> bool {
        matches!(
            self,
            TriviaKind::LineComment | TriviaKind::BlockComment | TriviaKind::DocComment
        )
    }
}

/// Non-semantic text attached before a token.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Trivia<'src> {
    pub kind: TriviaKind,
    pub span: Span,
    pub text: &'src str,
}

impl fmt::Debug for Trivia<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.text, self.span)
    }
}

/// Leading trivia of one token. Most tokens have at most a couple of runs.
pub type TriviaList<'src> = SmallVec<[Trivia<'src>; 2]>;

/// One classified unit of source text.
///
/// `span` is a byte range in the original source; `start` and `end` are the
/// same range as line/column/codepoint positions. `value` is present exactly
/// for literal kinds.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
    pub value: Option<LiteralValue>,
    pub span: Span,
    pub start: Position,
    pub end: Position,
    pub flags: TokenFlags,
    pub leading_trivia: TriviaList<'src>,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }

    /// Span from the first leading trivia through the end of the lexeme.
    pub fn full_span(&self) -> Span {
        self.leading_trivia
            .first()
            .map_or(self.span, |t| t.span.merge(self.span))
    }

    /// Append leading trivia text and the lexeme to `out`.
    pub fn write_source(&self, out: &mut String) {
        for trivia in &self.leading_trivia {
            out.push_str(trivia.text);
        }
        out.push_str(self.lexeme);
    }

    /// Comments attached as leading trivia.
    pub fn leading_comments(&self) -> impl Iterator<Item = &Trivia<'src>> {
        self.leading_trivia.iter().filter(|t| t.kind.is_comment())
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {}", self.kind, self.lexeme, self.span)?;
        if let Some(value) = &self.value {
            write!(f, " = {value:?}")?;
        }
        Ok(())
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Trivia;
    // kind (1, padded to 4) + span (8) + text (16)
    crate::static_assert_size!(Trivia<'static>, 32);
}

#[cfg(test)]
mod tests;
