//! Token kinds.

use std::fmt;

use super::{ContextualKeyword, Keyword, Operator, Punctuator};
use crate::LexErrorKind;

/// Classification of one token.
///
/// Literal kinds carry their decoded value on the `Token`, not here, so the
/// kind stays `Copy` and small.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    Keyword(Keyword),
    ContextualKeyword(ContextualKeyword),
    Identifier,
    IntegerLiteral,
    LongLiteral,
    FloatLiteral,
    DoubleLiteral,
    BooleanLiteral,
    CharLiteral,
    StringLiteral,
    TextBlockLiteral,
    NullLiteral,
    Operator(Operator),
    Punctuator(Punctuator),
    LineComment,
    BlockComment,
    DocComment,
    EndOfFile,
    Invalid(LexErrorKind),
}

impl TokenKind {
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntegerLiteral
                | TokenKind::LongLiteral
                | TokenKind::FloatLiteral
                | TokenKind::DoubleLiteral
                | TokenKind::BooleanLiteral
                | TokenKind::CharLiteral
                | TokenKind::StringLiteral
                | TokenKind::TextBlockLiteral
                | TokenKind::NullLiteral
        )
    }

    pub const fn is_comment(self) -> bool {
        matches!(
            self,
            TokenKind::LineComment | TokenKind::BlockComment | TokenKind::DocComment
        )
    }

    pub const fn is_invalid(self) -> bool {
        matches!(self, TokenKind::Invalid(_))
    }

    /// Fixed spelling for keyword, operator, and punctuator kinds.
    pub const fn fixed_text(self) -> Option<&'static str> {
        match self {
            TokenKind::Keyword(kw) => Some(kw.as_str()),
            TokenKind::ContextualKeyword(kw) => Some(kw.as_str()),
            TokenKind::Operator(op) => Some(op.as_str()),
            TokenKind::Punctuator(p) => Some(p.as_str()),
            _ => None,
        }
    }

    /// Human-readable name for error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Keyword(kw) => kw.as_str(),
            TokenKind::ContextualKeyword(kw) => kw.as_str(),
            TokenKind::Operator(op) => op.as_str(),
            TokenKind::Punctuator(p) => p.as_str(),
            TokenKind::Identifier => "identifier",
            TokenKind::IntegerLiteral => "integer literal",
            TokenKind::LongLiteral => "long literal",
            TokenKind::FloatLiteral => "float literal",
            TokenKind::DoubleLiteral => "double literal",
            TokenKind::BooleanLiteral => "boolean literal",
            TokenKind::CharLiteral => "character literal",
            TokenKind::StringLiteral => "string literal",
            TokenKind::TextBlockLiteral => "text block",
            TokenKind::NullLiteral => "null",
            TokenKind::LineComment => "line comment",
            TokenKind::BlockComment => "block comment",
            TokenKind::DocComment => "doc comment",
            TokenKind::EndOfFile => "end of file",
            TokenKind::Invalid(_) => "invalid token",
        }
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(kw) => write!(f, "Keyword({kw})"),
            TokenKind::ContextualKeyword(kw) => write!(f, "ContextualKeyword({kw})"),
            TokenKind::Operator(op) => write!(f, "Operator({op})"),
            TokenKind::Punctuator(p) => write!(f, "Punctuator({p})"),
            TokenKind::Invalid(kind) => write!(f, "Invalid({kind:?})"),
            TokenKind::Identifier => f.write_str("Identifier"),
            TokenKind::IntegerLiteral => f.write_str("IntegerLiteral"),
            TokenKind::LongLiteral => f.write_str("LongLiteral"),
            TokenKind::FloatLiteral => f.write_str("FloatLiteral"),
            TokenKind::DoubleLiteral => f.write_str("DoubleLiteral"),
            TokenKind::BooleanLiteral => f.write_str("BooleanLiteral"),
            TokenKind::CharLiteral => f.write_str("CharLiteral"),
            TokenKind::StringLiteral => f.write_str("StringLiteral"),
            TokenKind::TextBlockLiteral => f.write_str("TextBlockLiteral"),
            TokenKind::NullLiteral => f.write_str("NullLiteral"),
            TokenKind::LineComment => f.write_str("LineComment"),
            TokenKind::BlockComment => f.write_str("BlockComment"),
            TokenKind::DocComment => f.write_str("DocComment"),
            TokenKind::EndOfFile => f.write_str("EndOfFile"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
