//! Token cooking layer.
//!
//! Turns `(RawTag, text)` pairs from the raw scanner into [`TokenKind`]s and
//! decoded literal values:
//!
//! ```text
//! source → translate → RawScanner → (RawTag, len) → TokenCooker → TokenKind
//! ```
//!
//! Each `RawTag` category has one cooking path:
//! - **Operators/delimiters**: direct 1:1 mapping
//! - **Identifiers**: keyword, contextual keyword, or literal word lookup
//! - **Numbers**: radix, suffix, underscore, and range validation
//! - **Strings/chars/text blocks**: escape decoding and indentation stripping
//! - **Errors**: the scanner's verdict becomes a `CookError`
//!
//! Cooking never looks past the token it is given, so every call is
//! independent of the ones before it.

use jlex_ir::{LexErrorKind, LiteralValue, Operator, Punctuator, TokenKind};
use jlex_lexer_core::RawTag;

use crate::escape::unescape;
use crate::keywords::{self, Word};
use crate::numeric::cook_number;
use crate::text_block::cook_text_block;
use crate::LexerConfig;

/// A successfully cooked token.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Cooked {
    pub kind: TokenKind,
    pub value: Option<LiteralValue>,
    /// The word is a contextual keyword.
    pub contextual: bool,
}

impl Cooked {
    fn plain(kind: TokenKind) -> Self {
        Cooked {
            kind,
            value: None,
            contextual: false,
        }
    }

    fn literal(kind: TokenKind, value: LiteralValue) -> Self {
        Cooked {
            kind,
            value: Some(value),
            contextual: false,
        }
    }
}

/// The first problem found inside a token.
///
/// `offset` and `len` are bytes relative to the start of the token text.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct CookError {
    pub kind: LexErrorKind,
    pub offset: usize,
    pub len: usize,
}

impl CookError {
    /// An error covering the whole token.
    #[cold]
    fn whole(kind: LexErrorKind, text: &str) -> Self {
        CookError {
            kind,
            offset: 0,
            len: text.len(),
        }
    }
}

/// Cooks raw tokens under one [`LexerConfig`].
#[derive(Clone, Debug)]
pub(crate) struct TokenCooker {
    config: LexerConfig,
}

impl TokenCooker {
    pub(crate) fn new(config: LexerConfig) -> Self {
        TokenCooker { config }
    }

    /// Cook one raw token. `text` is its slice of the translated buffer.
    ///
    /// Whitespace and newlines are trivia and are never cooked.
    pub(crate) fn cook(&self, tag: RawTag, text: &str) -> Result<Cooked, CookError> {
        let op = |o| Ok(Cooked::plain(TokenKind::Operator(o)));
        let punct = |p| Ok(Cooked::plain(TokenKind::Punctuator(p)));

        match tag {
            RawTag::Ident => Ok(Self::cook_word(text)),
            RawTag::Number => cook_number(text, self.config)
                .map(|(kind, value)| Cooked::literal(kind, value))
                .map_err(|kind| CookError::whole(kind, text)),
            RawTag::String => Self::cook_string(text),
            RawTag::Char => Self::cook_char(text),
            RawTag::TextBlock => cook_text_block(text)
                .map(|s| Cooked::literal(TokenKind::TextBlockLiteral, LiteralValue::Str(s))),

            // Operators
            RawTag::Assign => op(Operator::Assign),
            RawTag::Greater => op(Operator::Greater),
            RawTag::Less => op(Operator::Less),
            RawTag::Bang => op(Operator::Bang),
            RawTag::Tilde => op(Operator::Tilde),
            RawTag::Question => op(Operator::Question),
            RawTag::Colon => op(Operator::Colon),
            RawTag::Arrow => op(Operator::Arrow),
            RawTag::EqualEqual => op(Operator::EqualEqual),
            RawTag::GreaterEqual => op(Operator::GreaterEqual),
            RawTag::LessEqual => op(Operator::LessEqual),
            RawTag::BangEqual => op(Operator::BangEqual),
            RawTag::AndAnd => op(Operator::AndAnd),
            RawTag::OrOr => op(Operator::OrOr),
            RawTag::PlusPlus => op(Operator::PlusPlus),
            RawTag::MinusMinus => op(Operator::MinusMinus),
            RawTag::Plus => op(Operator::Plus),
            RawTag::Minus => op(Operator::Minus),
            RawTag::Star => op(Operator::Star),
            RawTag::Slash => op(Operator::Slash),
            RawTag::Amp => op(Operator::Amp),
            RawTag::Pipe => op(Operator::Pipe),
            RawTag::Caret => op(Operator::Caret),
            RawTag::Percent => op(Operator::Percent),
            RawTag::Shl => op(Operator::Shl),
            RawTag::Shr => op(Operator::Shr),
            RawTag::UShr => op(Operator::UShr),
            RawTag::PlusAssign => op(Operator::PlusAssign),
            RawTag::MinusAssign => op(Operator::MinusAssign),
            RawTag::StarAssign => op(Operator::StarAssign),
            RawTag::SlashAssign => op(Operator::SlashAssign),
            RawTag::AmpAssign => op(Operator::AmpAssign),
            RawTag::PipeAssign => op(Operator::PipeAssign),
            RawTag::CaretAssign => op(Operator::CaretAssign),
            RawTag::PercentAssign => op(Operator::PercentAssign),
            RawTag::ShlAssign => op(Operator::ShlAssign),
            RawTag::ShrAssign => op(Operator::ShrAssign),
            RawTag::UShrAssign => op(Operator::UShrAssign),

            // Delimiters
            RawTag::LeftParen => punct(Punctuator::LParen),
            RawTag::RightParen => punct(Punctuator::RParen),
            RawTag::LeftBrace => punct(Punctuator::LBrace),
            RawTag::RightBrace => punct(Punctuator::RBrace),
            RawTag::LeftBracket => punct(Punctuator::LBracket),
            RawTag::RightBracket => punct(Punctuator::RBracket),
            RawTag::Semicolon => punct(Punctuator::Semicolon),
            RawTag::Comma => punct(Punctuator::Comma),
            RawTag::Dot => punct(Punctuator::Dot),
            RawTag::Ellipsis => punct(Punctuator::Ellipsis),
            RawTag::At => punct(Punctuator::At),
            RawTag::ColonColon => punct(Punctuator::ColonColon),

            // Comments kept as tokens
            RawTag::LineComment => Ok(Cooked::plain(TokenKind::LineComment)),
            RawTag::BlockComment => Ok(Cooked::plain(TokenKind::BlockComment)),
            RawTag::DocComment => Ok(Cooked::plain(TokenKind::DocComment)),

            // Scanner-detected errors
            RawTag::InvalidChar => Err(CookError::whole(LexErrorKind::UnrecognizedCharacter, text)),
            RawTag::UnterminatedString => {
                Err(CookError::whole(LexErrorKind::UnterminatedString, text))
            }
            RawTag::UnterminatedChar => Err(CookError::whole(LexErrorKind::UnterminatedChar, text)),
            RawTag::UnterminatedBlockComment => Err(CookError::whole(
                LexErrorKind::UnterminatedBlockComment,
                text,
            )),
            RawTag::UnterminatedTextBlock => {
                Err(CookError::whole(LexErrorKind::UnterminatedTextBlock, text))
            }

            RawTag::Whitespace | RawTag::Newline | RawTag::Eof => {
                Ok(Cooked::plain(TokenKind::EndOfFile))
            }
        }
    }

    fn cook_word(text: &str) -> Cooked {
        match keywords::lookup(text) {
            None => Cooked::plain(TokenKind::Identifier),
            Some(Word::Keyword(k)) => Cooked::plain(TokenKind::Keyword(k)),
            Some(Word::Contextual(c)) => Cooked {
                kind: TokenKind::ContextualKeyword(c),
                value: None,
                contextual: true,
            },
            Some(Word::Bool(b)) => {
                Cooked::literal(TokenKind::BooleanLiteral, LiteralValue::Bool(b))
            }
            Some(Word::Null) => Cooked::literal(TokenKind::NullLiteral, LiteralValue::Null),
        }
    }

    /// Quoted body between the first and last byte.
    fn body(text: &str) -> &str {
        text.get(1..text.len().saturating_sub(1)).unwrap_or_default()
    }

    fn cook_string(text: &str) -> Result<Cooked, CookError> {
        let value = unescape(Self::body(text), false).map_err(|e| CookError {
            kind: LexErrorKind::InvalidEscapeSequence,
            offset: e.offset + 1,
            len: e.len,
        })?;
        Ok(Cooked::literal(
            TokenKind::StringLiteral,
            LiteralValue::Str(value.into_owned()),
        ))
    }

    fn cook_char(text: &str) -> Result<Cooked, CookError> {
        let body = Self::body(text);
        if body.is_empty() {
            return Err(CookError::whole(LexErrorKind::EmptyCharLiteral, text));
        }
        let value = unescape(body, false).map_err(|e| CookError {
            kind: LexErrorKind::InvalidEscapeSequence,
            offset: e.offset + 1,
            len: e.len,
        })?;
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Cooked::literal(TokenKind::CharLiteral, LiteralValue::Char(c))),
            _ => Err(CookError::whole(LexErrorKind::UnterminatedChar, text)),
        }
    }
}
