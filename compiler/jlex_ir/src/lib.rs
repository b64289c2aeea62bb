//! jlex IR - shared lexical types.
//!
//! This crate holds the data the lexer hands to its consumers:
//! - [`Span`] byte ranges and [`Position`] line/column/codepoint locations
//! - [`LineIndex`] for converting byte offsets into positions
//! - [`Token`], [`TokenKind`], and the keyword/operator/punctuator tables
//! - [`LiteralValue`] decoded literal payloads
//! - [`Trivia`] and [`TokenFlags`] describing what precedes a token
//!
//! Every offset stored here refers to the original source text, before
//! unicode-escape translation.
//!
//! Types that contain floats store them as bits for `Eq`/`Hash`.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod error_kind;
mod line_index;
mod span;
mod token;

pub use error_kind::LexErrorKind;
pub use line_index::{LineIndex, Position};
pub use span::{Span, SpanError};
pub use token::{
    ContextualKeyword, Keyword, LiteralValue, Operator, Punctuator, Token, TokenFlags, TokenKind,
    Trivia, TriviaKind, TriviaList,
};
