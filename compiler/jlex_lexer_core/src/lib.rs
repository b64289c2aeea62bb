//! Low-level Java tokenizer.
//!
//! Two stages, both allocation-light and free of any token model:
//!
//! 1. [`unicode_escape::translate`] rewrites `\uXXXX` escapes into the
//!    characters they denote and records an [`OffsetMap`] back to the
//!    original text.
//! 2. [`RawScanner`] walks the translated text through a [`Cursor`] and
//!    yields [`RawToken`]s: a [`RawTag`] plus a byte length.
//!
//! Keyword lookup, escape decoding, and numeric validation are left to the
//! cooking layer in `jlex_lexer`. Error conditions the scanner can see on
//! its own (unterminated literals, stray characters) are encoded as tags.

mod cursor;
mod offset_map;
mod raw_scanner;
mod source_buffer;
mod tag;
pub mod unicode_escape;

pub use cursor::Cursor;
pub use offset_map::{OffsetEntry, OffsetMap};
pub use raw_scanner::{tokenize, RawScanner};
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
pub use unicode_escape::{translate, EscapeIssue, Translation};
