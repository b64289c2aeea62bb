//! Line/column lookup over original source text.
//!
//! [`LineIndex`] pre-computes the start of every line so a byte offset can
//! be turned into a [`Position`] with a binary search. Line terminators are
//! `\n`, `\r`, and `\r\n`; the pair counts as a single break.
//!
//! Columns and the `offset` field of a position are counted in codepoints,
//! not bytes.

use std::fmt;

/// A location in the original source.
///
/// `line` and `column` are 1-based. `offset` is the 0-based codepoint index
/// from the start of the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub offset: u32,
}

impl Position {
    /// Position of the first character of a source.
    pub const START: Position = Position {
        line: 1,
        column: 1,
        offset: 0,
    };

    #[inline]
    pub const fn new(line: u32, column: u32, offset: u32) -> Self {
        Position {
            line,
            column,
            offset,
        }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}@{}", self.line, self.column, self.offset)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Start of one line: byte offset and codepoint offset.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct LineStart {
    byte: u32,
    char: u32,
}

/// Pre-computed line start table for O(log L) position lookup.
///
/// # Example
///
/// ```
/// use jlex_ir::{LineIndex, Position};
///
/// let source = "int a;\r\nint b;\rint c;";
/// let index = LineIndex::build(source);
///
/// assert_eq!(index.position(source, 0), Position::new(1, 1, 0));
/// assert_eq!(index.position(source, 8), Position::new(2, 1, 8));
/// assert_eq!(index.position(source, 15), Position::new(3, 1, 15));
/// ```
#[derive(Clone, Debug)]
pub struct LineIndex {
    lines: Vec<LineStart>,
    /// When the source is pure ASCII, codepoint offsets equal byte offsets.
    ascii: bool,
}

impl LineIndex {
    /// Build the table with a single pass over `source`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "sources are limited to u32::MAX bytes by the lexer"
    )]
    pub fn build(source: &str) -> Self {
        let bytes = source.as_bytes();
        let ascii = source.is_ascii();
        let mut lines = vec![LineStart { byte: 0, char: 0 }];
        let mut chars: u32 = 0;
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            // Continuation bytes do not start a codepoint.
            if b & 0xC0 != 0x80 {
                chars += 1;
            }
            i += 1;
            let is_break = match b {
                b'\n' => true,
                b'\r' => bytes.get(i) != Some(&b'\n'),
                _ => false,
            };
            if is_break {
                lines.push(LineStart {
                    byte: i as u32,
                    char: chars,
                });
            }
        }
        LineIndex { lines, ascii }
    }

    /// Number of lines in the source. An empty source has one line.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// 1-based line number containing the byte `offset`.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "line count never exceeds source length"
    )]
    pub fn line_of(&self, offset: u32) -> u32 {
        let idx = match self.lines.binary_search_by_key(&offset, |l| l.byte) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        idx as u32 + 1
    }

    /// Convert a byte offset in `source` into a [`Position`].
    ///
    /// Offsets past the end of the source clamp to the end. `source` must be
    /// the text this index was built from.
    pub fn position(&self, source: &str, offset: u32) -> Position {
        let offset = offset.min(u32::try_from(source.len()).unwrap_or(u32::MAX));
        let line = self.line_of(offset);
        let start = self.lines[(line - 1) as usize];
        let column_chars = if self.ascii {
            offset - start.byte
        } else {
            let text = source.get(start.byte as usize..offset as usize).unwrap_or("");
            u32::try_from(text.chars().count()).unwrap_or(u32::MAX - 1)
        };
        Position {
            line,
            column: column_chars + 1,
            offset: start.char + column_chars,
        }
    }

    /// Byte offset of the start of a 1-based line.
    pub fn line_start(&self, line: u32) -> Option<u32> {
        let idx = line.checked_sub(1)?;
        self.lines.get(idx as usize).map(|l| l.byte)
    }

    /// Text of a 1-based line, without its terminator.
    pub fn line_text<'s>(&self, source: &'s str, line: u32) -> Option<&'s str> {
        let start = self.line_start(line)? as usize;
        let end = self
            .line_start(line + 1)
            .map_or(source.len(), |next| next as usize);
        let text = source.get(start..end)?;
        Some(text.trim_end_matches(['\n', '\r']))
    }
}

#[cfg(test)]
mod tests;
