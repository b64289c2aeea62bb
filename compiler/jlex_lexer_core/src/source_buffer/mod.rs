//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so the scanner detects end of input without explicit bounds checks. The
//! total size is rounded up to a 64-byte boundary with at least
//! [`LOOKAHEAD`] bytes of zero padding, which keeps every `peek_n` within
//! the longest operator (`>>>=`) in bounds.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Guaranteed zero bytes after the source content.
pub const LOOKAHEAD: usize = 4;

/// Sentinel-terminated copy of the (translated) source text.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer<'a> {
    text: &'a str,
    buf: Vec<u8>,
    source_len: u32,
}

impl<'a> SourceBuffer<'a> {
    /// Copy `text` into a padded, sentinel-terminated buffer.
    ///
    /// Sources longer than `u32::MAX` bytes saturate `len()`.
    pub fn new(text: &'a str) -> Self {
        let source_len = text.len();
        let padded_len = (source_len + LOOKAHEAD + CACHE_LINE - 1) & !(CACHE_LINE - 1);
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(text.as_bytes());
        Self {
            text,
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
        }
    }

    /// Source bytes without sentinel or padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self.text, &self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

#[cfg(test)]
mod tests;
