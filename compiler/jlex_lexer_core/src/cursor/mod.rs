//! Byte cursor over a sentinel-terminated buffer.
//!
//! The cursor advances byte-by-byte. End of input is the sentinel (`0x00`)
//! at or past the source length; an interior NUL at `pos < source_len` is
//! ordinary (invalid) input, which [`is_eof()`](Cursor::is_eof) tells apart.
//!
//! Line and column are not tracked here. The lexer derives them from byte
//! offsets afterwards, which keeps the hot loop free of bookkeeping.

/// Returns the earliest of two optional positions.
///
/// Used to combine separate `memchr` searches when more needles are needed
/// than `memchr3` supports.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

#[inline]
#[allow(
    clippy::cast_possible_truncation,
    reason = "offsets are bounded by source_len, which fits in u32"
)]
fn as_u32(n: usize) -> u32 {
    n as u32
}

/// Cursor over a [`SourceBuffer`](crate::SourceBuffer).
///
/// [`Copy`], so a scanner can snapshot it cheaply.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    text: &'a str,
    /// Source + sentinel + padding.
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
}

impl<'a> Cursor<'a> {
    /// # Contract
    ///
    /// `buf` starts with the bytes of `text`, followed by at least
    /// [`LOOKAHEAD`](crate::source_buffer::LOOKAHEAD) zero bytes.
    pub(crate) fn new(text: &'a str, buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        Self {
            text,
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Byte at the current position; `0x00` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.peek_n(0)
    }

    #[inline]
    pub fn peek(&self) -> u8 {
        self.peek_n(1)
    }

    #[inline]
    pub fn peek2(&self) -> u8 {
        self.peek_n(2)
    }

    /// Byte `k` positions ahead. Reads past the padding yield `0x00`.
    #[inline]
    pub fn peek_n(&self, k: usize) -> u8 {
        self.buf.get(self.pos as usize + k).copied().unwrap_or(0)
    }

    /// `true` if the bytes at the cursor equal `bytes`.
    ///
    /// `bytes` must not contain `0x00`, so a match never extends into the
    /// sentinel.
    #[inline]
    pub fn starts_with(&self, bytes: &[u8]) -> bool {
        self.buf
            .get(self.pos as usize..)
            .is_some_and(|rest| rest.starts_with(bytes))
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// `true` at the sentinel, as opposed to an interior NUL.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Source text `start..end`. Both bounds must be char boundaries.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        &self.text[start as usize..end as usize]
    }

    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// The full char starting at the current position, if any.
    pub fn current_char(&self) -> Option<char> {
        self.text.get(self.pos as usize..)?.chars().next()
    }

    /// Advance past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = self.current_char().map_or(1, char::len_utf8);
        self.advance_n(as_u32(width));
    }

    /// Advance while `pred` holds for the current byte. `pred(0)` must be
    /// `false`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.pos < self.source_len && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance to the next `\n` or `\r`, or to end of input.
    pub fn eat_until_line_end(&mut self) {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        match memchr::memchr2(b'\n', b'\r', remaining) {
            Some(offset) => self.pos += as_u32(offset),
            None => self.pos = self.source_len,
        }
    }

    /// Advance past ordinary string content to the next byte that matters:
    /// `"`, `\`, `\n`, or `\r`. Returns that byte, or `0` at end of input.
    pub fn skip_to_string_delim(&mut self) -> u8 {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        let primary = memchr::memchr3(b'"', b'\\', b'\n', remaining);
        let cr = memchr::memchr(b'\r', remaining);
        if let Some(off) = earliest_of(primary, cr) {
            self.pos += as_u32(off);
            self.current()
        } else {
            self.pos = self.source_len;
            0
        }
    }

    /// Advance past text-block content to the next `"` or `\`. Returns that
    /// byte, or `0` at end of input.
    pub fn skip_to_text_block_delim(&mut self) -> u8 {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(off) = memchr::memchr2(b'"', b'\\', remaining) {
            self.pos += as_u32(off);
            self.current()
        } else {
            self.pos = self.source_len;
            0
        }
    }

    /// Advance past the first `*/` at or after the cursor. Returns `false`
    /// and moves to end of input if there is none.
    pub fn eat_through_block_comment_end(&mut self) -> bool {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(off) = memchr::memmem::find(remaining, b"*/") {
            self.pos += as_u32(off) + 2;
            true
        } else {
            self.pos = self.source_len;
            false
        }
    }

    /// Position of the next `needle` on the current line, if any.
    pub fn find_on_line(&self, needle: u8) -> Option<u32> {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        let stop = memchr::memchr3(needle, b'\n', b'\r', remaining)?;
        (remaining[stop] == needle).then(|| self.pos + as_u32(stop))
    }
}
