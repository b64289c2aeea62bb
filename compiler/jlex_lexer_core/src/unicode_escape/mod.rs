//! Unicode-escape translation.
//!
//! Java translates `\uXXXX` sequences before any other lexical analysis, so
//! an escape can spell any character anywhere: inside identifiers, string
//! literals, comments, even line terminators. [`translate`] performs that
//! pass once over the whole source and returns the rewritten text along
//! with an [`OffsetMap`] for reporting positions in original coordinates.
//!
//! # Eligibility
//!
//! A backslash starts an escape only when it is preceded by an even number
//! of contiguous backslashes. `\\u0041` is a backslash escape followed by
//! the text `u0041`, not a unicode escape.
//!
//! # Malformed escapes
//!
//! An eligible `\u` not followed by four hex digits is recorded as an
//! [`EscapeIssue`] and copied through unchanged. The pass never fails.

use std::borrow::Cow;

use crate::offset_map::{OffsetEntry, OffsetMap};

/// Result of the unicode-escape pass.
#[derive(Clone, Debug)]
pub struct Translation<'a> {
    /// Translated text. Borrows the source when it contained no escapes.
    pub text: Cow<'a, str>,
    pub offsets: OffsetMap,
    pub issues: Vec<EscapeIssue>,
}

impl Translation<'_> {
    /// `true` if at least one escape was replaced.
    pub fn has_escapes(&self) -> bool {
        !self.offsets.is_empty()
    }
}

/// A malformed `\u` escape left untranslated.
///
/// `len` covers the backslash, the `u` run, and any hex digits that were
/// present. The same bytes appear at `translated` in the translated text.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct EscapeIssue {
    pub original: u32,
    pub translated: u32,
    pub len: u32,
}

enum Escape {
    /// A UTF-16 code unit and the byte just past the escape.
    Unit { unit: u16, end: usize },
    /// Byte where scanning stopped.
    Malformed { end: usize },
}

#[inline]
fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Scan an escape whose backslash is at `at` and is followed by `u`.
fn scan_escape(bytes: &[u8], at: usize) -> Escape {
    let mut i = at + 1;
    while bytes.get(i) == Some(&b'u') {
        i += 1;
    }
    let mut value: u32 = 0;
    for _ in 0..4 {
        let Some(digit) = bytes.get(i).and_then(|&b| char::from(b).to_digit(16)) else {
            return Escape::Malformed { end: i };
        };
        value = (value << 4) | digit;
        i += 1;
    }
    // Four hex digits always fit.
    let unit = u16::try_from(value).unwrap_or(u16::MAX);
    Escape::Unit { unit, end: i }
}

/// Decode `unit`, pairing a high surrogate with a directly following
/// low-surrogate escape. Returns the char and the byte past the escape.
fn decode(bytes: &[u8], unit: u16, end: usize) -> (char, usize) {
    if (0xD800..0xDC00).contains(&unit)
        && bytes.get(end) == Some(&b'\\')
        && bytes.get(end + 1) == Some(&b'u')
    {
        if let Escape::Unit {
            unit: low,
            end: low_end,
        } = scan_escape(bytes, end)
        {
            if (0xDC00..0xE000).contains(&low) {
                let scalar = 0x1_0000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
                if let Some(c) = char::from_u32(scalar) {
                    return (c, low_end);
                }
            }
        }
    }
    // Lone surrogates have no scalar value.
    let c = char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER);
    (c, end)
}

/// Translate every eligible `\uXXXX` escape in `source`.
pub fn translate(source: &str) -> Translation<'_> {
    let bytes = source.as_bytes();
    let mut out: Option<String> = None;
    let mut offsets = OffsetMap::new();
    let mut issues = Vec::new();
    // Source bytes before `copied` are already in `out`.
    let mut copied = 0;
    let mut search = 0;

    while let Some(rel) = memchr::memchr(b'\\', &bytes[search..]) {
        let run_start = search + rel;
        let mut run_end = run_start + 1;
        while bytes.get(run_end) == Some(&b'\\') {
            run_end += 1;
        }
        search = run_end;

        // Only the last backslash of a run can precede `u`.
        let last = run_end - 1;
        if (last - run_start) % 2 != 0 || bytes.get(run_end) != Some(&b'u') {
            continue;
        }

        match scan_escape(bytes, last) {
            Escape::Unit { unit, end } => {
                let (c, end) = decode(bytes, unit, end);
                let text = out.get_or_insert_with(|| String::with_capacity(source.len()));
                text.push_str(&source[copied..last]);
                let translated = text.len();
                text.push(c);
                offsets.push(OffsetEntry {
                    translated: to_u32(translated),
                    original: to_u32(last),
                    translated_len: to_u32(c.len_utf8()),
                    original_len: to_u32(end - last),
                });
                copied = end;
                search = end;
            }
            Escape::Malformed { end } => {
                let translated = out.as_ref().map_or(last, |t| t.len() + (last - copied));
                issues.push(EscapeIssue {
                    original: to_u32(last),
                    translated: to_u32(translated),
                    len: to_u32(end - last),
                });
                search = end;
            }
        }
    }

    let text = match out {
        Some(mut text) => {
            text.push_str(&source[copied..]);
            Cow::Owned(text)
        }
        None => Cow::Borrowed(source),
    };
    Translation {
        text,
        offsets,
        issues,
    }
}

#[cfg(test)]
mod tests;
