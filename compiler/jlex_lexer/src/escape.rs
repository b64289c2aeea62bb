//! Escape sequence decoding for string, character, and text-block bodies.
//!
//! Recognized escapes: `\b \t \n \f \r \s \" \' \\`, octal `\0` through
//! `\377`, and (text blocks only) a backslash before a line terminator,
//! which joins the two lines.

use std::borrow::Cow;

/// An escape that is not one of the recognized forms.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct InvalidEscape {
    /// Byte offset of the backslash in the body.
    pub offset: usize,
    /// The backslash plus the character after it, if any.
    pub len: usize,
}

/// Escapes made of a backslash and one fixed character.
pub(crate) fn is_simple_escape(c: char) -> bool {
    matches!(c, 'b' | 't' | 'n' | 'f' | 'r' | 's' | '"' | '\'' | '\\')
}

/// Decode every escape in `body`.
///
/// Borrows `body` when it contains no backslash.
pub(crate) fn unescape(
    body: &str,
    line_continuation: bool,
) -> Result<Cow<'_, str>, InvalidEscape> {
    if !body.contains('\\') {
        return Ok(Cow::Borrowed(body));
    }

    let mut out = String::with_capacity(body.len());
    let mut chars = body.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some((_, next)) = chars.next() else {
            return Err(InvalidEscape { offset: i, len: 1 });
        };
        let decoded = match next {
            'b' => '\u{8}',
            't' => '\t',
            'n' => '\n',
            'f' => '\u{c}',
            'r' => '\r',
            's' => ' ',
            '"' => '"',
            '\'' => '\'',
            '\\' => '\\',
            '0'..='7' => {
                let mut value = next.to_digit(8).unwrap_or(0);
                let max_more = if next <= '3' { 2 } else { 1 };
                for _ in 0..max_more {
                    match chars.peek().and_then(|&(_, d)| d.to_digit(8)) {
                        Some(d) => {
                            value = value * 8 + d;
                            chars.next();
                        }
                        None => break,
                    }
                }
                // At most 0o377.
                char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER)
            }
            '\n' if line_continuation => continue,
            '\r' if line_continuation => {
                chars.next_if(|&(_, c)| c == '\n');
                continue;
            }
            other => {
                return Err(InvalidEscape {
                    offset: i,
                    len: 1 + other.len_utf8(),
                })
            }
        };
        out.push(decoded);
    }
    Ok(Cow::Owned(out))
}
