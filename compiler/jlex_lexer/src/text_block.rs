//! Text-block decoding.
//!
//! A text block's value is its content with incidental indentation removed:
//! line terminators are normalized to `\n`, the smallest indentation among
//! non-blank lines and the closing-delimiter line is stripped from every
//! line, trailing whitespace is dropped, and escapes are decoded last.

use jlex_ir::LexErrorKind;

use crate::cooker::CookError;
use crate::escape::{is_simple_escape, unescape};

const DELIM: &str = "\"\"\"";

/// Decode a complete text block, `"""` delimiters included.
///
/// Error offsets are relative to the start of `text`.
pub(crate) fn cook_text_block(text: &str) -> Result<String, CookError> {
    let content_start = opening_len(text).ok_or(CookError {
        kind: LexErrorKind::InvalidTextBlockOpening,
        offset: 0,
        len: DELIM.len(),
    })?;
    let content_end = text.len().saturating_sub(DELIM.len()).max(content_start);
    let content = &text[content_start..content_end];

    if let Some((offset, len)) = first_invalid_escape(content) {
        return Err(CookError {
            kind: LexErrorKind::InvalidEscapeSequence,
            offset: content_start + offset,
            len,
        });
    }

    let stripped = strip_indent(content);
    unescape(&stripped, true)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| CookError {
            kind: LexErrorKind::InvalidEscapeSequence,
            offset: content_start,
            len: e.len,
        })
}

/// Length of `"""`, the whitespace after it, and the line terminator.
fn opening_len(text: &str) -> Option<usize> {
    let rest = text.strip_prefix(DELIM)?;
    let after_ws = rest.trim_start_matches([' ', '\t', '\x0c']);
    let ws = rest.len() - after_ws.len();
    let terminator = if after_ws.starts_with("\r\n") {
        2
    } else if after_ws.starts_with(['\n', '\r']) {
        1
    } else {
        return None;
    };
    Some(DELIM.len() + ws + terminator)
}

/// Escape validity is checked before stripping so offsets point into the
/// source. A backslash followed only by whitespace up to a line terminator
/// is a line continuation once trailing whitespace is gone.
fn first_invalid_escape(content: &str) -> Option<(usize, usize)> {
    let mut i = 0;
    while let Some(found) = content[i..].find('\\') {
        let at = i + found;
        let rest = &content[at + 1..];
        let Some(next) = rest.chars().next() else {
            return Some((at, 1));
        };
        let valid = is_simple_escape(next)
            || next.is_digit(8)
            || matches!(next, '\n' | '\r')
            || (matches!(next, ' ' | '\t' | '\x0c')
                && rest
                    .trim_start_matches([' ', '\t', '\x0c'])
                    .starts_with(['\n', '\r']));
        if !valid {
            return Some((at, 1 + next.len_utf8()));
        }
        i = at + 1 + next.len_utf8();
    }
    None
}

fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

fn indent_of(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Remove incidental whitespace from raw text-block content.
///
/// The last line is the one holding the closing delimiter. It always counts
/// toward the common indentation; when blank it contributes only the final
/// `\n`.
pub(crate) fn strip_indent(content: &str) -> String {
    let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = normalized.split('\n').collect();
    let last = lines.len() - 1;

    let common = lines
        .iter()
        .enumerate()
        .filter(|&(i, line)| i == last || !is_blank(line))
        .map(|(i, line)| {
            if i == last && is_blank(line) {
                line.chars().count()
            } else {
                indent_of(line)
            }
        })
        .min()
        .unwrap_or(0);

    let mut out = String::with_capacity(normalized.len());
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if is_blank(line) {
            continue;
        }
        let body: String = line.chars().skip(common).collect();
        out.push_str(body.trim_end());
    }
    out
}

#[cfg(test)]
mod tests;
