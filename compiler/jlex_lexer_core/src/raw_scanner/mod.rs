//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner runs over the unicode-translated text and never allocates.
//! It does not resolve keywords, validate escapes, or parse numeric values;
//! those are deferred to the cooking layer.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused method
//! that advances the cursor and returns `RawToken { tag, len }`. Operators
//! use a per-leading-byte candidate table ordered longest first, so `>>>=`
//! is always one token.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

type OpTable = &'static [(&'static [u8], RawTag)];

/// Operator and delimiter candidates for a leading byte, longest first.
fn operator_candidates(lead: u8) -> OpTable {
    match lead {
        b'>' => &[
            (b">>>=", RawTag::UShrAssign),
            (b">>>", RawTag::UShr),
            (b">>=", RawTag::ShrAssign),
            (b">>", RawTag::Shr),
            (b">=", RawTag::GreaterEqual),
            (b">", RawTag::Greater),
        ],
        b'<' => &[
            (b"<<=", RawTag::ShlAssign),
            (b"<<", RawTag::Shl),
            (b"<=", RawTag::LessEqual),
            (b"<", RawTag::Less),
        ],
        b'.' => &[(b"...", RawTag::Ellipsis), (b".", RawTag::Dot)],
        b'-' => &[
            (b"->", RawTag::Arrow),
            (b"--", RawTag::MinusMinus),
            (b"-=", RawTag::MinusAssign),
            (b"-", RawTag::Minus),
        ],
        b'+' => &[
            (b"++", RawTag::PlusPlus),
            (b"+=", RawTag::PlusAssign),
            (b"+", RawTag::Plus),
        ],
        b'&' => &[
            (b"&&", RawTag::AndAnd),
            (b"&=", RawTag::AmpAssign),
            (b"&", RawTag::Amp),
        ],
        b'|' => &[
            (b"||", RawTag::OrOr),
            (b"|=", RawTag::PipeAssign),
            (b"|", RawTag::Pipe),
        ],
        b'=' => &[(b"==", RawTag::EqualEqual), (b"=", RawTag::Assign)],
        b'!' => &[(b"!=", RawTag::BangEqual), (b"!", RawTag::Bang)],
        b':' => &[(b"::", RawTag::ColonColon), (b":", RawTag::Colon)],
        b'*' => &[(b"*=", RawTag::StarAssign), (b"*", RawTag::Star)],
        b'/' => &[(b"/=", RawTag::SlashAssign), (b"/", RawTag::Slash)],
        b'^' => &[(b"^=", RawTag::CaretAssign), (b"^", RawTag::Caret)],
        b'%' => &[(b"%=", RawTag::PercentAssign), (b"%", RawTag::Percent)],
        b'~' => &[(b"~", RawTag::Tilde)],
        b'?' => &[(b"?", RawTag::Question)],
        b'(' => &[(b"(", RawTag::LeftParen)],
        b')' => &[(b")", RawTag::RightParen)],
        b'{' => &[(b"{", RawTag::LeftBrace)],
        b'}' => &[(b"}", RawTag::RightBrace)],
        b'[' => &[(b"[", RawTag::LeftBracket)],
        b']' => &[(b"]", RawTag::RightBracket)],
        b';' => &[(b";", RawTag::Semicolon)],
        b',' => &[(b",", RawTag::Comma)],
        b'@' => &[(b"@", RawTag::At)],
        _ => &[],
    }
}

/// Allocation-free scanner over translated source text.
///
/// Produces one token at a time. Error conditions are encoded as `RawTag`
/// variants, not as `Result::Err`.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
    text_blocks: bool,
}

impl<'a> RawScanner<'a> {
    /// Scanner with text blocks enabled.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self {
            cursor,
            text_blocks: true,
        }
    }

    /// Enable or disable `"""` text blocks. When disabled, `"""` scans as an
    /// empty string followed by the start of another string.
    #[must_use]
    pub fn with_text_blocks(mut self, enabled: bool) -> Self {
        self.text_blocks = enabled;
        self
    }

    /// Current byte offset.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted,
    /// and keeps returning it on later calls.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        let tag = match self.cursor.current() {
            0 => self.nul(),
            b' ' | b'\t' | 0x0C => self.whitespace(),
            b'\r' | b'\n' => self.newline(),
            0x1A => self.substitute(),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'$' => self.identifier(),
            b'0'..=b'9' => self.number(),
            b'.' if self.cursor.peek().is_ascii_digit() => self.number(),
            b'"' => self.string(),
            b'\'' => self.char_literal(),
            b'/' => self.slash_or_comment(),
            0x80..=0xFF => self.non_ascii(),
            lead => self.operator(lead),
        };
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    // ─── EOF ───────────────────────────────────────────────────────

    fn nul(&mut self) -> RawTag {
        if self.cursor.is_eof() {
            RawTag::Eof
        } else {
            self.cursor.advance();
            RawTag::InvalidChar
        }
    }

    // ─── Whitespace & Newlines ─────────────────────────────────────

    fn whitespace(&mut self) -> RawTag {
        self.cursor.eat_while(|b| matches!(b, b' ' | b'\t' | 0x0C));
        RawTag::Whitespace
    }

    /// One line terminator; `\r\n` is a single newline.
    fn newline(&mut self) -> RawTag {
        if self.cursor.current() == b'\r' && self.cursor.peek() == b'\n' {
            self.cursor.advance();
        }
        self.cursor.advance();
        RawTag::Newline
    }

    /// ASCII SUB is permitted as the very last character of input.
    fn substitute(&mut self) -> RawTag {
        self.cursor.advance();
        if self.cursor.is_eof() {
            RawTag::Whitespace
        } else {
            RawTag::InvalidChar
        }
    }

    // ─── Comments ──────────────────────────────────────────────────

    fn slash_or_comment(&mut self) -> RawTag {
        match self.cursor.peek() {
            b'/' => {
                self.cursor.advance_n(2);
                self.cursor.eat_until_line_end();
                RawTag::LineComment
            }
            b'*' => {
                // `/**/` is an empty block comment, not a doc comment.
                let doc = self.cursor.peek2() == b'*' && self.cursor.peek_n(3) != b'/';
                self.cursor.advance_n(2);
                if !self.cursor.eat_through_block_comment_end() {
                    RawTag::UnterminatedBlockComment
                } else if doc {
                    RawTag::DocComment
                } else {
                    RawTag::BlockComment
                }
            }
            _ => self.operator(b'/'),
        }
    }

    // ─── Identifiers ───────────────────────────────────────────────

    fn identifier(&mut self) -> RawTag {
        self.cursor.advance();
        self.eat_ident_continue();
        RawTag::Ident
    }

    fn eat_ident_continue(&mut self) {
        loop {
            let b = self.cursor.current();
            if is_ident_continue(b) && !self.cursor.is_eof() {
                self.cursor.advance();
            } else if b >= 0x80 && self.cursor.current_char().is_some_and(is_java_ident_part) {
                self.cursor.advance_char();
            } else {
                break;
            }
        }
    }

    fn non_ascii(&mut self) -> RawTag {
        let is_start = self.cursor.current_char().is_some_and(is_java_ident_start);
        self.cursor.advance_char();
        if is_start {
            self.eat_ident_continue();
            RawTag::Ident
        } else {
            RawTag::InvalidChar
        }
    }

    // ─── Operators ─────────────────────────────────────────────────

    fn operator(&mut self, lead: u8) -> RawTag {
        for &(text, tag) in operator_candidates(lead) {
            if self.cursor.starts_with(text) {
                self.cursor.advance_n(u32::try_from(text.len()).unwrap_or(1));
                return tag;
            }
        }
        // `#`, `` ` ``, `\`, and control characters.
        self.cursor.advance();
        RawTag::InvalidChar
    }

    // ─── Numeric Literals ──────────────────────────────────────────

    /// Consume the maximal run of literal-looking characters: ASCII
    /// alphanumerics, `_`, `.`, and a sign directly after an exponent marker
    /// when a digit follows it.
    fn number(&mut self) -> RawTag {
        let hex = self.cursor.current() == b'0' && matches!(self.cursor.peek(), b'x' | b'X');
        loop {
            let b = self.cursor.current();
            if !(b.is_ascii_alphanumeric() || b == b'_' || b == b'.') {
                break;
            }
            self.cursor.advance();
            let exponent = if hex {
                matches!(b, b'p' | b'P')
            } else {
                matches!(b, b'e' | b'E')
            };
            if exponent
                && matches!(self.cursor.current(), b'+' | b'-')
                && self.cursor.peek().is_ascii_digit()
            {
                self.cursor.advance();
            }
        }
        RawTag::Number
    }

    // ─── String, Char & Text Block ─────────────────────────────────

    fn string(&mut self) -> RawTag {
        if self.text_blocks && self.cursor.peek() == b'"' && self.cursor.peek2() == b'"' {
            return self.text_block();
        }
        self.cursor.advance();
        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    self.cursor.advance();
                    return RawTag::String;
                }
                b'\\' => self.eat_escape(),
                // Line terminator or end of input: stop before it.
                _ => return RawTag::UnterminatedString,
            }
        }
    }

    fn text_block(&mut self) -> RawTag {
        self.cursor.advance_n(3);
        loop {
            match self.cursor.skip_to_text_block_delim() {
                b'"' if self.cursor.starts_with(b"\"\"\"") => {
                    self.cursor.advance_n(3);
                    return RawTag::TextBlock;
                }
                b'"' => self.cursor.advance(),
                b'\\' => {
                    self.cursor.advance();
                    if !self.cursor.is_eof() {
                        self.cursor.advance_char();
                    }
                }
                _ => return RawTag::UnterminatedTextBlock,
            }
        }
    }

    /// Character literal. A literal holding more than one character is
    /// scanned through its closing quote on the same line when there is one.
    fn char_literal(&mut self) -> RawTag {
        self.cursor.advance();
        match self.cursor.current() {
            b'\'' => {
                // `''`; the cooker reports it as empty.
                self.cursor.advance();
                return RawTag::Char;
            }
            b'\n' | b'\r' => return RawTag::UnterminatedChar,
            0 if self.cursor.is_eof() => return RawTag::UnterminatedChar,
            b'\\' => self.eat_escape(),
            _ => self.cursor.advance_char(),
        }
        if self.cursor.current() == b'\'' {
            self.cursor.advance();
            return RawTag::Char;
        }
        match self.cursor.find_on_line(b'\'') {
            Some(close) => self.cursor.advance_n(close + 1 - self.cursor.pos()),
            None => self.cursor.eat_until_line_end(),
        }
        RawTag::UnterminatedChar
    }

    /// Consume a backslash escape: the backslash plus one character, or up
    /// to three octal digits. A line terminator after the backslash is left
    /// for the caller.
    fn eat_escape(&mut self) {
        self.cursor.advance();
        match self.cursor.current() {
            b'\n' | b'\r' => {}
            0 if self.cursor.is_eof() => {}
            first @ b'0'..=b'7' => {
                self.cursor.advance();
                let max_more = if first <= b'3' { 2 } else { 1 };
                for _ in 0..max_more {
                    if matches!(self.cursor.current(), b'0'..=b'7') {
                        self.cursor.advance();
                    } else {
                        break;
                    }
                }
            }
            _ => self.cursor.advance_char(),
        }
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        (tok.tag != RawTag::Eof).then_some(tok)
    }
}

/// 256-byte lookup table for ASCII identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, `_`, and `$`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'$'
        );
        i += 1;
    }
    table
};

#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Currency symbols (general category Sc) outside ASCII.
fn is_currency_symbol(c: char) -> bool {
    matches!(c,
        '\u{A2}'..='\u{A5}'
        | '\u{58F}'
        | '\u{60B}'
        | '\u{7FE}'..='\u{7FF}'
        | '\u{9F2}'..='\u{9F3}'
        | '\u{9FB}'
        | '\u{AF1}'
        | '\u{BF9}'
        | '\u{E3F}'
        | '\u{17DB}'
        | '\u{20A0}'..='\u{20C0}'
        | '\u{A838}'
        | '\u{FDFC}'
        | '\u{FE69}'
        | '\u{FF04}'
        | '\u{FFE0}'..='\u{FFE1}'
        | '\u{FFE5}'..='\u{FFE6}'
    )
}

/// Connector punctuation (general category Pc) outside ASCII.
fn is_connector(c: char) -> bool {
    matches!(
        c,
        '\u{203F}' | '\u{2040}' | '\u{2054}' | '\u{FE33}' | '\u{FE34}' | '\u{FE4D}'..='\u{FE4F}' | '\u{FF3F}'
    )
}

/// Combining marks and format controls that may continue an identifier.
fn is_ident_extender(c: char) -> bool {
    matches!(c,
        '\u{300}'..='\u{36F}'
        | '\u{483}'..='\u{487}'
        | '\u{591}'..='\u{5BD}'
        | '\u{610}'..='\u{61A}'
        | '\u{64B}'..='\u{65F}'
        | '\u{900}'..='\u{903}'
        | '\u{93A}'..='\u{94F}'
        | '\u{1AB0}'..='\u{1AFF}'
        | '\u{1DC0}'..='\u{1DFF}'
        | '\u{200B}'..='\u{200F}'
        | '\u{202A}'..='\u{202E}'
        | '\u{2060}'..='\u{2064}'
        | '\u{20D0}'..='\u{20FF}'
        | '\u{FE00}'..='\u{FE0F}'
        | '\u{FE20}'..='\u{FE2F}'
        | '\u{FEFF}'
    )
}

/// Non-ASCII identifier start: letters, currency symbols, connectors.
fn is_java_ident_start(c: char) -> bool {
    c.is_alphabetic() || is_currency_symbol(c) || is_connector(c)
}

/// Non-ASCII identifier part: starts plus digits and extenders.
fn is_java_ident_part(c: char) -> bool {
    is_java_ident_start(c) || c.is_numeric() || is_ident_extender(c)
}

/// Tokenize a translated source string and collect all raw tokens.
///
/// Returns every token except the final `Eof`. For streaming access,
/// construct a `SourceBuffer` + `RawScanner` directly.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    RawScanner::new(buf.cursor()).collect()
}
