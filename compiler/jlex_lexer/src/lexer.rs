//! The token stream producer.
//!
//! [`Lexer`] runs the unicode-escape pass and the raw scan when it is
//! created, then cooks one token per `next()` call. Whitespace and newline
//! runs (and comments, when configured) fold into the following token's
//! `leading_trivia`; whatever trails the last token lands on `EndOfFile`.
//!
//! All spans, positions, lexemes, and trivia text refer to the original
//! source. The translated buffer is only used for classification and
//! literal decoding.

use std::iter::FusedIterator;

use jlex_ir::{
    LexErrorKind, LineIndex, Position, Span, Token, TokenFlags, TokenKind, Trivia, TriviaKind,
    TriviaList,
};
use jlex_lexer_core::{
    translate, EscapeIssue, RawScanner, RawTag, RawToken, SourceBuffer, Translation,
};

use crate::cooker::{CookError, Cooked, TokenCooker};
use crate::{LexError, LexOutput, LexerConfig};

#[inline]
fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// The reported problem of one token, in translated byte offsets.
#[derive(Copy, Clone, Debug)]
struct Fault {
    kind: LexErrorKind,
    start: u32,
    end: u32,
}

impl Fault {
    fn cooked(err: CookError, token_start: u32) -> Self {
        let start = token_start + to_u32(err.offset);
        Fault {
            kind: err.kind,
            start,
            end: start + to_u32(err.len),
        }
    }

    /// The issue's extent, cut at the end of the token that claims it.
    fn escape(issue: EscapeIssue, token_end: u32) -> Self {
        Fault {
            kind: LexErrorKind::InvalidEscapeSequence,
            start: issue.translated,
            end: (issue.translated + issue.len).min(token_end),
        }
    }
}

/// Lazy, pull-based token stream over one source text.
///
/// The stream always ends with a single [`TokenKind::EndOfFile`] token and
/// is fused after it. Errors are collected as tokens are produced; see
/// [`Lexer::errors`].
///
/// ```
/// use jlex_ir::TokenKind;
/// use jlex_lexer::Lexer;
///
/// let kinds: Vec<_> = Lexer::new("x >>>= 1;").map(|t| t.kind).collect();
/// assert_eq!(kinds.len(), 5);
/// assert_eq!(kinds[4], TokenKind::EndOfFile);
/// ```
pub struct Lexer<'src> {
    source: &'src str,
    config: LexerConfig,
    cooker: TokenCooker,
    translation: Translation<'src>,
    raw: Vec<RawToken>,
    line_index: LineIndex,
    /// Next raw token.
    idx: usize,
    /// Translated byte offset of `raw[idx]`.
    pos: u32,
    /// First pre-pass issue not yet claimed by a token.
    issue_idx: usize,
    /// Only trivia since the last line terminator or the start of input.
    at_line_start: bool,
    /// The previous token was a comment.
    prev_comment: bool,
    finished: bool,
    errors: Vec<LexError>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    pub fn with_config(source: &'src str, config: LexerConfig) -> Self {
        let translation = translate(source);
        let raw: Vec<RawToken> = {
            let buffer = SourceBuffer::new(&translation.text);
            RawScanner::new(buffer.cursor())
                .with_text_blocks(config.allow_text_blocks)
                .collect()
        };
        tracing::trace!(
            raw_tokens = raw.len(),
            escapes = translation.offsets.entries().len(),
            "scanned"
        );
        Lexer {
            source,
            config,
            cooker: TokenCooker::new(config),
            translation,
            raw,
            line_index: LineIndex::build(source),
            idx: 0,
            pos: 0,
            issue_idx: 0,
            at_line_start: true,
            prev_comment: false,
            finished: false,
            errors: Vec::new(),
        }
    }

    /// Rewind to the first token. Collected errors are discarded.
    pub fn restart(&mut self) {
        self.idx = 0;
        self.pos = 0;
        self.issue_idx = 0;
        self.at_line_start = true;
        self.prev_comment = false;
        self.finished = false;
        self.errors.clear();
    }

    /// Errors found in the tokens produced so far, in source order.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Drain the remaining tokens and collect them with every error.
    pub fn tokenize(mut self) -> LexOutput<'src> {
        let tokens: Vec<Token<'src>> = self.by_ref().collect();
        LexOutput {
            tokens,
            errors: self.errors,
        }
    }

    fn advance(&mut self, raw: RawToken) -> (u32, u32) {
        let start = self.pos;
        self.idx += 1;
        self.pos = start + raw.len;
        (start, self.pos)
    }

    /// First unclaimed pre-pass issue inside `start..end`.
    fn pending_issue(&self, start: u32, end: u32) -> Option<EscapeIssue> {
        self.translation.issues[self.issue_idx..]
            .iter()
            .find(|i| i.translated >= start)
            .filter(|i| i.translated < end)
            .copied()
    }

    /// Claim every issue up to `end`, returning the first one inside the
    /// token. Only the first problem in a token is reported.
    fn take_issue(&mut self, start: u32, end: u32) -> Option<EscapeIssue> {
        let first = self.pending_issue(start, end);
        let issues = &self.translation.issues;
        while issues.get(self.issue_idx).is_some_and(|i| i.translated < end) {
            self.issue_idx += 1;
        }
        first
    }

    fn trivia_kind(&self, raw: RawToken) -> Option<TriviaKind> {
        let kind = match raw.tag {
            RawTag::Whitespace => TriviaKind::Whitespace,
            RawTag::Newline => TriviaKind::Newline,
            RawTag::LineComment => TriviaKind::LineComment,
            RawTag::BlockComment => TriviaKind::BlockComment,
            RawTag::DocComment => TriviaKind::DocComment,
            _ => return None,
        };
        // A comment holding a malformed escape stays a token so it can
        // carry the error.
        if kind.is_comment()
            && (!self.config.comments_as_trivia
                || self.pending_issue(self.pos, self.pos + raw.len).is_some())
        {
            return None;
        }
        Some(kind)
    }

    fn original_span(&self, start: u32, end: u32) -> Span {
        let offsets = &self.translation.offsets;
        Span::new(offsets.to_original(start), offsets.to_original(end))
    }

    fn position_at(&self, offset: u32) -> Position {
        self.line_index.position(self.source, offset)
    }

    fn text(&self, span: Span) -> &'src str {
        let source = self.source;
        &source[span.to_range()]
    }

    fn trivia(&self, kind: TriviaKind, start: u32, end: u32) -> Trivia<'src> {
        let span = self.original_span(start, end);
        Trivia {
            kind,
            span,
            text: self.text(span),
        }
    }

    fn report(&mut self, fault: Fault, first_char: Option<char>) {
        let span = self.original_span(fault.start, fault.end);
        let position = self.position_at(span.start);
        let error = match (fault.kind, first_char) {
            (LexErrorKind::UnrecognizedCharacter, Some(ch)) => {
                LexError::unrecognized_character(ch, span, position)
            }
            (kind, _) => {
                let len = to_u32(self.text(span).chars().count());
                LexError::new(kind, span, position, len)
            }
        };
        tracing::debug!(%error, "lexical error");
        self.errors.push(error);
    }

    fn cook(
        &mut self,
        raw: RawToken,
        mut flags: TokenFlags,
        trivia: TriviaList<'src>,
    ) -> Token<'src> {
        let (start, end) = self.advance(raw);
        let text = &self.translation.text[start as usize..end as usize];
        let first_char = text.chars().next();
        let cooked = self.cooker.cook(raw.tag, text);

        let outcome: Result<Cooked, Fault> = match (cooked, self.take_issue(start, end)) {
            (Err(e), Some(issue)) if start + to_u32(e.offset) < issue.translated => {
                Err(Fault::cooked(e, start))
            }
            (_, Some(issue)) => Err(Fault::escape(issue, end)),
            (Err(e), None) => Err(Fault::cooked(e, start)),
            (Ok(cooked), None) => Ok(cooked),
        };

        if self.translation.offsets.has_escape_in(start, end) {
            flags |= TokenFlags::UNICODE_ESCAPED;
        }
        let (kind, value) = match outcome {
            Ok(cooked) => {
                if cooked.contextual {
                    flags |= TokenFlags::CONTEXTUAL_KW;
                }
                (cooked.kind, cooked.value)
            }
            Err(fault) => {
                self.report(fault, first_char);
                flags |= TokenFlags::HAS_ERROR;
                (TokenKind::Invalid(fault.kind), None)
            }
        };
        self.prev_comment = kind.is_comment();

        let span = self.original_span(start, end);
        Token {
            kind,
            lexeme: self.text(span),
            value,
            span,
            start: self.position_at(span.start),
            end: self.position_at(span.end),
            flags,
            leading_trivia: trivia,
        }
    }

    fn end_of_file(&mut self, flags: TokenFlags, trivia: TriviaList<'src>) -> Token<'src> {
        self.finished = true;
        let end = to_u32(self.source.len());
        let position = self.position_at(end);
        Token {
            kind: TokenKind::EndOfFile,
            lexeme: "",
            value: None,
            span: Span::point(end),
            start: position,
            end: position,
            flags,
            leading_trivia: trivia,
        }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        if self.finished {
            return None;
        }

        let mut flags = TokenFlags::empty();
        if self.prev_comment {
            flags |= TokenFlags::COMMENT_BEFORE;
        }
        let mut trivia = TriviaList::new();
        while let Some(&raw) = self.raw.get(self.idx) {
            let Some(kind) = self.trivia_kind(raw) else {
                break;
            };
            let (start, end) = self.advance(raw);
            match kind {
                TriviaKind::Whitespace => flags |= TokenFlags::SPACE_BEFORE,
                TriviaKind::Newline => {
                    flags |= TokenFlags::NEWLINE_BEFORE;
                    self.at_line_start = true;
                }
                TriviaKind::LineComment | TriviaKind::BlockComment | TriviaKind::DocComment => {
                    flags |= TokenFlags::COMMENT_BEFORE;
                }
            }
            trivia.push(self.trivia(kind, start, end));
        }
        if self.at_line_start {
            flags |= TokenFlags::LINE_START;
            self.at_line_start = false;
        }

        let token = match self.raw.get(self.idx).copied() {
            Some(raw) => self.cook(raw, flags, trivia),
            None => self.end_of_file(flags, trivia),
        };
        tracing::trace!(kind = ?token.kind, span = %token.span, "token");
        Some(token)
    }
}

impl FusedIterator for Lexer<'_> {}
