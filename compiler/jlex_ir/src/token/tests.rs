use super::*;
use crate::LexErrorKind;
use pretty_assertions::assert_eq;

fn trivia(kind: TriviaKind, start: u32, text: &str) -> Trivia<'_> {
    let end = start + u32::try_from(text.len()).unwrap_or(u32::MAX);
    Trivia {
        kind,
        span: Span::new(start, end),
        text,
    }
}

fn ident<'a>(lexeme: &'a str, start: u32, leading: &[Trivia<'a>]) -> Token<'a> {
    let end = start + u32::try_from(lexeme.len()).unwrap_or(u32::MAX);
    Token {
        kind: TokenKind::Identifier,
        lexeme,
        value: None,
        span: Span::new(start, end),
        start: Position::new(1, start + 1, start),
        end: Position::new(1, end + 1, end),
        flags: TokenFlags::empty(),
        leading_trivia: leading.iter().copied().collect(),
    }
}

// === Tables ===

#[test]
fn reserved_table_has_fifty_one_words() {
    assert_eq!(Keyword::ALL.len(), 51);
    assert_eq!(ContextualKeyword::ALL.len(), 16);
}

#[test]
fn spellings_are_unique() {
    let mut words: Vec<&str> = Keyword::ALL.iter().map(|k| k.as_str()).collect();
    words.extend(ContextualKeyword::ALL.iter().map(|k| k.as_str()));
    let before = words.len();
    words.sort_unstable();
    words.dedup();
    assert_eq!(words.len(), before);
}

#[test]
fn operator_spellings() {
    assert_eq!(Operator::UShrAssign.as_str(), ">>>=");
    assert_eq!(Operator::Arrow.to_string(), "->");
    assert_eq!(Punctuator::ColonColon.as_str(), "::");
    assert_eq!(Punctuator::Ellipsis.as_str(), "...");
    assert_eq!(Operator::ALL.len(), 38);
    assert_eq!(Punctuator::ALL.len(), 12);
}

#[test]
fn fixed_text_only_for_fixed_kinds() {
    assert_eq!(TokenKind::Keyword(Keyword::Class).fixed_text(), Some("class"));
    assert_eq!(
        TokenKind::ContextualKeyword(ContextualKeyword::Record).fixed_text(),
        Some("record")
    );
    assert_eq!(TokenKind::Identifier.fixed_text(), None);
    assert_eq!(TokenKind::StringLiteral.fixed_text(), None);
}

// === Kind predicates ===

#[test]
fn kind_predicates() {
    assert!(TokenKind::TextBlockLiteral.is_literal());
    assert!(TokenKind::NullLiteral.is_literal());
    assert!(!TokenKind::Identifier.is_literal());
    assert!(TokenKind::DocComment.is_comment());
    assert!(TokenKind::Invalid(LexErrorKind::UnterminatedString).is_invalid());
    assert!(!TokenKind::EndOfFile.is_invalid());
}

#[test]
fn kind_debug_names_payload() {
    assert_eq!(
        format!("{:?}", TokenKind::Operator(Operator::Shr)),
        "Operator(>>)"
    );
    assert_eq!(
        format!("{:?}", TokenKind::Invalid(LexErrorKind::MalformedNumericLiteral)),
        "Invalid(MalformedNumericLiteral)"
    );
}

// === Literal values ===

#[test]
fn literal_value_accessors() {
    assert_eq!(LiteralValue::Int(255).as_integer(), Some(255));
    assert_eq!(LiteralValue::Long(7).as_integer(), Some(7));
    assert_eq!(LiteralValue::double(1.5).as_f64(), Some(1.5));
    assert_eq!(LiteralValue::float(0.5).as_f64(), Some(0.5));
    assert_eq!(LiteralValue::Str("hi".into()).as_str(), Some("hi"));
    assert_eq!(LiteralValue::Char('x').as_char(), Some('x'));
    assert_eq!(LiteralValue::Null.as_integer(), None);
}

#[test]
fn literal_value_equality_uses_bits() {
    assert_eq!(LiteralValue::double(f64::NAN), LiteralValue::double(f64::NAN));
    assert_ne!(LiteralValue::double(0.0), LiteralValue::double(-0.0));
}

// === Token ===

#[test]
fn write_source_concatenates_trivia_then_lexeme() {
    let tok = ident(
        "foo",
        4,
        &[
            trivia(TriviaKind::LineComment, 0, "//x"),
            trivia(TriviaKind::Newline, 3, "\n"),
        ],
    );
    let mut out = String::new();
    tok.write_source(&mut out);
    assert_eq!(out, "//x\nfoo");
    assert_eq!(tok.full_span(), Span::new(0, 7));
    assert_eq!(tok.leading_comments().count(), 1);
}

#[test]
fn full_span_without_trivia_is_span() {
    let tok = ident("a", 3, &[]);
    assert_eq!(tok.full_span(), tok.span);
    assert!(!tok.is_eof());
}

#[test]
fn flags_helpers() {
    let flags = TokenFlags::SPACE_BEFORE | TokenFlags::LINE_START;
    assert!(flags.has_space_before());
    assert!(flags.is_line_start());
    assert!(!flags.has_newline_before());
    assert!(!flags.has_error());
}
