//! End-to-end lexing of a realistic Java compilation unit.

use jlex_ir::{ContextualKeyword, LexErrorKind, LiteralValue, Operator, Token, TokenKind};
use jlex_lexer::{lex, lex_with_config, LexerConfig};
use pretty_assertions::assert_eq;

const BASIC: &str = include_str!("fixtures/basic.java");

fn find<'a, 'src>(tokens: &'a [Token<'src>], lexeme: &str) -> &'a Token<'src> {
    match tokens.iter().find(|t| t.lexeme == lexeme) {
        Some(token) => token,
        None => panic!("no token {lexeme:?}"),
    }
}

#[test]
fn lexes_without_errors() {
    let output = lex(BASIC);
    assert_eq!(output.errors, vec![]);
    assert_eq!(output.reconstruct(), BASIC);
    assert!(output.tokens.last().is_some_and(Token::is_eof));
}

#[test]
fn literal_values() {
    let tokens = lex(BASIC).tokens;
    assert_eq!(find(&tokens, "0xFF").value, Some(LiteralValue::Int(255)));
    assert_eq!(find(&tokens, "0b1010").value, Some(LiteralValue::Int(10)));
    assert_eq!(find(&tokens, "012").value, Some(LiteralValue::Int(10)));
    assert_eq!(
        find(&tokens, "1_000_000_000L").value,
        Some(LiteralValue::Long(1_000_000_000))
    );
    assert_eq!(
        find(&tokens, "1.23e-5").value,
        Some(LiteralValue::double(1.23e-5))
    );
    assert_eq!(find(&tokens, "0.5f").kind, TokenKind::FloatLiteral);
    assert_eq!(find(&tokens, "'J'").value, Some(LiteralValue::Char('J')));
}

#[test]
fn unicode_escaped_string() {
    let tokens = lex(BASIC).tokens;
    let hello = find(&tokens, "\"\\u0048\\u0065\\u006C\\u006C\\u006F\"");
    assert_eq!(hello.kind, TokenKind::StringLiteral);
    assert_eq!(hello.value, Some(LiteralValue::Str("Hello".into())));
}

#[test]
fn text_block() {
    let tokens = lex(BASIC).tokens;
    let block = tokens
        .iter()
        .find(|t| t.kind == TokenKind::TextBlockLiteral)
        .map(|t| t.value.clone());
    assert_eq!(
        block,
        Some(Some(LiteralValue::Str(
            "This is a\nmulti-line\ntext block.\n".into()
        )))
    );
}

#[test]
fn non_sealed_and_contextual_keywords() {
    let tokens = lex(BASIC).tokens;
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    let non_sealed = [
        TokenKind::Identifier,
        TokenKind::Operator(Operator::Minus),
        TokenKind::ContextualKeyword(ContextualKeyword::Sealed),
    ];
    assert!(kinds.windows(3).any(|w| w == non_sealed));
    for word in [
        ContextualKeyword::Record,
        ContextualKeyword::Permits,
        ContextualKeyword::Var,
    ] {
        assert!(
            kinds.contains(&TokenKind::ContextualKeyword(word)),
            "{word}"
        );
    }
}

#[test]
fn comments_are_tokens_by_default() {
    let tokens = lex(BASIC).tokens;
    assert_eq!(tokens[0].kind, TokenKind::BlockComment);
    assert!(tokens.iter().any(|t| t.kind == TokenKind::DocComment));
    assert!(tokens.iter().any(|t| t.kind == TokenKind::LineComment));

    let trivia = lex_with_config(BASIC, LexerConfig::default().with_comments_as_trivia(true));
    assert!(trivia.tokens.iter().all(|t| !t.kind.is_comment()));
    assert_eq!(trivia.reconstruct(), BASIC);
}

#[test]
fn older_release_rejects_newer_forms() {
    let config = LexerConfig::for_release(8).unwrap_or_default();
    let output = lex_with_config(BASIC, config);
    assert_eq!(output.reconstruct(), BASIC);
    let kinds: Vec<_> = output.errors.iter().map(|e| e.kind).collect();
    assert!(kinds.contains(&LexErrorKind::UnterminatedString));
    assert!(!kinds.contains(&LexErrorKind::InvalidUnderscorePlacement));

    let config = LexerConfig::for_release(6).unwrap_or_default();
    let output = lex_with_config(BASIC, config);
    let kinds: Vec<_> = output.errors.iter().map(|e| e.kind).collect();
    assert!(kinds.contains(&LexErrorKind::InvalidUnderscorePlacement));
}

#[test]
fn strict_rejects_legacy_octal() {
    let output = lex_with_config(BASIC, LexerConfig::strict());
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].kind, LexErrorKind::MalformedNumericLiteral);
    assert_eq!(output.errors[0].position.line, 306);
}
