use super::*;
use pretty_assertions::assert_eq;

fn cook(text: &str) -> String {
    match cook_text_block(text) {
        Ok(value) => value,
        Err(e) => panic!("{text:?} failed: {e:?}"),
    }
}

// === Indentation stripping ===

#[test]
fn closing_line_sets_trailing_newline() {
    let src = "\"\"\"\n    Hello\n    World\n    \"\"\"";
    assert_eq!(cook(src), "Hello\nWorld\n");
}

#[test]
fn closing_on_content_line_has_no_trailing_newline() {
    let src = "\"\"\"\n    Hello\n    World\"\"\"";
    assert_eq!(cook(src), "Hello\nWorld");
}

#[test]
fn closing_delimiter_left_of_content_keeps_indent() {
    let src = "\"\"\"\n        a\n          b\n    \"\"\"";
    assert_eq!(cook(src), "    a\n      b\n");
}

#[test]
fn closing_delimiter_right_of_content_is_ignored_for_blank_lines() {
    let src = "\"\"\"\n  a\n\n    b\n      \"\"\"";
    assert_eq!(cook(src), "a\n\n  b\n");
}

#[test]
fn trailing_whitespace_is_stripped() {
    let src = "\"\"\"\n  a   \n  b\t\n  \"\"\"";
    assert_eq!(cook(src), "a\nb\n");
}

#[test]
fn crlf_is_normalized() {
    let src = "\"\"\"\r\n  a\r\n  b\r  \"\"\"";
    assert_eq!(cook(src), "a\nb\n");
}

#[test]
fn empty_block() {
    assert_eq!(cook("\"\"\"\n\"\"\""), "");
    assert_eq!(cook("\"\"\"   \n   \"\"\""), "");
}

// === Escapes ===

#[test]
fn escapes_are_decoded_after_stripping() {
    let src = "\"\"\"\n  a\\n  b\n  \"\"\"";
    assert_eq!(cook(src), "a\n  b\n");
}

#[test]
fn escaped_space_survives_stripping() {
    let src = "\"\"\"\n  a\\s\n  \"\"\"";
    assert_eq!(cook(src), "a \n");
}

#[test]
fn line_continuation_joins_lines() {
    let src = "\"\"\"\n  one \\\n  two\n  \"\"\"";
    assert_eq!(cook(src), "one two\n");
}

#[test]
fn backslash_before_trailing_spaces_is_continuation() {
    let src = "\"\"\"\n  one\\   \n  two\"\"\"";
    assert_eq!(cook(src), "onetwo");
}

#[test]
fn escaped_quotes() {
    let src = "\"\"\"\n  say \\\"\"\"\n  \"\"\"";
    assert_eq!(cook(src), "say \"\"\"\n");
}

#[test]
fn invalid_escape_offset_is_in_source() {
    let src = "\"\"\"\n  ok \\q\n  \"\"\"";
    assert_eq!(
        cook_text_block(src),
        Err(CookError {
            kind: LexErrorKind::InvalidEscapeSequence,
            offset: 9,
            len: 2,
        })
    );
}

// === Opening delimiter ===

#[test]
fn opening_allows_trailing_whitespace() {
    assert_eq!(cook("\"\"\" \t\n  x\"\"\""), "x");
}

#[test]
fn content_on_opening_line_is_rejected() {
    assert_eq!(
        cook_text_block("\"\"\"abc\"\"\""),
        Err(CookError {
            kind: LexErrorKind::InvalidTextBlockOpening,
            offset: 0,
            len: 3,
        })
    );
}

#[test]
fn strip_indent_alone() {
    assert_eq!(strip_indent("   x\n     y\n   "), "x\n  y\n");
    assert_eq!(strip_indent(""), "");
}
