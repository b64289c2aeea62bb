use super::*;
use pretty_assertions::assert_eq;

// === Line terminators ===

#[test]
fn lf_starts_new_line() {
    let src = "a\nb";
    let index = LineIndex::build(src);
    assert_eq!(index.line_count(), 2);
    assert_eq!(index.position(src, 2), Position::new(2, 1, 2));
}

#[test]
fn crlf_counts_once() {
    let src = "a\r\nb";
    let index = LineIndex::build(src);
    assert_eq!(index.line_count(), 2);
    // Between \r and \n still belongs to line 1.
    assert_eq!(index.position(src, 2), Position::new(1, 3, 2));
    assert_eq!(index.position(src, 3), Position::new(2, 1, 3));
}

#[test]
fn lone_cr_starts_new_line() {
    let src = "a\rb\rc";
    let index = LineIndex::build(src);
    assert_eq!(index.line_count(), 3);
    assert_eq!(index.position(src, 4), Position::new(3, 1, 4));
}

#[test]
fn trailing_newline_adds_empty_line() {
    let src = "x\n";
    let index = LineIndex::build(src);
    assert_eq!(index.line_count(), 2);
    assert_eq!(index.position(src, 2), Position::new(2, 1, 2));
}

// === Codepoint columns ===

#[test]
fn columns_count_codepoints() {
    // 'é' is two bytes, '😀' four.
    let src = "é😀x\nλ";
    let index = LineIndex::build(src);
    assert_eq!(index.position(src, 6), Position::new(1, 3, 2));
    assert_eq!(index.position(src, 8), Position::new(2, 1, 4));
    assert_eq!(index.position(src, 10), Position::new(2, 2, 5));
}

#[test]
fn offset_past_end_clamps() {
    let src = "ab";
    let index = LineIndex::build(src);
    assert_eq!(index.position(src, 99), Position::new(1, 3, 2));
}

#[test]
fn empty_source() {
    let index = LineIndex::build("");
    assert_eq!(index.line_count(), 1);
    assert_eq!(index.position("", 0), Position::START);
}

// === Line text ===

#[test]
fn line_text_strips_terminators() {
    let src = "first\r\nsecond\rthird";
    let index = LineIndex::build(src);
    assert_eq!(index.line_text(src, 1), Some("first"));
    assert_eq!(index.line_text(src, 2), Some("second"));
    assert_eq!(index.line_text(src, 3), Some("third"));
    assert_eq!(index.line_text(src, 4), None);
    assert_eq!(index.line_text(src, 0), None);
}

#[test]
fn display_is_line_colon_column() {
    assert_eq!(Position::new(3, 7, 40).to_string(), "3:7");
}
