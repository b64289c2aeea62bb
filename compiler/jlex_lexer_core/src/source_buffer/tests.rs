use super::*;

#[test]
fn empty_source_has_sentinel() {
    let buf = SourceBuffer::new("");
    assert!(buf.is_empty());
    assert_eq!(buf.len(), 0);
    assert!(buf.cursor().is_eof());
}

#[test]
fn bytes_exclude_padding() {
    let buf = SourceBuffer::new("class A {}");
    assert_eq!(buf.as_bytes(), b"class A {}");
    assert_eq!(buf.as_str(), "class A {}");
}

#[test]
fn padding_covers_lookahead_at_every_length() {
    for len in 0..=130 {
        let src = "x".repeat(len);
        let buf = SourceBuffer::new(&src);
        let mut cursor = buf.cursor();
        cursor.advance_n(buf.len());
        assert!(cursor.is_eof());
        for k in 0..LOOKAHEAD {
            assert_eq!(cursor.peek_n(k), 0, "len {len}, k {k}");
        }
    }
}
