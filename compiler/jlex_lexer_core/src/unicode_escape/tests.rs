use super::*;
use pretty_assertions::assert_eq;

// === Translation ===

#[test]
fn no_escapes_borrows_source() {
    let t = translate("int x = 1;");
    assert!(matches!(t.text, Cow::Borrowed(_)));
    assert!(!t.has_escapes());
    assert!(t.issues.is_empty());
}

#[test]
fn ordinary_backslash_escapes_are_untouched() {
    let src = r#""a\nb\t""#;
    let t = translate(src);
    assert_eq!(t.text, src);
    assert!(!t.has_escapes());
}

#[test]
fn translates_fixture_hello() {
    let t = translate(r#""\u0048\u0065\u006C\u006C\u006F""#);
    assert_eq!(t.text, "\"Hello\"");
    assert_eq!(t.offsets.entries().len(), 5);
    // Closing quote in translated text sits after five one-byte chars.
    assert_eq!(t.offsets.to_original(6), 31);
}

#[test]
fn multiple_u_is_allowed() {
    let t = translate(r"\uuuu0041");
    assert_eq!(t.text, "A");
    assert_eq!(t.offsets.entries()[0].original_len, 9);
}

#[test]
fn escapes_in_identifiers_and_comments() {
    let t = translate(r"int \u0061 = 1; // \u00e9");
    assert_eq!(t.text, "int a = 1; // é");
}

#[test]
fn escaped_line_terminator_is_translated() {
    let t = translate(r"a\u000Ab");
    assert_eq!(t.text, "a\nb");
}

#[test]
fn uppercase_and_lowercase_hex() {
    assert_eq!(translate(r"\u004a\u004A").text, "JJ");
}

// === Eligibility ===

#[test]
fn even_backslash_run_is_not_an_escape() {
    let src = r"\\u0041";
    let t = translate(src);
    assert_eq!(t.text, src);
    assert!(t.issues.is_empty());
}

#[test]
fn odd_backslash_run_is_an_escape() {
    let t = translate(r"\\\u0041");
    assert_eq!(t.text, r"\\A");
    assert_eq!(t.offsets.entries()[0].original, 2);
}

// === Surrogates ===

#[test]
fn surrogate_pair_combines() {
    let t = translate(r"\uD83D\uDE00");
    assert_eq!(t.text, "😀");
    let entry = t.offsets.entries()[0];
    assert_eq!(entry.original_len, 12);
    assert_eq!(entry.translated_len, 4);
}

#[test]
fn lone_surrogate_becomes_replacement_char() {
    assert_eq!(translate(r"\uD83Dx").text, "\u{FFFD}x");
    assert_eq!(translate(r"\uDE00").text, "\u{FFFD}");
}

// === Malformed ===

#[test]
fn too_few_hex_digits_is_reported_and_copied() {
    let src = r#"s = "\u12G4";"#;
    let t = translate(src);
    assert_eq!(t.text, src);
    assert_eq!(
        t.issues,
        vec![EscapeIssue {
            original: 5,
            translated: 5,
            len: 4,
        }]
    );
}

#[test]
fn malformed_after_valid_reports_translated_offset() {
    let t = translate(r"\u0041 \u");
    assert_eq!(t.text, r"A \u");
    assert_eq!(
        t.issues,
        vec![EscapeIssue {
            original: 7,
            translated: 2,
            len: 2,
        }]
    );
}

#[test]
fn malformed_at_end_of_input() {
    let t = translate(r"x\u00");
    assert_eq!(t.issues.len(), 1);
    assert_eq!(t.issues[0].len, 4);
}

// === Property Tests ===

mod proptest_translate {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn escape_free_input_round_trips(s in "[a-zA-Z0-9 \\n\"'/*]{0,64}") {
            let t = translate(&s);
            prop_assert_eq!(t.text.as_ref(), s.as_str());
            prop_assert!(t.issues.is_empty());
        }

        #[test]
        fn boundaries_map_monotonically(s in "(\\\\u0041|\\\\u00e9|[a-z\\\\ ]){0,24}") {
            let t = translate(&s);
            let mut last = 0;
            for (i, _) in t.text.char_indices() {
                let orig = t.offsets.to_original(u32::try_from(i).unwrap_or(u32::MAX));
                prop_assert!(orig >= last);
                last = orig;
            }
            let end = u32::try_from(t.text.len()).unwrap_or(u32::MAX);
            prop_assert_eq!(t.offsets.to_original(end) as usize, s.len());
        }
    }
}
