use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E0001.to_string(), "E0001");
    assert_eq!(ErrorCode::E0010.as_str(), "E0010");
}

#[test]
fn test_every_kind_has_a_distinct_code() {
    let mut codes: Vec<ErrorCode> = LexErrorKind::ALL.iter().map(|k| ErrorCode::from(*k)).collect();
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), LexErrorKind::ALL.len());
}

#[test]
fn test_code_kind_roundtrip() {
    for kind in LexErrorKind::ALL {
        assert_eq!(ErrorCode::from(kind).kind(), kind);
    }
}

#[test]
fn test_codes_follow_kind_order() {
    for (i, kind) in LexErrorKind::ALL.iter().enumerate() {
        assert_eq!(ErrorCode::from(*kind).as_str(), format!("E{:04}", i + 1));
    }
}
