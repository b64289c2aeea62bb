use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;

fn error(code: ErrorCode) -> Diagnostic {
    Diagnostic::error(code).with_message(code.kind().title())
}

#[test]
fn test_flush_sorts_by_position() {
    let mut queue = DiagnosticQueue::new();
    queue.add(error(ErrorCode::E0008), Position::new(3, 1, 20));
    queue.add(error(ErrorCode::E0001), Position::new(1, 9, 8));
    queue.add(error(ErrorCode::E0006), Position::new(1, 2, 1));

    let codes: Vec<ErrorCode> = queue.flush().iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E0006, ErrorCode::E0001, ErrorCode::E0008]);
}

#[test]
fn test_equal_positions_keep_insertion_order() {
    let mut queue = DiagnosticQueue::new();
    queue.add(error(ErrorCode::E0005), Position::new(1, 1, 0));
    queue.add(error(ErrorCode::E0002), Position::new(1, 1, 0));

    let codes: Vec<ErrorCode> = queue.flush().iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E0005, ErrorCode::E0002]);
}

#[test]
fn test_error_limit() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig { error_limit: 2 });
    assert!(queue.add(error(ErrorCode::E0008), Position::START));
    assert!(queue.add(error(ErrorCode::E0008), Position::START));
    assert!(queue.limit_reached());
    assert!(!queue.add(error(ErrorCode::E0008), Position::START));
    assert_eq!(queue.error_count(), 2);
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_unlimited_config() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    for _ in 0..500 {
        queue.add(error(ErrorCode::E0008), Position::START);
    }
    assert!(!queue.limit_reached());
    assert_eq!(queue.error_count(), 500);
}

#[test]
fn test_flush_empties_queue() {
    let mut queue = DiagnosticQueue::new();
    queue.add(error(ErrorCode::E0001), Position::START);
    assert_eq!(queue.flush().len(), 1);
    assert!(queue.is_empty());
    assert_eq!(queue.error_count(), 0);
}
