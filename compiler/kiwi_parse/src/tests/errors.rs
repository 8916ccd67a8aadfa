use kiwi_diagnostic::{ErrorCode, Severity};
use kiwi_ir::{Span, TokenKind};
use pretty_assertions::assert_eq;

use super::support::{parse_err, parse_err_with, render_stmt};
use crate::{Expected, GrammarConfig};

#[test]
fn unexpected_token_reports_furthest_position() {
    let err = parse_err("f(a");
    assert_eq!(err.code, ErrorCode::E1001);
    assert_eq!(err.found, "newline");
    assert_eq!(err.span, Span::point(3));
    assert!(err.expected.contains(&Expected::Literal(")")));
    assert!(err.expected.contains(&Expected::Literal(",")));
}

#[test]
fn missing_operand() {
    let err = parse_err("x = 1 +");
    assert_eq!(err.code, ErrorCode::E1001);
    assert_eq!(err.found, "newline");
    assert!(err.expected.contains(&Expected::Identifier));
    assert!(err.expected.contains(&Expected::Kind(TokenKind::Number)));
}

#[test]
fn unexpected_end_of_input() {
    let err = parse_err("if a:");
    assert_eq!(err.code, ErrorCode::E1002);
    assert_eq!(err.found, "end of input");
    assert!(err.expected.contains(&Expected::Kind(TokenKind::Indent)));
}

#[test]
fn hard_keyword_is_never_a_name() {
    let err = parse_err("x = while");
    assert_eq!(err.code, ErrorCode::E1003);
    assert_eq!(err.found, "while");
    assert_eq!(err.span, Span::new(4, 9));
    assert!(err.message.contains("`while`"));
}

#[test]
fn configured_hard_keyword_rejects_soft_word() {
    assert_eq!(render_stmt("x = to"), "Assignment([x], [to])");

    let base = GrammarConfig::kiwi();
    let hard = base.hard_keywords().chain(["to"]);
    let soft = base.soft_keywords().filter(|kw| *kw != "to");
    let config = GrammarConfig::new(hard, soft).unwrap();

    let err = parse_err_with("x = to", &config);
    assert_eq!(err.code, ErrorCode::E1003);
    assert_eq!(err.found, "to");
}

#[test]
fn trailing_garbage_after_statements() {
    let err = parse_err("x = 1\n)\n");
    assert_eq!(err.code, ErrorCode::E1001);
    assert_eq!(err.found, ")");
    assert!(err.expected.contains(&Expected::Kind(TokenKind::EndMarker)));
}

#[test]
fn error_converts_to_diagnostic() {
    let err = parse_err("f(a");
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.severity, Severity::Error);
    assert_eq!(diag.primary_span(), Some(Span::point(3)));
    assert_eq!(diag.notes.len(), 1);
    assert!(diag.notes[0].starts_with("expected one of: "));
    assert!(err.to_string().starts_with("[E1001] unexpected newline at "));
}
