//! Tests for the diagnostic catalog and message formatting.

use crate::diagnostics::*;
use rustc_hash::FxHashSet;

#[test]
fn test_catalog_codes_are_unique() {
    let mut seen = FxHashSet::default();
    for message in DIAGNOSTIC_MESSAGES {
        assert!(
            seen.insert(message.code),
            "duplicate diagnostic code {} ({})",
            message.code,
            message.message
        );
    }
}

#[test]
fn test_format_message_fills_placeholders() {
    let text = format_message(
        diagnostic_messages::IMPLICIT_COERCION_TO_UNRELATED_TYPE,
        &["String", "Number"],
    );
    assert_eq!(
        text,
        "Implicit coercion of a value of type String to an unrelated type Number."
    );
}

#[test]
fn test_from_code_uses_catalog_category() {
    let warning = Diagnostic::from_code(
        "a.as".to_string(),
        0,
        1,
        "x".to_string(),
        diagnostic_codes::ASSIGNMENT_IN_CONDITIONAL,
    );
    assert_eq!(warning.category, DiagnosticCategory::Warning);
    assert!(!warning.is_error());

    let error = Diagnostic::from_code(
        "a.as".to_string(),
        0,
        1,
        "x".to_string(),
        diagnostic_codes::ASSIGN_TO_CONST,
    );
    assert!(error.is_error());
}

#[test]
fn test_diagnostic_serializes_without_empty_related_information() {
    let diag = Diagnostic::error("a.as".to_string(), 4, 2, "bad".to_string(), 1049);
    let json = serde_json::to_string(&diag).expect("serialize");
    assert!(json.contains("\"code\":1049"));
    assert!(!json.contains("related_information"));
}

#[test]
fn test_related_information_is_a_message() {
    let diag = Diagnostic::error("b.as".to_string(), 40, 4, "dup".to_string(), 1021).with_related(
        "a.as".to_string(),
        10,
        4,
        "draw is also defined here.".to_string(),
    );
    assert_eq!(diag.related_information.len(), 1);
    let related = &diag.related_information[0];
    assert_eq!(related.category, DiagnosticCategory::Message);
    assert_eq!(related.file, "a.as");

    let json = serde_json::to_string(&diag).expect("serialize");
    assert!(json.contains("related_information"));
    assert!(json.contains("draw is also defined here."));
}
