//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use chandas_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_syllabification() {
    let err = Error::syllabification("maxyz", 2);
    assert!(matches!(
        err.kind,
        ErrorKind::Syllabification { offset: 2, .. }
    ));
    assert_eq!(err.remainder(), Some("maxyz"));
    assert!(err.is_syllabification());
}

#[test]
fn error_invalid_structure() {
    let err = Error::invalid_structure("1X2", 1, "line-final-heavy must be the last token");
    assert!(matches!(
        err.kind,
        ErrorKind::InvalidStructure { position: 1, .. }
    ));
    assert!(!err.is_syllabification());
    assert!(err.remainder().is_none());
}

#[test]
fn error_unknown_metre() {
    let err = Error::unknown_metre("Vatta");
    assert!(matches!(err.kind, ErrorKind::UnknownMetre(ref name) if name == "Vatta"));
}

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn error_display_syllabification() {
    let msg = format!("{}", Error::syllabification("kr", 0));
    assert!(msg.contains("\"kr\""));
    assert!(msg.contains("offset 0"));
}

#[test]
fn error_display_registry_kinds() {
    let cases = [
        (ErrorKind::DuplicateVariant("n2".into()), "n2"),
        (ErrorKind::DuplicateMetre("Old Gīti".into()), "Old Gīti"),
        (ErrorKind::NoVariants("Empty".into()), "Empty"),
        (ErrorKind::InvalidGrammar("unclosed group".into()), "unclosed group"),
    ];
    for (kind, needle) in cases {
        let msg = format!("{}", Error::new(kind));
        assert!(msg.contains(needle), "{msg}");
    }
}

#[test]
fn error_display_runtime_kinds() {
    let msg = format!("{}", Error::new(ErrorKind::Io("not found".into())));
    assert!(msg.starts_with("io error"));
    let msg = format!("{}", Error::new(ErrorKind::InvalidArgument(":trace".into())));
    assert!(msg.contains(":trace"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_context_builder() {
    let ctx = ErrorContext::new()
        .with_source("sutta.txt")
        .with_position(12, 0)
        .with_frame("metre Old Gīti")
        .with_frame("variant n2");
    assert_eq!(ctx.source.as_deref(), Some("sutta.txt"));
    assert_eq!(ctx.line, Some(12));
    assert_eq!(ctx.stack.len(), 2);

    let shown = ctx.to_string();
    assert!(shown.starts_with("at sutta.txt:12:0"));
    assert!(shown.contains("in variant n2"));
}

#[test]
fn error_context_default_is_empty() {
    let ctx = ErrorContext::default();
    assert!(ctx.source.is_none());
    assert!(ctx.stack.is_empty());
    assert_eq!(ctx.to_string(), "");
}

#[test]
fn error_with_context_keeps_kind() {
    let err = Error::syllabification("r", 3).with_context(ErrorContext::new().with_source("demo"));
    assert!(err.is_syllabification());
    assert_eq!(err.context.unwrap().source.as_deref(), Some("demo"));
}
