//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.bas".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert!(error.has_source_position());
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.bas".to_string()));
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "#".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.bas");
}

#[test]
fn test_file_read_error() {
    let error = Error::new(
        ErrorImpl::FileRead {
            path: "missing.bas".to_string(),
            message: "No such file or directory".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "FileRead");
    assert!(!error.has_source_position());
    assert_eq!(
        error.to_string(),
        "failed to read \"missing.bas\": No such file or directory"
    );
}

#[test]
fn test_usage_error() {
    let error = Error::new(
        ErrorImpl::Usage {
            message: "unknown flag `--fast`".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "Usage");
    assert_eq!(error.to_string(), "unknown flag `--fast`");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: ";".to_string(),
        },
        Position(0, Rc::new("test.bas".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => {
            assert_eq!(tip, "Unrecognised character `;`, it is not part of the language")
        }
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_escapes_control_characters() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "\u{c}".to_string(),
        },
        Position(0, Rc::new("test.bas".to_string())),
    );

    assert_eq!(
        error.get_tip().to_string(),
        "Unrecognised character `\\u{c}`, it is not part of the language"
    );
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_internal_error_access() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position::null(),
    );

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnrecognisedToken {
            token: "@".to_string()
        }
    );
    assert_eq!(error.to_string(), "unrecognised token: \"@\"");
}
