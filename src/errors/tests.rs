//! Unit tests for error handling.
//!
//! This module contains tests for lexical error types and error reporting.

use crate::errors::errors::{Error, ErrorKind, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorKind::IllegalCharacter { character: '@' },
        Position::new(1, 10, Rc::new("test.mocha".to_string())),
    );

    assert_eq!(error.get_error_name(), "IllegalCharacter");
}

#[test]
fn test_error_position() {
    let position = Position::new(3, 42, Rc::new("test.mocha".to_string()));
    let error = Error::new(ErrorKind::UnterminatedString, position.clone());

    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 42);
}

#[test]
fn test_illegal_escape_error() {
    let error = Error::new(
        ErrorKind::IllegalEscapeSequence {
            escape: "\\q".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "IllegalEscapeSequence");
}

#[test]
fn test_unterminated_string_error() {
    let error = Error::new(ErrorKind::UnterminatedString, Position::null());

    assert_eq!(error.get_error_name(), "UnterminatedString");
}

#[test]
fn test_unterminated_character_literal_error() {
    let error = Error::new(ErrorKind::UnterminatedCharacterLiteral, Position::null());

    assert_eq!(error.get_error_name(), "UnterminatedCharacterLiteral");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorKind::IllegalCharacter { character: '#' },
        Position::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorKind::IllegalEscapeSequence {
            escape: "\\q".to_string(),
        },
        Position::null(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(suggestion) => assert!(suggestion.contains("\\q")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorKind::UnterminatedString,
        Position::new(2, 5, Rc::new("test.mocha".to_string())),
    );

    assert_eq!(
        error.to_string(),
        "unterminated string literal at test.mocha:2:5"
    );
}

#[test]
fn test_error_kind_accessor() {
    let error = Error::new(
        ErrorKind::IllegalCharacter { character: '@' },
        Position::null(),
    );

    assert_eq!(
        *error.get_kind(),
        ErrorKind::IllegalCharacter { character: '@' }
    );
}
