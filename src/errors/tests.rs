//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

fn position(offset: u32) -> Position {
    Position::new(offset, 1, offset + 1, Rc::new("test.qs".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        position(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().offset, 10);
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: ")".to_string(),
            kind: TokenKind::CloseParen,
            expected: "expression".to_string(),
        },
        position(0),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.get_tip().to_string(),
        "Unexpected token `)`, expected expression"
    );
}

#[test]
fn test_unexpected_end_of_input_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedEndOfInput {
            expected: "Else".to_string(),
        },
        position(0),
    );

    assert_eq!(error.get_error_name(), "UnexpectedEndOfInput");
    assert_eq!(error.get_tip().to_string(), "Input ended early, expected Else");
}

#[test]
fn test_malformed_layout_error() {
    let error = Error::new(
        ErrorImpl::MalformedLayout {
            message: "do block is empty".to_string(),
        },
        position(0),
    );

    assert_eq!(error.get_error_name(), "MalformedLayout");
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_nesting_too_deep_error() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 8 }, position(0));

    assert_eq!(error.get_error_name(), "NestingTooDeep");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        position(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display_includes_location() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "1.2.3".to_string(),
        },
        Position::new(4, 2, 3, Rc::new("test.qs".to_string())),
    );

    assert_eq!(
        error.to_string(),
        "test.qs:2:3: error parsing number: \"1.2.3\""
    );
}
