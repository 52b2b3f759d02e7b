//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::MK_TOKEN;

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Assignment,
            received: TokenKind::Number,
        },
        MK_TOKEN!(TokenKind::Number, "5"),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.to_string(),
        "expected next token to be =, got INT instead"
    );
    assert_eq!(error.get_token().value, "5");
}

#[test]
fn test_no_prefix_handler_error() {
    let error = Error::new(
        ErrorImpl::NoPrefixHandler {
            token: ")".to_string(),
        },
        MK_TOKEN!(TokenKind::CloseParen, ")"),
    );

    assert_eq!(error.get_error_name(), "NoPrefixHandler");
    assert_eq!(error.to_string(), "no prefix parse function for ) found");
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
        MK_TOKEN!(TokenKind::Number, "99999999999999999999"),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(
        error.to_string(),
        "could not parse \"99999999999999999999\" as integer"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::CloseParen,
            received: TokenKind::EOF,
        },
        MK_TOKEN!(TokenKind::EOF, ""),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Semicolon,
            received: TokenKind::Let,
        },
        MK_TOKEN!(TokenKind::Let, "let"),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "did you miss a semicolon?"),
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
fn test_nesting_too_deep_error() {
    let error = Error::new(
        ErrorImpl::NestingTooDeep { limit: 256 },
        MK_TOKEN!(TokenKind::OpenParen, "("),
    );

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.to_string(), "expression nested deeper than 256 levels");
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}
