//! Unit tests for the lexer module.
//!
//! Covers keywords, literals, operators, quoting delimiters, comments and
//! the folding of indentation into layout tokens.

use super::{lexer::tokenize, tokens::TokenKind};
use crate::errors::errors::ErrorImpl;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.qs".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    use TokenKind::*;

    assert_eq!(
        kinds("let data macro fn match case if then else do bind return"),
        vec![Let, Data, Macro, Fn, Match, Case, If, Then, Else, Do, Bind, Return, EOF]
    );
}

#[test]
fn test_tokenize_identifiers_and_booleans() {
    let source = "foo baz_123 _under x' true false".to_string();
    let tokens = tokenize(source, Some("test.qs".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "baz_123");
    assert_eq!(tokens[2].value, "_under");
    assert_eq!(tokens[3].value, "x'");
    assert_eq!(tokens[4].kind, TokenKind::Boolean);
    assert_eq!(tokens[4].value, "true");
    assert_eq!(tokens[5].kind, TokenKind::Boolean);
    assert_eq!(tokens[5].value, "false");
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0".to_string();
    let tokens = tokenize(source, Some("test.qs".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].value, "0");
}

#[test]
fn test_tokenize_string_escapes() {
    let source = r#""a\"b\n" "plain""#.to_string();
    let tokens = tokenize(source, Some("test.qs".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "a\"b\n");
    assert_eq!(tokens[1].value, "plain");
}

#[test]
fn test_tokenize_operators() {
    let source = "a <= b ++ c * d == e = f - g + h".to_string();
    let tokens = tokenize(source, Some("test.qs".to_string())).unwrap();

    assert_eq!(tokens[1].kind, TokenKind::Compare);
    assert_eq!(tokens[1].value, "<=");
    assert_eq!(tokens[3].kind, TokenKind::Math);
    assert_eq!(tokens[3].value, "++");
    assert_eq!(tokens[5].kind, TokenKind::Math);
    assert_eq!(tokens[5].value, "*");
    assert_eq!(tokens[7].kind, TokenKind::Compare);
    assert_eq!(tokens[7].value, "==");
    assert_eq!(tokens[9].kind, TokenKind::Assignment);
    assert_eq!(tokens[11].kind, TokenKind::Dash);
    assert_eq!(tokens[13].kind, TokenKind::Plus);
}

#[test]
fn test_tokenize_quoting() {
    use TokenKind::*;

    assert_eq!(
        kinds("[| 1 + &(x) |]"),
        vec![OpenQuote, Number, Plus, Ampersand, OpenParen, Identifier, CloseParen, CloseQuote, EOF]
    );
    assert_eq!(
        kinds("[a, b] | {k: v}.x"),
        vec![
            OpenBracket, Identifier, Comma, Identifier, CloseBracket, Pipe, OpenCurly, Identifier,
            Colon, Identifier, CloseCurly, Dot, Identifier, EOF
        ]
    );
}

#[test]
fn test_tokenize_indented_block() {
    use TokenKind::*;

    assert_eq!(
        kinds("let f x =\n  x\nf 1"),
        vec![Let, Identifier, Identifier, Assignment, Indent, Identifier, Outdent, Terminator, Identifier, Number, EOF]
    );
}

#[test]
fn test_tokenize_nested_dedent() {
    use TokenKind::*;

    assert_eq!(
        kinds("a\n  b\n    c\nd"),
        vec![
            Identifier, Indent, Identifier, Indent, Identifier, Outdent, Terminator, Outdent, Terminator,
            Identifier, EOF
        ]
    );
}

#[test]
fn test_tokenize_closes_blocks_at_end() {
    use TokenKind::*;

    assert_eq!(
        kinds("a\n  b\n\n"),
        vec![Identifier, Indent, Identifier, Outdent, Terminator, EOF]
    );
}

#[test]
fn test_tokenize_ignores_blank_lines() {
    use TokenKind::*;

    assert_eq!(
        kinds("\n\na\n\n   \nb\n"),
        vec![Identifier, Terminator, Identifier, EOF]
    );
}

#[test]
fn test_tokenize_inconsistent_dedent() {
    let result = tokenize("a\n    b\n  c".to_string(), Some("test.qs".to_string()));

    let error = result.unwrap_err();
    assert!(matches!(error.get_internal_error(), ErrorImpl::MalformedLayout { .. }));
    assert_eq!(error.get_position().line, 3);
}

#[test]
fn test_tokenize_comments() {
    let source = "// header\nlet x = 1 // trailing\n".to_string();
    let tokens = tokenize(source, Some("test.qs".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Comment);
    assert_eq!(tokens[0].value, "header");
    assert_eq!(tokens[1].kind, TokenKind::Terminator);
    assert_eq!(tokens[2].kind, TokenKind::Let);
    assert_eq!(tokens[5].kind, TokenKind::Number);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_token_positions() {
    let source = "let x\n  = 1".to_string();
    let tokens = tokenize(source, Some("test.qs".to_string())).unwrap();

    assert_eq!(tokens[1].span.start.line, 1);
    assert_eq!(tokens[1].span.start.column, 5);
    assert_eq!(tokens[3].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].span.start.line, 2);
    assert_eq!(tokens[3].span.start.column, 3);
    assert_eq!(tokens[3].span.start.offset, 8);
    assert_eq!(*tokens[3].span.start.file, "test.qs");
}

#[test]
fn test_tokenize_unrecognised_character() {
    let result = tokenize("let x = @".to_string(), Some("test.qs".to_string()));

    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().column, 9);
}

#[test]
fn test_tokenize_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("\n  \n"), vec![TokenKind::EOF]);
}
