//! Parameter lists and type annotations.
//!
//! Annotations are plain names (`x: Int`); there is no type expression
//! grammar beyond that. A parameter list mixes bare names, parenthesized
//! and optionally annotated names, and `( )` pairs. A `( )` pair stands for
//! a zero-argument step and contributes no parameter.

use crate::{ast::statements::Arg, errors::errors::Error, lexer::tokens::TokenKind};

use super::parser::Parser;

/// One or more parameters. Fails if nothing at the cursor can start one.
pub fn parse_param_list(parser: &mut Parser) -> Result<Vec<Arg>, Error> {
    if !starts_param(parser) {
        return Err(parser.unexpected("parameter"));
    }

    parse_opt_param_list(parser)
}

/// Zero or more parameters.
pub fn parse_opt_param_list(parser: &mut Parser) -> Result<Vec<Arg>, Error> {
    let mut params = vec![];

    while starts_param(parser) {
        if parser.current_token_kind() == TokenKind::OpenParen
            && parser.peek_kind(1) == TokenKind::CloseParen
        {
            parser.advance();
            parser.advance();
            continue;
        }

        params.push(parse_param(parser)?);
    }

    Ok(params)
}

fn starts_param(parser: &Parser) -> bool {
    match parser.current_token_kind() {
        TokenKind::Identifier => true,
        TokenKind::OpenParen => matches!(
            parser.peek_kind(1),
            TokenKind::CloseParen | TokenKind::Identifier
        ),
        _ => false,
    }
}

/// `x`, `(x)` or `(x: Type)`
pub fn parse_param(parser: &mut Parser) -> Result<Arg, Error> {
    if parser.current_token_kind() == TokenKind::Identifier {
        return Ok(Arg::new(parser.advance().value.clone()));
    }

    parser.expect(TokenKind::OpenParen)?;
    let name = parser.expect(TokenKind::Identifier)?.value;
    let type_annotation = parse_opt_type(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(Arg {
        name,
        type_annotation,
    })
}

/// An optional `: Type` annotation.
pub fn parse_opt_type(parser: &mut Parser) -> Result<Option<String>, Error> {
    if parser.current_token_kind() != TokenKind::Colon {
        return Ok(None);
    }

    parser.advance();
    Ok(Some(parse_type_name(parser)?))
}

pub fn parse_type_name(parser: &mut Parser) -> Result<String, Error> {
    if parser.current_token_kind() != TokenKind::Identifier {
        return Err(parser.unexpected("type name"));
    }

    Ok(parser.advance().value.clone())
}
