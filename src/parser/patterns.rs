//! `case` arms and the patterns they destructure.

use crate::{
    ast::expressions::{Case, Pattern},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// One or more `case` arms, one per line, in source order.
pub fn parse_case_list(parser: &mut Parser) -> Result<Vec<Case>, Error> {
    let mut cases = vec![parse_case(parser)?];

    loop {
        if !parser.end_line() || parser.current_token_kind() != TokenKind::Case {
            break;
        }

        cases.push(parse_case(parser)?);
    }

    Ok(cases)
}

/// `case pattern = expression`
pub fn parse_case(parser: &mut Parser) -> Result<Case, Error> {
    parser.expect(TokenKind::Case)?;
    let pattern = parse_pattern(parser)?;
    parser.expect(TokenKind::Assignment)?;
    let body = parse_expr(parser)?;

    Ok(Case { pattern, body })
}

/// A bare tag, `None`, or a tag with bound names, `(Some x)`.
pub fn parse_pattern(parser: &mut Parser) -> Result<Pattern, Error> {
    if parser.current_token_kind() == TokenKind::Identifier {
        let tag = parser.advance().value.clone();
        return Ok(Pattern { tag, bound: vec![] });
    }

    if parser.current_token_kind() != TokenKind::OpenParen {
        return Err(parser.unexpected("pattern"));
    }
    parser.advance();

    let tag = parser.expect(TokenKind::Identifier)?.value;
    let mut bound = vec![parser.expect(TokenKind::Identifier)?.value];
    while parser.current_token_kind() == TokenKind::Identifier {
        bound.push(parser.advance().value.clone());
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(Pattern { tag, bound })
}
