//! Expression parsing.
//!
//! Block-valued forms (`fn`, `match`, `do`) are recognised by their keyword,
//! everything else goes through the call parser and bottoms out in the Pratt
//! loop over the binding power table.

use std::mem;

use indexmap::IndexMap;

use crate::{
    ast::{
        ast::Node,
        expressions::{
            ArrayExpr, DoExpr, FunctionExpr, IfThenElseExpr, MatchExpr, ObjectExpr, QuotedExpr,
            ReplacementExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::BindingPower,
    parser::Parser,
    patterns::parse_case_list,
    stmt::{parse_block, parse_block_or_expr, parse_do_block},
    types::{parse_opt_type, parse_param_list},
};

/// Parses a full expression, including calls and the block-valued forms.
pub fn parse_expr(parser: &mut Parser) -> Result<Node, Error> {
    parser.nested(|parser| match parser.current_token_kind() {
        TokenKind::Fn => parse_fn_expr(parser),
        TokenKind::Match => parse_match_expr(parser),
        TokenKind::Do => parse_do_expr(parser),
        _ => parse_call_expr(parser),
    })
}

/// Parses `accessor argList`, `( expression ) argList`, or a plain inner expression.
///
/// Only identifiers and parenthesized expressions can be applied. When no
/// argument follows the callee it is an ordinary operand, so the operator
/// loop continues from it.
pub fn parse_call_expr(parser: &mut Parser) -> Result<Node, Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier | TokenKind::OpenParen => {
            let callee = parse_nud(parser)?;

            if parser.current_token_kind().starts_inner_expression() {
                parse_arguments(parser, callee)
            } else {
                parse_led_loop(parser, callee, BindingPower::Default)
            }
        }
        _ => parse_inner_expr(parser, BindingPower::Default),
    }
}

/// Collects juxtaposed arguments for `callee`.
///
/// Every `( )` applies what has been built so far to no arguments, so
/// `f x ()` is `Call(Call(f, [x]), [])` and `f()()` nests twice.
fn parse_arguments(parser: &mut Parser, callee: Node) -> Result<Node, Error> {
    let mut callee = callee;
    let mut args = vec![];

    while parser.current_token_kind().starts_inner_expression() {
        if parser.current_token_kind() == TokenKind::OpenParen
            && parser.peek_kind(1) == TokenKind::CloseParen
        {
            parser.advance();
            parser.advance();

            if !args.is_empty() {
                callee = Node::call(callee, mem::take(&mut args));
            }
            callee = Node::call(callee, vec![]);
        } else {
            args.push(parse_inner_expr(parser, BindingPower::Default)?);
        }
    }

    if !args.is_empty() {
        callee = Node::call(callee, args);
    }

    Ok(callee)
}

/// Parses an operand and every operator binding tighter than `bp`.
pub fn parse_inner_expr(parser: &mut Parser, bp: BindingPower) -> Result<Node, Error> {
    parser.nested(|parser| {
        let left = parse_nud(parser)?;
        parse_led_loop(parser, left, bp)
    })
}

fn parse_nud(parser: &mut Parser) -> Result<Node, Error> {
    let nud_fn = parser
        .get_nud_lookup()
        .get(&parser.current_token_kind())
        .copied();

    match nud_fn {
        Some(nud_fn) => nud_fn(parser),
        None => Err(parser.unexpected("expression")),
    }
}

/// While the current token binds tighter than `bp`, fold it into `left`.
fn parse_led_loop(parser: &mut Parser, left: Node, bp: BindingPower) -> Result<Node, Error> {
    let mut left = left;

    loop {
        let token_kind = parser.current_token_kind();
        let next_bp = match parser.get_bp_lookup().get(&token_kind) {
            Some(next_bp) if *next_bp > bp => *next_bp,
            _ => break,
        };

        let led_fn = match parser.get_led_lookup().get(&token_kind).copied() {
            Some(led_fn) => led_fn,
            None => break,
        };

        left = led_fn(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Node, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.advance().clone();
            match token.value.parse::<f64>() {
                Ok(value) => Ok(Node::number(value)),
                Err(_) => Err(Error::new(
                    ErrorImpl::NumberParseError { token: token.value },
                    token.span.start,
                )),
            }
        }
        TokenKind::String => Ok(Node::string(parser.advance().value.clone())),
        TokenKind::Boolean => Ok(Node::boolean(parser.advance().value == "true")),
        _ => Err(parser.unexpected("literal")),
    }
}

/// Right operands are parsed at the operator's own power, which folds chains to the left.
pub fn parse_binary_number_expr(
    parser: &mut Parser,
    left: Node,
    bp: BindingPower,
) -> Result<Node, Error> {
    let operator = parser.advance().value.clone();
    let right = parse_inner_expr(parser, bp)?;

    Ok(Node::binary_number(operator, left, right))
}

pub fn parse_binary_generic_expr(
    parser: &mut Parser,
    left: Node,
    bp: BindingPower,
) -> Result<Node, Error> {
    let operator = parser.advance().value.clone();
    let right = parse_inner_expr(parser, bp)?;

    Ok(Node::binary_generic(operator, left, right))
}

pub fn parse_accessor_expr(parser: &mut Parser) -> Result<Node, Error> {
    let name = parser.expect(TokenKind::Identifier)?.value;
    parse_accessor_tail(parser, Node::identifier(name))
}

/// Folds `. field` suffixes onto `target`.
fn parse_accessor_tail(parser: &mut Parser, target: Node) -> Result<Node, Error> {
    let mut target = target;

    while parser.current_token_kind() == TokenKind::Dot {
        parser.advance();
        let field = parse_field_name(parser)?;
        target = Node::access(target, field);
    }

    Ok(target)
}

/// `keywordOrIdentifier`: `return` and `bind` are plain names after `.` and as object keys.
fn parse_field_name(parser: &mut Parser) -> Result<String, Error> {
    if !parser.current_token_kind().is_keyword_or_identifier() {
        return Err(parser.unexpected("field name"));
    }

    Ok(parser.advance().value.clone())
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let inner = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    parse_accessor_tail(parser, inner)
}

pub fn parse_replacement_expr(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(TokenKind::Ampersand)?;
    parser.expect(TokenKind::OpenParen)?;
    let inner = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(Node::Replacement(ReplacementExpr {
        inner: Box::new(inner),
    }))
}

pub fn parse_quoted_expr(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(TokenKind::OpenQuote)?;
    let inner = parse_expr(parser)?;
    parser.expect(TokenKind::CloseQuote)?;

    Ok(Node::Quoted(QuotedExpr {
        inner: Box::new(inner),
    }))
}

pub fn parse_array_expr(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(TokenKind::OpenBracket)?;

    let mut elements = vec![];
    if parser.current_token_kind() != TokenKind::CloseBracket {
        loop {
            elements.push(parse_expr(parser)?);

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance();
        }
    }

    parser.expect(TokenKind::CloseBracket)?;

    Ok(Node::Array(ArrayExpr { elements }))
}

/// `{ a: 1, b: 2 }` on one line, or one pair per line in an indented block.
///
/// The indented form tolerates blank terminators after the opening indent
/// and before the closing brace.
pub fn parse_object_expr(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(TokenKind::OpenCurly)?;

    let mut pairs = IndexMap::new();

    if parser.current_token_kind() == TokenKind::Indent {
        parser.advance();
        parser.skip_terminators();

        while parser.current_token_kind() != TokenKind::Outdent {
            parse_pair(parser, &mut pairs)?;

            let comma = parser.current_token_kind() == TokenKind::Comma;
            if comma {
                parser.advance();
            }

            if !parser.end_line() && !comma {
                break;
            }
        }

        parser.expect(TokenKind::Outdent)?;
        parser.skip_terminators();
    } else if parser.current_token_kind() != TokenKind::CloseCurly {
        loop {
            parse_pair(parser, &mut pairs)?;

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance();
        }
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Node::Object(ObjectExpr { pairs }))
}

fn parse_pair(parser: &mut Parser, pairs: &mut IndexMap<String, Node>) -> Result<(), Error> {
    let key = parse_field_name(parser)?;
    parser.expect(TokenKind::Colon)?;
    let value = parse_expr(parser)?;

    // Replacing keeps the key where it first appeared
    pairs.insert(key, value);
    Ok(())
}

/// `if cond then <block> <terminator> else <block>`
pub fn parse_if_expr(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(TokenKind::If)?;
    let condition = parse_inner_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::Then)?;
    let then_block = parse_block(parser)?;

    parser.expect(TokenKind::Terminator)?;
    parser.expect(TokenKind::Else)?;
    let else_block = parse_block(parser)?;

    Ok(Node::IfThenElse(IfThenElseExpr {
        condition: Box::new(condition),
        then_block,
        else_block,
    }))
}

/// Anonymous function, `fn x y = body`.
pub fn parse_fn_expr(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(TokenKind::Fn)?;

    let params = parse_param_list(parser)?;
    let return_type = parse_opt_type(parser)?;
    parser.expect(TokenKind::Assignment)?;
    let body = parse_block_or_expr(parser)?;

    Ok(Node::Function(FunctionExpr {
        name: None,
        params,
        body,
        return_type,
    }))
}

pub fn parse_match_expr(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(TokenKind::Match)?;
    let scrutinee = parse_inner_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::Indent)?;
    let cases = parse_case_list(parser)?;
    parser.expect(TokenKind::Outdent)?;

    Ok(Node::Match(MatchExpr {
        scrutinee: Box::new(scrutinee),
        cases,
    }))
}

/// `do context` followed by a do block. The terminator after the block
/// belongs to the expression and is consumed here.
pub fn parse_do_expr(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(TokenKind::Do)?;
    let context = parse_inner_expr(parser, BindingPower::Default)?;

    let body = parse_do_block(parser)?;
    parser.expect(TokenKind::Terminator)?;

    Ok(Node::Do(DoExpr {
        context: Box::new(context),
        body,
    }))
}
