//! Declarations, lines and blocks.

use crate::{
    ast::{
        ast::Node,
        expressions::FunctionExpr,
        statements::{BindStmt, CommentStmt, DataStmt, LetStmt, MacroStmt, ReturnStmt, Tag},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    expr::parse_expr,
    parser::Parser,
    types::{parse_opt_param_list, parse_opt_type, parse_param_list},
};

type LineHandler = fn(&mut Parser) -> Result<Node, Error>;

/// Parses lines separated by terminators until `end`, which is left for the caller.
fn parse_lines(
    parser: &mut Parser,
    end: TokenKind,
    line_fn: LineHandler,
) -> Result<Vec<Node>, Error> {
    let mut lines = vec![];

    while parser.current_token_kind() != end {
        lines.push(line_fn(parser)?);

        if parser.end_line() {
            continue;
        }

        if parser.current_token_kind() == end {
            break;
        }

        return Err(parser.unexpected("end of line"));
    }

    Ok(lines)
}

/// The lines of a program or block, up to `end`.
pub fn parse_body(parser: &mut Parser, end: TokenKind) -> Result<Vec<Node>, Error> {
    parse_lines(parser, end, parse_line)
}

/// A statement, a whole-line comment, or an expression.
pub fn parse_line(parser: &mut Parser) -> Result<Node, Error> {
    let token_kind = parser.current_token_kind();

    if token_kind == TokenKind::Comment {
        let text = parser.advance().value.clone();
        return Ok(Node::Comment(CommentStmt { text }));
    }

    let stmt_fn = parser.get_stmt_lookup().get(&token_kind).copied();
    if let Some(stmt_fn) = stmt_fn {
        let (line, column) = parser.position();
        tracing::trace!(kind = %token_kind, line, column, "parsing statement");
        return stmt_fn(parser);
    }

    parse_expr(parser)
}

/// `INDENT body OUTDENT`, or the empty `INDENT OUTDENT`.
///
/// Blocks count toward the nesting limit like expressions do.
pub fn parse_block(parser: &mut Parser) -> Result<Vec<Node>, Error> {
    parser.nested(|parser| {
        parser.expect(TokenKind::Indent)?;

        let body = parse_body(parser, TokenKind::Outdent)?;
        parser.expect(TokenKind::Outdent)?;

        Ok(body)
    })
}

/// An indented block, or a single expression as a one-line body.
pub fn parse_block_or_expr(parser: &mut Parser) -> Result<Vec<Node>, Error> {
    if parser.current_token_kind() == TokenKind::Indent {
        return parse_block(parser);
    }

    Ok(vec![parse_expr(parser)?])
}

/// The body of a `do`, which has no empty form.
pub fn parse_do_block(parser: &mut Parser) -> Result<Vec<Node>, Error> {
    parser.nested(|parser| {
        parser.expect(TokenKind::Indent)?;

        if parser.current_token_kind() == TokenKind::Outdent {
            return Err(parser.layout_error("do block has no lines"));
        }

        let body = parse_lines(parser, TokenKind::Outdent, parse_do_line)?;
        parser.expect(TokenKind::Outdent)?;

        Ok(body)
    })
}

fn parse_do_line(parser: &mut Parser) -> Result<Node, Error> {
    match parser.current_token_kind() {
        TokenKind::Bind => {
            parser.advance();
            let name = parser.expect(TokenKind::Identifier)?.value;
            parser.expect(TokenKind::Assignment)?;
            let value = parse_expr(parser)?;

            Ok(Node::Bind(BindStmt {
                name,
                value: Box::new(value),
            }))
        }
        TokenKind::Return => {
            parser.advance();
            let value = parse_expr(parser)?;

            Ok(Node::Return(ReturnStmt {
                value: Box::new(value),
            }))
        }
        _ => parse_line(parser),
    }
}

fn expect_name(parser: &mut Parser, declaration: &str) -> Result<String, Error> {
    let error = parser.unexpected(&format!("{} name", declaration));
    Ok(parser.expect_error(TokenKind::Identifier, Some(error))?.value)
}

/// `let name params [: T] = body` declares a function,
/// `let name [: T] = value` a binding.
pub fn parse_let_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(TokenKind::Let)?;
    let name = expect_name(parser, "let")?;

    if matches!(
        parser.current_token_kind(),
        TokenKind::Identifier | TokenKind::OpenParen
    ) {
        let params = parse_param_list(parser)?;
        let return_type = parse_opt_type(parser)?;
        parser.expect(TokenKind::Assignment)?;
        let body = parse_block_or_expr(parser)?;

        return Ok(Node::Function(FunctionExpr {
            name: Some(name),
            params,
            body,
            return_type,
        }));
    }

    let type_annotation = parse_opt_type(parser)?;
    parser.expect(TokenKind::Assignment)?;

    let value = if parser.current_token_kind() == TokenKind::Indent {
        parser.advance();
        let value = parse_expr(parser)?;
        parser.skip_terminators();
        parser.expect(TokenKind::Outdent)?;
        value
    } else {
        parse_expr(parser)?
    };

    Ok(Node::Let(LetStmt {
        name,
        type_annotation,
        value: Box::new(value),
    }))
}

/// `data Name params = Tag fields | Tag fields`, flat or indented one tag per line.
pub fn parse_data_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(TokenKind::Data)?;
    let name = expect_name(parser, "data")?;
    let type_params = parse_opt_param_list(parser)?;
    parser.expect(TokenKind::Assignment)?;

    let variants = if parser.current_token_kind() == TokenKind::Indent {
        parser.advance();
        let variants = parse_tags(parser, true)?;
        parser.skip_terminators();
        parser.expect(TokenKind::Outdent)?;
        variants
    } else {
        parse_tags(parser, false)?
    };

    Ok(Node::Data(DataStmt {
        name,
        type_params,
        variants,
    }))
}

fn parse_tags(parser: &mut Parser, indented: bool) -> Result<Vec<Tag>, Error> {
    let mut tags = vec![parse_tag(parser)?];

    loop {
        // Indented alternatives may start their own line with `|`
        if indented
            && parser.current_token_kind() == TokenKind::Terminator
            && parser.peek_kind(1) == TokenKind::Pipe
        {
            parser.advance();
        }

        if parser.current_token_kind() != TokenKind::Pipe {
            break;
        }

        parser.advance();
        tags.push(parse_tag(parser)?);
    }

    Ok(tags)
}

fn parse_tag(parser: &mut Parser) -> Result<Tag, Error> {
    let name = expect_name(parser, "tag")?;
    let fields = parse_opt_param_list(parser)?;

    Ok(Tag { name, fields })
}

/// `macro name = expression` or `macro name = <block>`
pub fn parse_macro_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(TokenKind::Macro)?;
    let name = expect_name(parser, "macro")?;
    parser.expect(TokenKind::Assignment)?;
    let body = parse_block_or_expr(parser)?;

    Ok(Node::Macro(MacroStmt { name, body }))
}
