use std::collections::HashMap;

use crate::{ast::ast::Node, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, lowest first. Every operator is left associative.
///
/// Member access (`.`) binds tighter than all of these; it is folded into
/// accessors by the identifier and grouping primaries rather than handled as an
/// infix operator, since only identifiers and parenthesized expressions take it.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Relational,
    Additive,
    Multiplicative,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Node, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Node, Error>;
pub type LEDHandler = fn(&mut Parser, Node, BindingPower) -> Result<Node, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Relational
    parser.led(TokenKind::Compare, BindingPower::Relational, parse_binary_generic_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_binary_number_expr);
    parser.led(TokenKind::Dash, BindingPower::Additive, parse_binary_number_expr);
    parser.led(TokenKind::Math, BindingPower::Multiplicative, parse_binary_number_expr);

    // Literals and symbols
    parser.nud(TokenKind::Number, parse_primary_expr);
    parser.nud(TokenKind::String, parse_primary_expr);
    parser.nud(TokenKind::Boolean, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_accessor_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);
    parser.nud(TokenKind::OpenBracket, parse_array_expr);
    parser.nud(TokenKind::OpenCurly, parse_object_expr);
    parser.nud(TokenKind::If, parse_if_expr);

    // Quoting
    parser.nud(TokenKind::OpenQuote, parse_quoted_expr);
    parser.nud(TokenKind::Ampersand, parse_replacement_expr);

    // Statements
    parser.stmt(TokenKind::Let, parse_let_stmt);
    parser.stmt(TokenKind::Data, parse_data_stmt);
    parser.stmt(TokenKind::Macro, parse_macro_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
