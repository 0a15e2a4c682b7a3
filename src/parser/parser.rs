//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct, which doubles as the token
//! cursor, and the parsing entry points. Expressions are parsed with a Pratt
//! parser driven by NUD/LED lookup tables, declarations with recursive descent.
//!
//! It maintains lookup tables for:
//! - Statement handlers (`let`, `data`, `macro`)
//! - NUD (null denotation) handlers for primaries
//! - LED (left denotation) handlers for binary operators
//! - Binding powers for operator precedence

use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_body,
};

/// Tunables for a single parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// How deeply expressions may nest before the parse is aborted.
    pub max_depth: usize,
}

impl ParserConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig { max_depth: 256 }
    }
}

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream and maintains lookup tables for
/// parsing statements and expressions. It tracks the current position in
/// the token stream and provides methods for token consumption.
pub struct Parser {
    /// The list of tokens to parse, always ending in `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    config: ParserConfig,
    /// Current nesting depth of expressions
    depth: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// An `EOF` token is appended when the stream does not already end in one.
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>, config: ParserConfig) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let position = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(|| Position::new(0, 1, 1, Rc::clone(&file)));

            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span: Span {
                    start: position.clone(),
                    end: position,
                },
            });
        }

        Parser {
            tokens,
            pos: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            config,
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the kind of the token `n` places ahead, `EOF` past the end.
    pub fn peek_kind(&self, n: usize) -> TokenKind {
        self.tokens
            .get(self.pos + n)
            .map(|token| token.kind)
            .unwrap_or(TokenKind::EOF)
    }

    /// Returns the kind of the most recently consumed token.
    pub fn previous_token_kind(&self) -> Option<TokenKind> {
        self.pos
            .checked_sub(1)
            .map(|index| self.tokens[index].kind)
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// The cursor never moves past `EOF`.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos;
        if self.tokens[index].kind != TokenKind::EOF {
            self.pos += 1;
        }
        &self.tokens[index]
    }

    /// Checks whether the whole stream has been consumed.
    pub fn at_end(&self) -> bool {
        self.current_token_kind() == TokenKind::EOF
    }

    /// Line and column of the current token.
    pub fn position(&self) -> (u32, u32) {
        let start = &self.current_token().span.start;
        (start.line, start.column)
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    /// Builds the error for a current token that cannot continue the parse.
    pub fn unexpected(&self, expected: &str) -> Error {
        let token = self.current_token();
        let error = if token.kind == TokenKind::EOF {
            ErrorImpl::UnexpectedEndOfInput {
                expected: String::from(expected),
            }
        } else {
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
                kind: token.kind,
                expected: String::from(expected),
            }
        };

        Error::new(error, token.span.start.clone())
    }

    /// Builds a layout error at the current token.
    pub fn layout_error(&self, message: &str) -> Error {
        Error::new(
            ErrorImpl::MalformedLayout {
                message: String::from(message),
            },
            self.get_position(),
        )
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns an Error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            return match error {
                Some(error) => Err(error),
                None => Err(self.unexpected(&expected_kind.to_string())),
            };
        }

        Ok(self.advance().clone())
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Consumes consecutive terminators, returning whether there were any.
    pub fn skip_terminators(&mut self) -> bool {
        let mut skipped = false;
        while self.current_token_kind() == TokenKind::Terminator {
            self.advance();
            skipped = true;
        }
        skipped
    }

    /// Consumes the terminators that end a line, returning whether the line has ended.
    ///
    /// A `do` expression consumes its own terminator, so a line whose last
    /// token was a terminator has ended too.
    pub fn end_line(&mut self) -> bool {
        self.skip_terminators() || self.previous_token_kind() == Some(TokenKind::Terminator)
    }

    /// Runs `parse_fn` one nesting level deeper, failing once the configured limit is hit.
    pub fn nested<T>(
        &mut self,
        parse_fn: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= self.config.max_depth {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: self.config.max_depth,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        let result = parse_fn(self);
        self.depth -= 1;
        result
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// Primaries get no binding power, so a primary after a complete operand
    /// ends the operator loop instead of continuing it. That is what lets
    /// juxtaposition mean application.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Parses a stream of tokens into a [`Program`] with the default configuration.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Program, Error> {
    parse_with_config(tokens, file, ParserConfig::default())
}

/// Parses a stream of tokens into a [`Program`].
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes all lookup tables, and parses lines until EOF. The first
/// syntax error aborts the parse; no partial tree is returned. Tokens after
/// the first `EOF` are rejected rather than ignored.
pub fn parse_with_config(
    tokens: Vec<Token>,
    file: Rc<String>,
    config: ParserConfig,
) -> Result<Program, Error> {
    let trailing = tokens
        .iter()
        .skip_while(|token| token.kind != TokenKind::EOF)
        .find(|token| token.kind != TokenKind::EOF);

    if let Some(token) = trailing {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
                kind: token.kind,
                expected: String::from("end of input"),
            },
            token.span.start.clone(),
        ));
    }

    let mut parser = Parser::new(tokens, Rc::clone(&file), config);
    create_token_lookups(&mut parser);

    let body = parse_body(&mut parser, TokenKind::EOF)?;
    if !parser.at_end() {
        return Err(parser.unexpected("end of input"));
    }

    tracing::debug!(file = %file, nodes = body.len(), "parsed program");

    Ok(Program { body })
}
