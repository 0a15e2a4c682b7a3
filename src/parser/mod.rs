//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a layout-folded stream
//! of tokens into a [`Program`](crate::ast::ast::Program). It uses a Pratt
//! parser for expressions with proper operator precedence and handles:
//!
//! - Declarations (`let` bindings and functions, `data`, `macro`)
//! - Blocks and `do` blocks delimited by `INDENT`/`OUTDENT`
//! - Expressions (binary operators, juxtaposed calls, accessors, literals)
//! - `match` arms and their patterns
//! - Parameter lists and type annotations
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling. The
//! first syntax error aborts the parse.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod patterns;
pub mod stmt;
pub mod types;
