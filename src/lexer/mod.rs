//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using an ordered table of regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Folding indentation into `Indent`, `Outdent` and `Terminator` tokens
//! - Token position tracking (offset, line, column) for error reporting
//! - Whole-line comments, which become `Comment` tokens

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
