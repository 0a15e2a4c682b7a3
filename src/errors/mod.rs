//! Error types and error handling for the parser.
//!
//! This module defines the errors produced while turning source text into
//! an AST. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexing, layout and parsing failures
//! - Error names and suggestions used by the diagnostic renderer

pub mod errors;

#[cfg(test)]
mod tests;
