#![allow(clippy::module_inception)]

use std::{fmt, rc::Rc};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::{parse_with_config, ParserConfig},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;


extern crate regex;

/// A location in a source file.
///
/// `offset` is a byte offset, `line` and `column` are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(offset: u32, line: u32, column: u32, file: Rc<String>) -> Self {
        Position {
            offset,
            line,
            column,
            file,
        }
    }

    pub fn null() -> Self {
        Position::new(0, 1, 1, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Tokenizes and parses `source` in one step.
pub fn parse_source(source: &str, file: &str, config: ParserConfig) -> Result<Program, Error> {
    let tokens = tokenize(source.to_string(), Some(file.to_string()))?;
    parse_with_config(tokens, Rc::new(file.to_string()), config)
}

/// Finds the line containing the byte `position`.
///
/// Returns the 1-based line number, the line text and the byte offset into that line.
/// A position at the very end of the source resolves to the last line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;
    let mut last_line = (0, "");

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        last_line = (start, line);
        start = end;
        line_number += 1;
    }

    if source.is_empty() || source.ends_with('\n') {
        Some((line_number, String::new(), 0))
    } else {
        let (last_start, text) = last_line;
        Some((line_number - 1, text.to_string(), pos - last_start))
    }
}

/// An error paired with the source it was raised in, displayed the way the
/// command line driver prints it:
///
/// ```text
/// Error: UnexpectedToken (Unexpected token `)`, expected expression)
/// -> main.qs:1:11
///   |
/// 1 | let x = ( )
///   | ----------^
/// ```
///
/// The source excerpt is left out when the position lies outside `source`.
pub struct Diagnostic<'a> {
    pub error: &'a Error,
    pub source: &'a str,
    pub file: &'a str,
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let error = self.error;
        let position = error.get_position();

        if let ErrorTip::None = error.get_tip() {
            writeln!(f, "Error: {}", error.get_error_name())?;
        } else {
            writeln!(f, "Error: {} ({})", error.get_error_name(), error.get_tip())?;
        }
        writeln!(f, "-> {}:{}:{}", self.file, position.line, position.column)?;

        let Some((line, line_text, line_pos)) = get_line_at_position(self.source, position.offset)
        else {
            return Ok(());
        };

        let line_string = line.to_string();
        let padding = line_string.len() + 2;

        writeln!(f, "{:>padding$}", "|")?;

        let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
        writeln!(f, "{} | {}", line_string, line_text_removed.trim_end())?;

        let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

        writeln!(f, "{:>padding$} {:->arrows$}", "|", "^")
    }
}

/// Renders `error` as a [`Diagnostic`].
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    Diagnostic {
        error,
        source,
        file,
    }
    .to_string()
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (String::from(&string[start..]), start)
}
