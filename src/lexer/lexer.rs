use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &str) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Anchored and ordered: longer operators must come before their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^\\r?\\n").unwrap(), handler: newline_handler },
        RegexPattern { regex: Regex::new("^[ \\t\\r]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^//[^\\n]*").unwrap(), handler: comment_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_']*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+(\\.[0-9]+)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^\"(\\\\.|[^\"\\\\\\n])*\"").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("^\\[\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenQuote, "[|") },
        RegexPattern { regex: Regex::new("^\\|\\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseQuote, "|]") },
        RegexPattern { regex: Regex::new("^\\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[") },
        RegexPattern { regex: Regex::new("^\\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]") },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("^(==|!=|<=|>=|<|>)").unwrap(), handler: compare_handler },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: Regex::new("^(\\*|/|%|\\+\\+)").unwrap(), handler: math_handler },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new("^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
        RegexPattern { regex: Regex::new("^\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
        RegexPattern { regex: Regex::new("^\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Pipe, "|") },
        RegexPattern { regex: Regex::new("^&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Ampersand, "&") },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: u32,
    line_start: usize,
    /// Open indentation levels, innermost last. Never empty while lexing.
    indents: Vec<usize>,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
            line_start: 0,
            indents: vec![0],
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position::new(
            self.pos as u32,
            self.line,
            (self.pos - self.line_start + 1) as u32,
            Rc::clone(&self.file),
        )
    }

    /// Pushes a token whose text is exactly `matched`, consuming it.
    fn push_matched(&mut self, kind: TokenKind, matched: &str) {
        let start = self.position();
        self.advance_n(matched.len());
        let end = self.position();
        self.push(MK_TOKEN!(kind, String::from(matched), Span { start, end }));
    }

    fn push_layout(&mut self, kind: TokenKind) {
        let value = match kind {
            TokenKind::Indent => "indent",
            TokenKind::Outdent => "dedent",
            _ => "newline",
        };
        let position = self.position();
        self.push(MK_TOKEN!(
            kind,
            String::from(value),
            Span {
                start: position.clone(),
                end: position,
            }
        ));
    }

    fn new_line(&mut self) {
        self.line += 1;
        self.line_start = self.pos;
    }

    fn at_line_start(&self) -> bool {
        match self.tokens.last() {
            None => true,
            Some(token) => matches!(
                token.kind,
                TokenKind::Terminator | TokenKind::Indent | TokenKind::Outdent
            ),
        }
    }

    /// Folds the indentation of a new line into layout tokens.
    fn layout(&mut self, indent: usize) -> Result<(), Error> {
        if self.tokens.is_empty() {
            self.indents = vec![indent];
            return Ok(());
        }

        let current = self.indents.last().copied().unwrap_or(0);

        if indent > current {
            self.indents.push(indent);
            self.push_layout(TokenKind::Indent);
        } else if indent == current {
            self.push_layout(TokenKind::Terminator);
        } else {
            while self.indents.last().is_some_and(|top| *top > indent) {
                self.indents.pop();
                self.push_layout(TokenKind::Outdent);
                self.push_layout(TokenKind::Terminator);
            }

            if self.indents.last() != Some(&indent) {
                return Err(Error::new(
                    ErrorImpl::MalformedLayout {
                        message: format!(
                            "line is indented to column {} which matches no enclosing block",
                            indent + 1
                        ),
                    },
                    self.position(),
                ));
            }
        }

        Ok(())
    }

    fn close_layout(&mut self) {
        while self.indents.len() > 1 {
            self.indents.pop();
            self.push_layout(TokenKind::Outdent);
            self.push_layout(TokenKind::Terminator);
        }
    }
}

fn newline_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    lexer.advance_n(matched.len());
    lexer.new_line();

    match next_line_indentation(lexer) {
        Some(indent) => lexer.layout(indent),
        None => Ok(()),
    }
}

/// Skips blank lines and returns the indentation of the next line with content.
///
/// Returns `None` when only blank lines remain. Indentation itself is left for the
/// whitespace pattern to consume.
fn next_line_indentation(lexer: &mut Lexer) -> Option<usize> {
    loop {
        let rest = lexer.remainder();
        let width = rest.chars().take_while(|c| *c == ' ' || *c == '\t').count();
        let after = &rest[width..];

        if after.is_empty() {
            return None;
        }

        let line_break = if after.starts_with('\n') {
            1
        } else if after.starts_with("\r\n") {
            2
        } else {
            return Some(width);
        };

        lexer.advance_n(width + line_break);
        lexer.new_line();
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    lexer.advance_n(matched.len());
    Ok(())
}

fn comment_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    // Only whole-line comments are kept, trailing ones are dropped.
    if !lexer.at_line_start() {
        lexer.advance_n(matched.len());
        return Ok(());
    }

    let start = lexer.position();
    lexer.advance_n(matched.len());
    let end = lexer.position();
    let text = matched.trim_start_matches("//").trim().to_string();
    lexer.push(MK_TOKEN!(TokenKind::Comment, text, Span { start, end }));
    Ok(())
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    lexer.push_matched(TokenKind::Number, matched);
    Ok(())
}

fn compare_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    lexer.push_matched(TokenKind::Compare, matched);
    Ok(())
}

fn math_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    lexer.push_matched(TokenKind::Math, matched);
    Ok(())
}

fn string_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let start = lexer.position();
    lexer.advance_n(matched.len());
    let end = lexer.position();

    let string_literal = &matched[1..matched.len() - 1];
    let mut result = String::new();
    let mut chars = string_literal.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(next_ch) = chars.peek() {
                match next_ch {
                    'n' => {
                        result.push('\n');
                        chars.next();
                    }
                    't' => {
                        result.push('\t');
                        chars.next();
                    }
                    '\\' => {
                        result.push('\\');
                        chars.next();
                    }
                    'r' => {
                        result.push('\r');
                        chars.next();
                    }
                    '"' => {
                        result.push('"');
                        chars.next();
                    }
                    '0' => {
                        result.push('\0');
                        chars.next();
                    }
                    _ => {
                        result.push(ch); // Keep the backslash
                    }
                }
            } else {
                result.push(ch); // Keep the lone backslash
            }
        } else {
            result.push(ch);
        }
    }

    lexer.push(MK_TOKEN!(TokenKind::String, result, Span { start, end }));
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let kind = RESERVED_LOOKUP.get(matched).copied().unwrap_or(TokenKind::Identifier);
    lexer.push_matched(kind, matched);
    Ok(())
}

/// Converts source text into a layout-folded token stream ending in `EOF`.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    // The first line with content sets the base indentation
    if let Some(indent) = next_line_indentation(&mut lex) {
        lex.layout(indent)?;
    }

    while !lex.at_eof() {
        let found = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(lex.remainder())
                .map(|m| (pattern.handler, m.as_str().to_string()))
        });

        match found {
            Some((handler, matched)) => handler(&mut lex, &matched)?,
            None => {
                let token = lex
                    .remainder()
                    .chars()
                    .next()
                    .map(String::from)
                    .unwrap_or_default();
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken { token },
                    lex.position(),
                ));
            }
        }
    }

    lex.close_layout();

    let position = lex.position();
    lex.push(MK_TOKEN!(
        TokenKind::EOF,
        String::from("EOF"),
        Span {
            start: position.clone(),
            end: position,
        }
    ));

    tracing::debug!(file = %lex.file, tokens = lex.tokens.len(), "tokenized source");
    Ok(lex.tokens)
}
