use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("data", TokenKind::Data);
        map.insert("macro", TokenKind::Macro);
        map.insert("fn", TokenKind::Fn);
        map.insert("match", TokenKind::Match);
        map.insert("case", TokenKind::Case);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("do", TokenKind::Do);
        map.insert("bind", TokenKind::Bind);
        map.insert("return", TokenKind::Return);
        map.insert("true", TokenKind::Boolean);
        map.insert("false", TokenKind::Boolean);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,

    // Layout
    Terminator,
    Indent,
    Outdent,

    Comment,
    Identifier,
    Number,
    String,
    Boolean,

    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,

    Comma,
    Colon,
    Dot,
    Assignment, // =
    Pipe,       // |

    OpenQuote,  // [|
    CloseQuote, // |]
    Ampersand,  // &

    Compare, // == != <= >= < >
    Math,    // * / % ++
    Plus,
    Dash,

    // Reserved
    Let,
    Data,
    Macro,
    Fn,
    Match,
    Case,
    If,
    Then,
    Else,
    Do,
    Bind,
    Return,
}

impl TokenKind {
    /// Whether a token of this kind can begin an inner expression, and so an argument.
    pub fn starts_inner_expression(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::Number
                | TokenKind::String
                | TokenKind::Boolean
                | TokenKind::OpenParen
                | TokenKind::OpenBracket
                | TokenKind::OpenCurly
                | TokenKind::OpenQuote
                | TokenKind::Ampersand
                | TokenKind::If
        )
    }

    /// Whether a token of this kind may name a field after `.` or in an object literal.
    pub fn is_keyword_or_identifier(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::Return | TokenKind::Bind
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    /// One line summary, `Kind (value)` for tokens that carry text.
    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Number,
            TokenKind::Boolean,
            TokenKind::Comment,
            TokenKind::Compare,
            TokenKind::Math,
        ]) {
            format!(
                "{}:{} {} ({})",
                self.span.start.line, self.span.start.column, self.kind, self.value
            )
        } else {
            format!(
                "{}:{} {} ()",
                self.span.start.line, self.span.start.column, self.kind
            )
        }
    }
}
