use indexmap::IndexMap;

use super::{ast::Node, statements::Arg};

// LITERALS

/// Number Expression
/// Represents a numeric literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: f64,
}

/// String Expression
/// Represents a string literal in the AST, escapes already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct StringExpr {
    pub value: String,
}

/// Boolean Expression
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanExpr {
    pub value: bool,
}

/// Array Expression
/// `[a, b, c]`
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayExpr {
    pub elements: Vec<Node>,
}

/// Object Expression
/// `{a: 1, b: 2}`. Keys keep the position of their first appearance,
/// a repeated key replaces the earlier value.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectExpr {
    pub pairs: IndexMap<String, Node>,
}

// ACCESSORS

/// Identifier Expression
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierExpr {
    pub name: String,
}

/// Access Expression
/// Member access, `target.field`.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessExpr {
    pub target: Box<Node>,
    pub field: String,
}

// COMPLEX

/// Binary Number Operator
/// Arithmetic family: `+`, `-` and the `MATH` operators (`*`, `/`, `%`, `++`).
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryNumberExpr {
    pub operator: String,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

/// Binary Generic Operator
/// Comparison family: `==`, `!=`, `<`, `<=`, `>`, `>=`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryGenericExpr {
    pub operator: String,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

/// Call Expression
/// Juxtaposed application, `f a b`, or an explicit zero argument call, `f ()`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Node>,
    pub args: Vec<Node>,
}

/// Function Expression
/// A named function from `let f x = ...`, or a lambda from `fn x = ...` when `name` is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionExpr {
    pub name: Option<String>,
    pub params: Vec<Arg>,
    pub body: Vec<Node>,
    pub return_type: Option<String>,
}

/// If Expression
/// Both branches are blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct IfThenElseExpr {
    pub condition: Box<Node>,
    pub then_block: Vec<Node>,
    pub else_block: Vec<Node>,
}

/// Match Expression
/// Cases are tried top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchExpr {
    pub scrutinee: Box<Node>,
    pub cases: Vec<Case>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    pub pattern: Pattern,
    pub body: Node,
}

/// A tag name and the names bound to its fields, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    pub tag: String,
    pub bound: Vec<String>,
}

/// Do Expression
/// Monadic sequencing of `bind`, `return` and plain lines under `context`.
#[derive(Debug, Clone, PartialEq)]
pub struct DoExpr {
    pub context: Box<Node>,
    pub body: Vec<Node>,
}

// QUOTING

/// Quoted Expression
/// `[| inner |]`, the inner expression as data.
#[derive(Debug, Clone, PartialEq)]
pub struct QuotedExpr {
    pub inner: Box<Node>,
}

/// Replacement Expression
/// `&(inner)`, a splice point. Only meaningful inside a quote, but accepted anywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplacementExpr {
    pub inner: Box<Node>,
}
