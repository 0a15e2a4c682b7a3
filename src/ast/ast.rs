use std::slice::Iter;

use super::{
    expressions::{
        AccessExpr, ArrayExpr, BinaryGenericExpr, BinaryNumberExpr, BooleanExpr, CallExpr,
        DoExpr, FunctionExpr, IdentifierExpr, IfThenElseExpr, MatchExpr, NumberExpr, ObjectExpr,
        QuotedExpr, ReplacementExpr, StringExpr,
    },
    statements::{BindStmt, CommentStmt, DataStmt, LetStmt, MacroStmt, ReturnStmt},
};

/// Every kind of node the parser produces.
///
/// Statements (`Let`, `Data`, `Macro`, `Comment`, and `Bind`/`Return` inside do blocks)
/// and expressions share one tree, since a block body can hold either.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Comment(CommentStmt),
    Let(LetStmt),
    Data(DataStmt),
    Macro(MacroStmt),
    Bind(BindStmt),
    Return(ReturnStmt),

    Function(FunctionExpr),
    Match(MatchExpr),
    IfThenElse(IfThenElseExpr),
    Do(DoExpr),
    Call(CallExpr),
    Identifier(IdentifierExpr),
    Access(AccessExpr),
    BinaryNumberOperator(BinaryNumberExpr),
    BinaryGenericOperator(BinaryGenericExpr),
    Replacement(ReplacementExpr),
    Quoted(QuotedExpr),

    Number(NumberExpr),
    String(StringExpr),
    Boolean(BooleanExpr),
    Array(ArrayExpr),
    Object(ObjectExpr),
}

impl Node {
    pub fn identifier(name: impl Into<String>) -> Node {
        Node::Identifier(IdentifierExpr { name: name.into() })
    }

    pub fn number(value: f64) -> Node {
        Node::Number(NumberExpr { value })
    }

    pub fn string(value: impl Into<String>) -> Node {
        Node::String(StringExpr { value: value.into() })
    }

    pub fn boolean(value: bool) -> Node {
        Node::Boolean(BooleanExpr { value })
    }

    pub fn call(callee: Node, args: Vec<Node>) -> Node {
        Node::Call(CallExpr {
            callee: Box::new(callee),
            args,
        })
    }

    pub fn access(target: Node, field: impl Into<String>) -> Node {
        Node::Access(AccessExpr {
            target: Box::new(target),
            field: field.into(),
        })
    }

    pub fn binary_number(operator: impl Into<String>, left: Node, right: Node) -> Node {
        Node::BinaryNumberOperator(BinaryNumberExpr {
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn binary_generic(operator: impl Into<String>, left: Node, right: Node) -> Node {
        Node::BinaryGenericOperator(BinaryGenericExpr {
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Name of the node kind, as used in diagnostics and logs.
    pub fn get_node_name(&self) -> &'static str {
        match self {
            Node::Comment(_) => "Comment",
            Node::Let(_) => "Let",
            Node::Data(_) => "Data",
            Node::Macro(_) => "Macro",
            Node::Bind(_) => "Bind",
            Node::Return(_) => "Return",
            Node::Function(_) => "Function",
            Node::Match(_) => "Match",
            Node::IfThenElse(_) => "IfThenElse",
            Node::Do(_) => "Do",
            Node::Call(_) => "Call",
            Node::Identifier(_) => "Identifier",
            Node::Access(_) => "Access",
            Node::BinaryNumberOperator(_) => "BinaryNumberOperator",
            Node::BinaryGenericOperator(_) => "BinaryGenericOperator",
            Node::Replacement(_) => "Replacement",
            Node::Quoted(_) => "Quoted",
            Node::Number(_) => "Number",
            Node::String(_) => "String",
            Node::Boolean(_) => "Boolean",
            Node::Array(_) => "Array",
            Node::Object(_) => "Object",
        }
    }
}

/// The root of a parsed source file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Node>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Node> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
