use super::ast::Node;

/// Comment
/// A whole-line comment, kept so tools can reproduce the source.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentStmt {
    pub text: String,
}

/// Let Statement
/// A simple binding, `let x: T = value`.
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub name: String,
    pub type_annotation: Option<String>,
    pub value: Box<Node>,
}

/// Formal parameter of a function, or a field of a data tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Arg {
    pub name: String,
    pub type_annotation: Option<String>,
}

impl Arg {
    pub fn new(name: impl Into<String>) -> Self {
        Arg {
            name: name.into(),
            type_annotation: None,
        }
    }

    pub fn typed(name: impl Into<String>, type_annotation: impl Into<String>) -> Self {
        Arg {
            name: name.into(),
            type_annotation: Some(type_annotation.into()),
        }
    }
}

/// Data Declaration
/// An algebraic data type, `data Maybe a = Some a | None`.
#[derive(Debug, Clone, PartialEq)]
pub struct DataStmt {
    pub name: String,
    pub type_params: Vec<Arg>,
    pub variants: Vec<Tag>,
}

/// One constructor of a data declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub name: String,
    pub fields: Vec<Arg>,
}

/// Macro Declaration
/// An expression or block bound at compile time.
#[derive(Debug, Clone, PartialEq)]
pub struct MacroStmt {
    pub name: String,
    pub body: Vec<Node>,
}

/// Bind Statement
/// `bind x = value` inside a do block.
#[derive(Debug, Clone, PartialEq)]
pub struct BindStmt {
    pub name: String,
    pub value: Box<Node>,
}

/// Return Statement
/// `return value` inside a do block, wraps the value in the do context.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Box<Node>,
}
