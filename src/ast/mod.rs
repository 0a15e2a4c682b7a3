/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Node` union and the `Program` root
/// - expressions: Definitions for the expression node kinds
/// - statements: Definitions for declarations and do-block lines
pub mod ast;
pub mod expressions;
pub mod statements;
