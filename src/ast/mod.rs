/// AST (Abstract Syntax Tree) module
/// Contains the node shapes a parser builds from the token stream
///
/// Submodules:
/// - ast: The `Stmt`/`Expr` sum types and their `NodeType` tag
/// - expressions: Definitions for the expression nodes
/// - statements: Definitions for the statement nodes
pub mod ast;
pub mod expressions;
pub mod statements;
