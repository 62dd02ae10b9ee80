use std::slice::Iter;

use super::{
    ast::{Expr, Stmt},
    expressions::AssignmentExpr,
};

/// Program
/// The root node holding every top-level statement in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Stmt>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

/// Variable Declaration
/// `grant x = value;` or `const x = value;`. Only `grant` may omit the value.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclaration {
    pub constant: bool,
    pub identifier: String,
    pub value: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncDeclaration {
    pub name: String,
    pub parameters: Vec<String>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub test: Expr,
    pub body: Vec<Stmt>,
    pub alternate: Option<Vec<Stmt>>,
}

/// For Statement
/// `for (declaration; test; update) { body }`. The update is usually the
/// assignment produced by `i++` expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct ForStatement {
    pub declaration: VarDeclaration,
    pub test: Expr,
    pub update: AssignmentExpr,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TryCatchStatement {
    pub body: Vec<Stmt>,
    pub alternate: Vec<Stmt>,
}
