use std::fmt::Display;

use super::{
    expressions::{
        AssignmentExpr, BinaryExpr, CallExpr, Identifier, MemberExpr, NumericLiteral,
        ObjectLiteral, Property, StringLiteral,
    },
    statements::{
        ForStatement, FuncDeclaration, IfStatement, Program, TryCatchStatement, VarDeclaration,
    },
};

/// Node Types
///
/// The `kind` tag carried by every AST node.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum NodeType {
    // Statements
    Program,
    VarDeclaration,
    FuncDeclaration,
    IfStatement,
    ForStatement,
    TryCatchStatement,

    // Expressions
    AssignmentExpr,
    MemberExpr,
    CallExpr,
    BinaryExpr,
    Identifier,
    NumericLiteral,
    StringLiteral,
    Property,
    ObjectLiteral,
}

impl NodeType {
    pub fn is_expression(&self) -> bool {
        !matches!(
            self,
            NodeType::Program
                | NodeType::VarDeclaration
                | NodeType::FuncDeclaration
                | NodeType::IfStatement
                | NodeType::ForStatement
                | NodeType::TryCatchStatement
        )
    }
}

impl Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Tag spelling downstream consumers already match on
            NodeType::NumericLiteral => write!(f, "NumbericLiteral"),
            _ => write!(f, "{:?}", self),
        }
    }
}

/// Statement
///
/// Every node is a statement; expressions are wrapped in `Stmt::Expression`.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Program(Program),
    VarDeclaration(VarDeclaration),
    FuncDeclaration(FuncDeclaration),
    IfStatement(IfStatement),
    ForStatement(ForStatement),
    TryCatchStatement(TryCatchStatement),
    Expression(Expr),
}

impl Stmt {
    pub fn get_node_type(&self) -> NodeType {
        match self {
            Stmt::Program(_) => NodeType::Program,
            Stmt::VarDeclaration(_) => NodeType::VarDeclaration,
            Stmt::FuncDeclaration(_) => NodeType::FuncDeclaration,
            Stmt::IfStatement(_) => NodeType::IfStatement,
            Stmt::ForStatement(_) => NodeType::ForStatement,
            Stmt::TryCatchStatement(_) => NodeType::TryCatchStatement,
            Stmt::Expression(expression) => expression.get_node_type(),
        }
    }

    pub fn as_expr(&self) -> Option<&Expr> {
        match self {
            Stmt::Expression(expression) => Some(expression),
            _ => None,
        }
    }
}

/// Expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Assignment(AssignmentExpr),
    Member(MemberExpr),
    Call(CallExpr),
    Binary(BinaryExpr),
    Identifier(Identifier),
    NumericLiteral(NumericLiteral),
    StringLiteral(StringLiteral),
    Property(Property),
    ObjectLiteral(ObjectLiteral),
}

impl Expr {
    pub fn get_node_type(&self) -> NodeType {
        match self {
            Expr::Assignment(_) => NodeType::AssignmentExpr,
            Expr::Member(_) => NodeType::MemberExpr,
            Expr::Call(_) => NodeType::CallExpr,
            Expr::Binary(_) => NodeType::BinaryExpr,
            Expr::Identifier(_) => NodeType::Identifier,
            Expr::NumericLiteral(_) => NodeType::NumericLiteral,
            Expr::StringLiteral(_) => NodeType::StringLiteral,
            Expr::Property(_) => NodeType::Property,
            Expr::ObjectLiteral(_) => NodeType::ObjectLiteral,
        }
    }
}

impl From<Expr> for Stmt {
    fn from(expression: Expr) -> Self {
        Stmt::Expression(expression)
    }
}

macro_rules! impl_from_node {
    ($sum:ident :: $variant:ident ( $node:ty )) => {
        impl From<$node> for $sum {
            fn from(node: $node) -> Self {
                $sum::$variant(node)
            }
        }
    };
}

impl_from_node!(Stmt::Program(Program));
impl_from_node!(Stmt::VarDeclaration(VarDeclaration));
impl_from_node!(Stmt::FuncDeclaration(FuncDeclaration));
impl_from_node!(Stmt::IfStatement(IfStatement));
impl_from_node!(Stmt::ForStatement(ForStatement));
impl_from_node!(Stmt::TryCatchStatement(TryCatchStatement));

impl_from_node!(Expr::Assignment(AssignmentExpr));
impl_from_node!(Expr::Member(MemberExpr));
impl_from_node!(Expr::Call(CallExpr));
impl_from_node!(Expr::Binary(BinaryExpr));
impl_from_node!(Expr::Identifier(Identifier));
impl_from_node!(Expr::NumericLiteral(NumericLiteral));
impl_from_node!(Expr::StringLiteral(StringLiteral));
impl_from_node!(Expr::Property(Property));
impl_from_node!(Expr::ObjectLiteral(ObjectLiteral));
