use crate::{
    errors::errors::ErrorImpl,
    lexer::tokens::{Token, TokenKind},
};

use super::ast::Expr;

// LITERALS

/// Numeric Literal
/// Represents a numeric literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericLiteral {
    pub value: f64,
}

/// String Literal
/// Represents a string literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub value: String,
}

/// Identifier
/// Represents a bare symbol in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub symbol: String,
}

/// Property
/// `key: value` inside an object literal, or shorthand `key`.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: String,
    pub value: Option<Box<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectLiteral {
    pub properties: Vec<Property>,
}

// COMPLEX

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub assignee: Box<Expr>,
    pub value: Box<Expr>,
}

/// Binary Expression
/// The operator is the token value, so equality reads `is`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub operator: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub caller: Box<Expr>,
    pub args: Vec<Expr>,
}

/// Member Expression
/// `object.property` or, when computed, `object[property]`.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpr {
    pub object: Box<Expr>,
    pub property: Box<Expr>,
    pub computed: bool,
}

impl Expr {
    /// Builds the literal node a single `Number`, `String` or `Identifier`
    /// token stands for.
    pub fn from_literal_token(token: &Token) -> Result<Expr, ErrorImpl> {
        match token.kind {
            TokenKind::Number => {
                let value = token
                    .value
                    .parse::<f64>()
                    .map_err(|_| ErrorImpl::NumberParseError {
                        token: token.value.clone(),
                    })?;
                Ok(Expr::NumericLiteral(NumericLiteral { value }))
            }
            TokenKind::String => Ok(Expr::StringLiteral(StringLiteral {
                value: token.value.clone(),
            })),
            TokenKind::Identifier => Ok(Expr::Identifier(Identifier {
                symbol: token.value.clone(),
            })),
            _ => Err(ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
            }),
        }
    }
}
