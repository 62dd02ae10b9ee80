use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("grant", TokenKind::Let);
        map.insert("const", TokenKind::Const);
        map.insert("func", TokenKind::Func);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("for", TokenKind::For);
        map
    };

    /// Characters that never need lookahead. `+` and `-` only land here once
    /// the increment sugar and negative numbers have been ruled out.
    pub static ref SINGLE_CHAR_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('(', TokenKind::OpenParen);
        map.insert(')', TokenKind::CloseParen);
        map.insert('{', TokenKind::OpenBrace);
        map.insert('}', TokenKind::CloseBrace);
        map.insert('[', TokenKind::OpenBracket);
        map.insert(']', TokenKind::CloseBracket);
        map.insert('+', TokenKind::BinaryOperator);
        map.insert('-', TokenKind::BinaryOperator);
        map.insert('*', TokenKind::BinaryOperator);
        map.insert('%', TokenKind::BinaryOperator);
        map.insert('/', TokenKind::BinaryOperator);
        map.insert('<', TokenKind::Lesser);
        map.insert('>', TokenKind::Greater);
        map.insert('.', TokenKind::Dot);
        map.insert(';', TokenKind::Semicolon);
        map.insert(':', TokenKind::Colon);
        map.insert(',', TokenKind::Comma);
        map.insert('|', TokenKind::Bar);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Number,
    Identifier,
    String,

    // Reserved
    Let,
    Const,
    Func,
    If,
    Else,
    For,

    BinaryOperator,
    Equals, // =
    Comma,
    Colon,
    Semicolon,
    Dot,
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    Greater,
    Lesser,
    EqualsCompare,    // ==, value "is"
    NotEqualsCompare, // !=
    Exclamation,
    And, // &&
    Ampersand,
    Bar,

    EOF,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub value: String,
    #[serde(rename = "type")]
    pub kind: TokenKind,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{ kind: {}, value: {:?} }}", self.kind, self.value)
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }

    pub fn debug(&self) {
        if self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Number,
        ]) {
            println!("{} ({})", self.kind, self.value);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
