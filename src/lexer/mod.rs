//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Numeric, string and identifier literals
//! - Keyword classification through a static lookup table
//! - One-character lookahead for `==`, `!=` and `&&`
//! - Expansion of `++`/`--` into an assignment token sequence

pub mod lexer;
pub mod tokens;
