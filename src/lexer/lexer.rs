use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP, SINGLE_CHAR_LOOKUP};

lazy_static! {
    static ref SYMBOL_PATTERN: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
    static ref WHITESPACE_PATTERN: Regex = Regex::new("^[ \t\n\r]+").unwrap();
}

pub const EOF_VALUE: &str = "EndOfFile";

/// Cursor over a borrowed source buffer. `pos` is a byte offset and always
/// sits on a char boundary.
pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
    file: Rc<String>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, file: Option<String>) -> Lexer<'a> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            file: file_name,
        }
    }

    /// Moves past the next `n` characters, stopping early at end of input.
    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            if self.advance().is_none() {
                break;
            }
        }
    }

    pub fn advance(&mut self) -> Option<char> {
        let current = self.at()?;
        self.pos += current.len_utf8();
        Some(current)
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn peek(&self) -> Option<char> {
        self.remainder().chars().nth(1)
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn previous(&self) -> Option<&Token> {
        self.tokens.last()
    }

    fn error(&self, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, Rc::clone(&self.file))
    }
}

fn starts_number(current: char, next: Option<char>) -> bool {
    current.is_ascii_digit() || (current == '-' && next.is_some_and(|c| c.is_ascii_digit()))
}

fn number_handler(lexer: &mut Lexer) {
    let mut number = String::new();
    let mut period = false;

    if lexer.at() == Some('-') {
        number.push('-');
        lexer.advance();
    }

    while let Some(c) = lexer.at() {
        if c.is_ascii_digit() {
            number.push(c);
        } else if c == '.' {
            // A second period closes this literal; the period opens the next one
            if period {
                lexer.push(MK_TOKEN!(TokenKind::Number, std::mem::take(&mut number)));
            }
            period = true;
            number.push(c);
        } else {
            break;
        }
        lexer.advance();
    }

    lexer.push(MK_TOKEN!(TokenKind::Number, number));
}

/// Emits `pair` when the character after the current one is `second`,
/// otherwise `single`.
fn lookahead_handler(
    lexer: &mut Lexer,
    second: char,
    pair: (TokenKind, &str),
    single: (TokenKind, &str),
) {
    if lexer.peek() == Some(second) {
        MK_DEFAULT_HANDLER!(lexer, pair.0, pair.1, 2);
    } else {
        MK_DEFAULT_HANDLER!(lexer, single.0, single.1, 1);
    }
}

fn string_handler(lexer: &mut Lexer) -> Result<(), Error> {
    lexer.advance();

    let remaining = lexer.remainder();
    let Some(end) = remaining.find('"') else {
        return Err(lexer.error(ErrorImpl::UnterminatedString {
            literal: remaining.to_string(),
        }));
    };

    lexer.push(MK_TOKEN!(TokenKind::String, String::from(&remaining[..end])));
    lexer.pos += end + 1;
    Ok(())
}

/// Rewrites `target++` as `= target + 1` (and `--` likewise) directly in the
/// token stream. Without a previous token the pair is dropped.
fn increment_handler(lexer: &mut Lexer, operator: char) {
    lexer.advance_n(2);

    let Some(target) = lexer.previous().cloned() else {
        return;
    };

    lexer.push(MK_TOKEN!(TokenKind::Equals, String::from("=")));
    lexer.push(target);
    lexer.push(MK_TOKEN!(TokenKind::BinaryOperator, operator.to_string()));
    lexer.push(MK_TOKEN!(TokenKind::Number, String::from("1")));
}

fn symbol_handler(lexer: &mut Lexer) {
    let Some(matched) = SYMBOL_PATTERN.find(lexer.remainder()) else {
        return;
    };
    let value = matched.as_str();

    if let Some(kind) = RESERVED_LOOKUP.get(value) {
        lexer.push(MK_TOKEN!(*kind, String::from(value)));
    } else {
        lexer.push(MK_TOKEN!(TokenKind::Identifier, String::from(value)));
    }

    lexer.pos += matched.end();
}

fn skip_handler(lexer: &mut Lexer) {
    if let Some(matched) = WHITESPACE_PATTERN.find(lexer.remainder()) {
        lexer.pos += matched.end();
    }
}

pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while let Some(current) = lex.at() {
        match current {
            c if starts_number(c, lex.peek()) => number_handler(&mut lex),
            '=' => lookahead_handler(
                &mut lex,
                '=',
                (TokenKind::EqualsCompare, "is"),
                (TokenKind::Equals, "="),
            ),
            '&' => lookahead_handler(
                &mut lex,
                '&',
                (TokenKind::And, "&&"),
                (TokenKind::Ampersand, "&"),
            ),
            '!' => lookahead_handler(
                &mut lex,
                '=',
                (TokenKind::NotEqualsCompare, "!="),
                (TokenKind::Exclamation, "!"),
            ),
            '"' => string_handler(&mut lex)?,
            '+' | '-' if lex.peek() == Some(current) => increment_handler(&mut lex, current),
            c => {
                let remainder = lex.remainder();

                if let Some(kind) = SINGLE_CHAR_LOOKUP.get(&c) {
                    MK_DEFAULT_HANDLER!(lex, *kind, c.to_string(), 1);
                } else if SYMBOL_PATTERN.is_match(remainder) {
                    symbol_handler(&mut lex);
                } else if WHITESPACE_PATTERN.is_match(remainder) {
                    skip_handler(&mut lex);
                } else {
                    return Err(lex.error(ErrorImpl::UnrecognisedCharacter { character: c }));
                }
            }
        }
    }

    debug_assert!(lex.at_eof());
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from(EOF_VALUE)));
    Ok(lex.tokens)
}
