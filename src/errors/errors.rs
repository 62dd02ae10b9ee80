use std::{fmt::Display, rc::Rc};

use thiserror::Error;

#[derive(Error, Debug, Clone)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    file: Rc<String>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, file: Rc<String>) -> Self {
        Error {
            internal_error: error_impl,
            file,
        }
    }

    pub fn get_file(&self) -> &str {
        &self.file
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        self.internal_error.get_error_name()
    }

    pub fn get_tip(&self) -> ErrorTip {
        self.internal_error.get_tip()
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

fn code_point(character: &char) -> String {
    format!("U+{:04X}", *character as u32)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised character {character:?} (code point {})", code_point(.character))]
    UnrecognisedCharacter { character: char },
    #[error("unterminated string literal: \"{literal}")]
    UnterminatedString { literal: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
}

impl ErrorImpl {
    pub fn get_error_name(&self) -> &'static str {
        match self {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString { .. } => {
                ErrorTip::Suggestion(String::from("Add a closing `\"` to end the string"))
            }
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`, it has no digits", token))
            }
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected a number, string or identifier",
                token
            )),
        }
    }
}
