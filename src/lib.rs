#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

pub fn display_error(error: &Error) {
    /*
        Error: UnrecognisedCharacter
        -> main.grant
           unrecognised character '@' (code point U+0040)
    */

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", error.get_file());
    eprintln!("   {}", error);
}
