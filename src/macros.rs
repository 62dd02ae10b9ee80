//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Pushes a token whose value is a fixed lexeme and
//!   advances the lexer past it

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr) => {
        Token {
            kind: $kind,
            value: $value,
        }
    };
}

/// Pushes a token with a fixed value and consumes `$consumed` characters.
///
/// The value is not always the consumed text: `==` is stored as `"is"`.
///
/// ```ignore
/// MK_DEFAULT_HANDLER!(lexer, TokenKind::EqualsCompare, "is", 2);
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($lexer:expr, $kind:expr, $value:expr, $consumed:expr) => {{
        $lexer.push(MK_TOKEN!($kind, String::from($value)));
        $lexer.advance_n($consumed);
    }};
}
