//! Utility macros for the scanner.
//!
//! This module defines helper macros used throughout the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default pattern handler for fixed-text tokens
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The token's lexeme text
/// * `$value` - The decoded semantic value (`TokenValue::None` when absent)
/// * `$position` - The 1-based source position of the first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntegerLiteral, "42".to_string(), TokenValue::Int(42), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $value:expr, $position:expr) => {
        Token {
            kind: $kind,
            text: $text,
            value: $value,
            position: $position,
        }
    };
}

/// Creates a default pattern handler for separators and operators.
///
/// Generates a handler that emits a token of the given kind carrying no
/// semantic value and advances the cursor past the matched text.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new(">>>=").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::UnsignedShiftRightEquals, ">>>="),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, text: &str| -> Result<Token, Error> {
            let position = lexer.position();
            lexer.advance_text(text);
            Ok(MK_TOKEN!($kind, String::from($value), TokenValue::None, position))
        }
    };
}
