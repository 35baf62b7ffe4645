//! Escape sequence processing for string and character literal bodies.
//!
//! Called with the cursor on a backslash; consumes the whole escape and
//! returns the decoded character, or fails with `IllegalEscapeSequence`.
//!
//! Octal escapes take 1-3 octal digits, but a third digit is only
//! consumed when the first is 0-3. That keeps three-digit values inside
//! one byte while still allowing any octal digit to lead a one- or
//! two-digit form; the asymmetry is historical and preserved as-is.

use crate::errors::errors::{Error, ErrorKind};
use crate::lexer::lexer::{Lexer, ScannerState};

pub fn process_escape(lexer: &mut Lexer) -> Result<char, Error> {
    let position = lexer.position();
    let _ = lexer.bump(); // backslash

    let c = match lexer.peek() {
        None | Some('\r') | Some('\n') => {
            return Err(Error::new(unterminated_kind(lexer), lexer.position()));
        }
        Some(c) => c,
    };

    if let Some(decoded) = simple_escape(c) {
        let _ = lexer.bump();
        return Ok(decoded);
    }

    if c.is_digit(8) {
        return Ok(octal_escape(lexer));
    }

    let _ = lexer.bump();
    let mut escape = format!("\\{}", c);

    // Inside a character literal the attempted escape is reported together
    // with its closing quote when one follows.
    if lexer.state() == ScannerState::InChar {
        if let Some('\'') = lexer.peek() {
            let _ = lexer.bump();
            escape.push('\'');
        }
    }

    Err(Error::new(
        ErrorKind::IllegalEscapeSequence { escape },
        position,
    ))
}

fn unterminated_kind(lexer: &Lexer) -> ErrorKind {
    match lexer.state() {
        ScannerState::InChar => ErrorKind::UnterminatedCharacterLiteral,
        _ => ErrorKind::UnterminatedString,
    }
}

fn simple_escape(c: char) -> Option<char> {
    match c {
        'b' => Some('\u{0008}'),
        't' => Some('\t'),
        'n' => Some('\n'),
        'f' => Some('\u{000C}'),
        'r' => Some('\r'),
        '"' => Some('"'),
        '\'' => Some('\''),
        '\\' => Some('\\'),
        _ => None,
    }
}

fn octal_escape(lexer: &mut Lexer) -> char {
    let mut value = 0u32;
    let mut first = 0u32;

    for consumed in 0..3 {
        let digit = match lexer.peek().and_then(|c| c.to_digit(8)) {
            Some(digit) => digit,
            None => break,
        };
        // A third digit only belongs to the escape when the leading
        // digit is 0-3.
        if consumed == 2 && first > 3 {
            break;
        }
        if consumed == 0 {
            first = digit;
        }
        value = value * 8 + digit;
        let _ = lexer.bump();
    }

    // At most 0o377, always a valid one-byte character.
    (value as u8) as char
}
