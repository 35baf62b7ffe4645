use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorKind,
    position: Position,
}

impl Error {
    pub fn new(error_kind: ErrorKind, position: Position) -> Self {
        Error {
            internal_error: error_kind,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorKind {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorKind::IllegalCharacter { .. } => "IllegalCharacter",
            ErrorKind::IllegalEscapeSequence { .. } => "IllegalEscapeSequence",
            ErrorKind::UnterminatedString => "UnterminatedString",
            ErrorKind::UnterminatedCharacterLiteral => "UnterminatedCharacterLiteral",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorKind::IllegalCharacter { .. } => ErrorTip::None,
            ErrorKind::IllegalEscapeSequence { escape } => ErrorTip::Suggestion(format!(
                "Unrecognized escape `{}`, valid escapes are \\b \\t \\n \\f \\r \\\" \\' \\\\ and octal forms",
                escape
            )),
            ErrorKind::UnterminatedString => ErrorTip::Suggestion(String::from(
                "String literals must be closed with `\"` before the end of the line",
            )),
            ErrorKind::UnterminatedCharacterLiteral => ErrorTip::Suggestion(String::from(
                "Character literals hold exactly one character and must be closed with `'`",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.internal_error, self.position)
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

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("illegal character: {character:?}")]
    IllegalCharacter { character: char },
    #[error("illegal escape sequence: {escape:?}")]
    IllegalEscapeSequence { escape: String },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated character literal")]
    UnterminatedCharacterLiteral,
}
