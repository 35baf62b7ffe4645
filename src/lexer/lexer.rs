use std::rc::Rc;

use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorKind},
    lexer::{escapes, literals},
    Position, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, TokenValue, RESERVED_LOOKUP};

pub type PatternHandler = fn(&mut Lexer, &str) -> Result<Token, Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: PatternHandler,
}

/// The scanner's lexical sub-mode. String and character literal bodies
/// use different rules than ordinary token scanning, and escape errors
/// are reported differently depending on which literal is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScannerState {
    Initial,
    InString,
    InChar,
}

pub struct Lexer {
    patterns: Vec<RegexPattern>,
    source: String,
    offset: usize,
    line: u32,
    column: u32,
    state: ScannerState,
    buffer: String,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            offset: 0,
            line: 1,
            column: 1,
            state: ScannerState::Initial,
            buffer: String::new(),
            // Declaration order is the tie-breaker when two patterns match
            // the same length of input, so specific forms come before their
            // prefixes (octal before decimal, `>>>=` before `>>>` before `>>`).
            patterns: vec![
                RegexPattern { regex: Regex::new("[ \\t\\x0C\\r\\n]+").unwrap(), handler: whitespace_handler },
                RegexPattern { regex: Regex::new("/\\*([^*]|\\*+[^*/])*\\*+/").unwrap(), handler: comment_handler },
                RegexPattern { regex: Regex::new("//[^\\r\\n]*").unwrap(), handler: comment_handler },
                RegexPattern { regex: Regex::new("[_$\\p{L}][_$\\p{L}\\p{Nd}]*").unwrap(), handler: symbol_handler },
                RegexPattern { regex: Regex::new("-2147483648").unwrap(), handler: min_int_handler },
                RegexPattern { regex: Regex::new("0[xX]0*[0-9a-fA-F]{1,16}[lL]").unwrap(), handler: hex_long_handler },
                RegexPattern { regex: Regex::new("0+[0-7]{1,21}[lL]").unwrap(), handler: octal_long_handler },
                RegexPattern { regex: Regex::new("(0|[1-9][0-9]*)[lL]").unwrap(), handler: decimal_long_handler },
                RegexPattern { regex: Regex::new("0[xX]0*[0-9a-fA-F]{1,8}").unwrap(), handler: hex_int_handler },
                RegexPattern { regex: Regex::new("0+[0-7]{1,15}").unwrap(), handler: octal_int_handler },
                RegexPattern { regex: Regex::new("0|[1-9][0-9]*").unwrap(), handler: decimal_int_handler },
                RegexPattern { regex: Regex::new("([0-9]+\\.[0-9]+|\\.[0-9]+|[0-9]+)([eE][+-]?[0-9]+)?[fFdD]?").unwrap(), handler: float_handler },
                RegexPattern { regex: Regex::new("\"").unwrap(), handler: string_handler },
                RegexPattern { regex: Regex::new("'").unwrap(), handler: char_handler },
                RegexPattern { regex: Regex::new(">>>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::UnsignedShiftRightEquals, ">>>=") },
                RegexPattern { regex: Regex::new(">>>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::UnsignedShiftRight, ">>>") },
                RegexPattern { regex: Regex::new(">>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ShiftRightEquals, ">>=") },
                RegexPattern { regex: Regex::new(">>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ShiftRight, ">>") },
                RegexPattern { regex: Regex::new(">=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
                RegexPattern { regex: Regex::new(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
                RegexPattern { regex: Regex::new("<<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ShiftLeftEquals, "<<=") },
                RegexPattern { regex: Regex::new("<<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ShiftLeft, "<<") },
                RegexPattern { regex: Regex::new("<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
                RegexPattern { regex: Regex::new("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
                RegexPattern { regex: Regex::new("==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
                RegexPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
                RegexPattern { regex: Regex::new("!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
                RegexPattern { regex: Regex::new("!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
                RegexPattern { regex: Regex::new("~").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Tilde, "~") },
                RegexPattern { regex: Regex::new("&&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::And, "&&") },
                RegexPattern { regex: Regex::new("&=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::AndEquals, "&=") },
                RegexPattern { regex: Regex::new("&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::BitAnd, "&") },
                RegexPattern { regex: Regex::new("\\|\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Or, "||") },
                RegexPattern { regex: Regex::new("\\|=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OrEquals, "|=") },
                RegexPattern { regex: Regex::new("\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::BitOr, "|") },
                RegexPattern { regex: Regex::new("\\^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::XorEquals, "^=") },
                RegexPattern { regex: Regex::new("\\^").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::BitXor, "^") },
                RegexPattern { regex: Regex::new("\\+\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PlusPlus, "++") },
                RegexPattern { regex: Regex::new("\\+=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PlusEquals, "+=") },
                RegexPattern { regex: Regex::new("\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
                RegexPattern { regex: Regex::new("--").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::MinusMinus, "--") },
                RegexPattern { regex: Regex::new("-=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::MinusEquals, "-=") },
                RegexPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
                RegexPattern { regex: Regex::new("\\*=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::StarEquals, "*=") },
                RegexPattern { regex: Regex::new("\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
                RegexPattern { regex: Regex::new("/=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::SlashEquals, "/=") },
                RegexPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
                RegexPattern { regex: Regex::new("%=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PercentEquals, "%=") },
                RegexPattern { regex: Regex::new("%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent, "%") },
                RegexPattern { regex: Regex::new("\\?").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Question, "?") },
                RegexPattern { regex: Regex::new(":").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
                RegexPattern { regex: Regex::new("\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
                RegexPattern { regex: Regex::new("\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
                RegexPattern { regex: Regex::new("\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
                RegexPattern { regex: Regex::new("\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
                RegexPattern { regex: Regex::new("\\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[") },
                RegexPattern { regex: Regex::new("\\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]") },
                RegexPattern { regex: Regex::new(";").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
                RegexPattern { regex: Regex::new(",").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
                RegexPattern { regex: Regex::new("\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
            ],
            source,
            file: file_name,
        }
    }

    /// Produces the next token, or a fatal lexical error. After end of
    /// input is reached this idempotently returns `EndOfInput` forever.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        if self.at_eof() {
            return Ok(MK_TOKEN!(
                TokenKind::EndOfInput,
                String::new(),
                TokenValue::None,
                self.position()
            ));
        }

        let remaining = &self.source[self.offset..];
        let mut best: Option<(usize, usize)> = None;

        // Longest match wins; on equal length the earliest declared
        // pattern wins.
        for (index, pattern) in self.patterns.iter().enumerate() {
            if let Some(found) = pattern.regex.find(remaining) {
                if found.start() != 0 {
                    continue;
                }
                let length = found.end();
                if best.map_or(true, |(best_length, _)| length > best_length) {
                    best = Some((length, index));
                }
            }
        }

        match best {
            Some((length, index)) => {
                let text = self.source[self.offset..self.offset + length].to_string();
                let handler = self.patterns[index].handler;
                handler(self, &text)
            }
            None => {
                let character = self.peek().unwrap_or('\0');
                Err(Error::new(
                    ErrorKind::IllegalCharacter { character },
                    self.position(),
                ))
            }
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column, Rc::clone(&self.file))
    }

    pub fn state(&self) -> ScannerState {
        self.state
    }

    pub fn peek(&self) -> Option<char> {
        self.source[self.offset..].chars().next()
    }

    /// Consumes one character, updating line and column. CR, LF, and
    /// CRLF each count as a single line terminator.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        let after_carriage_return =
            self.offset > 0 && self.source.as_bytes()[self.offset - 1] == b'\r';
        self.offset += c.len_utf8();

        match c {
            '\r' => {
                self.line += 1;
                self.column = 1;
            }
            '\n' if after_carriage_return => {
                // The '\r' already advanced the line.
            }
            '\n' => {
                self.line += 1;
                self.column = 1;
            }
            _ => self.column += 1,
        }

        Some(c)
    }

    pub fn advance_text(&mut self, text: &str) {
        for _ in text.chars() {
            let _ = self.bump();
        }
    }

    pub fn at_eof(&self) -> bool {
        self.offset >= self.source.len()
    }
}

fn whitespace_handler(lexer: &mut Lexer, text: &str) -> Result<Token, Error> {
    let position = lexer.position();
    lexer.advance_text(text);

    Ok(MK_TOKEN!(
        TokenKind::Whitespace,
        text.to_string(),
        TokenValue::None,
        position
    ))
}

fn comment_handler(lexer: &mut Lexer, text: &str) -> Result<Token, Error> {
    let position = lexer.position();
    lexer.advance_text(text);

    Ok(MK_TOKEN!(
        TokenKind::Comment,
        text.to_string(),
        TokenValue::None,
        position
    ))
}

/// Identifier-shaped text. Keywords are recognized case-insensitively by
/// lower-casing the lexeme before the reserved-word lookup; anything not
/// in the table is an identifier with its original spelling.
fn symbol_handler(lexer: &mut Lexer, text: &str) -> Result<Token, Error> {
    let position = lexer.position();
    lexer.advance_text(text);

    let folded = text.to_lowercase();
    match RESERVED_LOOKUP.get(folded.as_str()) {
        Some(&TokenKind::BooleanLiteral) => Ok(MK_TOKEN!(
            TokenKind::BooleanLiteral,
            text.to_string(),
            TokenValue::Bool(folded == "true"),
            position
        )),
        Some(&kind) => Ok(MK_TOKEN!(kind, text.to_string(), TokenValue::None, position)),
        None => Ok(MK_TOKEN!(
            TokenKind::Identifier,
            text.to_string(),
            TokenValue::None,
            position
        )),
    }
}

/// `-2147483648` is matched as one literal because its positive
/// magnitude does not fit in 32-bit signed range on its own.
fn min_int_handler(lexer: &mut Lexer, text: &str) -> Result<Token, Error> {
    let position = lexer.position();
    lexer.advance_text(text);

    Ok(MK_TOKEN!(
        TokenKind::IntegerLiteral,
        text.to_string(),
        TokenValue::Int(i32::MIN),
        position
    ))
}

fn decimal_int_handler(lexer: &mut Lexer, text: &str) -> Result<Token, Error> {
    let position = lexer.position();
    lexer.advance_text(text);

    Ok(MK_TOKEN!(
        TokenKind::IntegerLiteral,
        text.to_string(),
        TokenValue::Int(literals::decode_decimal_int(text)),
        position
    ))
}

fn hex_int_handler(lexer: &mut Lexer, text: &str) -> Result<Token, Error> {
    let position = lexer.position();
    lexer.advance_text(text);

    Ok(MK_TOKEN!(
        TokenKind::IntegerLiteral,
        text.to_string(),
        TokenValue::Int(literals::decode_hex_int(text)),
        position
    ))
}

fn octal_int_handler(lexer: &mut Lexer, text: &str) -> Result<Token, Error> {
    let position = lexer.position();
    lexer.advance_text(text);

    Ok(MK_TOKEN!(
        TokenKind::IntegerLiteral,
        text.to_string(),
        TokenValue::Int(literals::decode_octal_int(text)),
        position
    ))
}

fn decimal_long_handler(lexer: &mut Lexer, text: &str) -> Result<Token, Error> {
    let position = lexer.position();
    lexer.advance_text(text);

    Ok(MK_TOKEN!(
        TokenKind::IntegerLiteral,
        text.to_string(),
        TokenValue::Long(literals::decode_decimal_long(text)),
        position
    ))
}

fn hex_long_handler(lexer: &mut Lexer, text: &str) -> Result<Token, Error> {
    let position = lexer.position();
    lexer.advance_text(text);

    Ok(MK_TOKEN!(
        TokenKind::IntegerLiteral,
        text.to_string(),
        TokenValue::Long(literals::decode_hex_long(text)),
        position
    ))
}

fn octal_long_handler(lexer: &mut Lexer, text: &str) -> Result<Token, Error> {
    let position = lexer.position();
    lexer.advance_text(text);

    Ok(MK_TOKEN!(
        TokenKind::IntegerLiteral,
        text.to_string(),
        TokenValue::Long(literals::decode_octal_long(text)),
        position
    ))
}

fn float_handler(lexer: &mut Lexer, text: &str) -> Result<Token, Error> {
    let position = lexer.position();
    lexer.advance_text(text);

    Ok(MK_TOKEN!(
        TokenKind::FloatingPointLiteral,
        text.to_string(),
        literals::decode_float(text),
        position
    ))
}

/// IN_STRING: accumulate decoded body characters until the closing
/// quote. A raw line terminator or end of input is fatal.
fn string_handler(lexer: &mut Lexer, _text: &str) -> Result<Token, Error> {
    let position = lexer.position();
    let _ = lexer.bump(); // opening quote
    lexer.state = ScannerState::InString;
    lexer.buffer.clear();

    loop {
        match lexer.peek() {
            None | Some('\r') | Some('\n') => {
                return Err(Error::new(ErrorKind::UnterminatedString, lexer.position()));
            }
            Some('"') => {
                let _ = lexer.bump();
                lexer.state = ScannerState::Initial;
                let value = std::mem::take(&mut lexer.buffer);

                return Ok(MK_TOKEN!(
                    TokenKind::StringLiteral,
                    value.clone(),
                    TokenValue::Str(value),
                    position
                ));
            }
            Some('\\') => {
                let decoded = escapes::process_escape(lexer)?;
                lexer.buffer.push(decoded);
            }
            Some(c) => {
                let _ = lexer.bump();
                lexer.buffer.push(c);
            }
        }
    }
}

/// IN_CHAR: exactly one body character or escape, then the closing
/// quote is required immediately.
fn char_handler(lexer: &mut Lexer, _text: &str) -> Result<Token, Error> {
    let position = lexer.position();
    let _ = lexer.bump(); // opening quote
    lexer.state = ScannerState::InChar;

    let decoded = match lexer.peek() {
        None | Some('\r') | Some('\n') => {
            return Err(Error::new(
                ErrorKind::UnterminatedCharacterLiteral,
                lexer.position(),
            ));
        }
        Some('\'') => {
            // Empty character literal.
            return Err(Error::new(
                ErrorKind::IllegalCharacter { character: '\'' },
                lexer.position(),
            ));
        }
        Some('\\') => escapes::process_escape(lexer)?,
        Some(c) => {
            let _ = lexer.bump();
            c
        }
    };

    match lexer.peek() {
        Some('\'') => {
            let _ = lexer.bump();
            lexer.state = ScannerState::Initial;

            Ok(MK_TOKEN!(
                TokenKind::CharacterLiteral,
                decoded.to_string(),
                TokenValue::Char(decoded),
                position
            ))
        }
        _ => Err(Error::new(
            ErrorKind::UnterminatedCharacterLiteral,
            lexer.position(),
        )),
    }
}

/// Scans the whole input, trivia included, ending with `EndOfInput`.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::EndOfInput;
        tokens.push(token);

        if done {
            return Ok(tokens);
        }
    }
}
