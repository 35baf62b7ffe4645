//! Integration tests for the scanner's public contract.
//!
//! These tests drive the pull-based `next_token` interface the way a
//! downstream parser would: one token per call, trivia filtered by the
//! caller, fatal errors aborting the scan.

use mocha::errors::errors::ErrorKind;
use mocha::lexer::lexer::{tokenize, Lexer};
use mocha::lexer::tokens::{Token, TokenKind, TokenValue};

fn pull_all(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source.to_string(), Some("test.mocha".to_string()));
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token().unwrap();
        let done = token.kind == TokenKind::EndOfInput;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

#[test]
fn test_scan_small_compilation_unit() {
    let source = r#"
        class Counter extends Object {
            int count;

            void increment() {
                this.count = this.count + 1; // bump
            }
        }
    "#;

    let kinds: Vec<TokenKind> = pull_all(source)
        .into_iter()
        .filter(|token| !token.kind.is_trivia())
        .map(|token| token.kind)
        .collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Class,
            TokenKind::Identifier,
            TokenKind::Extends,
            TokenKind::Identifier,
            TokenKind::OpenCurly,
            TokenKind::Int,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::Void,
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::This,
            TokenKind::Dot,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::This,
            TokenKind::Dot,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::IntegerLiteral,
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
            TokenKind::CloseCurly,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_minimum_integer_is_a_single_token() {
    let tokens: Vec<Token> = pull_all("int x = -2147483648;")
        .into_iter()
        .filter(|token| !token.kind.is_trivia())
        .collect();

    assert_eq!(tokens[3].kind, TokenKind::IntegerLiteral);
    assert_eq!(tokens[3].value, TokenValue::Int(i32::MIN));
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
}

#[test]
fn test_hex_literal_reinterprets_bit_pattern() {
    let tokens = pull_all("0xFFFFFFFF");

    assert_eq!(tokens[0].value, TokenValue::Int(-1));
}

#[test]
fn test_keywords_fold_case_but_identifiers_do_not() {
    let tokens: Vec<Token> = pull_all("ClAsS CLASS class classify")
        .into_iter()
        .filter(|token| !token.kind.is_trivia())
        .collect();

    assert_eq!(tokens[0].kind, TokenKind::Class);
    assert_eq!(tokens[1].kind, TokenKind::Class);
    assert_eq!(tokens[2].kind, TokenKind::Class);
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].text, "classify");
}

#[test]
fn test_unsigned_shift_assign_longest_match() {
    let tokens = pull_all(">>>=");

    assert_eq!(tokens.len(), 2); // >>>=, EndOfInput
    assert_eq!(tokens[0].kind, TokenKind::UnsignedShiftRightEquals);
}

#[test]
fn test_string_escape_round_trip() {
    let tokens = pull_all("\"a\\tb\"");

    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].value, TokenValue::Str("a\tb".to_string()));
}

#[test]
fn test_unterminated_string_is_fatal() {
    let mut lexer = Lexer::new("\"abc\n".to_string(), Some("test.mocha".to_string()));
    let error = lexer.next_token().unwrap_err();

    assert_eq!(*error.get_kind(), ErrorKind::UnterminatedString);
}

#[test]
fn test_illegal_escape_in_char_literal_is_fatal() {
    let mut lexer = Lexer::new("'\\q'".to_string(), Some("test.mocha".to_string()));
    let error = lexer.next_token().unwrap_err();

    assert!(matches!(
        error.get_kind(),
        ErrorKind::IllegalEscapeSequence { .. }
    ));
}

#[test]
fn test_end_of_input_is_idempotent() {
    let mut lexer = Lexer::new("".to_string(), Some("test.mocha".to_string()));

    for _ in 0..5 {
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::EndOfInput);
        assert_eq!(token.position.line, 1);
        assert_eq!(token.position.column, 1);
    }
}

#[test]
fn test_tokenize_reports_error_with_position() {
    let error = tokenize(
        "int a;\nint b = `;\n".to_string(),
        Some("test.mocha".to_string()),
    )
    .unwrap_err();

    assert_eq!(*error.get_kind(), ErrorKind::IllegalCharacter { character: '`' });
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 9);
    assert_eq!(error.get_position().file.as_str(), "test.mocha");
}

#[test]
fn test_trivia_is_returned_not_discarded() {
    let tokens = pull_all("a /* c */ b");

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Whitespace,
            TokenKind::Comment,
            TokenKind::Whitespace,
            TokenKind::Identifier,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_independent_lexer_instances_do_not_share_state() {
    let mut first = Lexer::new("\"one\"".to_string(), Some("a.mocha".to_string()));
    let mut second = Lexer::new("\"two\"".to_string(), Some("b.mocha".to_string()));

    let one = first.next_token().unwrap();
    let two = second.next_token().unwrap();

    assert_eq!(one.value, TokenValue::Str("one".to_string()));
    assert_eq!(two.value, TokenValue::Str("two".to_string()));
}

#[test]
fn test_numeric_literal_family() {
    let tokens: Vec<Token> = pull_all("10 010 0x10 10L 10.0 10f 1e2")
        .into_iter()
        .filter(|token| !token.kind.is_trivia())
        .collect();

    assert_eq!(tokens[0].value, TokenValue::Int(10));
    assert_eq!(tokens[1].value, TokenValue::Int(8));
    assert_eq!(tokens[2].value, TokenValue::Int(16));
    assert_eq!(tokens[3].value, TokenValue::Long(10));
    assert_eq!(tokens[4].value, TokenValue::Double(10.0));
    assert_eq!(tokens[5].value, TokenValue::Float(10.0));
    assert_eq!(tokens[6].value, TokenValue::Double(100.0));
}
