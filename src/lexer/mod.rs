//! Lexical analysis module for the Mocha language.
//!
//! This module contains the scanner that converts pre-normalized source
//! text into a stream of typed tokens for parsing. It handles:
//!
//! - Longest-match tokenization driven by an ordered regex pattern table
//! - Case-insensitive keywords, case-sensitive identifiers
//! - Literal value decoding (int, long, float, double, char, string)
//! - Escape sequence processing inside string and character literals
//! - 1-based line/column position tracking for error reporting
//! - Comments and whitespace emitted as trivia tokens for the caller to filter

pub mod escapes;
pub mod lexer;
pub mod literals;
pub mod tokens;
