//! Literal value decoding.
//!
//! Each decoder receives the exact text matched by its pattern, so the
//! shape of the input is already guaranteed (prefixes, digit ranges,
//! suffixes). Hex and octal literals are decoded by reinterpreting the
//! unsigned bit pattern as a signed value, so `0xFFFFFFFF` is -1.
//! Decimal digit runs are folded with wrapping unsigned accumulation and
//! reinterpreted the same way, which keeps out-of-range text from ever
//! aborting the scan.

use crate::lexer::tokens::TokenValue;

/// Wrapping base-10 fold over a decimal digit run.
fn fold_decimal(digits: &str) -> u64 {
    digits.chars().fold(0u64, |accumulator, c| {
        accumulator
            .wrapping_mul(10)
            .wrapping_add(u64::from(c.to_digit(10).unwrap_or(0)))
    })
}

/// Strips any leading zeros, leaving only the significant digits.
fn significant_digits(digits: &str) -> &str {
    digits.trim_start_matches('0')
}

pub fn decode_decimal_int(text: &str) -> i32 {
    fold_decimal(text) as i32
}

/// Decodes `0x`/`0X` followed by at most 8 significant hex digits.
pub fn decode_hex_int(text: &str) -> i32 {
    let digits = significant_digits(&text[2..]);
    u32::from_str_radix(digits, 16).unwrap_or(0) as i32
}

/// Decodes one or more leading zeros followed by at most 15 octal digits.
/// Fifteen octal digits exceed 32 bits, so only the low 32 are kept.
pub fn decode_octal_int(text: &str) -> i32 {
    let digits = significant_digits(text);
    u64::from_str_radix(digits, 8).unwrap_or(0) as i32
}

pub fn decode_decimal_long(text: &str) -> i64 {
    fold_decimal(strip_suffix(text)) as i64
}

/// Decodes a hex long of at most 16 significant digits, `l`/`L` suffix excluded.
pub fn decode_hex_long(text: &str) -> i64 {
    let digits = significant_digits(&strip_suffix(text)[2..]);
    u64::from_str_radix(digits, 16).unwrap_or(0) as i64
}

/// Decodes an octal long of at most 21 digits (63 bits), suffix excluded.
pub fn decode_octal_long(text: &str) -> i64 {
    let digits = significant_digits(strip_suffix(text));
    u64::from_str_radix(digits, 8).unwrap_or(0) as i64
}

/// Decodes a floating-point literal. A trailing `f`/`F` selects single
/// precision, `d`/`D` or no suffix selects double precision; the suffix
/// is excluded from the parsed numeric text.
pub fn decode_float(text: &str) -> TokenValue {
    match text.chars().last() {
        Some('f') | Some('F') => TokenValue::Float(strip_suffix(text).parse().unwrap_or(0.0)),
        Some('d') | Some('D') => TokenValue::Double(strip_suffix(text).parse().unwrap_or(0.0)),
        _ => TokenValue::Double(text.parse().unwrap_or(0.0)),
    }
}

/// Drops the single-letter type suffix (`l`, `f`, `d` in either case).
fn strip_suffix(text: &str) -> &str {
    match text.chars().last() {
        Some(c) if c.is_ascii_alphabetic() => &text[..text.len() - 1],
        _ => text,
    }
}
