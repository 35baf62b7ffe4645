//! Error types and error handling for the scanner.
//!
//! This module defines the fatal lexical error types surfaced to the
//! caller. It includes:
//!
//! - An error structure carrying source position information
//! - One variant per fatal lexical condition
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions
//!
//! Every lexical error is fatal: the scanner never resynchronizes or
//! resumes past the offending input.

pub mod errors;

#[cfg(test)]
mod tests;
