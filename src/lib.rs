#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// A 1-based line/column location in a scanned source file.
#[derive(Debug, Clone)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(line: u32, column: u32, file: Rc<String>) -> Self {
        Position { line, column, file }
    }

    pub fn null() -> Self {
        Position {
            line: 1,
            column: 1,
            file: Rc::new(String::from("<null>")),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

pub fn get_source_line(source: &str, line: u32) -> Option<&str> {
    source.lines().nth(line.saturating_sub(1) as usize)
}

pub fn display_error(error: &Error, source: &str) {
    /*
        Error: message
        -> final.mocha:3:9
           |
        3  | char c = '\q';
           | --------^
    */

    let position = error.get_position();
    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", position);
    println!("{:>padding$}", "|");

    let line_text = get_source_line(source, position.line).unwrap_or("");
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (&string[start..], start)
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_source_line() {
        let source = "class A {\n    int x;\n}\n";

        assert_eq!(super::get_source_line(source, 1), Some("class A {"));
        assert_eq!(super::get_source_line(source, 2), Some("    int x;"));
        assert_eq!(super::get_source_line(source, 3), Some("}"));
        assert_eq!(super::get_source_line(source, 4), None);
    }

    #[test]
    fn test_remove_starting_whitespace() {
        let (text, removed) = super::remove_starting_whitespace("    int x;");
        assert_eq!(text, "int x;");
        assert_eq!(removed, 4);

        let (text, removed) = super::remove_starting_whitespace("class");
        assert_eq!(text, "class");
        assert_eq!(removed, 0);
    }
}
