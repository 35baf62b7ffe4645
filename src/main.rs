use std::{env, fs::read_to_string, process::exit, time::Instant};

use mocha::{
    display_error,
    lexer::{
        lexer::Lexer,
        tokens::TokenKind,
    },
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: mocha <file>");
        exit(1);
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains('/') {
        file_path.split('/').next_back().unwrap_or(file_path)
    } else {
        file_path
    };

    let source = read_to_string(file_path).expect("Failed to read file!");

    let start = Instant::now();
    let mut lexer = Lexer::new(source.clone(), Some(String::from(file_name)));
    let mut count = 0usize;

    loop {
        match lexer.next_token() {
            Ok(token) => {
                if token.kind == TokenKind::EndOfInput {
                    break;
                }
                if !token.kind.is_trivia() {
                    token.debug();
                    count += 1;
                }
            }
            Err(error) => {
                display_error(&error, &source);
                exit(1);
            }
        }
    }

    println!("Scanned {} tokens in {:?}", count, start.elapsed());
}
