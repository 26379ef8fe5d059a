mod comment_scanner;
pub mod cursor;
pub mod keywords;
mod literal_scanner;
pub mod scanner;
pub mod token;

use crate::diagnostics::{Diagnostics, Reporter};
use token::Token;

/// Tokenize source code, sending any lexical errors to `reporter`.
pub fn scan(source: &str, reporter: &mut dyn Reporter) -> Vec<Token> {
    scanner::Scanner::new(source, reporter).scan_tokens()
}

/// Tokenize source code, collecting errors alongside the tokens.
pub fn lex(source: &str) -> (Vec<Token>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan(source, &mut diagnostics);
    (tokens, diagnostics)
}
