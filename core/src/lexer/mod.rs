pub mod cursor;
mod number_ident_scanner;
pub mod scanner;
mod string_scanner;
pub mod token;

use crate::diagnostics::{Collector, ErrorReporter};
use crate::errors::LexError;
use token::Token;

/// Tokens plus every lexical error found while producing them.
#[derive(Debug, Clone)]
pub struct Lexed {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl Lexed {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Tokenize source code, collecting lexical errors alongside the tokens.
pub fn lex(source: &str) -> Lexed {
    let mut collector = Collector::new();
    let tokens = lex_with(source, &mut collector);
    Lexed {
        tokens,
        errors: collector.into_errors(),
    }
}

/// Tokenize source code, handing lexical errors to `reporter`.
pub fn lex_with<R: ErrorReporter>(source: &str, reporter: R) -> Vec<Token> {
    scanner::Scanner::new(source, reporter).scan_tokens()
}
