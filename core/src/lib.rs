pub mod diagnostics;
pub mod errors;
pub mod lexer;

pub use diagnostics::{Collector, ErrorReporter, StreamReporter};
pub use errors::LexError;
pub use lexer::token::{Literal, Span, Token, TokenKind};
pub use lexer::{Lexed, lex, lex_with};
