use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::lexer::token::Span;

/// A recoverable lexical error. The scanner reports these and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum LexError {
    #[error("unexpected character")]
    #[diagnostic(
        code(rlox::lex::unexpected_character),
        help("only ASCII letters, digits, punctuation and whitespace may appear outside strings")
    )]
    UnexpectedCharacter {
        found: char,
        line: usize,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("Unterminated String.")]
    #[diagnostic(
        code(rlox::lex::unterminated_string),
        help("add a closing '\"' before the end of the input")
    )]
    UnterminatedString {
        line: usize,
        #[label("string starts here")]
        span: SourceSpan,
    },
}

impl LexError {
    pub fn unexpected_character(found: char, line: usize, span: Span) -> Self {
        Self::UnexpectedCharacter {
            found,
            line,
            span: (span.start, span.len()).into(),
        }
    }

    pub fn unterminated_string(line: usize, span: Span) -> Self {
        Self::UnterminatedString {
            line,
            span: (span.start, span.len()).into(),
        }
    }

    /// 1-based line the error is reported on.
    pub fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. } | Self::UnterminatedString { line, .. } => {
                *line
            }
        }
    }

    pub fn span(&self) -> Span {
        let span = match self {
            Self::UnexpectedCharacter { span, .. } | Self::UnterminatedString { span, .. } => {
                span
            }
        };
        Span::new(span.offset(), span.offset() + span.len())
    }
}
