use super::cursor::Cursor;
use super::token::{Literal, Span, Token, TokenKind};
use crate::diagnostics::ErrorReporter;
use crate::errors::LexError;

/// Scans source code into a sequence of tokens.
///
/// A scanner is single-use: [`Scanner::scan_tokens`] consumes it and hands
/// back the finished sequence.
pub struct Scanner<'src, R> {
    pub(super) cursor: Cursor<'src>,
    pub(super) start: usize,
    pub(super) line: usize,
    tokens: Vec<Token>,
    reporter: R,
}

impl<'src, R: ErrorReporter> Scanner<'src, R> {
    pub fn new(source: &'src str, reporter: R) -> Self {
        Self {
            cursor: Cursor::new(source),
            start: 0,
            line: 1,
            tokens: Vec::new(),
            reporter,
        }
    }

    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.cursor.is_at_end() {
            self.start = self.cursor.pos();
            self.scan_token();
        }

        self.tokens.push(Token::eof(self.line, self.cursor.pos()));
        tracing::debug!(
            tokens = self.tokens.len(),
            lines = self.line,
            "scan finished"
        );
        self.tokens
    }

    fn scan_token(&mut self) {
        let Some(ch) = self.cursor.advance() else {
            return;
        };

        match ch {
            b'(' => self.add_token(TokenKind::LeftParen),
            b')' => self.add_token(TokenKind::RightParen),
            b'{' => self.add_token(TokenKind::LeftBrace),
            b'}' => self.add_token(TokenKind::RightBrace),
            b',' => self.add_token(TokenKind::Comma),
            b'.' => self.add_token(TokenKind::Dot),
            b'-' => self.add_token(TokenKind::Minus),
            b'+' => self.add_token(TokenKind::Plus),
            b';' => self.add_token(TokenKind::Semicolon),
            b'*' => self.add_token(TokenKind::Star),
            b'!' => self.add_either(b'=', TokenKind::BangEqual, TokenKind::Bang),
            b'=' => self.add_either(b'=', TokenKind::EqualEqual, TokenKind::Equal),
            b'<' => self.add_either(b'=', TokenKind::LessEqual, TokenKind::Less),
            b'>' => self.add_either(b'=', TokenKind::GreaterEqual, TokenKind::Greater),
            b'/' => {
                if self.cursor.match_char(b'/') {
                    // Line comment: skip until newline
                    while self.cursor.peek().is_some_and(|c| c != b'\n') {
                        self.cursor.advance();
                    }
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            b' ' | b'\r' | b'\t' => {}
            b'\n' => self.line += 1,
            b'"' => self.scan_string(),
            c if c.is_ascii_digit() => self.scan_number(),
            c if is_ident_start(c) => self.scan_identifier(),
            _ => {
                let found = self.cursor.finish_char(self.start);
                let span = Span::new(self.start, self.cursor.pos());
                self.report(LexError::unexpected_character(found, self.line, span));
            }
        }
    }

    fn add_either(&mut self, next: u8, matched: TokenKind, single: TokenKind) {
        let kind = if self.cursor.match_char(next) {
            matched
        } else {
            single
        };
        self.add_token(kind);
    }

    pub(super) fn add_token(&mut self, kind: TokenKind) {
        self.push_token(kind, None);
    }

    pub(super) fn push_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        self.push_token_on(self.line, kind, literal);
    }

    /// Push a token attributed to `line`, the line its first character sits on.
    pub(super) fn push_token_on(
        &mut self,
        line: usize,
        kind: TokenKind,
        literal: Option<Literal>,
    ) {
        let span = Span::new(self.start, self.cursor.pos());
        let lexeme = self.cursor.slice_from(self.start);
        tracing::trace!(kind = %kind, lexeme, line, "token");
        self.tokens.push(Token::new(kind, lexeme, literal, line, span));
    }

    pub(super) fn report(&mut self, error: LexError) {
        tracing::debug!(line = error.line(), %error, "lexical error");
        self.reporter.report(error);
    }
}

pub(super) fn is_ident_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

pub(super) fn is_ident_continue(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}
