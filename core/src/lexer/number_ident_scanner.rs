use super::scanner::{Scanner, is_ident_continue};
use super::token::{Literal, TokenKind, keyword};
use crate::diagnostics::ErrorReporter;

impl<R: ErrorReporter> Scanner<'_, R> {
    pub(super) fn scan_number(&mut self) {
        self.consume_digits();

        // A '.' only belongs to the number when a digit follows it.
        if self.cursor.peek() == Some(b'.')
            && self.cursor.peek_next().is_some_and(|c| c.is_ascii_digit())
        {
            self.cursor.advance();
            self.consume_digits();
        }

        let text = self.cursor.slice_from(self.start);
        let value: f64 = text.parse().expect("scanned digits should parse as f64");
        self.push_token(TokenKind::Number, Some(Literal::Number(value)));
    }

    fn consume_digits(&mut self) {
        while self.cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.cursor.advance();
        }
    }

    pub(super) fn scan_identifier(&mut self) {
        while self.cursor.peek().is_some_and(is_ident_continue) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.start);
        let kind = keyword(text).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }
}
