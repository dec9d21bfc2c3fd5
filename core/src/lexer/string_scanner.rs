use super::scanner::Scanner;
use super::token::{Literal, Span, TokenKind};
use crate::diagnostics::ErrorReporter;
use crate::errors::LexError;

impl<R: ErrorReporter> Scanner<'_, R> {
    /// Scan a string literal whose opening quote has been consumed.
    ///
    /// Strings may span lines and escapes are not processed: the literal is
    /// exactly the text between the quotes.
    pub(super) fn scan_string(&mut self) {
        let first_line = self.line;
        while let Some(c) = self.cursor.peek() {
            if c == b'"' {
                break;
            }
            if c == b'\n' {
                self.line += 1;
            }
            self.cursor.advance();
        }

        if self.cursor.is_at_end() {
            let span = Span::new(self.start, self.cursor.pos());
            self.report(LexError::unterminated_string(self.line, span));
            return;
        }

        // The closing quote.
        self.cursor.advance();

        let value = self.cursor.slice(self.start + 1, self.cursor.pos() - 1);
        self.push_token_on(
            first_line,
            TokenKind::String,
            Some(Literal::String(value.to_owned())),
        );
    }
}
