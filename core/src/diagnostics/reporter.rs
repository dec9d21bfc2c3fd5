use std::io::{self, Write};

use crate::errors::LexError;

/// Receives lexical errors as the scanner finds them.
pub trait ErrorReporter {
    fn report(&mut self, error: LexError);
}

impl<R: ErrorReporter + ?Sized> ErrorReporter for &mut R {
    fn report(&mut self, error: LexError) {
        (**self).report(error);
    }
}

/// Canonical one-line rendering: `[line <line>] Error: <message>`.
pub fn format_diagnostic(error: &LexError) -> String {
    format!("[line {}] Error: {}", error.line(), error)
}

/// Keeps every reported error, in report order.
#[derive(Debug, Default, Clone)]
pub struct Collector {
    errors: Vec<LexError>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<LexError> {
        self.errors
    }
}

impl ErrorReporter for Collector {
    fn report(&mut self, error: LexError) {
        self.errors.push(error);
    }
}

/// Writes each error to a stream as soon as it is reported and remembers
/// that something went wrong.
#[derive(Debug)]
pub struct StreamReporter<W> {
    out: W,
    had_error: bool,
}

impl StreamReporter<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> StreamReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            had_error: false,
        }
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ErrorReporter for StreamReporter<W> {
    fn report(&mut self, error: LexError) {
        self.had_error = true;
        if let Err(err) = writeln!(self.out, "{}", format_diagnostic(&error)) {
            tracing::warn!(%err, "failed to write diagnostic");
        }
    }
}
