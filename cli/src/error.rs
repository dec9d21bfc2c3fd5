use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use rustyline::error::ReadlineError;
use thiserror::Error;

/// sysexits(3) codes used by the batch runner.
pub const EX_USAGE: u8 = 64;
pub const EX_DATAERR: u8 = 65;
pub const EX_NOINPUT: u8 = 66;
pub const EX_SOFTWARE: u8 = 70;
pub const EX_IOERR: u8 = 74;

/// Failures of the shell around the scanner. Lexical errors are not among
/// them: those are reported, not returned.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("could not read '{}'", path.display())]
    #[diagnostic(code(rlox::cli::read))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output")]
    #[diagnostic(code(rlox::cli::write))]
    Write(#[from] io::Error),

    #[error("failed to encode tokens as JSON")]
    #[diagnostic(code(rlox::cli::json))]
    Json(#[from] serde_json::Error),

    #[error("failed to initialize REPL")]
    #[diagnostic(code(rlox::cli::repl))]
    Repl(#[from] ReadlineError),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Read { .. } => EX_NOINPUT,
            CliError::Write(_) => EX_IOERR,
            CliError::Json(_) | CliError::Repl(_) => EX_SOFTWARE,
        }
    }
}
