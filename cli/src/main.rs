use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

mod error;
mod render;
mod repl;

use error::{CliError, EX_DATAERR, EX_USAGE};
use render::Render;

const USAGE: &str = "Usage: rlox [script]";

#[derive(Parser)]
#[command(name = "rlox", version, about = "Tokenizer for the Lox scripting language")]
struct Cli {
    /// Path to a script to scan; starts the prompt when omitted
    script: Option<PathBuf>,
    /// Scan inline source instead of a file
    #[arg(long, conflicts_with = "script")]
    eval: Option<String>,
    /// Print the token stream as JSON
    #[arg(long)]
    json: bool,
    /// Render lexical errors with a source snippet
    #[arg(long)]
    pretty: bool,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            println!("{USAGE}");
            return ExitCode::from(EX_USAGE);
        }
    };

    init_tracing(cli.verbose);

    let render = Render {
        json: cli.json,
        pretty: cli.pretty,
    };

    let result = match (cli.eval, cli.script) {
        (Some(code), _) => render.scan(&code, "<eval>"),
        (None, Some(path)) => run_file(&render, &path),
        (None, None) => repl::run(&render).map(|()| false),
    };

    match result {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::from(EX_DATAERR),
        Err(err) => {
            let code = err.exit_code();
            eprintln!("{} {:?}", "error:".red().bold(), miette::Report::new(err));
            ExitCode::from(code)
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("rlox=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rlox=warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub(crate) fn read_source(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn run_file(render: &Render, path: &Path) -> Result<bool, CliError> {
    let source = read_source(path)?;
    render.scan(&source, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EX_IOERR, EX_NOINPUT, EX_SOFTWARE};

    #[test]
    fn missing_script_is_a_read_error() {
        let path = Path::new("definitely/not/here.lox");
        let err = run_file(&Render::default(), path).expect_err("file does not exist");
        assert!(matches!(&err, CliError::Read { path: p, .. } if p == path));
        assert_eq!(err.exit_code(), EX_NOINPUT);
        assert!(err.to_string().contains("definitely/not/here.lox"));
    }

    #[test]
    fn exit_codes_follow_sysexits() {
        let write = CliError::Write(std::io::Error::other("closed"));
        assert_eq!(write.exit_code(), EX_IOERR);

        let json = serde_json::from_str::<serde_json::Value>("{").expect_err("truncated json");
        assert_eq!(CliError::from(json).exit_code(), EX_SOFTWARE);
        assert_eq!((EX_USAGE, EX_DATAERR), (64, 65));
    }

    #[test]
    fn usage_line_is_plain_text() {
        assert_eq!(USAGE, "Usage: rlox [script]");
        assert!(!USAGE.contains('\u{1b}'));
    }

    #[test]
    fn extra_positional_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["rlox", "a.lox", "b.lox"]).is_err());
        let cli = Cli::try_parse_from(["rlox", "a.lox"]).expect("one script is fine");
        assert_eq!(cli.script, Some(PathBuf::from("a.lox")));
        assert!(Cli::try_parse_from(["rlox", "a.lox", "--eval", "1"]).is_err());
    }
}
