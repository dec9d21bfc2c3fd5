use std::io::{self, Write};

use miette::NamedSource;
use owo_colors::OwoColorize;
use rlox::diagnostics::source_map::SourceMap;
use rlox::{LexError, StreamReporter, Token};

use crate::error::CliError;

/// How scan results are written out.
#[derive(Debug, Clone, Copy, Default)]
pub struct Render {
    pub json: bool,
    pub pretty: bool,
}

impl Render {
    /// Scan `source`, print its tokens to stdout and its lexical errors to
    /// stderr. Returns whether any lexical error was reported.
    pub fn scan(&self, source: &str, origin: &str) -> Result<bool, CliError> {
        tracing::debug!(origin, bytes = source.len(), "scanning");

        let (tokens, had_error) = if self.pretty {
            let lexed = rlox::lex(source);
            let map = SourceMap::from_source(source);
            for error in &lexed.errors {
                eprintln!("{}", pretty_error(&map, source, origin, error));
            }
            let had_error = lexed.has_errors();
            (lexed.tokens, had_error)
        } else {
            let mut reporter = StreamReporter::stderr();
            let tokens = rlox::lex_with(source, &mut reporter);
            (tokens, reporter.had_error())
        };

        let mut out = io::stdout().lock();
        self.write_tokens(&mut out, &tokens)?;
        out.flush()?;
        Ok(had_error)
    }

    pub fn write_tokens<W: Write>(&self, out: &mut W, tokens: &[Token]) -> Result<(), CliError> {
        if self.json {
            serde_json::to_writer_pretty(&mut *out, tokens)?;
            writeln!(out)?;
        } else {
            for token in tokens {
                writeln!(out, "{token}")?;
            }
        }
        Ok(())
    }
}

fn pretty_error(map: &SourceMap, source: &str, origin: &str, error: &LexError) -> String {
    let pos = map.position(error.span().start);
    let report = miette::Report::new(error.clone())
        .with_source_code(NamedSource::new(origin, source.to_owned()));
    format!(
        "{} at {}:{}:{}\n{report:?}",
        "lex error".red().bold(),
        origin.cyan(),
        pos.line,
        pos.col
    )
}

#[cfg(test)]
mod tests {
    use super::{Render, pretty_error};
    use rlox::diagnostics::source_map::SourceMap;

    fn render(render: Render, source: &str) -> String {
        let tokens = rlox::lex(source).tokens;
        let mut out = Vec::new();
        render
            .write_tokens(&mut out, &tokens)
            .expect("writing to a Vec cannot fail");
        String::from_utf8(out).expect("utf-8 output")
    }

    #[test]
    fn plain_output_is_one_token_per_line() {
        let out = render(Render::default(), "print 2.5;");
        assert_eq!(out, "PRINT print \nNUMBER 2.5 2.5\nSEMICOLON ; \nEOF  \n");
    }

    #[test]
    fn json_output_is_an_array_of_tokens() {
        let out = render(
            Render {
                json: true,
                pretty: false,
            },
            "\"hi\"",
        );
        let value: serde_json::Value = serde_json::from_str(&out).expect("valid json");
        let tokens = value.as_array().expect("array of tokens");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0]["kind"], "STRING");
        assert_eq!(tokens[0]["lexeme"], "\"hi\"");
        assert_eq!(tokens[0]["literal"], "hi");
        assert_eq!(tokens[1]["kind"], "EOF");
    }

    #[test]
    fn scan_reports_whether_errors_occurred() {
        let render = Render::default();
        assert!(matches!(render.scan("@", "<test>"), Ok(true)));
        assert!(matches!(render.scan("print 1;", "<test>"), Ok(false)));

        let pretty = Render {
            json: false,
            pretty: true,
        };
        assert!(matches!(pretty.scan("\"open", "<test>"), Ok(true)));
    }

    #[test]
    fn pretty_error_names_code_and_position() {
        let source = "var a;\nprint @;";
        let lexed = rlox::lex(source);
        assert_eq!(lexed.errors.len(), 1);

        let map = SourceMap::from_source(source);
        let out = pretty_error(&map, source, "demo.lox", &lexed.errors[0]);
        assert!(out.contains("rlox::lex::unexpected_character"), "{out}");
        assert!(out.contains(":2:7"), "{out}");
        assert!(out.contains("demo.lox"), "{out}");
    }
}
