mod completer;
mod helper;
mod highlighter;
mod hinter;

use std::path::Path;

use owo_colors::OwoColorize;
use rustyline::error::ReadlineError;
use rustyline::{Config, EditMode, Editor};

use self::helper::ReplHelper;
use crate::error::CliError;
use crate::render::Render;

/// Commands understood by the prompt in addition to source lines.
pub const COMMANDS: [&str; 3] = [".help", ".load", ".exit"];

pub fn run(render: &Render) -> Result<(), CliError> {
    let config = Config::builder()
        .history_ignore_dups(true)?
        .completion_type(rustyline::CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();

    let mut rl: Editor<ReplHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(config)?;
    rl.set_helper(Some(ReplHelper));

    println!(
        "{} {}",
        "rlox".bright_cyan().bold(),
        env!("CARGO_PKG_VERSION").bright_black()
    );
    println!(
        "{}",
        "Type .help for commands, an empty line to quit".bright_black()
    );

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                // An empty submission ends the session.
                if line.is_empty() {
                    break;
                }

                match handle_command(line.trim(), render) {
                    Some(Flow::Exit) => break,
                    Some(Flow::Continue) => continue,
                    None => {}
                }

                let _ = rl.add_history_entry(line.as_str());
                scan_snippet(render, &line, "<stdin>");
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{} {err}", "repl error:".red().bold());
                break;
            }
        }
    }

    println!("{}", "bye".bright_black());
    Ok(())
}

enum Flow {
    Continue,
    Exit,
}

fn handle_command(trimmed: &str, render: &Render) -> Option<Flow> {
    if trimmed == ".exit" {
        return Some(Flow::Exit);
    }
    if trimmed == ".help" {
        println!("{}", ".help                show commands".bright_blue());
        println!("{}", ".load <file.lox>     scan a script".bright_blue());
        println!("{}", ".exit                leave the prompt".bright_blue());
        return Some(Flow::Continue);
    }
    if let Some(path) = trimmed.strip_prefix(".load ") {
        let path = path.trim();
        match crate::read_source(Path::new(path)) {
            Ok(source) => scan_snippet(render, &source, path),
            Err(err) => eprintln!("{} {err}", "load error:".red().bold()),
        }
        return Some(Flow::Continue);
    }
    None
}

/// Each snippet is scanned on its own; errors never carry over to the next.
fn scan_snippet(render: &Render, source: &str, origin: &str) {
    if let Err(err) = render.scan(source, origin) {
        eprintln!("{} {err}", "error:".red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unterminated_string_line_is_scanned_and_reported() {
        let render = Render::default();
        assert!(matches!(render.scan("print \"hi", "<stdin>"), Ok(true)));
        assert!(handle_command("print \"hi", &render).is_none());
    }

    #[test]
    fn commands_are_recognised() {
        let render = Render::default();
        assert!(matches!(handle_command(".exit", &render), Some(Flow::Exit)));
        assert!(matches!(handle_command(".help", &render), Some(Flow::Continue)));
        assert!(matches!(
            handle_command(".load does/not/exist.lox", &render),
            Some(Flow::Continue)
        ));
    }
}
