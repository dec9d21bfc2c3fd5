use rlox::lexer::token::KEYWORDS;
use rustyline::completion::Pair;

use super::COMMANDS;

pub fn complete_line(line: &str, pos: usize) -> (usize, Vec<Pair>) {
    let safe_pos = pos.min(line.len());
    let prefix = &line[..safe_pos];

    if prefix.starts_with('.') && !prefix.contains(' ') {
        let commands = COMMANDS
            .iter()
            .copied()
            .filter(|cmd| cmd.starts_with(prefix))
            .collect::<Vec<_>>();
        return (0, pairs(&commands));
    }

    let start = word_start(prefix);
    let needle = &prefix[start..];
    if needle.is_empty() {
        return (start, Vec::new());
    }

    (start, pairs(&keyword_candidates(needle)))
}

/// Keywords starting with `needle`, in table order.
pub fn keyword_candidates(needle: &str) -> Vec<&'static str> {
    KEYWORDS
        .iter()
        .map(|&(text, _)| text)
        .filter(|kw| kw.starts_with(needle))
        .collect()
}

/// Byte offset where the identifier ending at `prefix`'s end begins.
pub fn word_start(prefix: &str) -> usize {
    prefix
        .bytes()
        .rposition(|b| !(b.is_ascii_alphanumeric() || b == b'_'))
        .map_or(0, |i| i + 1)
}

fn pairs(words: &[&str]) -> Vec<Pair> {
    words
        .iter()
        .map(|word| Pair {
            display: (*word).to_string(),
            replacement: (*word).to_string(),
        })
        .collect()
}
