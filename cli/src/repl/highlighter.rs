use std::borrow::Cow;

use owo_colors::OwoColorize;
use rlox::{Span, Token, TokenKind};

/// Colour a prompt line using the scanner itself, so what is highlighted is
/// exactly what will be tokenized.
pub fn highlight_line(line: &str) -> Cow<'_, str> {
    let lexed = rlox::lex(line);

    let mut segments: Vec<(Span, Style)> = lexed
        .tokens
        .iter()
        .filter(|t| t.kind != TokenKind::Eof)
        .map(|t| (t.span, style_for(t)))
        .collect();
    segments.extend(lexed.errors.iter().map(|e| (e.span(), Style::Error)));
    if segments.is_empty() && !line.contains("//") {
        return Cow::Borrowed(line);
    }
    segments.sort_by_key(|(span, _)| span.start);

    let mut out = String::with_capacity(line.len() * 2);
    let mut last = 0;
    for (span, style) in segments {
        push_gap(&mut out, &line[last..span.start]);
        out.push_str(&style.paint(&line[span.start..span.end]));
        last = span.end;
    }
    push_gap(&mut out, &line[last..]);
    Cow::Owned(out)
}

pub fn highlight_prompt(prompt: &str) -> Cow<'_, str> {
    if prompt == "> " {
        return Cow::Owned(format!("{} ", ">".bright_green().bold()));
    }
    Cow::Borrowed(prompt)
}

pub fn highlight_hint(hint: &str) -> Cow<'_, str> {
    Cow::Owned(hint.bright_black().to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Keyword,
    Literal,
    Text,
    Plain,
    Error,
}

impl Style {
    fn paint(self, text: &str) -> String {
        match self {
            Style::Keyword => text.blue().bold().to_string(),
            Style::Literal => text.yellow().to_string(),
            Style::Text => text.green().to_string(),
            Style::Plain => text.to_string(),
            Style::Error => text.red().underline().to_string(),
        }
    }
}

fn style_for(token: &Token) -> Style {
    match token.kind {
        TokenKind::String => Style::Text,
        TokenKind::Number | TokenKind::True | TokenKind::False | TokenKind::Nil => Style::Literal,
        kind if kind.is_keyword() => Style::Keyword,
        _ => Style::Plain,
    }
}

/// Text between tokens is whitespace and line comments. A comment is painted
/// up to, not including, its newline.
fn push_gap(out: &mut String, gap: &str) {
    for piece in gap.split_inclusive('\n') {
        let (body, newline) = match piece.strip_suffix('\n') {
            Some(body) => (body, "\n"),
            None => (piece, ""),
        };
        match body.find("//") {
            Some(idx) => {
                let comment = &body[idx..];
                out.push_str(&body[..idx]);
                out.push_str(&comment.bright_black().to_string());
            }
            None => out.push_str(body),
        }
        out.push_str(newline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_identifiers_keep_their_text() {
        assert_eq!(highlight_line("foo bar"), "foo bar");
    }

    #[test]
    fn empty_line_is_borrowed() {
        assert!(matches!(highlight_line(""), Cow::Borrowed("")));
    }

    #[test]
    fn keywords_and_literals_are_coloured() {
        let out = highlight_line("var s = \"hi\";");
        assert!(out.contains(&"var".blue().bold().to_string()));
        assert!(out.contains(&"\"hi\"".green().to_string()));
        assert!(out.ends_with(';'));
    }

    #[test]
    fn comments_and_bad_characters_are_marked() {
        let out = highlight_line("x @ // note");
        assert!(out.starts_with('x'));
        assert!(out.contains(&"@".red().underline().to_string()));
        assert!(out.contains(&"// note".bright_black().to_string()));
    }

    #[test]
    fn comment_colour_stops_at_newline() {
        let out = highlight_line("// c\n  print");
        let comment = "// c".bright_black().to_string();
        assert!(out.starts_with(&format!("{comment}\n  ")));
        assert!(out.ends_with(&"print".blue().bold().to_string()));
    }

    #[test]
    fn consecutive_comment_lines_are_painted_separately() {
        let mut out = String::new();
        push_gap(&mut out, " // a\n// b\n");
        let expected = format!(
            " {}\n{}\n",
            "// a".bright_black(),
            "// b".bright_black()
        );
        assert_eq!(out, expected);
    }
}
