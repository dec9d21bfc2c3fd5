use super::completer::{keyword_candidates, word_start};

/// Suggest the rest of a keyword when the word under the cursor can only
/// become one.
pub fn hint_for(line: &str, pos: usize) -> Option<String> {
    if pos < line.len() {
        return None;
    }

    let needle = &line[word_start(line)..];
    if needle.is_empty() {
        return None;
    }

    match keyword_candidates(needle).as_slice() {
        [only] if *only != needle => Some(only[needle.len()..].to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::hint_for;

    #[test]
    fn hints_unique_keyword_completion() {
        assert_eq!(hint_for("retu", 4), Some("rn".to_string()));
        assert_eq!(hint_for("x = cl", 6), Some("ass".to_string()));
    }

    #[test]
    fn no_hint_when_ambiguous_or_complete() {
        assert_eq!(hint_for("f", 1), None);
        assert_eq!(hint_for("print", 5), None);
        assert_eq!(hint_for("", 0), None);
    }

    #[test]
    fn no_hint_with_cursor_inside_line() {
        assert_eq!(hint_for("retu", 2), None);
    }
}
