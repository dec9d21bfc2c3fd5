/// Character-level reader over the source string.
///
/// All recognised lexical classes are ASCII, so the cursor works on bytes and
/// only decodes a full `char` when it has to step over something it does not
/// recognise.
pub struct Cursor<'src> {
    source: &'src str,
    pos: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self { source, pos: 0 }
    }

    /// Current byte position in the source.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Peek at the current character without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    /// Peek at the next character (one ahead of current).
    pub fn peek_next(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos + 1).copied()
    }

    /// Advance one character and return it.
    pub fn advance(&mut self) -> Option<u8> {
        let ch = self.peek()?;
        self.pos += 1;
        Some(ch)
    }

    /// Finish consuming a character whose first byte was already taken by
    /// [`Cursor::advance`], returning the decoded character.
    pub fn finish_char(&mut self, start: usize) -> char {
        let ch = self.source[start..].chars().next().unwrap_or('\u{FFFD}');
        self.pos = start + ch.len_utf8();
        ch
    }

    /// Advance if the current character matches `expected`.
    pub fn match_char(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Return a slice of the source from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'src str {
        &self.source[start..self.pos]
    }

    /// Return a slice of the source between two byte offsets.
    pub fn slice(&self, start: usize, end: usize) -> &'src str {
        &self.source[start..end]
    }

    /// Whether the cursor has reached the end.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }
}

#[cfg(test)]
mod tests {
    use super::Cursor;

    #[test]
    fn peeking_never_consumes() {
        let cursor = Cursor::new("ab");
        assert_eq!(cursor.peek(), Some(b'a'));
        assert_eq!(cursor.peek_next(), Some(b'b'));
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn lookahead_past_end_is_none() {
        let mut cursor = Cursor::new("a");
        assert_eq!(cursor.advance(), Some(b'a'));
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.peek_next(), None);
        assert_eq!(cursor.advance(), None);
        assert!(!cursor.match_char(b'='));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn match_char_consumes_only_on_success() {
        let mut cursor = Cursor::new("=>");
        assert!(!cursor.match_char(b'>'));
        assert_eq!(cursor.pos(), 0);
        assert!(cursor.match_char(b'='));
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    fn finish_char_steps_over_multibyte_sequences() {
        let mut cursor = Cursor::new("é;");
        cursor.advance();
        assert_eq!(cursor.finish_char(0), 'é');
        assert_eq!(cursor.peek(), Some(b';'));
    }
}
