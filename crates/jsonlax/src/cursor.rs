//! Character cursor over the input text.
//!
//! The cursor is an immutable view of the source plus a scan position, and
//! supports stepping back by exactly one character. Pushback is a lookahead
//! mechanism, not a backtracking buffer: the number lexer and the comment
//! skipper each un-read the single character that terminated their token,
//! and nothing ever un-reads more than that.

/// A scanning position over an input string with one-character pushback.
///
/// The position is a byte offset that always lies on a character boundary
/// within `[0, text.len()]`; reading past the end yields `None`, never a
/// panic. A parallel character offset is kept for error reporting.
pub(crate) struct Cursor<'a> {
    text: &'a str,
    byte_pos: usize,
    char_pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            text,
            byte_pos: 0,
            char_pos: 0,
        }
    }

    /// Returns the character at the current position and advances past it,
    /// or `None` at end of input.
    pub(crate) fn next(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.byte_pos += c.len_utf8();
        self.char_pos += 1;
        Some(c)
    }

    /// Returns the character at the current position without advancing.
    pub(crate) fn peek(&self) -> Option<char> {
        self.text[self.byte_pos..].chars().next()
    }

    /// Moves the position back by one, making `c` the next character read.
    ///
    /// `c` must be the character most recently returned by [`Cursor::next`];
    /// the cursor never steps back further than that.
    pub(crate) fn unread(&mut self, c: char) {
        let len = c.len_utf8();
        debug_assert!(
            self.byte_pos >= len && self.text[self.byte_pos - len..].starts_with(c),
            "unread of a character that was not just read"
        );
        self.byte_pos -= len;
        self.char_pos -= 1;
    }

    /// Whether the cursor has reached the end of the input.
    pub(crate) fn is_eof(&self) -> bool {
        self.byte_pos >= self.text.len()
    }

    /// Character offset of the next unread character, for error reporting.
    pub(crate) fn offset(&self) -> usize {
        self.char_pos
    }
}

#[cfg(test)]
mod tests {
    use super::Cursor;

    #[test]
    fn reads_in_order() {
        let mut c = Cursor::new("ab");
        assert_eq!(c.next(), Some('a'));
        assert_eq!(c.next(), Some('b'));
        assert_eq!(c.next(), None);
        assert!(c.is_eof());
    }

    #[test]
    fn peek_does_not_advance() {
        let mut c = Cursor::new("x");
        assert_eq!(c.peek(), Some('x'));
        assert_eq!(c.offset(), 0);
        assert_eq!(c.next(), Some('x'));
        assert_eq!(c.peek(), None);
    }

    #[test]
    fn unread_steps_back_once() {
        let mut c = Cursor::new("12");
        let first = c.next().unwrap();
        c.unread(first);
        assert_eq!(c.offset(), 0);
        assert_eq!(c.next(), Some('1'));
        assert_eq!(c.next(), Some('2'));
    }

    #[test]
    fn unread_is_safe_after_peek() {
        let mut c = Cursor::new("/x");
        let slash = c.next().unwrap();
        assert_eq!(c.peek(), Some('x'));
        c.unread(slash);
        assert_eq!(c.next(), Some('/'));
    }

    #[test]
    fn offset_counts_characters_not_bytes() {
        let mut c = Cursor::new("é1");
        assert_eq!(c.next(), Some('é'));
        assert_eq!(c.offset(), 1);
        assert_eq!(c.next(), Some('1'));
        assert_eq!(c.offset(), 2);
    }

    #[test]
    fn unread_multibyte_restores_position() {
        let mut c = Cursor::new("é1");
        let e = c.next().unwrap();
        c.unread(e);
        assert_eq!(c.offset(), 0);
        assert_eq!(c.next(), Some('é'));
    }

    #[test]
    fn next_at_eof_stays_at_eof() {
        let mut c = Cursor::new("");
        assert!(c.is_eof());
        assert_eq!(c.next(), None);
        assert_eq!(c.offset(), 0);
    }
}
