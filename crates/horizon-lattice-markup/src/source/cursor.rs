//! Cursor over source lines.

use super::SourceLine;

/// A forward-only position over a slice of source lines.
///
/// One cursor is owned by one parsing pass and lent by `&mut` to each step
/// that consumes lines, so the position only ever moves through the cursor.
#[derive(Debug)]
pub struct LineCursor<'s, 'a> {
    lines: &'s [SourceLine<'a>],
    position: usize,
}

impl<'s, 'a> LineCursor<'s, 'a> {
    /// Create a cursor at the first line.
    pub fn new(lines: &'s [SourceLine<'a>]) -> Self {
        Self { lines, position: 0 }
    }

    /// The line at the cursor, without consuming it.
    pub fn peek(&self) -> Option<&'s SourceLine<'a>> {
        self.lines.get(self.position)
    }

    /// The first non-blank line at or after the cursor, without consuming.
    pub fn peek_non_blank(&self) -> Option<&'s SourceLine<'a>> {
        self.lines[self.position.min(self.lines.len())..]
            .iter()
            .find(|line| !line.is_blank())
    }

    /// The first line at or after the cursor that is neither blank nor a
    /// comment, without consuming.
    pub fn peek_content(&self) -> Option<&'s SourceLine<'a>> {
        self.lines[self.position.min(self.lines.len())..]
            .iter()
            .find(|line| !line.is_blank() && !line.is_comment())
    }

    /// Index of the line at the cursor.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<'s, 'a> Iterator for LineCursor<'s, 'a> {
    type Item = &'s SourceLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.get(self.position)?;
        self.position += 1;
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::split_lines;

    #[test]
    fn peek_does_not_advance() {
        let lines = split_lines("a\nb");
        let mut cursor = LineCursor::new(&lines);

        assert_eq!(cursor.peek().map(|l| l.text), Some("a"));
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.next().map(|l| l.text), Some("a"));
        assert_eq!(cursor.peek().map(|l| l.text), Some("b"));
    }

    #[test]
    fn skip_blank_lookahead() {
        let lines = split_lines("a\n\n   \n  b");
        let mut cursor = LineCursor::new(&lines);
        cursor.next();

        let ahead = cursor.peek_non_blank().unwrap();
        assert_eq!(ahead.text, "b");
        assert_eq!(ahead.indent, 2);
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn content_lookahead_skips_comments() {
        let lines = split_lines("a\n  // note\n\n  b");
        let mut cursor = LineCursor::new(&lines);
        cursor.next();

        assert_eq!(cursor.peek_non_blank().map(|l| l.text), Some("// note"));
        assert_eq!(cursor.peek_content().map(|l| l.text), Some("b"));
    }

    #[test]
    fn exhaustion() {
        let lines = split_lines("a");
        let mut cursor = LineCursor::new(&lines);
        cursor.next();

        assert_eq!(cursor.position(), lines.len());
        assert!(cursor.next().is_none());
        assert!(cursor.peek_non_blank().is_none());
    }
}
