//! Source line splitting.

use crate::options::INDENT_UNIT;

/// One line of DSL text with its measured indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// Line number (1-indexed).
    pub number: usize,
    /// Leading whitespace in columns. A tab counts as one indent unit.
    pub indent: usize,
    /// Line content with surrounding whitespace removed.
    pub text: &'a str,
}

impl<'a> SourceLine<'a> {
    /// Measure a raw line.
    pub fn new(number: usize, raw: &'a str) -> Self {
        let indent = raw
            .chars()
            .take_while(|c| c.is_whitespace())
            .map(|c| if c == '\t' { INDENT_UNIT } else { 1 })
            .sum();

        Self {
            number,
            indent,
            text: raw.trim(),
        }
    }

    /// Whether the line has no content.
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }

    /// Nesting depth implied by the indentation.
    pub fn depth(&self) -> usize {
        self.indent / INDENT_UNIT
    }

    /// Whether the line opens a directive (`@...`).
    pub fn is_directive(&self) -> bool {
        self.text.starts_with('@')
    }

    /// Whether the line is a lone `{` or `}`.
    pub fn is_lone_brace(&self) -> bool {
        self.text == "{" || self.text == "}"
    }

    /// Whether the line is a comment.
    ///
    /// `//` always starts a comment. `#` does only when followed by
    /// whitespace or nothing, since `#id` is a selector.
    pub fn is_comment(&self) -> bool {
        if self.text.starts_with("//") {
            return true;
        }
        match self.text.strip_prefix('#') {
            Some(rest) => rest.is_empty() || rest.starts_with(char::is_whitespace),
            None => false,
        }
    }

    /// Column of the first content character (1-indexed).
    pub fn column(&self) -> usize {
        self.indent + 1
    }
}

/// Split a document into measured lines. CRLF endings are accepted.
pub fn split_lines(source: &str) -> Vec<SourceLine<'_>> {
    source
        .lines()
        .enumerate()
        .map(|(i, raw)| SourceLine::new(i + 1, raw))
        .collect()
}
