//! Directive block collection.
//!
//! A directive body takes one of three forms:
//!
//! ```text
//! @mobile {              @mobile pad=8          @mobile
//!   .card pad=8                                   .card pad=8
//! }
//! ```
//!
//! Braces are counted, so nested `{`/`}` inside the body are fine. A brace
//! block still open at end of input is closed there.

use super::{DirectiveHeader, DirectiveKind};
use crate::options::INDENT_UNIT;
use crate::source::{LineCursor, SourceLine};

/// A directive with its collected body lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveBlock<'a> {
    /// The line holding the `@` header.
    pub header: SourceLine<'a>,
    pub kind: DirectiveKind,
    /// Body lines in source order, without the enclosing braces.
    pub body: Vec<SourceLine<'a>>,
    /// False when a brace block ran to end of input.
    pub closed: bool,
}

/// Collect the directive opened by `header`.
///
/// The cursor must be positioned on the line after the header; on return it
/// is positioned after the block.
pub fn collect_block<'s, 'a>(
    header: &SourceLine<'a>,
    cursor: &mut LineCursor<'s, 'a>,
) -> DirectiveBlock<'a> {
    let parsed = DirectiveHeader::parse(header.text);
    let rest = parsed.rest.trim();
    let nested = |text: &'a str| SourceLine {
        number: header.number,
        indent: header.indent + INDENT_UNIT,
        text,
    };

    let mut body = Vec::new();
    let closed = match rest.find('{') {
        Some(open) => {
            let before = rest[..open].trim();
            if !before.is_empty() {
                body.push(nested(before));
            }

            let after = &rest[open + 1..];
            let depth = 1 + brace_delta(after);
            if depth <= 0 {
                let inner = strip_closing(after);
                if !inner.is_empty() {
                    body.push(nested(inner));
                }
                true
            } else {
                let after = after.trim();
                if !after.is_empty() {
                    body.push(nested(after));
                }
                collect_braced(cursor, depth, &mut body)
            }
        }
        None if !rest.is_empty() => {
            body.push(nested(rest));
            true
        }
        None if cursor.peek_non_blank().is_some_and(|line| line.text == "{") => {
            while cursor.peek().is_some_and(SourceLine::is_blank) {
                cursor.next();
            }
            cursor.next();
            collect_braced(cursor, 1, &mut body)
        }
        None => {
            collect_indented(cursor, header.indent, &mut body);
            true
        }
    };

    DirectiveBlock {
        header: *header,
        kind: parsed.kind,
        body,
        closed,
    }
}

fn collect_braced<'a>(
    cursor: &mut LineCursor<'_, 'a>,
    mut depth: i32,
    body: &mut Vec<SourceLine<'a>>,
) -> bool {
    for line in cursor.by_ref() {
        depth += brace_delta(line.text);
        if depth <= 0 {
            let inner = strip_closing(line.text);
            if !inner.is_empty() {
                body.push(SourceLine { text: inner, ..*line });
            }
            return true;
        }
        body.push(*line);
    }
    false
}

fn collect_indented<'a>(
    cursor: &mut LineCursor<'_, 'a>,
    header_indent: usize,
    body: &mut Vec<SourceLine<'a>>,
) {
    while let Some(line) = cursor.peek() {
        if !line.is_blank() && line.indent <= header_indent {
            break;
        }
        cursor.next();
        if !line.is_blank() {
            body.push(*line);
        }
    }
}

/// Net brace depth change of a line, ignoring braces inside quotes.
pub fn brace_delta(text: &str) -> i32 {
    let mut delta = 0;
    let mut quoted = false;
    for c in text.chars() {
        match c {
            '"' => quoted = !quoted,
            '{' if !quoted => delta += 1,
            '}' if !quoted => delta -= 1,
            _ => {}
        }
    }
    delta
}

fn strip_closing(text: &str) -> &str {
    let text = text.trim_end();
    text.strip_suffix('}').unwrap_or(text).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::Breakpoint;
    use crate::source::split_lines;

    fn collect<'a>(lines: &[SourceLine<'a>]) -> (DirectiveBlock<'a>, usize) {
        let mut cursor = LineCursor::new(lines);
        let header = cursor.next().unwrap();
        let block = collect_block(header, &mut cursor);
        (block, cursor.position())
    }

    fn body_texts<'a>(block: &DirectiveBlock<'a>) -> Vec<&'a str> {
        block.body.iter().map(|line| line.text).collect()
    }

    #[test]
    fn brace_form() {
        let lines = split_lines("@mobile {\n  .card pad=8\n  p s=14\n}\np t=after");
        let (block, position) = collect(&lines);
        assert_eq!(block.kind, DirectiveKind::Media(Breakpoint::Mobile));
        assert_eq!(body_texts(&block), vec![".card pad=8", "p s=14"]);
        assert!(block.closed);
        assert_eq!(position, 4);
    }

    #[test]
    fn nested_braces_are_counted() {
        let lines = split_lines("@keyframes spin {\n  from {\n  }\n  to trf=rotate(360deg)\n}\nafter");
        let (block, _) = collect(&lines);
        assert_eq!(body_texts(&block), vec!["from {", "}", "to trf=rotate(360deg)"]);
        assert!(block.closed);
    }

    #[test]
    fn closing_brace_after_content() {
        let lines = split_lines("@mobile {\n  p pad=4 }\nafter");
        let (block, _) = collect(&lines);
        assert_eq!(body_texts(&block), vec!["p pad=4"]);
        assert!(block.closed);
    }

    #[test]
    fn single_line_forms() {
        let lines = split_lines("@mobile pad=8\np");
        let (block, position) = collect(&lines);
        assert_eq!(body_texts(&block), vec!["pad=8"]);
        assert_eq!(position, 1);

        let lines = split_lines("@mobile { pad=8 }\np");
        let (block, position) = collect(&lines);
        assert_eq!(body_texts(&block), vec!["pad=8"]);
        assert_eq!(block.body[0].number, 1);
        assert_eq!(position, 1);
    }

    #[test]
    fn indentation_form() {
        let lines = split_lines("@tablet\n  .card pad=8\n\n  p s=14\np t=after");
        let (block, position) = collect(&lines);
        assert_eq!(body_texts(&block), vec![".card pad=8", "p s=14"]);
        assert_eq!(position, 4);
    }

    #[test]
    fn brace_on_next_line() {
        let lines = split_lines("@mobile\n{\n  pad=8\n}");
        let (block, _) = collect(&lines);
        assert_eq!(body_texts(&block), vec!["pad=8"]);
        assert!(block.closed);
    }

    #[test]
    fn unterminated_block() {
        let lines = split_lines("@mobile {\n  pad=8\n  gap=4");
        let (block, _) = collect(&lines);
        assert_eq!(body_texts(&block), vec!["pad=8", "gap=4"]);
        assert!(!block.closed);
    }

    #[test]
    fn quoted_braces_do_not_count() {
        assert_eq!(brace_delta(r#"p t="{not a block}" {"#), 1);
        assert_eq!(brace_delta("}"), -1);
    }
}
