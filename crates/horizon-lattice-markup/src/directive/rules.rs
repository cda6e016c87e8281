//! Rule lines inside directive bodies.

use crate::source::{Diagnostic, SourceLine, Token, classify_tokens, split_tokens};

/// One `selector key=value...` line, or several consecutive lines with the
/// same selector merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleLine<'a> {
    /// First line of the rule.
    pub line: SourceLine<'a>,
    /// The selector, or `None` when the line starts with a `key=value`.
    pub selector: Option<String>,
    /// `key=value` pairs in source order.
    pub pairs: Vec<(String, String)>,
}

/// Parse directive body lines into rules.
///
/// Blank lines, comments and lone braces are skipped. Tokens that are not
/// `key=value` pairs are skipped with a diagnostic.
pub fn parse_rule_lines<'a>(
    body: &[SourceLine<'a>],
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<RuleLine<'a>> {
    let mut rules: Vec<RuleLine<'a>> = Vec::new();

    for line in body {
        if line.is_blank() || line.is_lone_brace() || line.is_comment() {
            continue;
        }

        let raws = split_tokens(line.text);
        let (selector, rest) = match raws.split_first() {
            Some((first, rest)) if !first.contains('=') => (Some(first.to_string()), rest),
            _ => (None, raws.as_slice()),
        };

        let mut pairs = Vec::new();
        for token in classify_tokens(rest) {
            match token {
                Token::Pair { key, value } => pairs.push((key, value)),
                Token::BlockOpen | Token::BlockClose => {}
                Token::Bare(word) => diagnostics.push(Diagnostic::at(
                    line,
                    format!("Skipping '{word}' in directive rule"),
                )),
                Token::Selector(_) => diagnostics.push(Diagnostic::at(
                    line,
                    "Only the first token of a directive rule can be a selector",
                )),
            }
        }

        match rules.last_mut() {
            Some(last) if selector.is_some() && last.selector == selector => {
                last.pairs.extend(pairs);
            }
            _ => rules.push(RuleLine {
                line: *line,
                selector,
                pairs,
            }),
        }
    }

    rules
}
