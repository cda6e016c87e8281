//! Element line tokens.

use crate::element::ElementKind;
use crate::source::{SelectorToken, Token, classify_tokens, split_tokens};

/// What the first token of an element line names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LineHead {
    /// A known element code.
    Kind(ElementKind),
    /// A code not in the element table. Compiled as a container.
    Unknown(String),
    /// The line starts with a selector. Compiled as a plain grouping
    /// element, without inference.
    Selector,
    /// The line starts with a `key=value` pair, or has no tokens.
    #[default]
    Missing,
}

impl LineHead {
    /// The element kind to compile, or `None` for a selector-first line.
    pub fn kind(&self) -> Option<ElementKind> {
        match self {
            Self::Kind(kind) => Some(*kind),
            Self::Unknown(_) | Self::Missing => Some(ElementKind::Container),
            Self::Selector => None,
        }
    }
}

/// Where the block of an element line sits in its tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineBody<'r, 'a> {
    /// No block.
    None,
    /// `{ ... }` closed on the same line, holding these tokens.
    Inline(&'r [&'a str]),
    /// A `{` with no match on the line. Children follow on later lines.
    Open,
}

/// An element line split around its block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitLine<'r, 'a> {
    /// Tokens describing the element itself.
    pub head: &'r [&'a str],
    pub body: LineBody<'r, 'a>,
    /// Tokens after the block.
    pub trailing: &'r [&'a str],
}

/// Split a line into tokens, detaching braces glued to other tokens so
/// `c{`, `{p` and `t=hi}` read like their spaced forms.
pub fn line_tokens(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    for raw in split_tokens(text) {
        let mut inner = raw;
        while inner.len() > 1 && inner.starts_with(['{', '}']) {
            tokens.push(&inner[..1]);
            inner = &inner[1..];
        }

        let mut closing = Vec::new();
        while inner.len() > 1 && inner.ends_with(['{', '}']) && !inner.ends_with('"') {
            closing.push(&inner[inner.len() - 1..]);
            inner = &inner[..inner.len() - 1];
        }

        tokens.push(inner);
        tokens.extend(closing.into_iter().rev());
    }
    tokens
}

/// Split tokens around the first `{` and its matching `}`.
pub fn split_line<'r, 'a>(tokens: &'r [&'a str]) -> SplitLine<'r, 'a> {
    let Some(open) = tokens.iter().position(|token| *token == "{") else {
        return SplitLine {
            head: tokens,
            body: LineBody::None,
            trailing: &[],
        };
    };

    let mut depth = 0usize;
    for (index, token) in tokens.iter().enumerate().skip(open) {
        match *token {
            "{" => depth += 1,
            "}" => {
                depth -= 1;
                if depth == 0 {
                    return SplitLine {
                        head: &tokens[..open],
                        body: LineBody::Inline(&tokens[open + 1..index]),
                        trailing: &tokens[index + 1..],
                    };
                }
            }
            _ => {}
        }
    }

    SplitLine {
        head: &tokens[..open],
        body: LineBody::Open,
        trailing: &tokens[open + 1..],
    }
}

/// The tokens of an element line, sorted by role.
///
/// Ids, classes and text are pulled out first so tag inference sees all of
/// them; every other pair is kept in source order for attribute and style
/// handling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementLine {
    pub head: LineHead,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub text: Option<String>,
    pub pairs: Vec<(String, String)>,
    /// Tokens with no recognizable shape.
    pub skipped: Vec<String>,
}

impl ElementLine {
    /// Sort the head tokens of an element line.
    pub fn parse(tokens: &[&str]) -> Self {
        let (head, rest) = match tokens.split_first() {
            None => (LineHead::Missing, tokens),
            Some((first, _)) if SelectorToken::parse(first).is_some() => (LineHead::Selector, tokens),
            Some((first, _)) if first.contains('=') => (LineHead::Missing, tokens),
            Some((first, rest)) => {
                let head = ElementKind::parse(first)
                    .map_or_else(|| LineHead::Unknown(first.to_string()), LineHead::Kind);
                (head, rest)
            }
        };

        let mut line = Self {
            head,
            ..Self::default()
        };
        for token in classify_tokens(rest) {
            match token {
                Token::Selector(selector) => {
                    if selector.id.is_some() {
                        line.id = selector.id;
                    }
                    line.classes.extend(selector.classes);
                }
                Token::Pair { key, value } => match key.as_str() {
                    "t" => line.text = Some(value),
                    "id" => line.id = Some(value),
                    "class" => line
                        .classes
                        .extend(value.split_whitespace().map(str::to_string)),
                    _ => line.pairs.push((key, value)),
                },
                Token::Bare(word) => line.skipped.push(word),
                Token::BlockOpen | Token::BlockClose => {}
            }
        }
        line
    }
}
