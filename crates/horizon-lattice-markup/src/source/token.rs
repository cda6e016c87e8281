//! Line lexer.
//!
//! A line splits into whitespace-separated tokens where a quoted run
//! (`"..."`) stays inside one token, so `t="hello world"` is a single token.

use std::sync::LazyLock;

use regex::Regex;

use crate::style::StyleKey;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?:[^\s"]+|"[^"]*")+"#).expect("token pattern"));

static PAIR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z][A-Za-z0-9_-]*)=(.+)$").expect("pair pattern"));

/// A classified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `#id`, `.class` or a compound such as `#id.a.b`.
    Selector(SelectorToken),
    /// `key=value`, with surrounding quotes removed from the value.
    Pair { key: String, value: String },
    /// Anything without a recognizable shape.
    Bare(String),
    /// A standalone `{`.
    BlockOpen,
    /// A standalone `}`.
    BlockClose,
}

/// Id and classes named by a selector token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorToken {
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl SelectorToken {
    /// Parse a token starting with `#` or `.`.
    ///
    /// Returns `None` when the token names nothing (a lone `#` or `.`).
    pub fn parse(raw: &str) -> Option<Self> {
        if !raw.starts_with(['#', '.']) {
            return None;
        }

        let mut selector = Self::default();
        let mut rest = raw;
        while let Some(marker) = rest.chars().next() {
            let body = &rest[1..];
            let end = body.find(['#', '.']).unwrap_or(body.len());
            let name = &body[..end];
            if !name.is_empty() {
                if marker == '#' {
                    selector.id = Some(name.to_string());
                } else {
                    selector.classes.push(name.to_string());
                }
            }
            rest = &body[end..];
        }

        if selector.id.is_none() && selector.classes.is_empty() {
            None
        } else {
            Some(selector)
        }
    }
}

impl Token {
    /// Classify a single raw token.
    pub fn classify(raw: &str) -> Self {
        match raw {
            "{" => return Self::BlockOpen,
            "}" => return Self::BlockClose,
            _ => {}
        }

        if let Some(selector) = SelectorToken::parse(raw) {
            return Self::Selector(selector);
        }

        match PAIR_PATTERN.captures(raw) {
            Some(caps) => Self::Pair {
                key: caps[1].to_string(),
                value: strip_quotes(&caps[2]).to_string(),
            },
            None => Self::Bare(raw.to_string()),
        }
    }
}

/// Split a line into raw tokens.
pub fn split_tokens(text: &str) -> Vec<&str> {
    TOKEN_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Classify raw tokens in order.
///
/// Bare words directly after a multi-word style pair (`anim=pulse 1s`) are
/// folded into that pair's value instead of standing alone.
pub fn classify_tokens(raws: &[&str]) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::with_capacity(raws.len());
    let mut absorbing = false;

    for raw in raws {
        let token = Token::classify(raw);
        if absorbing
            && let (Token::Bare(word), Some(Token::Pair { value, .. })) =
                (&token, tokens.last_mut())
        {
            value.push(' ');
            value.push_str(strip_quotes(word));
            continue;
        }

        absorbing = matches!(
            &token,
            Token::Pair { key, .. } if StyleKey::parse(key).is_some_and(StyleKey::takes_words)
        );
        tokens.push(token);
    }

    tokens
}

/// Remove one pair of surrounding double quotes.
pub fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
