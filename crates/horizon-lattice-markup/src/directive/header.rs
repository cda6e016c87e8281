//! Directive header lines.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::options::Breakpoints;

static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@([A-Za-z][A-Za-z0-9_-]*)(?:=([^\s{]*))?\s*(.*)$").expect("directive header pattern")
});

static KEYFRAMES_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@keyframes\s+([A-Za-z_-][A-Za-z0-9_-]*)\s*(.*)$").expect("keyframes header pattern")
});

/// A media breakpoint named by a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    /// `@mobile`
    Mobile,
    /// `@tablet`
    Tablet,
    /// `@maxw=N`
    MaxWidth(u32),
    /// `@minw=N`
    MinWidth(u32),
}

impl Breakpoint {
    /// The media query text for this breakpoint.
    pub fn query(self, breakpoints: &Breakpoints) -> String {
        match self {
            Self::Mobile => breakpoints.mobile.clone(),
            Self::Tablet => breakpoints.tablet.clone(),
            Self::MaxWidth(px) => format!("(max-width: {px}px)"),
            Self::MinWidth(px) => format!("(min-width: {px}px)"),
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mobile => f.write_str("@mobile"),
            Self::Tablet => f.write_str("@tablet"),
            Self::MaxWidth(px) => write!(f, "@maxw={px}"),
            Self::MinWidth(px) => write!(f, "@minw={px}"),
        }
    }
}

/// What a directive line opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveKind {
    /// A responsive block.
    Media(Breakpoint),
    /// A keyframe animation with this name.
    Keyframes(String),
    /// Anything else; the block is consumed and skipped.
    Unknown(String),
}

/// A parsed directive line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveHeader<'a> {
    pub kind: DirectiveKind,
    /// Text after the directive name, such as `{` or `pad=8`.
    pub rest: &'a str,
}

impl<'a> DirectiveHeader<'a> {
    /// Parse a line starting with `@`.
    pub fn parse(text: &'a str) -> Self {
        if let Some(caps) = KEYFRAMES_PATTERN.captures(text) {
            let name = caps.get(1).map_or("", |m| m.as_str());
            return Self {
                kind: DirectiveKind::Keyframes(name.to_string()),
                rest: caps.get(2).map_or("", |m| m.as_str()),
            };
        }

        let Some(caps) = HEADER_PATTERN.captures(text) else {
            return Self {
                kind: DirectiveKind::Unknown(text.to_string()),
                rest: "",
            };
        };

        let name = caps.get(1).map_or("", |m| m.as_str());
        let value = caps.get(2).map(|m| m.as_str());
        let rest = caps.get(3).map_or("", |m| m.as_str());
        let pixels = value.and_then(|v| v.parse::<u32>().ok());

        let kind = match (name, value, pixels) {
            ("mobile", None, _) => DirectiveKind::Media(Breakpoint::Mobile),
            ("tablet", None, _) => DirectiveKind::Media(Breakpoint::Tablet),
            ("maxw", Some(_), Some(px)) => DirectiveKind::Media(Breakpoint::MaxWidth(px)),
            ("minw", Some(_), Some(px)) => DirectiveKind::Media(Breakpoint::MinWidth(px)),
            _ => DirectiveKind::Unknown(match value {
                Some(value) => format!("@{name}={value}"),
                None => format!("@{name}"),
            }),
        };

        Self { kind, rest }
    }
}
