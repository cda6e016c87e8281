//! Document variables (`$name=value`).

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::options::PaletteEntry;
use crate::source::{SourceLine, strip_quotes};

static REFERENCE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([A-Za-z0-9_-]+)").expect("variable reference pattern"));

/// Variables declared by a document, in declaration order.
///
/// Emitted as CSS custom properties and referenced from style values as
/// `$name`, which resolves to `var(--name)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableTable {
    entries: Vec<(String, String)>,
}

impl VariableTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from a palette.
    pub fn from_palette(palette: &[PaletteEntry]) -> Self {
        let mut table = Self::new();
        for entry in palette {
            table.set(&entry.name, &entry.value);
        }
        table
    }

    /// Collect every `$name=value` line of a document.
    pub fn collect(lines: &[SourceLine<'_>]) -> Self {
        let mut table = Self::new();
        for line in lines.iter().filter(|line| is_variable_line(line)) {
            match parse_declaration(line.text) {
                Some((name, value)) => table.set(name, value),
                None => tracing::debug!(
                    target: crate::logging::targets::PARSER,
                    "Ignoring malformed variable on line {}: {}",
                    line.number,
                    line.text
                ),
            }
        }
        table
    }

    /// Set a variable. A later value replaces an earlier one in place.
    pub fn set(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        let name = normalize_name(name.as_ref());
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    /// Get a variable value.
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = normalize_name(name);
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check if a variable exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over all variables in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no variables are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names referenced by `value` that this table does not declare.
    pub fn undeclared_references<'v>(&self, value: &'v str) -> Vec<&'v str> {
        REFERENCE_PATTERN
            .captures_iter(value)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|name| !self.contains(name))
            .collect()
    }
}

/// Whether a line declares a variable.
pub fn is_variable_line(line: &SourceLine<'_>) -> bool {
    line.text.starts_with('$')
}

/// Rewrite every `$name` in a value to `var(--name)`.
pub fn substitute_references(value: &str) -> Cow<'_, str> {
    REFERENCE_PATTERN.replace_all(value, "var(--$1)")
}

fn parse_declaration(text: &str) -> Option<(&str, &str)> {
    let (name, value) = text.strip_prefix('$')?.split_once('=')?;
    let name = name.trim();
    let value = strip_quotes(value.trim());
    if name.is_empty() || value.is_empty() {
        return None;
    }
    Some((name, value))
}

fn normalize_name(name: &str) -> &str {
    name.strip_prefix("--")
        .or_else(|| name.strip_prefix('$'))
        .unwrap_or(name)
}
