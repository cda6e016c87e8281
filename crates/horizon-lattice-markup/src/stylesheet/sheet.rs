//! Stylesheet assembly.

use std::fmt;

use super::{MediaBlock, StyleFragment, UtilityRule};
use crate::style::Declaration;
use crate::theme::BASELINE_SELECTOR;

/// Selector holding the variable declarations.
pub const ROOT_SELECTOR: &str = ":root";

/// A compiled stylesheet.
///
/// Sections are written in a fixed order: variables, the baseline reset,
/// element utility classes, top-level directive fragments in first-seen
/// order, then fragments from inline directives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    /// Custom properties, without the `--` prefix.
    pub variables: Vec<(String, String)>,
    /// Baseline reset declarations. Empty when the reset is disabled.
    pub baseline: Vec<Declaration>,
    /// Generated element classes in first-registered order.
    pub utilities: Vec<UtilityRule>,
    /// Fragments from top-level directives.
    pub fragments: Vec<StyleFragment>,
    /// Fragments from inline directives. Media rules are merged per query.
    pub inline_fragments: Vec<StyleFragment>,
}

impl Stylesheet {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule to the inline media block for `query`, creating the block
    /// on first use.
    pub fn push_inline_media_rule(&mut self, query: &str, rule: UtilityRule) {
        let existing = self.inline_fragments.iter_mut().find_map(|fragment| match fragment {
            StyleFragment::Media(block) if block.query == query => Some(block),
            _ => None,
        });

        match existing {
            Some(block) => block.rules.push(rule),
            None => {
                let mut block = MediaBlock::new(query);
                block.rules.push(rule);
                self.inline_fragments.push(StyleFragment::Media(block));
            }
        }
    }

    /// Whether the stylesheet has no content at all.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
            && self.baseline.is_empty()
            && self.utilities.is_empty()
            && self.fragments.is_empty()
            && self.inline_fragments.is_empty()
    }

    /// Iterate over every fragment, top-level first.
    pub fn all_fragments(&self) -> impl Iterator<Item = &StyleFragment> {
        self.fragments.iter().chain(&self.inline_fragments)
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sections: Vec<String> = Vec::new();

        if !self.variables.is_empty() {
            let body: String = self
                .variables
                .iter()
                .map(|(name, value)| format!("  --{name}: {value};\n"))
                .collect();
            sections.push(format!("{ROOT_SELECTOR} {{\n{body}}}"));
        }

        if !self.baseline.is_empty() {
            let body: String = self
                .baseline
                .iter()
                .map(|decl| format!("  {decl}\n"))
                .collect();
            sections.push(format!("{BASELINE_SELECTOR} {{\n{body}}}"));
        }

        if !self.utilities.is_empty() {
            let rules: Vec<String> = self.utilities.iter().map(ToString::to_string).collect();
            sections.push(rules.join("\n"));
        }

        sections.extend(self.all_fragments().map(ToString::to_string));

        if sections.is_empty() {
            return Ok(());
        }
        writeln!(f, "{}", sections.join("\n\n"))
    }
}
