//! Stylesheet rules and directive fragments.

use std::fmt;

use crate::style::{Declaration, join_declarations};

/// A generated class rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtilityRule {
    pub class_name: String,
    pub declarations: Vec<Declaration>,
}

impl UtilityRule {
    /// Create a rule for a generated class.
    pub fn new(class_name: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            class_name: class_name.into(),
            declarations,
        }
    }
}

impl fmt::Display for UtilityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            ".{} {{ {} }}",
            self.class_name,
            join_declarations(&self.declarations)
        )
    }
}

/// Utility rules scoped to one media query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaBlock {
    pub query: String,
    pub rules: Vec<UtilityRule>,
}

impl MediaBlock {
    /// Create an empty block for a query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            rules: Vec::new(),
        }
    }
}

impl fmt::Display for MediaBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "@media {} {{", self.query)?;
        for rule in &self.rules {
            writeln!(f, "  {rule}")?;
        }
        f.write_str("}")
    }
}

/// One step of a keyframes block, written literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyframeStep {
    /// `N%`, `from` or `to`.
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

impl fmt::Display for KeyframeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {{ {} }}",
            self.selector,
            join_declarations(&self.declarations)
        )
    }
}

/// A named keyframe animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyframesBlock {
    pub name: String,
    pub steps: Vec<KeyframeStep>,
}

impl fmt::Display for KeyframesBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "@keyframes {} {{", self.name)?;
        for step in &self.steps {
            writeln!(f, "  {step}")?;
        }
        f.write_str("}")
    }
}

/// A stylesheet fragment produced by a directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleFragment {
    Media(MediaBlock),
    Keyframes(KeyframesBlock),
}

impl fmt::Display for StyleFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Media(block) => block.fmt(f),
            Self::Keyframes(block) => block.fmt(f),
        }
    }
}
