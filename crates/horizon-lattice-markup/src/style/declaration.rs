//! Resolved CSS declarations.

use std::fmt;

/// Marker appended to forced declarations.
pub const IMPORTANT: &str = "!important";

/// How declarations are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolveMode {
    /// Plain declarations: element styles and keyframe steps.
    #[default]
    Normal,
    /// Every declaration carries `!important`: media rules and inline
    /// responsive blocks.
    Forced,
}

/// A single `property: value` pair, already coerced and substituted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration {
    pub property: String,
    pub value: String,
    pub important: bool,
}

impl Declaration {
    /// Create a normal declaration.
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            important: false,
        }
    }

    /// Apply an output mode.
    pub fn with_mode(mut self, mode: ResolveMode) -> Self {
        self.important = mode == ResolveMode::Forced;
        self
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.important {
            write!(f, "{}: {} {};", self.property, self.value, IMPORTANT)
        } else {
            write!(f, "{}: {};", self.property, self.value)
        }
    }
}

/// Join declarations into one declaration string.
pub fn join_declarations(declarations: &[Declaration]) -> String {
    declarations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Append declarations, replacing any earlier one for the same property in
/// place.
pub fn merge_declarations(target: &mut Vec<Declaration>, incoming: Vec<Declaration>) {
    for declaration in incoming {
        match target
            .iter_mut()
            .find(|d| d.property == declaration.property)
        {
            Some(existing) => *existing = declaration,
            None => target.push(declaration),
        }
    }
}
