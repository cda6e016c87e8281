//! Keyframe initial states.

use std::collections::HashMap;

use crate::style::Declaration;

/// Initial declarations of each keyframe animation, from its `0%` or
/// `from` step.
///
/// Created fresh for every compile. An `anim` token with an initial-state
/// marker prepends these declarations so the element starts in the first
/// frame before the animation runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyframeRegistry {
    initial: HashMap<String, Vec<Declaration>>,
}

impl KeyframeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the initial state of an animation. A later registration for
    /// the same name replaces the earlier one.
    pub fn register(&mut self, name: impl Into<String>, declarations: Vec<Declaration>) {
        self.initial.insert(name.into(), declarations);
    }

    /// Initial declarations recorded for an animation.
    pub fn initial_state(&self, name: &str) -> Option<&[Declaration]> {
        self.initial.get(name).map(Vec::as_slice)
    }

    /// Number of animations with a recorded initial state.
    pub fn len(&self) -> usize {
        self.initial.len()
    }

    /// Whether nothing is recorded.
    pub fn is_empty(&self) -> bool {
        self.initial.is_empty()
    }
}

/// Whether a keyframe selector is a valid step: `N%`, `from` or `to`.
pub fn is_keyframe_step(selector: &str) -> bool {
    if matches!(selector, "from" | "to") {
        return true;
    }
    let Some(number) = selector.strip_suffix('%') else {
        return false;
    };
    !number.is_empty() && number.parse::<f64>().is_ok_and(|n| (0.0..=100.0).contains(&n))
}

/// Whether a step holds the initial state.
pub fn is_initial_step(selector: &str) -> bool {
    selector == "from" || selector.strip_suffix('%').and_then(|n| n.parse::<f64>().ok()) == Some(0.0)
}
