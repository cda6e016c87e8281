//! Baseline page rules.

use crate::style::Declaration;

/// Selector the baseline reset applies to.
pub const BASELINE_SELECTOR: &str = "body";

/// Full-viewport background, text color and typography reset.
///
/// Colors come from the `background` and `text` variables, which the
/// default palette always provides.
pub fn baseline_declarations() -> Vec<Declaration> {
    vec![
        Declaration::new("background-color", "var(--background)"),
        Declaration::new("color", "var(--text)"),
        Declaration::new("margin", "0"),
        Declaration::new("padding", "0"),
        Declaration::new("min-height", "100vh"),
        Declaration::new("font-family", "system-ui, -apple-system, sans-serif"),
    ]
}
