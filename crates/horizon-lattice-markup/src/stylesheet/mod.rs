//! The generated stylesheet.

mod rule;
mod sheet;

pub use rule::{KeyframeStep, KeyframesBlock, MediaBlock, StyleFragment, UtilityRule};
pub use sheet::{ROOT_SELECTOR, Stylesheet};
