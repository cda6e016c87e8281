//! Style tokens and their resolution to declarations.
//!
//! A style token is a `key=value` pair whose key is one of the closed set of
//! [`StyleKey`]s. Resolution coerces bare numbers to pixels, rewrites
//! `$name` variable references and expands the layout shorthands.

mod color;
mod declaration;
mod group;
mod key;
mod resolver;

pub use color::normalize_color;
pub use declaration::{Declaration, IMPORTANT, ResolveMode, join_declarations, merge_declarations};
pub use group::{StyleGroup, StyleGroups};
pub use key::{StyleCategory, StyleKey};
pub use resolver::StyleResolver;
