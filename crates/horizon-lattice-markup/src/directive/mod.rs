//! `@` directives: responsive blocks and keyframe animations.
//!
//! A directive at the document's base indentation is processed before the
//! element tree is built. Media rules there are registered as media-scoped
//! classes and bound to elements by selector once the tree exists; a rule
//! with no selector goes to the element written just before the directive. A
//! media
//! directive nested under an element instead yields a single class for the
//! element just above it.

mod binding;
mod block;
mod header;
mod keyframes;
mod processor;
mod rules;

pub use binding::{AnchoredClass, BindingTarget, ResponsiveBinding};
pub use block::{DirectiveBlock, brace_delta, collect_block};
pub use header::{Breakpoint, DirectiveHeader, DirectiveKind};
pub use keyframes::{KeyframeRegistry, is_initial_step, is_keyframe_step};
pub use processor::{process_inline, process_top_level};
pub use rules::{RuleLine, parse_rule_lines};
