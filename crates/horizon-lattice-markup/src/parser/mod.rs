//! Markup parsing.
//!
//! The grammar mixes two nesting forms. Indentation nests by columns, two
//! per level:
//!
//! ```text
//! c .card
//!   h2 t="Title"
//!   p t="Body"
//! ```
//!
//! Braces nest explicitly, across lines or on one line:
//!
//! ```text
//! c .card {
//!   p t="Body"
//! }
//! c pad=8 { p t="hi" }
//! ```

mod block;
mod line;

pub use block::BlockParser;
pub use line::{ElementLine, LineBody, LineHead, SplitLine, line_tokens, split_line};
