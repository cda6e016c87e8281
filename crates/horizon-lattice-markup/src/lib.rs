//! Markup DSL compiler for Horizon Lattice.
//!
//! Compiles a compact indentation-and-brace language into an element tree and
//! a stylesheet:
//!
//! - **Elements**: short codes (`p`, `h1`, `btn`, `c`, ...) with ids,
//!   classes, text and attributes. Generic containers get a semantic tag
//!   inferred from their classes, id and text.
//! - **Style tokens**: `pad=8`, `bg=$primary`, `dir=col` and friends resolve
//!   to declarations and are collapsed into deduplicated utility classes.
//! - **Directives**: `@mobile`, `@tablet`, `@maxw=N`, `@minw=N` responsive
//!   blocks and `@keyframes` animations.
//! - **Variables**: `$name=value` lines become custom properties.
//!
//! # Example
//!
//! ```ignore
//! use horizon_lattice_markup::compile;
//!
//! let document = compile(r#"
//! $primary=#2196f3
//!
//! c .card pad=16 bg=$primary {
//!   h2 t="Hello"
//!   p t="Compiled markup"
//! }
//!
//! @mobile {
//!   .card pad=8
//! }
//! "#);
//!
//! println!("{}", document.to_html());
//! println!("{}", document.stylesheet);
//! ```

pub mod classes;
pub mod compiler;
pub mod context;
pub mod directive;
pub mod element;
pub mod logging;
pub mod options;
pub mod parser;
pub mod render;
pub mod source;
pub mod style;
pub mod stylesheet;
pub mod theme;

mod error;

pub use compiler::{CompiledDocument, Compiler};
pub use error::{Error, Result};
pub use options::CompileOptions;

/// Compile a document with default options.
pub fn compile(source: &str) -> CompiledDocument {
    Compiler::default().compile(source)
}

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::compiler::{CompiledDocument, Compiler};
    pub use crate::element::{Element, ElementKind};
    pub use crate::options::{Breakpoints, CompileOptions, PaletteEntry};
    pub use crate::render::{Renderer, mount};
    pub use crate::source::Diagnostic;
    pub use crate::stylesheet::Stylesheet;
    pub use crate::{Error, Result, compile};
}
