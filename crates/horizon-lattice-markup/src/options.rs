//! Compile options.
//!
//! Every field has a default matching the built-in grammar, so an empty
//! options file (or [`CompileOptions::default`]) compiles documents exactly
//! as the DSL describes them.
//!
//! ```ignore
//! let options = CompileOptions::from_toml_str(r#"
//! class_prefix = "ui-"
//!
//! [breakpoints]
//! mobile = "(max-width: 480px)"
//! "#)?;
//! let compiled = Compiler::new(options).compile(source);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Columns per nesting level in the indentation form of the grammar.
pub const INDENT_UNIT: usize = 2;

/// Options controlling one [`Compiler`](crate::Compiler).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    /// Namespace marker prepended to every generated class.
    pub class_prefix: String,
    /// Id of the grouping element that holds the compiled forest.
    pub root_id: String,
    /// Duration used when an `anim` token does not name one.
    pub default_animation_duration: String,
    /// Queries behind the `@mobile` and `@tablet` aliases.
    pub breakpoints: Breakpoints,
    /// Variables emitted when the document declares none.
    pub palette: Vec<PaletteEntry>,
    /// Whether to emit the full-viewport body reset.
    pub emit_baseline: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            class_prefix: "n-".to_string(),
            root_id: "app".to_string(),
            default_animation_duration: "1s".to_string(),
            breakpoints: Breakpoints::default(),
            palette: PaletteEntry::defaults(),
            emit_baseline: true,
        }
    }
}

impl CompileOptions {
    /// Create options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from TOML text. Missing fields keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load options from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&text)
    }

    /// Set the generated class prefix.
    pub fn class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Set the root element id.
    pub fn root_id(mut self, id: impl Into<String>) -> Self {
        self.root_id = id.into();
        self
    }

    /// Replace the default palette.
    pub fn palette(mut self, palette: Vec<PaletteEntry>) -> Self {
        self.palette = palette;
        self
    }
}

/// Media queries for the named breakpoint aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    pub mobile: String,
    pub tablet: String,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile: "(max-width: 600px)".to_string(),
            tablet: "(min-width: 601px) and (max-width: 900px)".to_string(),
        }
    }
}

/// A named variable of the fallback palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub name: String,
    pub value: String,
}

impl PaletteEntry {
    /// Create a palette entry.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The built-in dark palette.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("background", "#1a1a1a"),
            Self::new("text", "#ffffff"),
            Self::new("primary", "#9333ea"),
            Self::new("secondary", "#4f46e5"),
            Self::new("accent", "#06b6d4"),
        ]
    }
}
