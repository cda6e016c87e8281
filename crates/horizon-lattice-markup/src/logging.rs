//! Tracing targets and span names for the markup compiler.
//!
//! The compiler never installs a subscriber. To see its output, install one
//! in the host application and filter on the targets below:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_lattice_markup::directive=debug")
//!     .init();
//! ```

/// Span names used around each compile pass.
pub mod span_names {
    /// A whole compile invocation.
    pub const COMPILE: &str = "horizon_lattice_markup::compile";
    /// Variable collection pass.
    pub const VARIABLES: &str = "horizon_lattice_markup::variables";
    /// Top-level directive pass.
    pub const DIRECTIVES: &str = "horizon_lattice_markup::directives";
    /// Element tree pass.
    pub const MARKUP: &str = "horizon_lattice_markup::markup";
}

/// Target names for log filtering.
pub mod targets {
    /// Document assembly.
    pub const COMPILER: &str = "horizon_lattice_markup::compiler";
    /// Block parser and tokenizer.
    pub const PARSER: &str = "horizon_lattice_markup::parser";
    /// Style token resolution.
    pub const STYLE: &str = "horizon_lattice_markup::style";
    /// Generated class registry.
    pub const CLASSES: &str = "horizon_lattice_markup::classes";
    /// Media and keyframe directives.
    pub const DIRECTIVE: &str = "horizon_lattice_markup::directive";
}
