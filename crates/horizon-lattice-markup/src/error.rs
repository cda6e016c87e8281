//! Error types for the markup compiler.
//!
//! Compiling a document never fails: malformed input is recovered from and
//! reported as [`Diagnostic`](crate::source::Diagnostic) values instead. The
//! errors here cover the surfaces around the compiler: loading options,
//! serializing output and mounting onto a renderer.

use std::path::PathBuf;

/// Result type alias for markup operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around compilation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading an options file failed.
    #[error("Failed to read compile options '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Options text was not valid TOML for [`CompileOptions`](crate::CompileOptions).
    #[error("Invalid compile options: {0}")]
    Options(#[from] toml::de::Error),

    /// Serializing the element tree failed.
    #[error("Failed to serialize element tree: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The renderer could not locate the node to mount the document on.
    #[error("Mount point '{0}' not found")]
    MountPointMissing(String),
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a missing mount point error.
    pub fn mount_point_missing(name: impl Into<String>) -> Self {
        Self::MountPointMissing(name.into())
    }
}
