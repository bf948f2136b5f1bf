//! Error types for stylesheet reading.

use std::{io, path::PathBuf, result};

/// Errors that can occur while reading `@font-face` rules.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read stylesheet {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed CSS at line {line}, column {column}: {message}")]
    Parse { line: u32, column: u32, message: String },

    #[error("Failed to find @font-face at-rule")]
    NotFound,

    #[error("It contains more than 1 @font-face at-rules")]
    Ambiguous,
}

pub type Result<T> = result::Result<T, Error>;
