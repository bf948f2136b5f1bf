//! Error types for kit detection and metadata extraction.

use std::{io, path::PathBuf, result};

/// Errors that can occur while reading a webfont kit.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Css(#[from] webfont_kit_css::Error),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Start tag is not found: {0}")]
    StartTagNotFound(String),

    #[error("End tag is not found: {0}")]
    EndTagNotFound(String),

    #[error("Kit must contain an HTML file to parse")]
    MissingHtml,

    #[error("Font-family must be set")]
    MissingFontFamily,

    #[error("unexpected kit layout: {0}")]
    UnexpectedLayout(String),

    #[error("invalid fontlist.xml: {0}")]
    InvalidFontList(String),

    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown type of webfont kit: {}", dir.display())]
    UnsupportedKit { dir: PathBuf },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T> = result::Result<T, Error>;
