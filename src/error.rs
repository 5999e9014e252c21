use std::path::PathBuf;

use thiserror::Error;

use crate::site::sections::SectionId;

/// Errors raised while composing, exporting or writing the page.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to render section {section}: {source}")]
    Render {
        section: SectionId,
        #[source]
        source: askama::Error,
    },

    #[error("failed to render page layout: {0}")]
    Layout(#[source] askama::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid value for {key}: {value:?}")]
    Config { key: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, SiteError>;
