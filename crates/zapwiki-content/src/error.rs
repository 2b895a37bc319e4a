//! Error types for the content store

use thiserror::Error;

/// Result type for content operations
pub type Result<T> = std::result::Result<T, ContentError>;

/// Authoring errors detected when a catalog is loaded
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Article slug must not be empty (title: {0})")]
    EmptySlug(String),

    #[error("Duplicate article slug: {0}")]
    DuplicateSlug(String),

    #[error("Duplicate section id '{section}' in article '{slug}'")]
    DuplicateSectionId { slug: String, section: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
