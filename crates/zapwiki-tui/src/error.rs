//! Error types for the terminal front end

use thiserror::Error;

/// Front end result type
pub type Result<T> = std::result::Result<T, TuiError>;

/// Front end errors
#[derive(Debug, Error)]
pub enum TuiError {
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("Catalog error: {0}")]
    Catalog(#[from] zapwiki_content::ContentError),
}
