//! Error types for environment capabilities

use thiserror::Error;

/// Why a scroll request could not be honoured as asked
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrollError {
    #[error("Smooth scrolling is not supported by this environment")]
    SmoothUnsupported,
}
