//! Error types shared across Verse Player crates

use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum CoreError {
    /// A source reference string could not be classified
    #[error("invalid source reference: {0}")]
    InvalidSourceRef(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
