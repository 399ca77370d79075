//! Error types for content-outline.
//!
//! "No content root" and "no headings" are ordinary results, not errors.
//! Errors only come from misconfiguration or from serializing output.

/// Error type for outline operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An `Options` threshold is outside its valid range.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// Serializing the outline failed.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for outline operations.
pub type Result<T> = std::result::Result<T, Error>;
