//! Core error types for otuvec
//!
//! Every variant is fatal for the current run. Nothing in the workspace retries
//! or returns partial vectors; callers propagate with `?` and abort.

use thiserror::Error;

/// Main error type for partition loading and vector derivation
#[derive(Error, Debug)]
pub enum OtuError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed partition record: {0}")]
    MalformedPartitionRecord(String),

    #[error("Malformed group record: {0}")]
    MalformedGroupRecord(String),

    #[error("Sequence '{identifier}' was not found in the group file, please correct.")]
    UnresolvedIdentifier { identifier: String },

    #[error("{identifier} not found, check *.names file")]
    UnresolvedGroupTarget { identifier: String },

    #[error("Sequence '{identifier}' maps to position {position}, but the order vector holds {len} sequences")]
    OrderPositionOutOfRange {
        identifier: String,
        position: usize,
        len: usize,
    },

    #[error("Bin index {index} is out of bounds for a partition with {len} bins")]
    InvalidBinIndex { index: usize, len: usize },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias for otuvec operations
pub type OtuResult<T> = Result<T, OtuError>;

impl OtuError {
    /// Identifier that triggered a resolution failure, if any
    pub fn identifier(&self) -> Option<&str> {
        match self {
            OtuError::UnresolvedIdentifier { identifier }
            | OtuError::UnresolvedGroupTarget { identifier }
            | OtuError::OrderPositionOutOfRange { identifier, .. } => Some(identifier),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for OtuError {
    fn from(err: serde_json::Error) -> Self {
        OtuError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for OtuError {
    fn from(err: anyhow::Error) -> Self {
        OtuError::Other(err.to_string())
    }
}
