//! Error types for recast operations.

use crate::{Path, Value};
use thiserror::Error;

/// Result type alias for recast operations.
pub type RecastResult<T> = Result<T, RecastError>;

/// Errors that can occur during recast operations.
#[derive(Debug, Error)]
pub enum RecastError {
    /// The path string has no segments.
    #[error("invalid path: {input:?} has no segments")]
    InvalidPath {
        /// The rejected input.
        input: String,
    },

    /// A non-terminal segment resolved to something other than a container.
    #[error("intermediate value is not a container at segment {depth} of `{path}`: found {found}")]
    InvalidIntermediate {
        /// The full path being written.
        path: Path,
        /// Index of the segment that could not be traversed.
        depth: usize,
        /// Type name of the value found there, `"missing"` if absent.
        found: &'static str,
    },

    /// A segment used on a sequence is not a canonical index.
    #[error("segment {segment:?} of `{path}` is not a sequence index")]
    InvalidIndex {
        /// The full path being written.
        path: Path,
        /// The offending segment.
        segment: String,
    },

    /// Extending a sequence out to an index could not be allocated.
    #[error("cannot extend sequence to index {index} at `{path}`")]
    SequenceTooLarge {
        /// The full path being written.
        path: Path,
        /// The index that was written.
        index: usize,
    },

    /// JSON serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RecastError {
    /// Create an invalid path error.
    #[inline]
    pub fn invalid_path(input: impl Into<String>) -> Self {
        RecastError::InvalidPath {
            input: input.into(),
        }
    }

    /// Create an invalid intermediate error.
    #[inline]
    pub fn invalid_intermediate(path: Path, depth: usize, found: &'static str) -> Self {
        RecastError::InvalidIntermediate { path, depth, found }
    }

    /// Create an invalid index error.
    #[inline]
    pub fn invalid_index(path: Path, segment: impl Into<String>) -> Self {
        RecastError::InvalidIndex {
            path,
            segment: segment.into(),
        }
    }

    /// Create a sequence too large error.
    #[inline]
    pub fn sequence_too_large(path: Path, index: usize) -> Self {
        RecastError::SequenceTooLarge { path, index }
    }

    /// The path involved in this error, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            RecastError::InvalidIntermediate { path, .. }
            | RecastError::InvalidIndex { path, .. }
            | RecastError::SequenceTooLarge { path, .. } => Some(path),
            RecastError::InvalidPath { .. } | RecastError::Serialization(_) => None,
        }
    }
}

/// Get the type name of a value.
#[inline]
pub fn value_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Record(_) => "record",
    }
}
