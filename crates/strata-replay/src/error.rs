//! Error types for strata-replay.

use thiserror::Error;

/// Result type for replay operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur loading or replaying a trace.
#[derive(Debug, Error)]
pub enum Error {
    /// Engine rejected a value in the trace
    #[error("LOD error: {0}")]
    Lod(#[from] strata_lod::Error),

    /// Trace is not valid JSON for the expected shape
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A frame refers to an element the trace never declared
    #[error("frame {frame} refers to unknown element {id}")]
    UnknownElement { frame: usize, id: String },

    /// Two elements share an id
    #[error("element {0} declared twice")]
    DuplicateElement(String),

    /// Nothing to replay
    #[error("trace has no frames")]
    EmptyTrace,
}
