//! Error types for lazy streams
//!
//! The combinators themselves never fail: absence is an empty stream or
//! `None`. These errors cover the few opt-in fallible edges.

use thiserror::Error;

/// Main error type for stream operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    /// A deferred cell was forced while its own producer was running
    #[error("deferred cell forced while it was being evaluated")]
    ReentrantForce,
    /// Materialization reached the configured element bound
    #[error("materialization exceeded the limit of {limit} elements")]
    LimitExceeded { limit: usize },
}

/// Result type for stream operations
pub type StreamResult<T> = Result<T, StreamError>;
