//! Errors raised at graph-operation boundaries.

use thiserror::Error;

/// A failed graph-store operation.
///
/// Absence of a search result is never reported through this type; probes
/// that find nothing return `None` instead.
#[derive(Debug, Error)]
pub enum GraphError {
    /// An operation referenced a vertex key absent from the graph.
    #[error("vertex not found: {0}")]
    NotFound(String),
    /// Malformed construction input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
