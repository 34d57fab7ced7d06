//! Error types for the matrix-graph library.

use thiserror::Error;

/// All errors that can occur in the matrix-graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex index outside `[0, vertex_count)`.
    #[error("Vertex index {index} out of range for graph with {vertex_count} vertices")]
    OutOfRange { index: i64, vertex_count: usize },

    /// Weight read or update on an absent edge.
    #[error("Edge {start} -> {end} does not exist")]
    EdgeNotFound { start: usize, end: usize },

    /// Dequeue or peek on an empty queue.
    #[error("Queue is empty")]
    EmptyQueue,

    /// Malformed edge-list input.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub(crate) fn out_of_range(index: usize, vertex_count: usize) -> Self {
        Self::OutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            vertex_count,
        }
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Convenience result type for matrix-graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
