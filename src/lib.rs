//! matrix-graph — dense adjacency-matrix graphs with breadth-first path search.
//!
//! A [`MatrixGraph`] stores directed or undirected, weighted or unweighted
//! graphs over the vertex indices `[0, N)`. Edge weights live in a square
//! matrix where `0.0` means "no edge", so zero-weight edges cannot be
//! represented. Paths are found by BFS and are shortest by hop count, not by
//! weight.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{EdgeListReader, EdgeListWriter, GraphSummary, LoadOptions, PathReport};
pub use graph::{bfs_path, cumulative_weights, FifoQueue, GraphBuilder, MatrixGraph};
pub use types::{
    vertex_from_external, Edge, GraphError, GraphResult, DEFAULT_WEIGHT, MAX_VERTEX_COUNT,
};
