//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod matrix_graph;
pub mod queue;
pub mod traversal;

pub use builder::GraphBuilder;
pub use matrix_graph::MatrixGraph;
pub use queue::FifoQueue;
pub use traversal::{bfs_path, cumulative_weights};
