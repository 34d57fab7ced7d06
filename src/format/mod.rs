//! Plain-text I/O: the edge-list file format and human-readable rendering.

pub mod reader;
pub mod text;
pub mod writer;

pub use reader::EdgeListReader;
pub use text::{GraphSummary, PathReport};
pub use writer::EdgeListWriter;

/// How an edge-list file should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Build a directed graph. Undirected graphs mirror every edge.
    pub directed: bool,
    /// Each edge line carries a third weight column.
    pub weighted: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            directed: true,
            weighted: false,
        }
    }
}
