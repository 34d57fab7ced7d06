//! The edge snapshot struct.

use serde::Serialize;

/// One non-zero cell of an adjacency matrix.
///
/// Edges are snapshots: mutating the graph afterwards does not update them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    /// Source vertex (0-based row).
    pub source: usize,
    /// Target vertex (0-based column).
    pub target: usize,
    /// Weight stored in the matrix cell. Never 0.0.
    pub weight: f32,
}

impl Edge {
    /// Create a new edge snapshot.
    pub fn new(source: usize, target: usize, weight: f32) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({:.2})", self.source + 1, self.target + 1, self.weight)
    }
}
