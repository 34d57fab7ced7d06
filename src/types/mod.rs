//! All data types for the matrix-graph library.

pub mod edge;
pub mod error;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};

/// Weight given to edges added without an explicit weight.
pub const DEFAULT_WEIGHT: f32 = 1.0;

/// Largest vertex count accepted from an edge-list header (a 400 MB matrix).
pub const MAX_VERTEX_COUNT: usize = 10_000;

/// Convert a 1-based external vertex number into a 0-based index.
///
/// Files and the CLI number vertices from 1. Anything `<= 0` or above
/// `vertex_count` is rejected with [`GraphError::OutOfRange`], reporting the
/// 0-based index that would have resulted.
pub fn vertex_from_external(number: i64, vertex_count: usize) -> GraphResult<usize> {
    let index = number.saturating_sub(1);
    match usize::try_from(index) {
        Ok(idx) if idx < vertex_count => Ok(idx),
        _ => Err(GraphError::OutOfRange {
            index,
            vertex_count,
        }),
    }
}
