//! Core graph structure — a dense adjacency matrix of edge weights.

use crate::types::{Edge, GraphError, GraphResult, DEFAULT_WEIGHT};

/// A graph over the vertex indices `[0, vertex_count)` stored as a square
/// matrix of `f32` weights.
///
/// A cell holding `0.0` means "no edge". This makes a genuine zero-weight
/// edge indistinguishable from an absent one: adding an edge with weight
/// `0.0` leaves the vertices non-adjacent, and reading its weight fails with
/// [`GraphError::EdgeNotFound`].
///
/// For undirected graphs every write is mirrored, so `weight(i, j) ==
/// weight(j, i)` holds at all times. Self-loops are stored like any other
/// cell.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixGraph {
    /// Row-major weights, `row * vertex_count + col`.
    weights: Vec<f32>,
    /// Number of vertices, fixed at construction.
    vertex_count: usize,
    /// Whether edges are one-way.
    directed: bool,
}

impl MatrixGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    ///
    /// # Panics
    ///
    /// Panics if `vertex_count * vertex_count` overflows `usize`. Untrusted
    /// counts should go through [`crate::format::EdgeListReader`], which
    /// rejects them with a parse error instead.
    pub fn new(vertex_count: usize, directed: bool) -> Self {
        let cells = vertex_count
            .checked_mul(vertex_count)
            .unwrap_or_else(|| panic!("{} vertices overflow the matrix size", vertex_count));
        Self {
            weights: vec![0.0; cells],
            vertex_count,
            directed,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Whether the graph is directed.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of non-zero cells.
    ///
    /// An undirected edge between two distinct vertices occupies two cells
    /// and is counted twice.
    pub fn edge_count(&self) -> usize {
        self.weights.iter().filter(|w| **w != 0.0).count()
    }

    /// Add (or overwrite) the edge `start -> end`.
    pub fn add_edge(&mut self, start: usize, end: usize, weight: f32) -> GraphResult<()> {
        self.check_pair(start, end)?;
        self.write_symmetric(start, end, weight);
        Ok(())
    }

    /// Add the edge `start -> end` with [`DEFAULT_WEIGHT`].
    pub fn connect(&mut self, start: usize, end: usize) -> GraphResult<()> {
        self.add_edge(start, end, DEFAULT_WEIGHT)
    }

    /// Remove the edge `start -> end`. Removing an absent edge is a no-op.
    pub fn remove_edge(&mut self, start: usize, end: usize) -> GraphResult<()> {
        self.check_pair(start, end)?;
        self.write_symmetric(start, end, 0.0);
        Ok(())
    }

    /// Whether an edge `start -> end` exists.
    pub fn adjacent(&self, start: usize, end: usize) -> GraphResult<bool> {
        self.check_pair(start, end)?;
        Ok(self.cell(start, end) != 0.0)
    }

    /// Weight of the edge `start -> end`.
    pub fn edge_weight(&self, start: usize, end: usize) -> GraphResult<f32> {
        self.check_pair(start, end)?;
        match self.cell(start, end) {
            w if w == 0.0 => Err(GraphError::EdgeNotFound { start, end }),
            w => Ok(w),
        }
    }

    /// Update the weight of an existing edge. Cannot create new edges.
    pub fn set_edge_weight(&mut self, start: usize, end: usize, weight: f32) -> GraphResult<()> {
        self.edge_weight(start, end)?;
        self.write_symmetric(start, end, weight);
        Ok(())
    }

    /// The weights of all edges leaving `vertex`, indexed by target.
    pub fn row(&self, vertex: usize) -> GraphResult<&[f32]> {
        self.check_vertex(vertex)?;
        let begin = vertex * self.vertex_count;
        Ok(&self.weights[begin..begin + self.vertex_count])
    }

    /// Vertices reachable from `vertex` in one hop, in increasing order.
    pub fn neighbors(&self, vertex: usize) -> GraphResult<impl Iterator<Item = usize> + '_> {
        let row = self.row(vertex)?;
        Ok(row
            .iter()
            .enumerate()
            .filter(|(_, w)| **w != 0.0)
            .map(|(target, _)| target))
    }

    /// All edges in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.vertex_count;
        self.weights
            .iter()
            .enumerate()
            .filter(|(_, w)| **w != 0.0)
            .map(move |(i, w)| Edge::new(i / n, i % n, *w))
    }

    /// Fail with `OutOfRange` unless `vertex` is a valid index.
    pub fn check_vertex(&self, vertex: usize) -> GraphResult<()> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(GraphError::out_of_range(vertex, self.vertex_count))
        }
    }

    fn check_pair(&self, start: usize, end: usize) -> GraphResult<()> {
        self.check_vertex(start)?;
        self.check_vertex(end)
    }

    /// Read a cell. Indices must already be validated.
    pub(crate) fn cell(&self, row: usize, col: usize) -> f32 {
        self.weights[row * self.vertex_count + col]
    }

    fn write_symmetric(&mut self, start: usize, end: usize, weight: f32) {
        let n = self.vertex_count;
        self.weights[start * n + end] = weight;
        if !self.directed {
            self.weights[end * n + start] = weight;
        }
    }
}

impl std::fmt::Display for MatrixGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::format::text::render_adjacency(self))
    }
}
