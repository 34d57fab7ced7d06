//! Fluent API for building MatrixGraph instances.

use crate::types::{Edge, GraphError, GraphResult, DEFAULT_WEIGHT};

use super::MatrixGraph;

/// Fluent builder for constructing a MatrixGraph.
///
/// Edges are collected first and validated in [`GraphBuilder::build`], so a
/// bad index never leaves a half-populated graph behind.
pub struct GraphBuilder {
    vertex_count: usize,
    directed: bool,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Create a builder for a directed graph with `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            directed: true,
            edges: Vec::new(),
        }
    }

    /// Choose between a directed and an undirected graph.
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Add an edge with an explicit weight.
    pub fn edge(mut self, start: usize, end: usize, weight: f32) -> Self {
        self.edges.push(Edge::new(start, end, weight));
        self
    }

    /// Add an edge with [`DEFAULT_WEIGHT`].
    pub fn connect(self, start: usize, end: usize) -> Self {
        self.edge(start, end, DEFAULT_WEIGHT)
    }

    /// Add a chain of default-weight edges `path[0] -> path[1] -> ...`.
    pub fn chain(mut self, path: &[usize]) -> Self {
        for pair in path.windows(2) {
            self = self.connect(pair[0], pair[1]);
        }
        self
    }

    /// Build the final MatrixGraph. Later edges overwrite earlier ones.
    pub fn build(self) -> GraphResult<MatrixGraph> {
        for edge in &self.edges {
            for index in [edge.source, edge.target] {
                if index >= self.vertex_count {
                    return Err(GraphError::out_of_range(index, self.vertex_count));
                }
            }
        }

        let mut graph = MatrixGraph::new(self.vertex_count, self.directed);
        for edge in self.edges {
            graph.add_edge(edge.source, edge.target, edge.weight)?;
        }
        Ok(graph)
    }
}
