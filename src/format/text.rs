//! Human-readable and JSON renderings of graphs and paths.
//!
//! Text output numbers vertices from 1. JSON output keeps the 0-based
//! indices the library uses.

use std::fmt::Write;

use serde::Serialize;

use crate::graph::{cumulative_weights, MatrixGraph};
use crate::types::{Edge, GraphResult};

/// Adjacency listing, one line per vertex:
/// `[ 1]:-->[ 1, 2::  1.00]-->[ 1, 3::  4.50]`.
pub fn render_adjacency(graph: &MatrixGraph) -> String {
    let mut out = String::new();
    let n = graph.vertex_count();
    for row in 0..n {
        let _ = write!(out, "[{:2}]:", row + 1);
        for col in 0..n {
            let weight = graph.cell(row, col);
            if weight != 0.0 {
                let _ = write!(out, "-->[{:2},{:2}:: {:5.2}]", row + 1, col + 1, weight);
            }
        }
        out.push('\n');
    }
    out
}

/// Every matrix cell, including zeros.
pub fn render_raw(graph: &MatrixGraph) -> String {
    let mut out = String::from("Adjacency Matrix:\n\n");
    let n = graph.vertex_count();
    for row in 0..n {
        for col in 0..n {
            let _ = write!(out, "{:7.2}", graph.cell(row, col));
        }
        out.push('\n');
    }
    out
}

/// A path annotated with the cumulative weight at each vertex:
/// `[ 1:  0.00]==>[ 2:  1.50]==>[ 4:  3.00]`.
///
/// The path is the fewest-hop path, so the final total is not necessarily
/// the smallest weight between its endpoints. Returns an empty string for an
/// empty path.
pub fn render_path(graph: &MatrixGraph, path: &[usize]) -> GraphResult<String> {
    let totals = cumulative_weights(graph, path)?;
    Ok(path
        .iter()
        .zip(&totals)
        .map(|(vertex, total)| format!("[{:2}:{:6.2}]", vertex + 1, total))
        .collect::<Vec<_>>()
        .join("==>"))
}

/// Message for an unreachable goal, using 1-based vertex numbers.
pub fn no_path_message(start: usize, goal: usize) -> String {
    format!("No path from {} to {}.", start + 1, goal + 1)
}

/// Render either the annotated path or the no-path message.
pub fn render_path_or_message(
    graph: &MatrixGraph,
    start: usize,
    goal: usize,
    path: &[usize],
) -> GraphResult<String> {
    if path.is_empty() {
        Ok(no_path_message(start, goal))
    } else {
        render_path(graph, path)
    }
}

/// JSON description of a whole graph.
#[derive(Debug, Clone, Serialize)]
pub struct GraphSummary {
    pub vertex_count: usize,
    pub directed: bool,
    pub edge_count: usize,
    pub edges: Vec<Edge>,
}

impl GraphSummary {
    pub fn new(graph: &MatrixGraph) -> Self {
        Self {
            vertex_count: graph.vertex_count(),
            directed: graph.is_directed(),
            edge_count: graph.edge_count(),
            edges: graph.edges().collect(),
        }
    }
}

/// JSON description of one BFS query.
#[derive(Debug, Clone, Serialize)]
pub struct PathReport {
    pub start: usize,
    pub goal: usize,
    pub found: bool,
    /// Number of edges on the path; 0 when not found or `start == goal`.
    pub hops: usize,
    pub vertices: Vec<usize>,
    /// Running weight at each vertex of `vertices`.
    pub cumulative_weights: Vec<f32>,
    /// Weight of the fewest-hop path, not a minimum-weight distance.
    pub total_weight: f32,
}

impl PathReport {
    pub fn new(graph: &MatrixGraph, start: usize, goal: usize, path: Vec<usize>) -> GraphResult<Self> {
        let totals = cumulative_weights(graph, &path)?;
        Ok(Self {
            start,
            goal,
            found: !path.is_empty(),
            hops: path.len().saturating_sub(1),
            total_weight: totals.last().copied().unwrap_or(0.0),
            cumulative_weights: totals,
            vertices: path,
        })
    }
}
