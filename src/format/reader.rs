//! Reads edge-list files into an in-memory graph.
//!
//! ```text
//! <vertex_count> <edge_count>
//! <u> <v> [<weight>]
//! ```
//!
//! Vertices are numbered from 1. The weight column is present only for
//! weighted graphs. Blank lines are ignored.

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::graph::MatrixGraph;
use crate::types::{
    vertex_from_external, Edge, GraphError, GraphResult, DEFAULT_WEIGHT, MAX_VERTEX_COUNT,
};

use super::LoadOptions;

/// Reader for edge-list text files.
pub struct EdgeListReader;

impl EdgeListReader {
    /// Read an edge-list file into a MatrixGraph.
    pub fn read_from_file(path: &Path, options: LoadOptions) -> GraphResult<MatrixGraph> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("loading {} ({:?})", path.display(), options);
        Self::parse(&text, options)
    }

    /// Read from any reader into a MatrixGraph.
    pub fn read_from(reader: &mut impl Read, options: LoadOptions) -> GraphResult<MatrixGraph> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text, options)
    }

    /// Parse edge-list text.
    ///
    /// The whole input is validated before the graph is allocated, so any
    /// error leaves nothing behind.
    pub fn parse(text: &str, options: LoadOptions) -> GraphResult<MatrixGraph> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line))
            .filter(|(_, line)| !line.trim().is_empty());

        let (header_line, header) = lines
            .next()
            .ok_or_else(|| GraphError::parse(1, "missing `vertex_count edge_count` header"))?;
        let fields: Vec<&str> = header.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(GraphError::parse(
                header_line,
                format!("expected `vertex_count edge_count`, found {} fields", fields.len()),
            ));
        }
        let vertex_count: usize = parse_field(header_line, fields[0], "vertex count")?;
        let edge_count: usize = parse_field(header_line, fields[1], "edge count")?;
        if vertex_count > MAX_VERTEX_COUNT || vertex_count.checked_mul(vertex_count).is_none() {
            return Err(GraphError::parse(
                header_line,
                format!(
                    "vertex count {} exceeds the limit of {}",
                    vertex_count, MAX_VERTEX_COUNT
                ),
            ));
        }

        let expected_fields = if options.weighted { 3 } else { 2 };
        let mut edges: Vec<Edge> = Vec::new();

        for _ in 0..edge_count {
            let (line_no, line) = lines.next().ok_or_else(|| {
                GraphError::parse(
                    text.lines().count() + 1,
                    format!("expected {} edges, found {}", edge_count, edges.len()),
                )
            })?;
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != expected_fields {
                return Err(GraphError::parse(
                    line_no,
                    format!(
                        "expected {} fields for {} edge, found {}",
                        expected_fields,
                        if options.weighted { "a weighted" } else { "an unweighted" },
                        fields.len()
                    ),
                ));
            }

            let start = parse_vertex(line_no, fields[0], vertex_count)?;
            let end = parse_vertex(line_no, fields[1], vertex_count)?;
            let weight = if options.weighted {
                let weight: f32 = parse_field(line_no, fields[2], "weight")?;
                if !weight.is_finite() {
                    return Err(GraphError::parse(line_no, "weight must be finite"));
                }
                weight
            } else {
                DEFAULT_WEIGHT
            };
            edges.push(Edge::new(start, end, weight));
        }

        if let Some((line_no, _)) = lines.next() {
            return Err(GraphError::parse(
                line_no,
                format!("unexpected data after {} edges", edge_count),
            ));
        }

        let mut graph = MatrixGraph::new(vertex_count, options.directed);
        for edge in &edges {
            graph.add_edge(edge.source, edge.target, edge.weight)?;
        }
        log::debug!(
            "loaded graph: {} vertices, {} edge lines",
            vertex_count,
            edges.len()
        );
        Ok(graph)
    }
}

fn parse_field<T: FromStr>(line: usize, field: &str, what: &str) -> GraphResult<T> {
    field
        .parse()
        .map_err(|_| GraphError::parse(line, format!("invalid {}: {:?}", what, field)))
}

fn parse_vertex(line: usize, field: &str, vertex_count: usize) -> GraphResult<usize> {
    let number: i64 = parse_field(line, field, "vertex")?;
    vertex_from_external(number, vertex_count).map_err(|_| {
        GraphError::parse(
            line,
            format!("vertex {} outside 1..={}", number, vertex_count),
        )
    })
}
