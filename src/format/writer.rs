//! Writes edge-list files from an in-memory graph.

use std::io::Write;
use std::path::Path;

use crate::graph::MatrixGraph;
use crate::types::GraphResult;

/// Writer for edge-list text files.
///
/// Every non-zero matrix cell becomes one line with an explicit weight, so
/// the output must be read back with `weighted: true`. Weights use the
/// shortest decimal form that parses back to the same `f32`. Undirected edges are
/// written in both directions; reloading them is idempotent.
pub struct EdgeListWriter;

impl EdgeListWriter {
    /// Write a complete MatrixGraph to a file, replacing its contents.
    pub fn write_to_file(graph: &MatrixGraph, path: &Path) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        Self::write_to(graph, &mut writer)?;
        writer.flush()?;
        log::debug!("exported {} edges to {}", graph.edge_count(), path.display());
        Ok(())
    }

    /// Write a complete MatrixGraph to any writer.
    pub fn write_to(graph: &MatrixGraph, writer: &mut impl Write) -> GraphResult<()> {
        writeln!(writer, "{} {}", graph.vertex_count(), graph.edge_count())?;
        for edge in graph.edges() {
            writeln!(
                writer,
                "{} {} {}",
                edge.source + 1,
                edge.target + 1,
                edge.weight
            )?;
        }
        Ok(())
    }
}
