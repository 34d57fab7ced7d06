//! CLI command implementations.
//!
//! Vertex numbers arrive 1-based from the command line and are converted
//! with [`vertex_from_external`] before reaching the graph.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::format::text::{render_adjacency, render_path_or_message, render_raw};
use crate::format::{EdgeListReader, EdgeListWriter, GraphSummary, LoadOptions, PathReport};
use crate::graph::MatrixGraph;
use crate::types::{vertex_from_external, GraphResult};

use super::interactive::Session;

/// A resolved BFS query: 0-based endpoints and the (possibly empty) path.
pub struct PathQuery {
    pub start: usize,
    pub goal: usize,
    pub path: Vec<usize>,
}

/// Convert 1-based endpoints and run BFS.
pub fn find_path(graph: &MatrixGraph, start: i64, goal: i64) -> GraphResult<PathQuery> {
    let start = vertex_from_external(start, graph.vertex_count())?;
    let goal = vertex_from_external(goal, graph.vertex_count())?;
    let path = graph.bfs_path(start, goal)?;
    Ok(PathQuery { start, goal, path })
}

/// Render a query as a single line of text.
pub fn path_line(graph: &MatrixGraph, query: &PathQuery) -> GraphResult<String> {
    render_path_or_message(graph, query.start, query.goal, &query.path)
}

/// Append the rendered path (or no-path message) for `start -> goal` to `out`.
pub fn append_path(graph: &MatrixGraph, out: &Path, start: i64, goal: i64) -> GraphResult<()> {
    let query = find_path(graph, start, goal)?;
    let line = path_line(graph, &query)?;
    let mut file = OpenOptions::new().create(true).append(true).open(out)?;
    writeln!(file, "{}", line)?;
    log::debug!("appended path {} -> {} to {}", start, goal, out.display());
    Ok(())
}

/// Print the adjacency listing.
pub fn cmd_show(path: &Path, options: LoadOptions, json: bool) -> GraphResult<()> {
    let graph = EdgeListReader::read_from_file(path, options)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&GraphSummary::new(&graph)).unwrap_or_default()
        );
    } else {
        print!("{}", render_adjacency(&graph));
    }
    Ok(())
}

/// Print every matrix cell.
pub fn cmd_raw(path: &Path, options: LoadOptions) -> GraphResult<()> {
    let graph = EdgeListReader::read_from_file(path, options)?;
    print!("{}", render_raw(&graph));
    Ok(())
}

/// Find and print the fewest-hop path between two vertices.
pub fn cmd_path(
    path: &Path,
    options: LoadOptions,
    start: i64,
    goal: i64,
    json: bool,
) -> GraphResult<()> {
    let graph = EdgeListReader::read_from_file(path, options)?;
    let query = find_path(&graph, start, goal)?;

    if json {
        let report = PathReport::new(&graph, query.start, query.goal, query.path)?;
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_default()
        );
    } else {
        println!("{}", path_line(&graph, &query)?);
    }
    Ok(())
}

/// Write the graph to `out` in edge-list format.
pub fn cmd_export(path: &Path, options: LoadOptions, out: &Path) -> GraphResult<()> {
    let graph = EdgeListReader::read_from_file(path, options)?;
    EdgeListWriter::write_to_file(&graph, out)?;
    println!("Exported {} edges to {}", graph.edge_count(), out.display());
    Ok(())
}

/// Append a path line to `out`.
pub fn cmd_append_path(
    path: &Path,
    options: LoadOptions,
    out: &Path,
    start: i64,
    goal: i64,
) -> GraphResult<()> {
    let graph = EdgeListReader::read_from_file(path, options)?;
    append_path(&graph, out, start, goal)
}

/// Run the numbered menu on stdin/stdout.
pub fn cmd_interactive(path: &Path, options: LoadOptions) -> GraphResult<()> {
    let graph = EdgeListReader::read_from_file(path, options)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(&graph, stdin.lock(), stdout.lock()).run()
}
