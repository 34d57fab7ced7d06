//! Phase 3 tests: edge-list reader/writer and text rendering.

use std::io::Cursor;

use matrix_graph::format::text::{
    no_path_message, render_adjacency, render_path, render_path_or_message, render_raw,
};
use matrix_graph::format::{EdgeListReader, EdgeListWriter, GraphSummary, LoadOptions, PathReport};
use matrix_graph::graph::{GraphBuilder, MatrixGraph};
use matrix_graph::types::error::GraphError;

use rand::Rng;
use tempfile::NamedTempFile;

const DIRECTED_WEIGHTED: LoadOptions = LoadOptions {
    directed: true,
    weighted: true,
};

fn assert_same_matrix(a: &MatrixGraph, b: &MatrixGraph) {
    assert_eq!(a.vertex_count(), b.vertex_count());
    for u in 0..a.vertex_count() {
        for v in 0..a.vertex_count() {
            assert_eq!(a.adjacent(u, v).unwrap(), b.adjacent(u, v).unwrap());
            if a.adjacent(u, v).unwrap() {
                assert_eq!(a.edge_weight(u, v).unwrap(), b.edge_weight(u, v).unwrap());
            }
        }
    }
}

// ==================== Reader ====================

#[test]
fn test_read_unweighted() {
    let text = "4 3\n1 2\n2 3\n3 4\n";
    let graph = EdgeListReader::parse(text, LoadOptions::default()).unwrap();
    assert_eq!(graph.vertex_count(), 4);
    assert!(graph.is_directed());
    assert!(graph.adjacent(0, 1).unwrap());
    assert!(!graph.adjacent(1, 0).unwrap());
    assert_eq!(graph.edge_weight(2, 3).unwrap(), 1.0);
    assert_eq!(graph.bfs_path(0, 3).unwrap(), vec![0, 1, 2, 3]);
}

#[test]
fn test_read_weighted_undirected() {
    let text = "3 2\n\n1 2 2.5\n  3 1   0.75\n\n";
    let options = LoadOptions {
        directed: false,
        weighted: true,
    };
    let graph = EdgeListReader::read_from(&mut Cursor::new(text), options).unwrap();
    assert!(!graph.is_directed());
    assert_eq!(graph.edge_weight(1, 0).unwrap(), 2.5);
    assert_eq!(graph.edge_weight(0, 2).unwrap(), 0.75);
}

#[test]
fn test_read_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = EdgeListReader::read_from_file(&dir.path().join("nope.txt"), LoadOptions::default());
    assert!(matches!(result, Err(GraphError::Io(_))));
}

#[test]
fn test_read_malformed() {
    let cases: &[(&str, LoadOptions, usize)] = &[
        ("", LoadOptions::default(), 1),
        ("3\n", LoadOptions::default(), 1),
        ("x 1\n1 2\n", LoadOptions::default(), 1),
        ("3 2\n1 2\n", LoadOptions::default(), 3),
        ("3 1\n1 2 5.0\n", LoadOptions::default(), 2),
        ("3 1\n1 2\n", DIRECTED_WEIGHTED, 2),
        ("3 1\n1 two 5.0\n", DIRECTED_WEIGHTED, 2),
        ("3 1\n1 2 heavy\n", DIRECTED_WEIGHTED, 2),
        ("3 1\n1 2 NaN\n", DIRECTED_WEIGHTED, 2),
        ("3 1\n0 2\n", LoadOptions::default(), 2),
        ("3 1\n1 4\n", LoadOptions::default(), 2),
        ("3 1\n-1 2\n", LoadOptions::default(), 2),
        ("3 1\n1 2\n2 3\n", LoadOptions::default(), 3),
        ("4294967296 0\n", LoadOptions::default(), 1),
        ("18446744073709551615 0\n", LoadOptions::default(), 1),
        ("100000 0\n", LoadOptions::default(), 1),
    ];
    for (text, options, expected_line) in cases {
        match EdgeListReader::parse(text, *options) {
            Err(GraphError::Parse { line, .. }) => {
                assert_eq!(line, *expected_line, "wrong line for {:?}", text)
            }
            other => panic!("Expected Parse error for {:?}, got {:?}", text, other),
        }
    }
}

#[test]
fn test_read_zero_vertices() {
    let graph = EdgeListReader::parse("0 0\n", LoadOptions::default()).unwrap();
    assert_eq!(graph.vertex_count(), 0);
}

// ==================== Writer ====================

#[test]
fn test_write_format() {
    let graph = GraphBuilder::new(3)
        .edge(0, 1, 2.5)
        .edge(2, 0, 1.0)
        .build()
        .unwrap();
    let mut buf = Vec::new();
    EdgeListWriter::write_to(&graph, &mut buf).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "3 2\n1 2 2.5\n3 1 1\n"
    );
}

#[test]
fn test_undirected_written_both_ways() {
    let graph = GraphBuilder::new(2).directed(false).edge(0, 1, 3.0).build().unwrap();
    let mut buf = Vec::new();
    EdgeListWriter::write_to(&graph, &mut buf).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "2 2\n1 2 3\n2 1 3\n"
    );
}

#[test]
fn test_file_roundtrip() {
    let mut rng = rand::thread_rng();
    for directed in [true, false] {
        let mut graph = MatrixGraph::new(10, directed);
        for _ in 0..30 {
            let w: f32 = if rng.gen_bool(0.5) {
                rng.gen_range(1..400) as f32 / 4.0
            } else {
                rng.gen_range(1e-9..1e3)
            };
            graph
                .add_edge(rng.gen_range(0..10), rng.gen_range(0..10), w)
                .unwrap();
        }

        let tmp = NamedTempFile::new().unwrap();
        EdgeListWriter::write_to_file(&graph, tmp.path()).unwrap();
        let options = LoadOptions {
            directed,
            weighted: true,
        };
        let reloaded = EdgeListReader::read_from_file(tmp.path(), options).unwrap();
        assert_same_matrix(&graph, &reloaded);
        assert_eq!(graph, reloaded);
    }
}

#[test]
fn test_roundtrip_keeps_exact_weights() {
    let weights = [0.1234567f32, 1e-7, 3.0e-12, 0.1, 1.0 / 3.0, 98765.43, 1.5e20];
    let mut graph = MatrixGraph::new(weights.len() + 1, true);
    for (i, &w) in weights.iter().enumerate() {
        graph.add_edge(i, i + 1, w).unwrap();
    }

    let mut buf = Vec::new();
    EdgeListWriter::write_to(&graph, &mut buf).unwrap();
    let reloaded = EdgeListReader::read_from(&mut buf.as_slice(), DIRECTED_WEIGHTED).unwrap();

    for (i, &w) in weights.iter().enumerate() {
        assert!(reloaded.adjacent(i, i + 1).unwrap(), "edge with weight {} lost", w);
        assert_eq!(reloaded.edge_weight(i, i + 1).unwrap(), w);
    }
    assert_same_matrix(&graph, &reloaded);
}

// ==================== Text rendering ====================

#[test]
fn test_render_adjacency() {
    let graph = GraphBuilder::new(3)
        .edge(0, 1, 1.0)
        .edge(0, 2, 12.5)
        .build()
        .unwrap();
    let expected = "[ 1]:-->[ 1, 2::  1.00]-->[ 1, 3:: 12.50]\n[ 2]:\n[ 3]:\n";
    assert_eq!(render_adjacency(&graph), expected);
    assert_eq!(graph.to_string(), expected);
}

#[test]
fn test_render_raw() {
    let graph = GraphBuilder::new(2).edge(1, 0, 2.0).build().unwrap();
    assert_eq!(
        render_raw(&graph),
        "Adjacency Matrix:\n\n   0.00   0.00\n   2.00   0.00\n"
    );
}

#[test]
fn test_render_path() {
    let graph = GraphBuilder::new(3)
        .edge(0, 1, 1.5)
        .edge(1, 2, 2.0)
        .build()
        .unwrap();
    let path = graph.bfs_path(0, 2).unwrap();
    assert_eq!(
        render_path(&graph, &path).unwrap(),
        "[ 1:  0.00]==>[ 2:  1.50]==>[ 3:  3.50]"
    );
    assert_eq!(render_path(&graph, &[1]).unwrap(), "[ 2:  0.00]");
    assert_eq!(render_path(&graph, &[]).unwrap(), "");
}

#[test]
fn test_no_path_message() {
    let graph = MatrixGraph::new(3, true);
    assert_eq!(no_path_message(0, 2), "No path from 1 to 3.");
    assert_eq!(
        render_path_or_message(&graph, 2, 0, &[]).unwrap(),
        "No path from 3 to 1."
    );
}

// ==================== JSON ====================

#[test]
fn test_graph_summary_json() {
    let graph = GraphBuilder::new(2).edge(0, 1, 2.0).build().unwrap();
    let value = serde_json::to_value(GraphSummary::new(&graph)).unwrap();
    assert_eq!(value["vertex_count"], 2);
    assert_eq!(value["directed"], true);
    assert_eq!(value["edge_count"], 1);
    assert_eq!(value["edges"][0]["source"], 0);
    assert_eq!(value["edges"][0]["target"], 1);
    assert_eq!(value["edges"][0]["weight"], 2.0);
}

#[test]
fn test_path_report_json() {
    let graph = GraphBuilder::new(3).chain(&[0, 1, 2]).build().unwrap();
    let path = graph.bfs_path(0, 2).unwrap();
    let report = PathReport::new(&graph, 0, 2, path).unwrap();
    assert!(report.found);
    assert_eq!(report.hops, 2);
    assert_eq!(report.total_weight, 2.0);

    let missing = PathReport::new(&graph, 2, 0, Vec::new()).unwrap();
    assert!(!missing.found);
    assert_eq!(missing.hops, 0);
    let value = serde_json::to_value(&missing).unwrap();
    assert_eq!(value["vertices"], serde_json::json!([]));
}
