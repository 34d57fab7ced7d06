//! Graph traversal algorithms (BFS).

use crate::types::GraphResult;

use super::{FifoQueue, MatrixGraph};

/// Shortest path from `start` to `goal` by hop count.
///
/// Neighbors are visited in increasing index order, so among several
/// shortest paths the one through lower-numbered vertices wins. Traversal
/// stops as soon as `goal` is dequeued. Returns an empty path when `goal` is
/// unreachable and `[start]` when `start == goal`.
///
/// Edge weights only decide adjacency here; the result is not a
/// minimum-weight path.
pub fn bfs_path(graph: &MatrixGraph, start: usize, goal: usize) -> GraphResult<Vec<usize>> {
    graph.check_vertex(start)?;
    graph.check_vertex(goal)?;

    let n = graph.vertex_count();
    let mut visited = vec![false; n];
    let mut predecessor: Vec<Option<usize>> = vec![None; n];
    let mut queue = FifoQueue::new();

    visited[start] = true;
    queue.enqueue(start);

    while !queue.is_empty() {
        let current = queue.dequeue()?;
        if current == goal {
            break;
        }
        for next in graph.neighbors(current)? {
            if !visited[next] {
                log::trace!("bfs: discovered {} via {}", next, current);
                visited[next] = true;
                predecessor[next] = Some(current);
                queue.enqueue(next);
            }
        }
    }

    let mut path = vec![goal];
    let mut at = goal;
    while let Some(prev) = predecessor[at] {
        path.push(prev);
        at = prev;
    }
    path.reverse();

    if path.first() == Some(&start) {
        log::debug!("bfs: {} -> {} in {} hops", start, goal, path.len() - 1);
        Ok(path)
    } else {
        log::debug!("bfs: no path {} -> {}", start, goal);
        Ok(Vec::new())
    }
}

/// Running weight totals along `path`, starting at `0.0` for the first vertex.
///
/// Fails with `EdgeNotFound` if two consecutive vertices are not adjacent.
pub fn cumulative_weights(graph: &MatrixGraph, path: &[usize]) -> GraphResult<Vec<f32>> {
    let mut totals = Vec::with_capacity(path.len());
    let mut total = 0.0f32;
    for (i, &vertex) in path.iter().enumerate() {
        if i == 0 {
            graph.check_vertex(vertex)?;
        } else {
            total += graph.edge_weight(path[i - 1], vertex)?;
        }
        totals.push(total);
    }
    Ok(totals)
}

impl MatrixGraph {
    /// See [`bfs_path`].
    pub fn bfs_path(&self, start: usize, goal: usize) -> GraphResult<Vec<usize>> {
        bfs_path(self, start, goal)
    }

    /// Whether `goal` is reachable from `start`.
    pub fn path_exists(&self, start: usize, goal: usize) -> GraphResult<bool> {
        Ok(!bfs_path(self, start, goal)?.is_empty())
    }

    /// Sum of edge weights along `path`; `0.0` for paths with fewer than two
    /// vertices.
    ///
    /// Applied to a [`bfs_path`] result this is the weight of the fewest-hop
    /// path, which is only the minimum-weight distance when weights are
    /// uniform.
    pub fn path_weight(&self, path: &[usize]) -> GraphResult<f32> {
        Ok(cumulative_weights(self, path)?
            .last()
            .copied()
            .unwrap_or(0.0))
    }
}
