//! Connected components.
//!
//! Depth-first traversal with an explicit work stack, so deep chains cannot
//! exhaust the native call stack. Unvisited start nodes are taken in graph
//! node order, which makes the component list reproducible.

use petgraph::graph::NodeIndex;
use std::cmp::Reverse;

use super::models::{Component, RegionGraph};

/// Partition the graph into connected components.
///
/// Components are sorted by descending size; equal sizes keep the order in
/// which the traversal discovered them. Member lists are in node order.
pub fn find_components(graph: &RegionGraph) -> Vec<Component> {
    let mut visited = vec![false; graph.node_count()];
    let mut components: Vec<Component> = Vec::new();
    let mut stack: Vec<NodeIndex> = Vec::new();

    for start in graph.nodes() {
        if visited[start.index()] {
            continue;
        }
        visited[start.index()] = true;
        stack.push(start);

        let mut nodes = Vec::new();
        while let Some(current) = stack.pop() {
            nodes.push(current);
            // Reverse push keeps the lowest-index neighbor on top of the stack
            for &neighbor in graph.neighbors(current).iter().rev() {
                if !visited[neighbor.index()] {
                    visited[neighbor.index()] = true;
                    stack.push(neighbor);
                }
            }
        }

        nodes.sort_unstable();
        components.push(Component {
            id: components.len() as u32,
            nodes,
        });
    }

    components.sort_by_key(|c| Reverse(c.size()));
    components
}

/// Whether the subgraph induced by `nodes` is connected.
///
/// An empty set counts as connected.
pub fn is_connected_subset(graph: &RegionGraph, nodes: &[NodeIndex]) -> bool {
    let Some(&start) = nodes.first() else {
        return true;
    };

    let mut in_subset = vec![false; graph.node_count()];
    for &v in nodes {
        in_subset[v.index()] = true;
    }

    let mut visited = vec![false; graph.node_count()];
    visited[start.index()] = true;
    let mut stack = vec![start];
    let mut reached = 0usize;

    while let Some(current) = stack.pop() {
        reached += 1;
        for &neighbor in graph.neighbors(current) {
            if in_subset[neighbor.index()] && !visited[neighbor.index()] {
                visited[neighbor.index()] = true;
                stack.push(neighbor);
            }
        }
    }

    reached == nodes.len()
}

// ============================================================================
// Tests
// ============================================================================
