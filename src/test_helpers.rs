//! Shared graph fixtures for unit tests.

use crate::graph::models::{GraphBuilder, RegionGraph, RegionNode};
use petgraph::graph::NodeIndex;

/// IDs `n0..n{count}`.
pub fn node_ids(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("n{}", i)).collect()
}

/// Build a graph from numeric edges over nodes `n0..n{count}`.
pub fn numbered_graph(count: usize, edges: &[(usize, usize)]) -> RegionGraph {
    let ids = node_ids(count);
    let mut builder = GraphBuilder::with_capacity(count, edges.len());
    for id in &ids {
        builder.add_node(RegionNode::new(id.clone(), id.clone()));
    }
    for &(a, b) in edges {
        builder
            .add_edge(&ids[a], &ids[b], Default::default())
            .unwrap();
    }
    builder.build()
}

/// Cycle n0 - n1 - ... - n{n-1} - n0
pub fn cycle_graph(n: usize) -> RegionGraph {
    let edges: Vec<(usize, usize)> = (0..n).map(|i| (i, (i + 1) % n)).collect();
    numbered_graph(n, &edges)
}

/// Path n0 - n1 - ... - n{n-1}
pub fn path_graph(n: usize) -> RegionGraph {
    let edges: Vec<(usize, usize)> = (1..n).map(|i| (i - 1, i)).collect();
    numbered_graph(n, &edges)
}

/// Complete graph K_n
pub fn complete_graph(n: usize) -> RegionGraph {
    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            edges.push((i, j));
        }
    }
    numbered_graph(n, &edges)
}

/// Star: n0 is the hub, n1..=n{leaves} are leaves
pub fn star_graph(leaves: usize) -> RegionGraph {
    let edges: Vec<(usize, usize)> = (1..=leaves).map(|i| (0, i)).collect();
    numbered_graph(leaves + 1, &edges)
}

/// Square A-B-C-D-A
pub fn square() -> RegionGraph {
    RegionGraph::from_edges(
        &["A", "B", "C", "D"],
        &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")],
    )
    .unwrap()
}

/// Triangle A-B-C plus isolated D
pub fn triangle_with_isolated() -> RegionGraph {
    RegionGraph::from_edges(
        &["A", "B", "C", "D"],
        &[("A", "B"), ("B", "C"), ("C", "A")],
    )
    .unwrap()
}

/// Every node of the graph, in node order.
pub fn all_nodes(graph: &RegionGraph) -> Vec<NodeIndex> {
    graph.nodes().collect()
}

/// Labels of the given nodes.
pub fn labels(graph: &RegionGraph, nodes: &[NodeIndex]) -> Vec<String> {
    graph.labels(nodes)
}
