//! Breadth-first distances, eccentricity, radius, diameter and center.
//!
//! Eccentricities use the reachable-only convention: a node's eccentricity is
//! its greatest *finite* distance, so in a disconnected graph unreachable
//! nodes are ignored rather than making every eccentricity infinite. Callers
//! see this flagged as `DistanceMetrics::reachable_only` in the report.

use petgraph::graph::NodeIndex;
use std::collections::VecDeque;

use super::models::RegionGraph;

/// Shortest-path hop counts from `source` to every node (`None` = unreachable).
///
/// Indexed by `NodeIndex::index()`.
pub fn bfs_distances(graph: &RegionGraph, source: NodeIndex) -> Vec<Option<usize>> {
    let mut distances: Vec<Option<usize>> = vec![None; graph.node_count()];
    let mut queue = VecDeque::new();

    distances[source.index()] = Some(0);
    queue.push_back((source, 0usize));

    while let Some((current, dist)) = queue.pop_front() {
        for &neighbor in graph.neighbors(current) {
            if distances[neighbor.index()].is_none() {
                distances[neighbor.index()] = Some(dist + 1);
                queue.push_back((neighbor, dist + 1));
            }
        }
    }

    distances
}

/// Greatest finite distance from `node` (0 for an isolated node).
pub fn eccentricity(graph: &RegionGraph, node: NodeIndex) -> usize {
    bfs_distances(graph, node)
        .into_iter()
        .flatten()
        .max()
        .unwrap_or(0)
}

/// Per-node eccentricities and the values derived from them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistanceSummary {
    /// Eccentricity of every node, indexed by `NodeIndex::index()`
    pub eccentricities: Vec<usize>,
    pub radius: usize,
    pub diameter: usize,
    /// Nodes whose eccentricity equals the radius, in node order
    pub center: Vec<NodeIndex>,
}

/// Run a BFS from every node. O(V·(V+E)).
///
/// An empty graph yields radius = diameter = 0 and an empty center.
pub fn distance_summary(graph: &RegionGraph) -> DistanceSummary {
    let eccentricities: Vec<usize> = graph.nodes().map(|v| eccentricity(graph, v)).collect();

    let (Some(&radius), Some(&diameter)) =
        (eccentricities.iter().min(), eccentricities.iter().max())
    else {
        return DistanceSummary::default();
    };

    let center = graph
        .nodes()
        .filter(|v| eccentricities[v.index()] == radius)
        .collect();

    DistanceSummary {
        eccentricities,
        radius,
        diameter,
        center,
    }
}

// ============================================================================
// Tests
// ============================================================================
