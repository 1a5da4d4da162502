//! Greedy coloring estimate of the chromatic number.
//!
//! The result is an upper bound: greedy coloring in a fixed order can use more
//! colors than the true chromatic number, but never more than Δ + 1 where Δ is
//! the maximum degree inside the subset.

use petgraph::graph::NodeIndex;

use super::models::{ChromaticEstimate, RegionGraph};

/// Color `nodes` in the given order with the smallest free color.
///
/// Only neighbors inside `nodes` constrain the choice. An empty subset needs
/// zero colors.
pub fn greedy_chromatic_estimate(graph: &RegionGraph, nodes: &[NodeIndex]) -> ChromaticEstimate {
    // Only subset members ever receive a color, so this doubles as the membership test
    let mut color_of: Vec<Option<usize>> = vec![None; graph.node_count()];
    let mut coloring = Vec::with_capacity(nodes.len());

    for &v in nodes {
        let mut taken = vec![false; graph.degree(v) + 1];
        for &neighbor in graph.neighbors(v) {
            if let Some(color) = color_of[neighbor.index()] {
                if color < taken.len() {
                    taken[color] = true;
                }
            }
        }
        let color = taken.iter().position(|&used| !used).unwrap_or(taken.len());
        color_of[v.index()] = Some(color);
        coloring.push((v, color));
    }

    let upper_bound = coloring
        .iter()
        .map(|&(_, color)| color + 1)
        .max()
        .unwrap_or(0);

    ChromaticEstimate {
        upper_bound,
        coloring,
    }
}

/// Whether no two adjacent nodes in `coloring` share a color.
pub fn is_proper_coloring(graph: &RegionGraph, coloring: &[(NodeIndex, usize)]) -> bool {
    let mut color_of: Vec<Option<usize>> = vec![None; graph.node_count()];
    for &(v, color) in coloring {
        color_of[v.index()] = Some(color);
    }
    graph.edges().all(|(a, b)| match (color_of[a.index()], color_of[b.index()]) {
        (Some(ca), Some(cb)) => ca != cb,
        _ => true,
    })
}

// ============================================================================
// Tests
// ============================================================================
