//! Heuristic Eulerian and Hamiltonian subgraph searches.
//!
//! Both searches return the largest node set they *found*, never a proven
//! maximum. A result only claims what it verified: an Eulerian candidate is
//! connected with even internal degrees (and carries an Eulerian circuit),
//! a Hamiltonian candidate carries a cycle found by exhaustive backtracking.
//!
//! Subsets with fewer than 3 nodes always yield an empty candidate.

use petgraph::graph::NodeIndex;
use std::cmp::Reverse;
use std::collections::HashSet;

use super::components::is_connected_subset;
use super::models::{AnalysisConfig, RegionGraph, SubgraphCandidate};

const MIN_SUBGRAPH_SIZE: usize = 3;

// ============================================================================
// Shared helpers
// ============================================================================

fn membership(graph: &RegionGraph, nodes: &[NodeIndex]) -> Vec<bool> {
    let mut mask = vec![false; graph.node_count()];
    for &v in nodes {
        mask[v.index()] = true;
    }
    mask
}

/// Number of neighbors of `v` inside `mask`.
fn links_into(graph: &RegionGraph, v: NodeIndex, mask: &[bool]) -> usize {
    graph
        .neighbors(v)
        .iter()
        .filter(|n| mask[n.index()])
        .count()
}

fn induced_degrees(graph: &RegionGraph, nodes: &[NodeIndex]) -> Vec<usize> {
    let mask = membership(graph, nodes);
    nodes.iter().map(|&v| links_into(graph, v, &mask)).collect()
}

fn members_in_order(nodes: &[NodeIndex], mask: &[bool]) -> Vec<NodeIndex> {
    nodes.iter().copied().filter(|v| mask[v.index()]).collect()
}

/// Subset nodes passing `keep`, sorted by descending internal degree.
/// Equal degrees keep node order.
fn ranked_seeds(
    graph: &RegionGraph,
    nodes: &[NodeIndex],
    subset: &[bool],
    keep: impl Fn(usize) -> bool,
) -> Vec<NodeIndex> {
    let mut seeds: Vec<(NodeIndex, usize)> = nodes
        .iter()
        .map(|&v| (v, links_into(graph, v, subset)))
        .filter(|&(_, degree)| keep(degree))
        .collect();
    seeds.sort_by_key(|&(_, degree)| Reverse(degree));
    seeds.into_iter().map(|(v, _)| v).collect()
}

// ============================================================================
// Eulerian subgraph
// ============================================================================

/// Largest connected node-induced subgraph with even internal degrees found
/// by greedy growth.
///
/// Candidates are evaluated in this order:
/// 1. parity peeling of the whole subset (drop odd-degree nodes one at a time,
///    keep the largest connected remainder), which recovers long cycles that
///    seed growth cannot reach;
/// 2. one candidate per seed (even degree ≥ 2, descending degree): start from
///    the seed's closed neighborhood, absorb outside nodes with an even number
///    (≥ 2) of links into the set until nothing changes, then peel odd nodes.
///
/// The search stops once a candidate covers all but at most one subset node.
pub fn find_eulerian_subgraph(graph: &RegionGraph, nodes: &[NodeIndex]) -> SubgraphCandidate {
    if nodes.len() < MIN_SUBGRAPH_SIZE {
        return SubgraphCandidate::empty();
    }

    let subset = membership(graph, nodes);
    let good_enough = nodes.len() - 1;
    let mut best: Vec<NodeIndex> = Vec::new();

    let consider = |candidate: Vec<NodeIndex>, best: &mut Vec<NodeIndex>| {
        if candidate.len() >= MIN_SUBGRAPH_SIZE
            && candidate.len() > best.len()
            && is_connected_subset(graph, &candidate)
        {
            *best = candidate;
        }
        best.len() >= good_enough
    };

    let done = consider(peel_whole_subset(graph, nodes, &subset), &mut best);

    if !done {
        let seeds = ranked_seeds(graph, nodes, &subset, |degree| {
            degree >= 2 && degree % 2 == 0
        });
        for seed in seeds {
            if consider(grow_even_set(graph, nodes, &subset, seed), &mut best) {
                break;
            }
        }
    }

    if best.is_empty() {
        tracing::debug!(subset = nodes.len(), "No Eulerian subgraph found");
        return SubgraphCandidate::empty();
    }

    let degrees = induced_degrees(graph, &best);
    let walk = eulerian_circuit(graph, &best);
    SubgraphCandidate {
        edge_count: degrees.iter().sum::<usize>() / 2,
        is_eulerian: true,
        // A connected 2-regular graph is a single cycle through every node
        is_hamiltonian: degrees.iter().all(|&d| d == 2),
        walk,
        nodes: best,
    }
}

/// Remove the first odd-degree member (node order) until every member is even.
fn peel_odd_nodes(graph: &RegionGraph, nodes: &[NodeIndex], in_set: &mut [bool]) {
    while let Some(&odd) = nodes
        .iter()
        .find(|&&v| in_set[v.index()] && links_into(graph, v, in_set) % 2 == 1)
    {
        in_set[odd.index()] = false;
    }
}

fn peel_whole_subset(graph: &RegionGraph, nodes: &[NodeIndex], subset: &[bool]) -> Vec<NodeIndex> {
    let mut in_set = subset.to_vec();
    peel_odd_nodes(graph, nodes, &mut in_set);

    // Every piece of an even-degree graph is itself even; keep the largest
    let remaining = members_in_order(nodes, &in_set);
    let mut seen = vec![false; graph.node_count()];
    let mut largest: Vec<NodeIndex> = Vec::new();
    for &start in &remaining {
        if seen[start.index()] {
            continue;
        }
        seen[start.index()] = true;
        let mut piece = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            piece.push(current);
            for &neighbor in graph.neighbors(current) {
                if in_set[neighbor.index()] && !seen[neighbor.index()] {
                    seen[neighbor.index()] = true;
                    stack.push(neighbor);
                }
            }
        }
        if piece.len() > largest.len() {
            largest = piece;
        }
    }

    largest.sort_unstable();
    largest
}

fn grow_even_set(
    graph: &RegionGraph,
    nodes: &[NodeIndex],
    subset: &[bool],
    seed: NodeIndex,
) -> Vec<NodeIndex> {
    let mut in_set = vec![false; graph.node_count()];
    in_set[seed.index()] = true;
    for &neighbor in graph.neighbors(seed) {
        if subset[neighbor.index()] {
            in_set[neighbor.index()] = true;
        }
    }

    loop {
        let mut changed = false;
        for &v in nodes {
            if in_set[v.index()] {
                continue;
            }
            let links = links_into(graph, v, &in_set);
            if links >= 2 && links % 2 == 0 {
                in_set[v.index()] = true;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    peel_odd_nodes(graph, nodes, &mut in_set);
    members_in_order(nodes, &in_set)
}

/// Hierholzer's algorithm on the subgraph induced by `nodes`.
///
/// Expects a connected even-degree node set; returns the closed walk starting
/// and ending at the first node (one node per traversed edge, plus the start).
pub fn eulerian_circuit(graph: &RegionGraph, nodes: &[NodeIndex]) -> Vec<NodeIndex> {
    let Some(&start) = nodes.first() else {
        return Vec::new();
    };

    let mask = membership(graph, nodes);
    let mut remaining: Vec<Vec<NodeIndex>> = vec![Vec::new(); graph.node_count()];
    for &v in nodes {
        remaining[v.index()] = graph
            .neighbors(v)
            .iter()
            .copied()
            .filter(|n| mask[n.index()])
            .rev()
            .collect();
    }

    let mut used: HashSet<(NodeIndex, NodeIndex)> = HashSet::new();
    let mut stack = vec![start];
    let mut circuit = Vec::new();

    while let Some(&current) = stack.last() {
        let mut next = None;
        while let Some(neighbor) = remaining[current.index()].pop() {
            let key = if current < neighbor {
                (current, neighbor)
            } else {
                (neighbor, current)
            };
            if used.insert(key) {
                next = Some(neighbor);
                break;
            }
        }
        match next {
            Some(neighbor) => stack.push(neighbor),
            None => {
                circuit.push(current);
                stack.pop();
            }
        }
    }

    circuit.reverse();
    circuit
}

// ============================================================================
// Hamiltonian subgraph
// ============================================================================

/// Largest node set with a verified Hamiltonian cycle found by greedy growth.
///
/// Seeds are subset nodes whose degree is at least half the subset size,
/// highest degree first. From each seed the set grows (node order) by any node
/// linked to at least half of the current set, up to
/// `config.hamiltonian_max_subset` nodes. Each grown set is then checked by
/// exhaustive backtracking, bounded by `config.hamiltonian_step_limit`; a set
/// whose check runs out of steps is treated as unverified.
pub fn find_hamiltonian_subgraph(
    graph: &RegionGraph,
    nodes: &[NodeIndex],
    config: &AnalysisConfig,
) -> SubgraphCandidate {
    let n = nodes.len();
    if n < MIN_SUBGRAPH_SIZE {
        return SubgraphCandidate::empty();
    }

    let subset = membership(graph, nodes);
    let cap = config.hamiltonian_max_subset.min(n);
    let seeds = ranked_seeds(graph, nodes, &subset, |degree| 2 * degree >= n);

    let mut best: Option<(Vec<NodeIndex>, Vec<NodeIndex>)> = None;
    for seed in seeds {
        let set = grow_dense_set(graph, nodes, seed, cap);
        let best_len = best.as_ref().map_or(0, |(members, _)| members.len());
        if set.len() < MIN_SUBGRAPH_SIZE || set.len() <= best_len {
            continue;
        }

        match hamiltonian_cycle(graph, &set, config.hamiltonian_step_limit) {
            Some(cycle) => {
                let covers_subset = set.len() == n;
                best = Some((set, cycle));
                if covers_subset {
                    break;
                }
            }
            None => {
                tracing::debug!(
                    seed = graph.label(seed),
                    size = set.len(),
                    "Hamiltonian candidate rejected"
                );
            }
        }
    }

    let Some((set, cycle)) = best else {
        return SubgraphCandidate::empty();
    };

    let mut members = set;
    members.sort_unstable();
    let degrees = induced_degrees(graph, &members);
    SubgraphCandidate {
        edge_count: degrees.iter().sum::<usize>() / 2,
        is_eulerian: degrees.iter().all(|d| d % 2 == 0),
        is_hamiltonian: true,
        walk: cycle,
        nodes: members,
    }
}

/// Grow from `seed`; the result lists the seed first, then nodes in the order
/// they joined.
fn grow_dense_set(
    graph: &RegionGraph,
    nodes: &[NodeIndex],
    seed: NodeIndex,
    cap: usize,
) -> Vec<NodeIndex> {
    let mut in_set = vec![false; graph.node_count()];
    in_set[seed.index()] = true;
    let mut members = vec![seed];

    loop {
        let mut changed = false;
        for &v in nodes {
            if members.len() >= cap {
                return members;
            }
            if in_set[v.index()] {
                continue;
            }
            if 2 * links_into(graph, v, &in_set) >= members.len() {
                in_set[v.index()] = true;
                members.push(v);
                changed = true;
            }
        }
        if !changed {
            return members;
        }
    }
}

/// Exhaustive search for a Hamiltonian cycle of the subgraph induced by `set`,
/// starting at `set[0]`.
///
/// Returns the cycle with the start repeated at the end, or `None` when no
/// cycle exists or more than `step_limit` path extensions were needed.
pub fn hamiltonian_cycle(
    graph: &RegionGraph,
    set: &[NodeIndex],
    step_limit: u64,
) -> Option<Vec<NodeIndex>> {
    let &start = set.first()?;
    if set.len() < MIN_SUBGRAPH_SIZE {
        return None;
    }

    let mask = membership(graph, set);
    // Every node of a cycle needs two cycle neighbors
    if set.iter().any(|&v| links_into(graph, v, &mask) < 2) {
        return None;
    }

    let mut on_path = vec![false; graph.node_count()];
    on_path[start.index()] = true;
    let mut path = vec![start];
    // cursors[i]: next neighbor of path[i] to try
    let mut cursors: Vec<usize> = vec![0];
    let mut steps = 0u64;

    while let Some(cursor) = cursors.last_mut() {
        let current = path[path.len() - 1];

        if path.len() == set.len() {
            if graph.has_edge(current, start) {
                path.push(start);
                return Some(path);
            }
            cursors.pop();
            on_path[current.index()] = false;
            path.pop();
            continue;
        }

        let neighbors = graph.neighbors(current);
        let mut advanced = None;
        while *cursor < neighbors.len() {
            let next = neighbors[*cursor];
            *cursor += 1;
            if mask[next.index()] && !on_path[next.index()] {
                advanced = Some(next);
                break;
            }
        }

        match advanced {
            Some(next) => {
                steps += 1;
                if steps > step_limit {
                    tracing::debug!(step_limit, size = set.len(), "Hamiltonian step limit hit");
                    return None;
                }
                on_path[next.index()] = true;
                path.push(next);
                cursors.push(0);
            }
            None => {
                cursors.pop();
                on_path[current.index()] = false;
                path.pop();
            }
        }
    }

    None
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{
        all_nodes, complete_graph, cycle_graph, labels, numbered_graph, path_graph, square,
        star_graph, triangle_with_isolated,
    };

    fn assert_valid_circuit(graph: &RegionGraph, candidate: &SubgraphCandidate) {
        let walk = &candidate.walk;
        assert_eq!(walk.len(), candidate.edge_count + 1);
        assert_eq!(walk.first(), walk.last());
        let mut traversed = HashSet::new();
        for pair in walk.windows(2) {
            assert!(graph.has_edge(pair[0], pair[1]));
            let key = (pair[0].min(pair[1]), pair[0].max(pair[1]));
            assert!(traversed.insert(key), "edge traversed twice");
        }
    }

    fn assert_valid_cycle(graph: &RegionGraph, candidate: &SubgraphCandidate) {
        let walk = &candidate.walk;
        assert_eq!(walk.len(), candidate.size() + 1);
        assert_eq!(walk.first(), walk.last());
        let distinct: HashSet<NodeIndex> = walk.iter().copied().collect();
        assert_eq!(distinct.len(), candidate.size());
        for pair in walk.windows(2) {
            assert!(graph.has_edge(pair[0], pair[1]));
        }
    }

    // --- Eulerian ---

    #[test]
    fn test_eulerian_square_is_whole_set() {
        let g = square();
        let candidate = find_eulerian_subgraph(&g, &all_nodes(&g));
        assert_eq!(labels(&g, &candidate.nodes), vec!["A", "B", "C", "D"]);
        assert!(candidate.is_eulerian);
        assert!(candidate.is_hamiltonian);
        assert_eq!(candidate.edge_count, 4);
        assert_valid_circuit(&g, &candidate);
    }

    #[test]
    fn test_eulerian_long_cycle_is_whole_set() {
        for n in 3..12 {
            let g = cycle_graph(n);
            let candidate = find_eulerian_subgraph(&g, &all_nodes(&g));
            assert_eq!(candidate.size(), n, "C_{}", n);
            assert_valid_circuit(&g, &candidate);
        }
    }

    #[test]
    fn test_eulerian_odd_complete_graph() {
        let g = complete_graph(5);
        let candidate = find_eulerian_subgraph(&g, &all_nodes(&g));
        assert_eq!(candidate.size(), 5);
        assert_eq!(candidate.edge_count, 10);
        assert!(!candidate.is_hamiltonian);
        assert_valid_circuit(&g, &candidate);
    }

    #[test]
    fn test_eulerian_even_complete_graph_drops_one_node() {
        let g = complete_graph(4);
        let candidate = find_eulerian_subgraph(&g, &all_nodes(&g));
        assert_eq!(candidate.size(), 3);
        assert!(induced_degrees(&g, &candidate.nodes).iter().all(|d| d % 2 == 0));
        assert_valid_circuit(&g, &candidate);
    }

    #[test]
    fn test_eulerian_none_in_tree() {
        let g = star_graph(4);
        assert!(find_eulerian_subgraph(&g, &all_nodes(&g)).is_empty());

        let g = path_graph(6);
        assert!(find_eulerian_subgraph(&g, &all_nodes(&g)).is_empty());
    }

    #[test]
    fn test_eulerian_two_triangles_sharing_a_node() {
        // Bowtie: n0-n1-n2 and n2-n3-n4, n2 has degree 4
        let g = numbered_graph(5, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)]);
        let candidate = find_eulerian_subgraph(&g, &all_nodes(&g));
        assert_eq!(candidate.size(), 5);
        assert!(!candidate.is_hamiltonian);
        assert_valid_circuit(&g, &candidate);
    }

    #[test]
    fn test_eulerian_seed_growth_beyond_peeling() {
        // Square n0..n3 plus pendant n4 attached to n0: peeling removes n0
        // first, seed growth keeps the square.
        let g = numbered_graph(5, &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 4)]);
        let candidate = find_eulerian_subgraph(&g, &all_nodes(&g));
        assert_eq!(labels(&g, &candidate.nodes), vec!["n0", "n1", "n2", "n3"]);
    }

    #[test]
    fn test_eulerian_below_floor() {
        let g = numbered_graph(2, &[(0, 1)]);
        assert!(find_eulerian_subgraph(&g, &all_nodes(&g)).is_empty());
    }

    // --- Hamiltonian ---

    #[test]
    fn test_hamiltonian_square_is_whole_set() {
        let g = square();
        let candidate = find_hamiltonian_subgraph(&g, &all_nodes(&g), &AnalysisConfig::default());
        assert_eq!(labels(&g, &candidate.nodes), vec!["A", "B", "C", "D"]);
        assert!(candidate.is_hamiltonian);
        assert!(candidate.is_eulerian);
        assert_valid_cycle(&g, &candidate);
    }

    #[test]
    fn test_hamiltonian_triangle_component() {
        let g = triangle_with_isolated();
        let component: Vec<NodeIndex> = ["A", "B", "C"]
            .iter()
            .map(|id| g.get_index(id).unwrap())
            .collect();
        let candidate = find_hamiltonian_subgraph(&g, &component, &AnalysisConfig::default());
        assert_eq!(candidate.size(), 3);
        assert_valid_cycle(&g, &candidate);
    }

    #[test]
    fn test_hamiltonian_complete_graph() {
        let g = complete_graph(7);
        let candidate = find_hamiltonian_subgraph(&g, &all_nodes(&g), &AnalysisConfig::default());
        assert_eq!(candidate.size(), 7);
        assert_eq!(candidate.edge_count, 21);
        assert_valid_cycle(&g, &candidate);
    }

    #[test]
    fn test_hamiltonian_star_has_none() {
        let g = star_graph(5);
        let candidate = find_hamiltonian_subgraph(&g, &all_nodes(&g), &AnalysisConfig::default());
        assert!(candidate.is_empty());
        assert!(!candidate.is_hamiltonian);
    }

    #[test]
    fn test_hamiltonian_respects_subset_cap() {
        let g = complete_graph(8);
        let config = AnalysisConfig {
            hamiltonian_max_subset: 5,
            ..AnalysisConfig::default()
        };
        let candidate = find_hamiltonian_subgraph(&g, &all_nodes(&g), &config);
        assert_eq!(candidate.size(), 5);
        assert_valid_cycle(&g, &candidate);
    }

    #[test]
    fn test_hamiltonian_cycle_on_petersen_graph_fails() {
        // The Petersen graph is the classic non-Hamiltonian cubic graph
        let g = numbered_graph(
            10,
            &[
                (0, 1),
                (1, 2),
                (2, 3),
                (3, 4),
                (4, 0),
                (0, 5),
                (1, 6),
                (2, 7),
                (3, 8),
                (4, 9),
                (5, 7),
                (7, 9),
                (9, 6),
                (6, 8),
                (8, 5),
            ],
        );
        let nodes = all_nodes(&g);
        assert!(hamiltonian_cycle(&g, &nodes, u64::MAX).is_none());

        // Dropping any vertex leaves a Hamiltonian graph
        assert!(hamiltonian_cycle(&g, &nodes[1..], u64::MAX).is_some());
    }

    #[test]
    fn test_hamiltonian_cycle_step_limit() {
        let g = complete_graph(6);
        let nodes = all_nodes(&g);
        assert!(hamiltonian_cycle(&g, &nodes, 2).is_none());
        assert!(hamiltonian_cycle(&g, &nodes, 5).is_some());
    }

    #[test]
    fn test_hamiltonian_below_floor() {
        let g = numbered_graph(2, &[(0, 1)]);
        let candidate = find_hamiltonian_subgraph(&g, &all_nodes(&g), &AnalysisConfig::default());
        assert!(candidate.is_empty());
    }
}
