//! Exact maximum clique search (Bron–Kerbosch with pivoting).
//!
//! Worst case is exponential in the subset size, which is acceptable for the
//! few-hundred-node components this crate targets. The recursion is unrolled
//! onto an explicit frame stack, and the best clique lives in a
//! [`CliqueSearch`] value owned by a single call, so nothing carries over
//! between searches.

use petgraph::graph::NodeIndex;

use super::models::{Clique, RegionGraph};

/// One level of the Bron–Kerbosch recursion.
struct Frame {
    /// R: the clique being extended
    clique: Vec<NodeIndex>,
    /// P: nodes that can still extend R
    candidates: Vec<NodeIndex>,
    /// X: nodes already tried at this level
    excluded: Vec<NodeIndex>,
    /// P \ N(pivot), fixed when the frame is created
    branches: Vec<NodeIndex>,
    next: usize,
}

impl Frame {
    fn new(
        graph: &RegionGraph,
        clique: Vec<NodeIndex>,
        candidates: Vec<NodeIndex>,
        excluded: Vec<NodeIndex>,
    ) -> Self {
        let pivot = candidates.first().or_else(|| excluded.first()).copied();
        let branches = match pivot {
            Some(pivot) => candidates
                .iter()
                .copied()
                .filter(|&v| !graph.has_edge(pivot, v))
                .collect(),
            None => Vec::new(),
        };
        Self {
            clique,
            candidates,
            excluded,
            branches,
            next: 0,
        }
    }

    fn is_maximal(&self) -> bool {
        self.candidates.is_empty() && self.excluded.is_empty()
    }
}

/// Search context for one maximum-clique query.
pub struct CliqueSearch<'g> {
    graph: &'g RegionGraph,
    best: Vec<NodeIndex>,
    frames_visited: u64,
}

impl<'g> CliqueSearch<'g> {
    pub fn new(graph: &'g RegionGraph) -> Self {
        Self {
            graph,
            best: Vec::new(),
            frames_visited: 0,
        }
    }

    /// Find a maximum clique among `nodes`, consuming the context.
    ///
    /// The first maximal clique reaching the maximum size in traversal order
    /// is kept.
    pub fn run(mut self, nodes: &[NodeIndex]) -> Clique {
        let graph = self.graph;
        let mut stack = vec![Frame::new(graph, Vec::new(), nodes.to_vec(), Vec::new())];

        while let Some(frame) = stack.last_mut() {
            if frame.is_maximal() {
                if frame.clique.len() > self.best.len() {
                    self.best = frame.clique.clone();
                }
                stack.pop();
                continue;
            }

            // Exhausted, or unable to beat the current best even by taking all of P
            if frame.next >= frame.branches.len()
                || frame.clique.len() + frame.candidates.len() <= self.best.len()
            {
                stack.pop();
                continue;
            }

            let v = frame.branches[frame.next];
            frame.next += 1;

            let mut clique = frame.clique.clone();
            clique.push(v);
            let candidates = frame
                .candidates
                .iter()
                .copied()
                .filter(|&u| graph.has_edge(v, u))
                .collect();
            let excluded = frame
                .excluded
                .iter()
                .copied()
                .filter(|&u| graph.has_edge(v, u))
                .collect();

            // P := P \ {v}, X := X ∪ {v} once the child has its own copies
            frame.candidates.retain(|&u| u != v);
            frame.excluded.push(v);

            self.frames_visited += 1;
            stack.push(Frame::new(graph, clique, candidates, excluded));
        }

        tracing::debug!(
            frames = self.frames_visited,
            size = self.best.len(),
            "Clique search finished"
        );

        Clique { nodes: self.best }
    }
}

/// Exact maximum clique within `nodes`.
pub fn find_max_clique(graph: &RegionGraph, nodes: &[NodeIndex]) -> Clique {
    CliqueSearch::new(graph).run(nodes)
}

/// Whether every pair of `nodes` is adjacent.
pub fn is_clique(graph: &RegionGraph, nodes: &[NodeIndex]) -> bool {
    nodes.iter().enumerate().all(|(i, &a)| {
        nodes[i + 1..].iter().all(|&b| graph.has_edge(a, b))
    })
}

// ============================================================================
// Tests
// ============================================================================
