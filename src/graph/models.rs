//! Graph metrics data models.
//!
//! Defines the complete type system for the metrics engine:
//!
//! ## Input types (construction)
//! - [`RegionNode`] / [`Border`] — node and edge payloads
//! - [`GraphBuilder`] — mutable construction stage, validates endpoints
//! - [`RegionGraph`] — immutable petgraph wrapper with ID ↔ NodeIndex mapping
//!   and a sorted adjacency index
//!
//! ## Intermediate types (algorithms)
//! - [`Component`], [`Clique`], [`ChromaticEstimate`], [`SubgraphCandidate`]
//!
//! ## Output types (report)
//! - [`ComponentInfo`], [`CliqueInfo`], [`DegreeExtreme`], [`DistanceMetrics`],
//!   [`SubgraphInfo`]
//! - [`MetricsReport`] — aggregated result of a full analysis run
//!
//! ## Configuration
//! - [`AnalysisConfig`] — limits for the exponential searches

use chrono::{DateTime, Utc};
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Rejected graph construction input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge references an ID that was never added as a node.
    #[error("edge endpoint `{0}` is not a node of the graph")]
    UnknownNode(String),
    /// An edge connects a node to itself.
    #[error("self-loop on `{0}` is not allowed")]
    SelfLoop(String),
}

// ============================================================================
// Input types — Graph structure
// ============================================================================

/// A node of the analyzed graph (a country, in the region use case).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionNode {
    /// Stable identifier (ISO code for countries)
    pub id: String,
    /// Display name used in reports
    pub label: String,
}

impl RegionNode {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// An undirected edge payload.
///
/// The distance annotation is carried for display only; every algorithm in
/// this crate treats the graph as unweighted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Border {
    /// Great-circle distance between the two capitals, in kilometers
    pub distance_km: Option<f64>,
}

// ============================================================================
// GraphBuilder — mutable construction stage
// ============================================================================

/// Accumulates nodes and edges, then freezes them into a [`RegionGraph`].
///
/// Node insertion order is preserved and becomes the graph's node order.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    graph: UnGraph<RegionNode, Border>,
    id_to_index: HashMap<String, NodeIndex>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with pre-allocated capacity.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: UnGraph::with_capacity(nodes, edges),
            id_to_index: HashMap::with_capacity(nodes),
        }
    }

    /// Add a node. Returns the NodeIndex.
    /// If a node with the same ID already exists, returns its existing index.
    pub fn add_node(&mut self, node: RegionNode) -> NodeIndex {
        if let Some(&idx) = self.id_to_index.get(&node.id) {
            return idx;
        }
        let id = node.id.clone();
        let idx = self.graph.add_node(node);
        self.id_to_index.insert(id, idx);
        idx
    }

    /// Whether a node with this ID has been added.
    pub fn contains(&self, id: &str) -> bool {
        self.id_to_index.contains_key(id)
    }

    /// Add an undirected edge between two nodes identified by their IDs.
    ///
    /// Returns `Ok(None)` when the pair is already connected (in either
    /// direction), so callers may feed symmetric neighbor lists directly.
    pub fn add_edge(
        &mut self,
        a: &str,
        b: &str,
        border: Border,
    ) -> Result<Option<EdgeIndex>, GraphError> {
        let a_idx = self.index_of(a)?;
        let b_idx = self.index_of(b)?;
        if a_idx == b_idx {
            return Err(GraphError::SelfLoop(a.to_string()));
        }
        if self.graph.find_edge(a_idx, b_idx).is_some() {
            return Ok(None);
        }
        Ok(Some(self.graph.add_edge(a_idx, b_idx, border)))
    }

    fn index_of(&self, id: &str) -> Result<NodeIndex, GraphError> {
        self.id_to_index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))
    }

    /// Freeze the builder, deriving the adjacency index.
    pub fn build(self) -> RegionGraph {
        let mut adjacency: Vec<Vec<NodeIndex>> = vec![Vec::new(); self.graph.node_count()];
        for edge in self.graph.edge_references() {
            adjacency[edge.source().index()].push(edge.target());
            adjacency[edge.target().index()].push(edge.source());
        }
        for neighbors in adjacency.iter_mut() {
            neighbors.sort_unstable();
        }

        RegionGraph {
            graph: self.graph,
            id_to_index: self.id_to_index,
            adjacency,
        }
    }
}

// ============================================================================
// RegionGraph — immutable petgraph wrapper
// ============================================================================

/// Immutable undirected graph consumed by every algorithm.
///
/// Nodes are addressed by `NodeIndex`, a stable index into the node table
/// (nodes are never removed). `adjacency[i]` lists the neighbors of node `i`
/// sorted by node order, which keeps every traversal deterministic.
#[derive(Debug, Clone)]
pub struct RegionGraph {
    graph: UnGraph<RegionNode, Border>,
    id_to_index: HashMap<String, NodeIndex>,
    adjacency: Vec<Vec<NodeIndex>>,
}

impl RegionGraph {
    /// Graph with no nodes and no edges.
    pub fn empty() -> Self {
        GraphBuilder::new().build()
    }

    /// Build a graph whose IDs double as labels.
    ///
    /// Duplicate pairs are ignored; unknown endpoints and self-loops are errors.
    pub fn from_edges(ids: &[&str], edges: &[(&str, &str)]) -> Result<Self, GraphError> {
        let mut builder = GraphBuilder::with_capacity(ids.len(), edges.len());
        for id in ids {
            builder.add_node(RegionNode::new(*id, *id));
        }
        for (a, b) in edges {
            builder.add_edge(a, b, Border::default())?;
        }
        Ok(builder.build())
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Node indices in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> {
        self.graph.node_indices()
    }

    /// Edges as `(a, b)` index pairs, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        self.graph
            .edge_references()
            .map(|edge| (edge.source(), edge.target()))
    }

    pub fn node(&self, idx: NodeIndex) -> &RegionNode {
        &self.graph[idx]
    }

    pub fn label(&self, idx: NodeIndex) -> &str {
        &self.graph[idx].label
    }

    /// Labels of the given nodes, in the given order.
    pub fn labels(&self, nodes: &[NodeIndex]) -> Vec<String> {
        nodes.iter().map(|&idx| self.label(idx).to_string()).collect()
    }

    /// Edge payload between two nodes, if they are adjacent.
    pub fn border(&self, a: NodeIndex, b: NodeIndex) -> Option<&Border> {
        let edge = self.graph.find_edge(a, b)?;
        self.graph.edge_weight(edge)
    }

    /// Neighbors of a node, sorted by node order.
    pub fn neighbors(&self, idx: NodeIndex) -> &[NodeIndex] {
        &self.adjacency[idx.index()]
    }

    pub fn degree(&self, idx: NodeIndex) -> usize {
        self.adjacency[idx.index()].len()
    }

    pub fn has_edge(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.adjacency[a.index()].binary_search(&b).is_ok()
    }

    /// Get the NodeIndex for a given ID.
    pub fn get_index(&self, id: &str) -> Option<NodeIndex> {
        self.id_to_index.get(id).copied()
    }
}

impl Default for RegionGraph {
    fn default() -> Self {
        Self::empty()
    }
}

// ============================================================================
// Intermediate types — algorithm results (index based)
// ============================================================================

/// A maximal set of mutually reachable nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Discovery ordinal of the component during traversal
    pub id: u32,
    /// Member nodes in graph node order
    pub nodes: Vec<NodeIndex>,
}

impl Component {
    pub fn size(&self) -> usize {
        self.nodes.len()
    }
}

/// A set of pairwise adjacent nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clique {
    pub nodes: Vec<NodeIndex>,
}

impl Clique {
    pub fn size(&self) -> usize {
        self.nodes.len()
    }
}

/// Result of the greedy coloring heuristic.
///
/// `upper_bound` is an upper bound on the chromatic number, not its exact value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChromaticEstimate {
    /// Number of colors used by the greedy coloring
    pub upper_bound: usize,
    /// Color assigned to each visited node, in visiting order
    pub coloring: Vec<(NodeIndex, usize)>,
}

/// A node-induced subgraph found by the Eulerian or Hamiltonian search.
///
/// The flags record what was established for this node set. A `false` flag
/// means "not established", not "proven impossible".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubgraphCandidate {
    /// Member nodes in graph node order
    pub nodes: Vec<NodeIndex>,
    /// Number of edges of the induced subgraph
    pub edge_count: usize,
    pub is_eulerian: bool,
    pub is_hamiltonian: bool,
    /// Witness closed walk (Eulerian circuit or Hamiltonian cycle), first node
    /// repeated at the end. Empty when no witness was computed.
    pub walk: Vec<NodeIndex>,
}

impl SubgraphCandidate {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// ============================================================================
// Output types — Metrics report (label based)
// ============================================================================

/// Metadata about a connected component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentInfo {
    /// Component identifier (discovery ordinal)
    pub id: u32,
    /// Number of nodes in this component
    pub size: usize,
    /// Labels of the nodes in this component
    pub members: Vec<String>,
    /// Whether this is the largest (main) component
    pub is_main: bool,
}

/// The maximum clique found in the largest component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliqueInfo {
    pub size: usize,
    pub members: Vec<String>,
}

/// A degree value together with the first node that reached it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeExtreme {
    pub degree: usize,
    pub label: String,
}

/// Distance metrics over every node of the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceMetrics {
    /// Minimum eccentricity (rad(G))
    pub radius: usize,
    /// Maximum eccentricity (diam(G))
    pub diameter: usize,
    /// Labels of the nodes whose eccentricity equals the radius, in node order
    pub center: Vec<String>,
    /// Set when the graph is disconnected: eccentricities then only count
    /// reachable nodes instead of being infinite.
    pub reachable_only: bool,
}

/// Summary of a heuristic subgraph search result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubgraphInfo {
    pub size: usize,
    pub edge_count: usize,
    pub members: Vec<String>,
    pub is_eulerian: bool,
    pub is_hamiltonian: bool,
    /// Witness closed walk as labels (empty when none was computed)
    pub walk: Vec<String>,
}

/// Complete result of one analysis run.
///
/// Written once by [`compute_all`](super::engine::compute_all) and handed to
/// the caller by value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Total number of nodes
    pub vertex_count: usize,
    /// Total number of edges
    pub edge_count: usize,
    /// Number of connected components
    pub component_count: usize,
    /// edges − vertices + components
    pub cyclomatic_number: usize,
    /// Component summaries, largest first
    pub components: Vec<ComponentInfo>,
    /// Size of the largest component (0 for an empty graph)
    pub largest_component_size: usize,
    /// Greedy coloring upper bound on the chromatic number of the largest
    /// component. Heuristic: may exceed the true chromatic number.
    pub chromatic_upper_bound: usize,
    /// Exact maximum clique of the largest component
    pub largest_clique: CliqueInfo,
    pub max_degree: Option<DegreeExtreme>,
    pub min_degree: Option<DegreeExtreme>,
    pub distances: DistanceMetrics,
    /// Largest Eulerian subgraph found (heuristic, not guaranteed maximum)
    pub eulerian_subgraph: SubgraphInfo,
    /// Largest Hamiltonian subgraph found (heuristic, not guaranteed maximum)
    pub hamiltonian_subgraph: SubgraphInfo,
    /// When the report was computed
    pub computed_at: DateTime<Utc>,
    /// Computation time in milliseconds
    pub computation_ms: u64,
}

// ============================================================================
// Configuration
// ============================================================================

/// Limits for the exponential parts of the analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Maximum path extensions explored while verifying one Hamiltonian
    /// candidate (default: 2_000_000). Exceeding it rejects the candidate.
    pub hamiltonian_step_limit: u64,
    /// Maximum number of nodes a Hamiltonian candidate may grow to
    /// (default: 64)
    pub hamiltonian_max_subset: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            hamiltonian_step_limit: 2_000_000,
            hamiltonian_max_subset: 64,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
