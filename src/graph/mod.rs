//! Graph metrics engine.
//!
//! Structural and combinatorial analysis of small undirected graphs (tens to
//! a few hundred nodes): connectivity, distances, clique structure, coloring
//! estimate, and Eulerian/Hamiltonian subgraph discovery.
//!
//! ## Architecture
//!
//! ```text
//! GraphBuilder ──► RegionGraph (petgraph::UnGraph + sorted adjacency)
//!                        │
//!                   components ──► largest component
//!                        │              │
//!                        │     coloring · clique · subgraphs
//!                        │              │
//!                    distance           │
//!                        │              │
//!                        └──► engine::compute_all ──► MetricsReport
//!                                                          │
//!                                                 report (Display) / JSON
//! ```
//!
//! ## Modules
//!
//! - [`models`] — Graph wrapper, builder, intermediate and report types, AnalysisConfig
//! - [`components`] — Connected components (iterative DFS)
//! - [`distance`] — BFS distances, eccentricity, radius, diameter, center
//! - [`clique`] — Exact maximum clique (Bron–Kerbosch with pivoting)
//! - [`coloring`] — Greedy chromatic upper bound
//! - [`subgraphs`] — Heuristic Eulerian and Hamiltonian subgraph searches
//! - [`engine`] — `compute_all`, `MetricsEngine` trait and `GraphMetricsEngine`
//! - [`report`] — Text rendering of the report

pub mod clique;
pub mod coloring;
pub mod components;
pub mod distance;
pub mod engine;
pub mod models;
pub mod report;
pub mod subgraphs;

// Re-export primary types for convenience
pub use engine::{compute_all, GraphMetricsEngine, MetricsEngine};
pub use models::{
    AnalysisConfig, Border, ChromaticEstimate, Clique, CliqueInfo, Component, ComponentInfo,
    DegreeExtreme, DistanceMetrics, GraphBuilder, GraphError, MetricsReport, RegionGraph,
    RegionNode, SubgraphCandidate, SubgraphInfo,
};
