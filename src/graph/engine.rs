//! Metrics engine: runs every analysis over one graph and assembles the report.
//!
//! Pipeline for [`compute_all`]:
//!
//! 1. **Components**: partition, pick the largest (first on ties)
//! 2. **Largest component**: greedy chromatic estimate, exact max clique,
//!    Eulerian and Hamiltonian subgraph heuristics
//! 3. **Whole graph**: eccentricities (radius, diameter, center) and degree
//!    extremes
//! 4. **Assembly**: node indices are turned into labels for the report
//!
//! The [`MetricsEngine`] trait is the entry point for callers that want to
//! swap the engine out in their own tests.

use chrono::Utc;
use petgraph::graph::NodeIndex;
use std::time::Instant;

use super::clique::find_max_clique;
use super::coloring::greedy_chromatic_estimate;
use super::components::find_components;
use super::distance::distance_summary;
use super::models::{
    AnalysisConfig, CliqueInfo, ComponentInfo, DegreeExtreme, DistanceMetrics, MetricsReport,
    RegionGraph, SubgraphCandidate, SubgraphInfo,
};
use super::subgraphs::{find_eulerian_subgraph, find_hamiltonian_subgraph};

// ============================================================================
// Computation
// ============================================================================

/// Run the full analysis. Total over any graph, including the empty one.
pub fn compute_all(graph: &RegionGraph, config: &AnalysisConfig) -> MetricsReport {
    let start = Instant::now();

    // 1. Components
    let components = find_components(graph);
    let largest: &[NodeIndex] = components
        .first()
        .map(|c| c.nodes.as_slice())
        .unwrap_or(&[]);
    tracing::debug!(
        components = components.len(),
        largest = largest.len(),
        "Components found"
    );

    // 2. Largest component
    let chromatic = greedy_chromatic_estimate(graph, largest);
    let clique = find_max_clique(graph, largest);
    let eulerian = find_eulerian_subgraph(graph, largest);
    let hamiltonian = find_hamiltonian_subgraph(graph, largest, config);
    tracing::debug!(
        chromatic = chromatic.upper_bound,
        clique = clique.size(),
        eulerian = eulerian.size(),
        hamiltonian = hamiltonian.size(),
        "Largest component analyzed"
    );

    // 3. Distances and degrees
    let summary = distance_summary(graph);
    let (max_degree, min_degree) = degree_extremes(graph);

    // 4. Assemble
    let vertex_count = graph.node_count();
    let edge_count = graph.edge_count();
    let component_count = components.len();

    let component_infos = components
        .iter()
        .enumerate()
        .map(|(rank, c)| ComponentInfo {
            id: c.id,
            size: c.size(),
            members: graph.labels(&c.nodes),
            is_main: rank == 0,
        })
        .collect();

    let report = MetricsReport {
        vertex_count,
        edge_count,
        component_count,
        cyclomatic_number: (edge_count + component_count).saturating_sub(vertex_count),
        components: component_infos,
        largest_component_size: largest.len(),
        chromatic_upper_bound: chromatic.upper_bound,
        largest_clique: CliqueInfo {
            size: clique.size(),
            members: graph.labels(&clique.nodes),
        },
        max_degree,
        min_degree,
        distances: DistanceMetrics {
            radius: summary.radius,
            diameter: summary.diameter,
            center: graph.labels(&summary.center),
            reachable_only: component_count > 1,
        },
        eulerian_subgraph: subgraph_info(graph, &eulerian),
        hamiltonian_subgraph: subgraph_info(graph, &hamiltonian),
        computed_at: Utc::now(),
        computation_ms: start.elapsed().as_millis() as u64,
    };

    tracing::info!(
        vertices = report.vertex_count,
        edges = report.edge_count,
        components = report.component_count,
        elapsed_ms = report.computation_ms,
        "Graph metrics computed"
    );

    report
}

/// Highest and lowest degree; the first node in node order wins ties.
///
/// Both are `None` for an empty graph.
pub fn degree_extremes(graph: &RegionGraph) -> (Option<DegreeExtreme>, Option<DegreeExtreme>) {
    let mut max: Option<(NodeIndex, usize)> = None;
    let mut min: Option<(NodeIndex, usize)> = None;

    for v in graph.nodes() {
        let degree = graph.degree(v);
        if max.map_or(true, |(_, best)| degree > best) {
            max = Some((v, degree));
        }
        if min.map_or(true, |(_, best)| degree < best) {
            min = Some((v, degree));
        }
    }

    let to_extreme = |(v, degree): (NodeIndex, usize)| DegreeExtreme {
        degree,
        label: graph.label(v).to_string(),
    };
    (max.map(to_extreme), min.map(to_extreme))
}

fn subgraph_info(graph: &RegionGraph, candidate: &SubgraphCandidate) -> SubgraphInfo {
    SubgraphInfo {
        size: candidate.size(),
        edge_count: candidate.edge_count,
        members: graph.labels(&candidate.nodes),
        is_eulerian: candidate.is_eulerian,
        is_hamiltonian: candidate.is_hamiltonian,
        walk: graph.labels(&candidate.walk),
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Single entry point for graph analysis.
pub trait MetricsEngine: Send + Sync {
    /// Compute the full metrics report for `graph`.
    fn analyze(&self, graph: &RegionGraph) -> MetricsReport;
}

/// Default engine: [`compute_all`] with a fixed [`AnalysisConfig`].
#[derive(Debug, Clone, Default)]
pub struct GraphMetricsEngine {
    config: AnalysisConfig,
}

impl GraphMetricsEngine {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }
}

impl MetricsEngine for GraphMetricsEngine {
    fn analyze(&self, graph: &RegionGraph) -> MetricsReport {
        compute_all(graph, &self.config)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{
        complete_graph, cycle_graph, numbered_graph, path_graph, square, star_graph,
        triangle_with_isolated,
    };

    #[test]
    fn test_square_report() {
        let report = compute_all(&square(), &AnalysisConfig::default());

        assert_eq!(report.vertex_count, 4);
        assert_eq!(report.edge_count, 4);
        assert_eq!(report.component_count, 1);
        assert_eq!(report.cyclomatic_number, 1);
        assert_eq!(report.largest_component_size, 4);
        assert_eq!(report.chromatic_upper_bound, 2);
        assert_eq!(report.largest_clique.size, 2);
        assert_eq!(report.distances.radius, 2);
        assert_eq!(report.distances.diameter, 2);
        assert_eq!(report.distances.center, vec!["A", "B", "C", "D"]);
        assert!(!report.distances.reachable_only);

        assert_eq!(report.eulerian_subgraph.members, vec!["A", "B", "C", "D"]);
        assert!(report.eulerian_subgraph.is_eulerian);
        assert_eq!(report.eulerian_subgraph.walk.len(), 5);
        assert_eq!(report.hamiltonian_subgraph.members, vec!["A", "B", "C", "D"]);
        assert!(report.hamiltonian_subgraph.is_hamiltonian);
        assert_eq!(
            report.hamiltonian_subgraph.walk,
            vec!["A", "B", "C", "D", "A"]
        );
    }

    #[test]
    fn test_triangle_with_isolated_report() {
        let report = compute_all(&triangle_with_isolated(), &AnalysisConfig::default());

        assert_eq!(report.component_count, 2);
        let sizes: Vec<usize> = report.components.iter().map(|c| c.size).collect();
        assert_eq!(sizes, vec![3, 1]);
        assert!(report.components[0].is_main);
        assert!(!report.components[1].is_main);
        assert_eq!(report.components[1].members, vec!["D"]);

        assert_eq!(report.largest_clique.size, 3);
        assert_eq!(report.chromatic_upper_bound, 3);
        assert_eq!(report.cyclomatic_number, 1);
        assert!(report.distances.reachable_only);
        assert_eq!(report.hamiltonian_subgraph.size, 3);
        assert_eq!(report.eulerian_subgraph.size, 3);
    }

    #[test]
    fn test_degree_extremes_first_wins_ties() {
        let (max, min) = degree_extremes(&square());
        let max = max.unwrap();
        let min = min.unwrap();
        assert_eq!((max.degree, max.label.as_str()), (2, "A"));
        assert_eq!((min.degree, min.label.as_str()), (2, "A"));

        let (max, min) = degree_extremes(&star_graph(4));
        assert_eq!(max.unwrap().label, "n0");
        let min = min.unwrap();
        assert_eq!((min.degree, min.label.as_str()), (1, "n1"));
    }

    #[test]
    fn test_empty_graph_report() {
        let report = compute_all(&RegionGraph::empty(), &AnalysisConfig::default());

        assert_eq!(report.vertex_count, 0);
        assert_eq!(report.edge_count, 0);
        assert_eq!(report.component_count, 0);
        assert_eq!(report.cyclomatic_number, 0);
        assert!(report.components.is_empty());
        assert_eq!(report.largest_component_size, 0);
        assert_eq!(report.chromatic_upper_bound, 0);
        assert_eq!(report.largest_clique, CliqueInfo::default());
        assert!(report.max_degree.is_none());
        assert!(report.min_degree.is_none());
        assert_eq!(report.distances, DistanceMetrics::default());
        assert_eq!(report.eulerian_subgraph, SubgraphInfo::default());
        assert_eq!(report.hamiltonian_subgraph, SubgraphInfo::default());
    }

    #[test]
    fn test_single_node_report() {
        let report = compute_all(&numbered_graph(1, &[]), &AnalysisConfig::default());

        assert_eq!(report.component_count, 1);
        assert_eq!(report.distances.radius, 0);
        assert_eq!(report.distances.diameter, 0);
        assert_eq!(report.distances.center, vec!["n0"]);
        assert_eq!(report.largest_clique.size, 1);
        assert_eq!(report.chromatic_upper_bound, 1);
        assert_eq!(report.eulerian_subgraph.size, 0);
        assert_eq!(report.hamiltonian_subgraph.size, 0);
        assert_eq!(report.max_degree.unwrap().degree, 0);
    }

    #[test]
    fn test_long_cycle_is_eulerian() {
        let report = compute_all(&cycle_graph(9), &AnalysisConfig::default());
        assert_eq!(report.eulerian_subgraph.size, 9);
        assert!(report.eulerian_subgraph.is_hamiltonian);
        assert_eq!(report.distances.radius, 4);
    }

    #[test]
    fn test_tree_has_zero_cyclomatic_number() {
        let report = compute_all(&path_graph(7), &AnalysisConfig::default());
        assert_eq!(report.cyclomatic_number, 0);
        assert_eq!(report.eulerian_subgraph.size, 0);
        assert_eq!(report.hamiltonian_subgraph.size, 0);
    }

    #[test]
    fn test_complete_graph_report() {
        let report = compute_all(&complete_graph(5), &AnalysisConfig::default());
        assert_eq!(report.largest_clique.size, 5);
        assert_eq!(report.chromatic_upper_bound, 5);
        assert_eq!(report.cyclomatic_number, 10 - 5 + 1);
        assert_eq!(report.distances.diameter, 1);
    }

    #[test]
    fn test_engine_uses_its_config() {
        let config = AnalysisConfig {
            hamiltonian_step_limit: 0,
            ..AnalysisConfig::default()
        };
        let engine = GraphMetricsEngine::new(config.clone());
        assert_eq!(engine.config(), &config);

        let report = engine.analyze(&complete_graph(5));
        assert_eq!(report.hamiltonian_subgraph.size, 0);
        assert_eq!(report.eulerian_subgraph.size, 5);

        let report = GraphMetricsEngine::default().analyze(&complete_graph(5));
        assert_eq!(report.hamiltonian_subgraph.size, 5);
    }
}
