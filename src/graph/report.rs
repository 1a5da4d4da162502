//! Plain-text rendering of a [`MetricsReport`].

use std::fmt;

use super::models::{DegreeExtreme, MetricsReport, SubgraphInfo};

const RULE: &str = "============================";

fn degree_line(extreme: &Option<DegreeExtreme>) -> String {
    match extreme {
        Some(e) => format!("{} (vertex {})", e.degree, e.label),
        None => "n/a".to_string(),
    }
}

fn write_subgraph(f: &mut fmt::Formatter<'_>, title: &str, info: &SubgraphInfo) -> fmt::Result {
    if info.size == 0 {
        return writeln!(f, "- {} (heuristic): none found", title);
    }
    writeln!(
        f,
        "- {} (heuristic): {} vertices, {} edges",
        title, info.size, info.edge_count
    )?;
    writeln!(f, "    Members: {}", info.members.join(", "))?;
    if !info.walk.is_empty() {
        writeln!(f, "    Cycle: {}", info.walk.join(" -> "))?;
    }
    Ok(())
}

impl MetricsReport {
    /// Component member listing, one line per component.
    pub fn components_listing(&self) -> String {
        let mut out = String::new();
        for c in &self.components {
            let marker = if c.is_main { " (main)" } else { "" };
            out.push_str(&format!(
                "Component {}{}: {} vertices: {}\n",
                c.id,
                marker,
                c.size,
                c.members.join(", ")
            ));
        }
        out
    }
}

impl fmt::Display for MetricsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Graph Metrics Report ===")?;
        writeln!(
            f,
            "Generated on: {}",
            self.computed_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(f)?;

        writeln!(f, "Basic Graph Properties:")?;
        writeln!(f, "- Vertices: {}", self.vertex_count)?;
        writeln!(f, "- Edges: {}", self.edge_count)?;
        writeln!(f, "- Connected components: {}", self.component_count)?;
        writeln!(f, "- Cyclomatic number: {}", self.cyclomatic_number)?;
        writeln!(f)?;

        writeln!(f, "Largest Component Properties:")?;
        writeln!(f, "- Vertices: {}", self.largest_component_size)?;
        writeln!(
            f,
            "- Chromatic number (greedy upper bound): {}",
            self.chromatic_upper_bound
        )?;
        writeln!(f, "- Largest clique size: {}", self.largest_clique.size)?;
        if !self.largest_clique.members.is_empty() {
            writeln!(
                f,
                "    Members: {}",
                self.largest_clique.members.join(", ")
            )?;
        }
        write_subgraph(f, "Eulerian subgraph", &self.eulerian_subgraph)?;
        write_subgraph(f, "Hamiltonian subgraph", &self.hamiltonian_subgraph)?;
        writeln!(f)?;

        writeln!(f, "Degree Information:")?;
        writeln!(f, "- Maximum degree: {}", degree_line(&self.max_degree))?;
        writeln!(f, "- Minimum degree: {}", degree_line(&self.min_degree))?;
        writeln!(f)?;

        writeln!(f, "Distance Metrics:")?;
        writeln!(f, "- Radius: {}", self.distances.radius)?;
        writeln!(f, "- Diameter: {}", self.distances.diameter)?;
        if self.distances.reachable_only {
            writeln!(
                f,
                "  (graph is disconnected: eccentricities count reachable vertices only)"
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Center Vertices:")?;
        if self.distances.center.is_empty() {
            writeln!(f, "- none")?;
        }
        for label in &self.distances.center {
            writeln!(f, "- {}", label)?;
        }
        writeln!(f)?;

        writeln!(f, "Computed in {} ms", self.computation_ms)?;
        writeln!(f, "{}", RULE)
    }
}

// ============================================================================
// Tests
// ============================================================================
