//! Region → graph conversion.
//!
//! One node per country (id = ISO code, label = country name) and one
//! undirected border per neighbor pair, annotated with the great-circle
//! distance between the two capitals.

use std::collections::HashSet;

use super::models::{Coordinates, Region};
use crate::graph::{Border, GraphBuilder, GraphError, RegionGraph, RegionNode};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points (haversine formula).
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = lat2 - lat1;
    let dlong = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlong / 2.0).sin().powi(2);
    2.0 * h.sqrt().asin() * EARTH_RADIUS_KM
}

/// Build the border graph of a region.
///
/// Countries sharing a name are merged: the first ISO code in key order keeps
/// the node, later ones are dropped and behave like countries outside the
/// region. Neighbor codes missing from the region are skipped.
///
/// Fails with [`GraphError::SelfLoop`] when a country lists itself as a
/// neighbor.
pub fn build_region_graph(region: &Region) -> Result<RegionGraph, GraphError> {
    let mut builder = GraphBuilder::with_capacity(region.len(), region.len() * 2);
    let mut seen_names: HashSet<&str> = HashSet::new();

    for (iso, country) in region {
        if !seen_names.insert(country.name.as_str()) {
            tracing::warn!(iso = %iso, name = %country.name, "Duplicate country name, skipping");
            continue;
        }
        builder.add_node(RegionNode::new(iso.clone(), country.name.clone()));
    }

    let mut skipped = 0usize;
    for (iso, country) in region {
        if !builder.contains(iso) {
            continue;
        }
        for neighbor_iso in &country.neighboring_countries_iso {
            let Some(neighbor) = region.get(neighbor_iso).filter(|_| builder.contains(neighbor_iso))
            else {
                tracing::debug!(from = %iso, to = %neighbor_iso, "Neighbor outside region, skipping");
                skipped += 1;
                continue;
            };
            let border = Border {
                distance_km: Some(haversine_km(
                    country.capital_coords,
                    neighbor.capital_coords,
                )),
            };
            builder.add_edge(iso, neighbor_iso, border)?;
        }
    }

    let graph = builder.build();
    tracing::debug!(
        countries = graph.node_count(),
        borders = graph.edge_count(),
        skipped,
        "Region graph built"
    );
    Ok(graph)
}

// ============================================================================
// Tests
// ============================================================================
