//! Region file I/O (`{ "<iso>": Country, ... }` JSON).

use std::path::Path;

use super::builder::build_region_graph;
use super::models::{Region, RegionError};
use crate::graph::RegionGraph;

/// Read and parse a region file.
pub fn read_region(path: &Path) -> Result<Region, RegionError> {
    let contents = std::fs::read_to_string(path).map_err(|source| RegionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let region: Region = serde_json::from_str(&contents).map_err(|source| RegionError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Loaded {} countries from {}", region.len(), path.display());
    Ok(region)
}

/// Write a region as pretty-printed JSON.
pub fn write_region(path: &Path, region: &Region) -> Result<(), RegionError> {
    let json = serde_json::to_string_pretty(region).map_err(|source| RegionError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json + "\n").map_err(|source| RegionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Wrote {} countries to {}", region.len(), path.display());
    Ok(())
}

/// Read a region file and build its border graph.
pub fn load_region_graph(path: &Path) -> Result<RegionGraph, RegionError> {
    let region = read_region(path)?;
    Ok(build_region_graph(&region)?)
}
