//! Country records and the region file format.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

use crate::graph::GraphError;

/// Geographic position of a capital, in decimal degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// One country record of a region file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub iso_code: String,
    pub capital: String,
    pub capital_coords: Coordinates,
    /// ISO codes of bordering countries (may reference countries outside the region)
    #[serde(default)]
    pub neighboring_countries_iso: Vec<String>,
}

/// Countries keyed by ISO code. Ordered, so iteration is deterministic.
pub type Region = BTreeMap<String, Country>;

/// Errors raised while loading or converting a region.
#[derive(Debug, Error)]
pub enum RegionError {
    #[error("failed to access region file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid region JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),
}
