//! Country-border regions.
//!
//! ## Modules
//!
//! - [`models`] — Country records, Region map, RegionError
//! - [`io`] — Region JSON read/write, file → graph loading
//! - [`builder`] — Region → RegionGraph with capital-to-capital distances

pub mod builder;
pub mod io;
pub mod models;

pub use builder::{build_region_graph, haversine_km, EARTH_RADIUS_KM};
pub use io::{load_region_graph, read_region, write_region};
pub use models::{Coordinates, Country, Region, RegionError};
