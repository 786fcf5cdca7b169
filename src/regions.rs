//! Known reservoir regions.
//!
//! Approximate bounds for reservoirs the crews survey regularly. Only used
//! to center the map before a boundary is drawn; the planning algorithm
//! never reads these.

use geo::{Point, point};

/// Approximate bounding extent of a named reservoir.
#[derive(Debug, Clone)]
pub struct Region {
    pub name: &'static str,
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl Region {
    /// Center point (longitude, latitude) for the initial map view.
    pub fn center(&self) -> Point<f64> {
        point! {
            x: (self.lon_min + self.lon_max) / 2.0,
            y: (self.lat_min + self.lat_max) / 2.0,
        }
    }
}

/// Looks up a reservoir by name, case-insensitively.
pub fn find_region(name: &str) -> Option<Region> {
    let wanted = name.to_lowercase();
    let region = known_regions()
        .into_iter()
        .find(|r| r.name.to_lowercase() == wanted);
    if region.is_none() {
        log::warn!("unknown reservoir {name:?}, map will not be pre-centered");
    }
    region
}

pub fn known_regions() -> Vec<Region> {
    vec![
        Region {
            name: "Steinaker Reservoir",
            lat_min: 40.515,
            lat_max: 40.525,
            lon_min: -109.575,
            lon_max: -109.55,
        },
        Region {
            name: "Red Fleet Reservoir",
            lat_min: 40.618,
            lat_max: 40.628,
            lon_min: -109.475,
            lon_max: -109.455,
        },
    ]
}
