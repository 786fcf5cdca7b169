//! Grid spacing policies.
//!
//! Three interchangeable strategies map a boundary area (or a target site
//! count) to the side length of a square grid cell. The tiered strategy
//! mirrors fisheries-survey spacing conventions: larger water bodies get
//! coarser grids.

use serde::{Deserialize, Serialize};

use crate::area::SQUARE_METERS_PER_ACRE;
use crate::error::{Error, Result};
use crate::projection::{METERS_PER_DEGREE, degrees_per_meter};

/// How the grid spacing is chosen. Selected by configuration, never
/// hard-coded by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SpacingPolicy {
    /// Caller supplies the degree spacing directly.
    Manual { spacing_deg: f64 },
    /// Discrete area tiers: < 300 acres -> 61 m, 300-800 acres -> 91 m,
    /// > 800 acres -> 122 m. Both tier boundaries belong to the middle tier.
    TieredByArea,
    /// Size cells so that roughly `2 * target_sites` cells cover the area,
    /// leaving the sampler a 50% selection rate.
    DensityByTargetCount { target_sites: usize },
}

/// Resolved spacing, consumed by the grid tiler and echoed in the metadata.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpacingResult {
    pub spacing_meters: f64,
    pub spacing_deg: f64,
    pub area_square_meters: f64,
    pub policy_used: SpacingPolicy,
}

impl SpacingPolicy {
    /// Resolves this policy against the measured boundary area.
    pub fn resolve(&self, area_square_meters: f64) -> Result<SpacingResult> {
        // manual spacing is passed through in degrees untouched, not round
        // tripped through meters
        let (spacing_meters, spacing_deg) = match *self {
            SpacingPolicy::Manual { spacing_deg } => {
                (spacing_deg * METERS_PER_DEGREE, spacing_deg)
            }
            SpacingPolicy::TieredByArea => {
                let acres = area_square_meters / SQUARE_METERS_PER_ACRE;
                let meters = if acres < 300.0 {
                    61.0
                } else if acres <= 800.0 {
                    91.0
                } else {
                    122.0
                };
                (meters, meters * degrees_per_meter())
            }
            SpacingPolicy::DensityByTargetCount { target_sites } => {
                if target_sites == 0 {
                    return Err(Error::InvalidParameter(
                        "target site count must be at least 1".into(),
                    ));
                }
                let target_cells = (2 * target_sites) as f64;
                let meters = (area_square_meters / target_cells).sqrt();
                (meters, meters * degrees_per_meter())
            }
        };

        if !spacing_deg.is_finite() || spacing_deg <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "resolved spacing {spacing_meters} m is not a positive finite value"
            )));
        }

        Ok(SpacingResult {
            spacing_meters,
            spacing_deg,
            area_square_meters,
            policy_used: *self,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acres(a: f64) -> f64 {
        a * SQUARE_METERS_PER_ACRE
    }

    #[test]
    fn tier_boundaries() {
        let policy = SpacingPolicy::TieredByArea;
        assert_eq!(policy.resolve(acres(250.0)).unwrap().spacing_meters, 61.0);
        assert_eq!(policy.resolve(acres(300.0)).unwrap().spacing_meters, 91.0);
        assert_eq!(policy.resolve(acres(500.0)).unwrap().spacing_meters, 91.0);
        assert_eq!(policy.resolve(acres(800.0)).unwrap().spacing_meters, 91.0);
        assert_eq!(policy.resolve(acres(801.0)).unwrap().spacing_meters, 122.0);
    }

    #[test]
    fn tiered_degree_conversion() {
        let result = SpacingPolicy::TieredByArea.resolve(acres(500.0)).unwrap();
        assert!((result.spacing_deg - 91.0 / 111_000.0).abs() < 1e-12);
    }

    #[test]
    fn manual_passes_spacing_through() {
        let result = SpacingPolicy::Manual { spacing_deg: 0.005 }
            .resolve(acres(100.0))
            .unwrap();
        assert_eq!(result.spacing_deg, 0.005);
        assert_eq!(result.spacing_meters, 0.005 * 111_000.0);
    }

    #[test]
    fn density_halves_cell_budget() {
        // 20000 m2 over 2*10 cells -> 1000 m2 per cell -> ~31.6 m side
        let result = SpacingPolicy::DensityByTargetCount { target_sites: 10 }
            .resolve(20_000.0)
            .unwrap();
        assert!((result.spacing_meters - 1000f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn density_rejects_zero_area() {
        let err = SpacingPolicy::DensityByTargetCount { target_sites: 10 }.resolve(0.0);
        assert!(matches!(err, Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn manual_rejects_non_positive_spacing() {
        assert!(matches!(
            SpacingPolicy::Manual { spacing_deg: 0.0 }.resolve(acres(100.0)),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            SpacingPolicy::Manual {
                spacing_deg: f64::NAN
            }
            .resolve(acres(100.0)),
            Err(Error::InvalidParameter(_))
        ));
    }
}
