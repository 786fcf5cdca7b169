//! Planar area measurement and unit conversion.

use geo::{Area, Polygon};
use serde::Serialize;

pub const SQUARE_METERS_PER_ACRE: f64 = 4_046.856_422_4;
pub const SQUARE_METERS_PER_HECTARE: f64 = 10_000.0;

/// Area of the boundary polygon in the units the spacing tiers and the
/// metadata report use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AreaReport {
    pub square_meters: f64,
    pub acres: f64,
    pub hectares: f64,
}

impl AreaReport {
    /// Measures a polygon already projected into planar meters.
    ///
    /// Shoelace area with orientation normalized away, so ring winding does
    /// not matter.
    pub fn measure(planar: &Polygon<f64>) -> Self {
        Self::from_square_meters(planar.unsigned_area())
    }

    pub fn from_square_meters(square_meters: f64) -> Self {
        Self {
            square_meters,
            acres: square_meters / SQUARE_METERS_PER_ACRE,
            hectares: square_meters / SQUARE_METERS_PER_HECTARE,
        }
    }
}
