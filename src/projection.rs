//! Planar projection for area measurement and spacing conversion.

use geo::{Centroid, LineString, Point, Polygon};

use crate::error::{Error, Result};

/// Fixed degrees-to-meters conversion used for grid spacing.
///
/// 1 degree of latitude is roughly 111 km everywhere; 1 degree of longitude
/// shrinks with cos(latitude), so this constant over-sizes east-west spacing
/// away from the equator. Reservoir boundaries are small enough (well under
/// a degree) that the error stays below the grid resolution, but the
/// approximation is NOT valid for high-latitude or continental-scale input.
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// Converts a metric spacing into its degree equivalent.
pub fn degrees_per_meter() -> f64 {
    1.0 / METERS_PER_DEGREE
}

/// Local planar projection centered on a boundary polygon.
///
/// Maps geographic degrees to meters east/north of the polygon centroid,
/// with cos(centroid latitude) scaling on the longitude axis. Accurate for
/// shapes spanning a fraction of a degree, which covers any single
/// reservoir; the projection is rebuilt per request from the input polygon,
/// so there is no fixed zone to fall outside of.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateProjector {
    origin: Point<f64>,
    meters_per_deg_lon: f64,
}

impl CoordinateProjector {
    /// Builds a projector centered on the polygon's centroid.
    pub fn for_polygon(polygon: &Polygon<f64>) -> Result<Self> {
        let origin = polygon
            .centroid()
            .ok_or_else(|| Error::Projection("boundary polygon has no centroid".into()))?;
        if !origin.x().is_finite() || !origin.y().is_finite() {
            return Err(Error::Projection(
                "boundary polygon centroid is not finite".into(),
            ));
        }
        Ok(Self {
            origin,
            meters_per_deg_lon: METERS_PER_DEGREE * origin.y().to_radians().cos(),
        })
    }

    /// Reprojects a geographic polygon into the local planar system (meters).
    pub fn to_planar(&self, polygon: &Polygon<f64>) -> Polygon<f64> {
        let ring: Vec<(f64, f64)> = polygon
            .exterior()
            .points()
            .map(|p| {
                (
                    (p.x() - self.origin.x()) * self.meters_per_deg_lon,
                    (p.y() - self.origin.y()) * METERS_PER_DEGREE,
                )
            })
            .collect();
        Polygon::new(LineString::from(ring), vec![])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::ring_polygon;
    use geo::Area;

    #[test]
    fn equator_square_keeps_its_size() {
        // 0.01 deg on both axes at the equator is ~1110 m on both axes
        let poly = ring_polygon(&[
            (0.0, 0.0),
            (0.0, 0.01),
            (0.01, 0.01),
            (0.01, 0.0),
            (0.0, 0.0),
        ])
        .unwrap();
        let projector = CoordinateProjector::for_polygon(&poly).unwrap();
        let planar = projector.to_planar(&poly);

        let area = planar.unsigned_area();
        let expected = 1110.0 * 1110.0;
        assert!(
            (area - expected).abs() / expected < 1e-6,
            "expected ~{expected} m2, got {area}"
        );
    }

    #[test]
    fn longitude_axis_shrinks_with_latitude() {
        // same 0.01 deg square at 60N: lon axis is halved (cos 60 = 0.5)
        let poly = ring_polygon(&[
            (10.0, 60.0),
            (10.0, 60.01),
            (10.01, 60.01),
            (10.01, 60.0),
            (10.0, 60.0),
        ])
        .unwrap();
        let projector = CoordinateProjector::for_polygon(&poly).unwrap();
        let planar = projector.to_planar(&poly);

        let area = planar.unsigned_area();
        let expected = 1110.0 * 1110.0 * 60.005_f64.to_radians().cos();
        assert!(
            (area - expected).abs() / expected < 1e-3,
            "expected ~{expected} m2, got {area}"
        );
    }

    #[test]
    fn projection_is_centered_on_centroid() {
        let poly = ring_polygon(&[
            (-109.57, 40.51),
            (-109.57, 40.53),
            (-109.55, 40.53),
            (-109.55, 40.51),
            (-109.57, 40.51),
        ])
        .unwrap();
        let projector = CoordinateProjector::for_polygon(&poly).unwrap();
        let planar = projector.to_planar(&poly);
        let center = planar.centroid().unwrap();
        assert!(center.x().abs() < 1e-6);
        assert!(center.y().abs() < 1e-6);
    }
}
