//! Boundary polygon validation and input loaders.
//!
//! The drawing surface (or a file) supplies a single closed ring of
//! (longitude, latitude) vertices. Everything downstream assumes the ring is
//! simple (non-self-intersecting); that property is NOT verified here.

use geo::{Area, BoundingRect, LineString, Polygon, Rect};
use serde::Deserialize;
use shapefile::{Reader, Shape};

use crate::error::{Error, Result};

/// Builds a validated boundary polygon from a closed ring of
/// (longitude, latitude) vertex pairs in degrees.
///
/// Rejects rings that are too short, not explicitly closed, contain
/// non-finite or out-of-range coordinates, or enclose no area.
pub fn ring_polygon(ring: &[(f64, f64)]) -> Result<Polygon<f64>> {
    if ring.len() < 4 {
        return Err(Error::InvalidGeometry(format!(
            "boundary ring has {} vertices, need at least 4 (closed triangle)",
            ring.len()
        )));
    }
    if ring.first() != ring.last() {
        return Err(Error::InvalidGeometry(
            "boundary ring is not closed (first and last vertex differ)".into(),
        ));
    }
    for &(lon, lat) in ring {
        if !lon.is_finite() || !lat.is_finite() {
            return Err(Error::InvalidGeometry(
                "boundary ring contains a non-finite coordinate".into(),
            ));
        }
        if !(-180.0..=180.0).contains(&lon) || !(-90.0..=90.0).contains(&lat) {
            return Err(Error::InvalidGeometry(format!(
                "vertex ({lon}, {lat}) is outside geographic range"
            )));
        }
    }

    let polygon = Polygon::new(LineString::from(ring.to_vec()), vec![]);
    if polygon.unsigned_area() == 0.0 {
        return Err(Error::InvalidGeometry(
            "boundary ring encloses no area".into(),
        ));
    }
    bounding_box(&polygon)?;
    Ok(polygon)
}

/// Bounding box of a boundary polygon. Degenerate extents (min not strictly
/// below max on either axis) are rejected.
pub fn bounding_box(polygon: &Polygon<f64>) -> Result<Rect<f64>> {
    let rect = polygon
        .bounding_rect()
        .ok_or_else(|| Error::InvalidGeometry("boundary polygon is empty".into()))?;
    if rect.min().x >= rect.max().x || rect.min().y >= rect.max().y {
        return Err(Error::InvalidGeometry(
            "boundary polygon has a degenerate bounding box".into(),
        ));
    }
    Ok(rect)
}

#[derive(Debug, Deserialize)]
struct GeometryDoc {
    #[serde(rename = "type")]
    geometry_type: String,
    coordinates: serde_json::Value,
}

/// Parses a GeoJSON-style geometry document into a boundary polygon.
///
/// Only `"type": "Polygon"` with a single exterior ring is accepted; points,
/// lines, multi-part geometries, and polygons with holes are rejected.
pub fn from_geojson(json: &str) -> Result<Polygon<f64>> {
    let doc: GeometryDoc = serde_json::from_str(json)
        .map_err(|e| Error::InvalidGeometry(format!("unparseable geometry document: {e}")))?;

    if doc.geometry_type != "Polygon" {
        return Err(Error::InvalidGeometry(format!(
            "geometry type {:?} is not accepted, draw a polygon",
            doc.geometry_type
        )));
    }

    let rings: Vec<Vec<[f64; 2]>> = serde_json::from_value(doc.coordinates)
        .map_err(|e| Error::InvalidGeometry(format!("malformed polygon coordinates: {e}")))?;
    match rings.as_slice() {
        [] => Err(Error::InvalidGeometry("polygon has no rings".into())),
        [exterior] => {
            let ring: Vec<(f64, f64)> = exterior.iter().map(|&[lon, lat]| (lon, lat)).collect();
            ring_polygon(&ring)
        }
        _ => Err(Error::InvalidGeometry(
            "polygons with holes are not supported".into(),
        )),
    }
}

/// Loads a boundary polygon from the first record of a shapefile.
///
/// Non-polygon shapes and polygons with more than one ring are rejected
/// rather than skipped: a sampling boundary must be exactly one simple ring.
pub fn from_shapefile(shapefile_path: &str) -> Result<Polygon<f64>> {
    let mut reader = Reader::from_path(shapefile_path)?;
    let (shape, _) = reader
        .iter_shapes_and_records()
        .next()
        .ok_or_else(|| Error::InvalidGeometry("shapefile contains no records".into()))??;

    match shape {
        Shape::Polygon(p) => {
            if p.rings().len() != 1 {
                return Err(Error::InvalidGeometry(format!(
                    "shapefile polygon has {} rings, expected a single exterior ring",
                    p.rings().len()
                )));
            }
            let ring: Vec<(f64, f64)> = p.rings()[0]
                .points()
                .iter()
                .map(|pt| (pt.x, pt.y))
                .collect();
            ring_polygon(&ring)
        }
        other => Err(Error::InvalidGeometry(format!(
            "shapefile record is a {}, not a polygon",
            other.shapetype()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square_ring() -> Vec<(f64, f64)> {
        vec![(0.0, 0.0), (0.0, 0.01), (0.01, 0.01), (0.01, 0.0), (0.0, 0.0)]
    }

    #[test]
    fn accepts_closed_square() {
        let poly = ring_polygon(&unit_square_ring()).unwrap();
        assert_eq!(poly.exterior().0.len(), 5);
    }

    #[test]
    fn rejects_open_ring() {
        let mut ring = unit_square_ring();
        ring.pop();
        assert!(matches!(
            ring_polygon(&ring),
            Err(Error::InvalidGeometry(_))
        ));
    }

    #[test]
    fn rejects_too_few_vertices() {
        let ring = vec![(0.0, 0.0), (1.0, 1.0), (0.0, 0.0)];
        assert!(matches!(
            ring_polygon(&ring),
            Err(Error::InvalidGeometry(_))
        ));
    }

    #[test]
    fn rejects_zero_area_ring() {
        // all vertices on one line
        let ring = vec![(0.0, 0.0), (0.0, 0.5), (0.0, 1.0), (0.0, 0.5), (0.0, 0.0)];
        assert!(matches!(
            ring_polygon(&ring),
            Err(Error::InvalidGeometry(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_vertex() {
        let ring = vec![(0.0, 0.0), (0.0, 95.0), (1.0, 95.0), (0.0, 0.0)];
        assert!(matches!(
            ring_polygon(&ring),
            Err(Error::InvalidGeometry(_))
        ));
    }

    #[test]
    fn geojson_polygon_parses() {
        let json = r#"{"type":"Polygon","coordinates":[[[0.0,0.0],[0.0,0.01],[0.01,0.01],[0.01,0.0],[0.0,0.0]]]}"#;
        let poly = from_geojson(json).unwrap();
        assert_eq!(poly.exterior().0.len(), 5);
    }

    #[test]
    fn geojson_point_rejected() {
        let json = r#"{"type":"Point","coordinates":[0.0,0.0]}"#;
        assert!(matches!(
            from_geojson(json),
            Err(Error::InvalidGeometry(_))
        ));
    }

    #[test]
    fn geojson_hole_rejected() {
        let json = r#"{"type":"Polygon","coordinates":[
            [[0.0,0.0],[0.0,1.0],[1.0,1.0],[1.0,0.0],[0.0,0.0]],
            [[0.2,0.2],[0.2,0.4],[0.4,0.4],[0.4,0.2],[0.2,0.2]]
        ]}"#;
        assert!(matches!(
            from_geojson(json),
            Err(Error::InvalidGeometry(_))
        ));
    }

    #[test]
    fn bounding_box_of_square() {
        let poly = ring_polygon(&unit_square_ring()).unwrap();
        let rect = bounding_box(&poly).unwrap();
        assert_eq!(rect.min().x, 0.0);
        assert_eq!(rect.max().y, 0.01);
    }
}
