//! Filtering and clipping of grid cells against the boundary polygon.

use geo::{Area, BooleanOps, Contains, Intersects, Polygon, Rect};
use serde::{Deserialize, Serialize};

/// How tiled cells are reconciled with the boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClipMode {
    /// Keep whole cells that touch the boundary at all, edge contact
    /// included. Cheap, but cell centroids near the shore sit slightly
    /// outside the water.
    Filter,
    /// Intersect each cell with the boundary. Shore cells become irregular
    /// fragments whose centroids stay inside the water.
    #[default]
    Clip,
}

/// A grid cell retained against the boundary: the original square plus the
/// geometry that survived (the full square in filter mode, possibly a
/// fragment of it in clip mode).
#[derive(Debug, Clone)]
pub struct CandidateCell {
    pub cell: Rect<f64>,
    pub geometry: Polygon<f64>,
}

/// Reduces tiled cells to the candidates overlapping the boundary polygon.
///
/// In clip mode a single square can contribute several fragments where the
/// boundary is concave; each fragment becomes its own candidate. Cells with
/// a degenerate (zero-area) intersection are dropped.
pub fn candidates(
    boundary: &Polygon<f64>,
    cells: &[Rect<f64>],
    mode: ClipMode,
) -> Vec<CandidateCell> {
    let mut kept = Vec::new();

    for &cell in cells {
        let square = cell.to_polygon();
        match mode {
            ClipMode::Filter => {
                if boundary.intersects(&square) {
                    kept.push(CandidateCell {
                        cell,
                        geometry: square,
                    });
                }
            }
            ClipMode::Clip => {
                // interior cells skip the overlay entirely
                if boundary.contains(&square) {
                    kept.push(CandidateCell {
                        cell,
                        geometry: square,
                    });
                    continue;
                }
                for fragment in boundary.intersection(&square) {
                    if fragment.unsigned_area() > 0.0 {
                        kept.push(CandidateCell {
                            cell,
                            geometry: fragment,
                        });
                    }
                }
            }
        }
    }

    log::debug!(
        "{} of {} tiled cells retained ({:?} mode)",
        kept.len(),
        cells.len(),
        mode
    );
    kept
}
