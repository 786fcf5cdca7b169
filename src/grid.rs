//! Uniform square grid tiling over a bounding box.

use geo::{Rect, coord};

use crate::error::{Error, Result};

/// Tiles the bounding box with axis-aligned square cells of side
/// `spacing_deg`, anchored at the box's lower-left corner.
///
/// Cells are emitted column by column: outer loop over X, inner loop over Y.
/// Offsets are computed as `min + i * spacing` rather than accumulated, so
/// identical inputs always yield the bit-identical cell sequence. The last
/// column/row may overhang the box edge; overhang is resolved later by
/// clipping against the boundary polygon, not against the box.
pub fn tile(bounds: Rect<f64>, spacing_deg: f64) -> Result<Vec<Rect<f64>>> {
    if !spacing_deg.is_finite() || spacing_deg <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "grid spacing must be positive and finite, got {spacing_deg}"
        )));
    }

    let width = bounds.max().x - bounds.min().x;
    let height = bounds.max().y - bounds.min().y;
    if spacing_deg > width || spacing_deg > height {
        return Err(Error::EmptyGrid {
            spacing_deg,
            width,
            height,
        });
    }

    let mut cells = Vec::new();
    let mut i = 0u32;
    loop {
        let x = bounds.min().x + f64::from(i) * spacing_deg;
        if x >= bounds.max().x {
            break;
        }
        let mut j = 0u32;
        loop {
            let y = bounds.min().y + f64::from(j) * spacing_deg;
            if y >= bounds.max().y {
                break;
            }
            cells.push(Rect::new(
                coord! { x: x, y: y },
                coord! { x: x + spacing_deg, y: y + spacing_deg },
            ));
            j += 1;
        }
        i += 1;
    }

    log::debug!(
        "tiled {}x{} deg bounding box at {} deg into {} cells",
        width,
        height,
        spacing_deg,
        cells.len()
    );
    Ok(cells)
}

/// Number of cells `tile` would produce, without allocating them. Lets the
/// calling layer refuse oversized requests up front.
pub fn cell_count_estimate(bounds: Rect<f64>, spacing_deg: f64) -> usize {
    let columns = ((bounds.max().x - bounds.min().x) / spacing_deg).ceil() as usize;
    let rows = ((bounds.max().y - bounds.min().y) / spacing_deg).ceil() as usize;
    columns * rows
}
