//! Planning pipeline errors.

use serde::Serialize;
use thiserror::Error;

/// Pipeline result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the planning pipeline.
///
/// Each variant is raised synchronously by the component that detects it and
/// is never retried internally; the calling layer decides whether the fix is
/// a redraw, a parameter change, or a smaller site count.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("projection failed: {0}")]
    Projection(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("spacing {spacing_deg}\u{b0} exceeds bounding box extent ({width}\u{b0} x {height}\u{b0})")]
    EmptyGrid {
        spacing_deg: f64,
        width: f64,
        height: f64,
    },

    #[error("no candidate cells remain after clipping")]
    EmptySelection,

    #[error("failed to read boundary shapefile: {0}")]
    Shapefile(#[from] shapefile::Error),
}

/// Non-fatal notice that the requested site count was clamped to the number
/// of available candidate cells. Returned alongside a successful selection,
/// never as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InsufficientCandidates {
    pub requested: usize,
    pub available: usize,
}
