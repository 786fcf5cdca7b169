//! Random selection of sampling sites from candidate cells.

use geo::Centroid;
use rand::Rng;
use rand::seq::index;
use serde::Serialize;

use crate::clip::CandidateCell;
use crate::error::{Error, InsufficientCandidates, Result};

/// One selected sampling location. Coordinates are rounded to 6 decimal
/// places (~0.11 m) so exports and re-imports compare stably.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplingSite {
    pub index: usize,
    pub latitude: f64,
    pub longitude: f64,
}

/// Outcome of a selection: sites in selection order, plus a clamp notice
/// when fewer candidates were available than requested.
#[derive(Debug, Clone, Serialize)]
pub struct Selection {
    pub sites: Vec<SamplingSite>,
    pub clamp: Option<InsufficientCandidates>,
}

fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

/// Selects up to `requested` distinct candidate cells uniformly at random
/// without replacement and returns their centroids as sampling sites.
///
/// If fewer candidates exist than requested, selection proceeds with all of
/// them and the result carries an [`InsufficientCandidates`] notice. Indices
/// run 1..=n in selection order; the order is not re-sorted. Determinism
/// comes entirely from the caller's `rng`.
pub fn select<R: Rng>(
    candidates: &[CandidateCell],
    requested: usize,
    rng: &mut R,
) -> Result<Selection> {
    if requested == 0 {
        return Err(Error::InvalidParameter(
            "requested site count must be at least 1".into(),
        ));
    }
    let available = candidates.len();
    if available == 0 {
        return Err(Error::EmptySelection);
    }

    let clamp = if available < requested {
        log::warn!("only {available} candidate cells available, requested {requested}");
        Some(InsufficientCandidates {
            requested,
            available,
        })
    } else {
        None
    };
    let effective = requested.min(available);

    let mut sites = Vec::with_capacity(effective);
    for (i, chosen) in index::sample(rng, available, effective).iter().enumerate() {
        let centroid = candidates[chosen].geometry.centroid().ok_or_else(|| {
            Error::InvalidGeometry("candidate cell has a degenerate centroid".into())
        })?;
        sites.push(SamplingSite {
            index: i + 1,
            latitude: round6(centroid.y()),
            longitude: round6(centroid.x()),
        });
    }

    Ok(Selection { sites, clamp })
}
