//! One planning request, end to end.
//!
//! polygon + parameters -> area -> spacing -> tiling -> clipping -> random
//! site selection. The whole request is a pure function of its inputs (plus
//! the RNG); nothing is cached between requests and a failure at any step
//! leaves no partial state behind.

use geo::Polygon;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::area::AreaReport;
use crate::boundary;
use crate::clip::{self, CandidateCell, ClipMode};
use crate::error::{Error, InsufficientCandidates, Result};
use crate::grid;
use crate::projection::CoordinateProjector;
use crate::sample::{self, SamplingSite};
use crate::spacing::{SpacingPolicy, SpacingResult};

/// Upper bound on the requested site count a field campaign can ask for.
pub const MAX_REQUESTED_SITES: usize = 50;

/// Parameters of one planning request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlanOptions {
    pub policy: SpacingPolicy,
    pub requested_sites: usize,
    pub mode: ClipMode,
    /// Seed for reproducible selection; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            policy: SpacingPolicy::TieredByArea,
            requested_sites: 6,
            mode: ClipMode::default(),
            seed: None,
        }
    }
}

/// Everything a planning request produces. Owned by the caller and replaced
/// wholesale on the next request, never patched in place.
#[derive(Debug, Clone, Serialize)]
pub struct PlanResult {
    pub area: AreaReport,
    pub spacing: SpacingResult,
    pub candidate_cell_count: usize,
    pub sites: Vec<SamplingSite>,
    pub clamp: Option<InsufficientCandidates>,
}

/// Runs one planning request with a caller-provided RNG.
pub fn plan_with_rng<R: Rng>(
    boundary: &Polygon<f64>,
    options: &PlanOptions,
    rng: &mut R,
) -> Result<PlanResult> {
    if options.requested_sites == 0 || options.requested_sites > MAX_REQUESTED_SITES {
        return Err(Error::InvalidParameter(format!(
            "requested site count must be between 1 and {MAX_REQUESTED_SITES}, got {}",
            options.requested_sites
        )));
    }

    let bounds = boundary::bounding_box(boundary)?;
    let projector = CoordinateProjector::for_polygon(boundary)?;
    let area = AreaReport::measure(&projector.to_planar(boundary));
    let spacing = options.policy.resolve(area.square_meters)?;

    let cells = grid::tile(bounds, spacing.spacing_deg)?;
    let candidates = clip::candidates(boundary, &cells, options.mode);

    log::info!(
        "{:.1} acre boundary, {} m grid: {} candidate cells",
        area.acres,
        spacing.spacing_meters,
        candidates.len()
    );

    let selection = sample::select(&candidates, options.requested_sites, rng)?;
    Ok(PlanResult {
        area,
        spacing,
        candidate_cell_count: candidates.len(),
        sites: selection.sites,
        clamp: selection.clamp,
    })
}

/// Runs one planning request, seeding the RNG from `options.seed` when
/// present and from the OS otherwise.
pub fn plan(boundary: &Polygon<f64>, options: &PlanOptions) -> Result<PlanResult> {
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    plan_with_rng(boundary, options, &mut rng)
}

/// Number of cells `plan` would tile for this boundary and policy, computed
/// without tiling anything. The calling layer uses this to refuse oversized
/// requests up front; the pipeline itself never truncates.
pub fn estimated_cell_count(boundary: &Polygon<f64>, policy: SpacingPolicy) -> Result<usize> {
    let bounds = boundary::bounding_box(boundary)?;
    let projector = CoordinateProjector::for_polygon(boundary)?;
    let area = AreaReport::measure(&projector.to_planar(boundary));
    let spacing = policy.resolve(area.square_meters)?;
    Ok(grid::cell_count_estimate(bounds, spacing.spacing_deg))
}

/// Candidate cells a request would sample from, without selecting sites.
/// Used by callers that want to display or count the grid itself.
pub fn candidate_cells(
    boundary: &Polygon<f64>,
    policy: SpacingPolicy,
    mode: ClipMode,
) -> Result<Vec<CandidateCell>> {
    let bounds = boundary::bounding_box(boundary)?;
    let projector = CoordinateProjector::for_polygon(boundary)?;
    let area = AreaReport::measure(&projector.to_planar(boundary));
    let spacing = policy.resolve(area.square_meters)?;
    let cells = grid::tile(bounds, spacing.spacing_deg)?;
    Ok(clip::candidates(boundary, &cells, mode))
}
