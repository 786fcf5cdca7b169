//! Reservoir sampling site planner.
//!
//! Turns a hand-drawn reservoir boundary into a spaced grid of candidate
//! cells and randomly selects sampling sites from it: boundary polygon ->
//! planar area -> spacing policy -> grid tiling -> boundary clipping ->
//! random without-replacement selection.

mod area;
pub use area::{AreaReport, SQUARE_METERS_PER_ACRE, SQUARE_METERS_PER_HECTARE};

pub mod boundary;

mod clip;
pub use clip::{CandidateCell, ClipMode, candidates};

mod error;
pub use error::{Error, InsufficientCandidates, Result};

pub mod export;

mod grid;
pub use grid::{cell_count_estimate, tile};

mod pipeline;
pub use pipeline::{
    MAX_REQUESTED_SITES, PlanOptions, PlanResult, candidate_cells, estimated_cell_count, plan,
    plan_with_rng,
};

mod projection;
pub use projection::{CoordinateProjector, METERS_PER_DEGREE, degrees_per_meter};

pub mod regions;

mod sample;
pub use sample::{SamplingSite, Selection, select};

mod spacing;
pub use spacing::{SpacingPolicy, SpacingResult};
