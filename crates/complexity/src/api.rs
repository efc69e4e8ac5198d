//! Curated surface for callers (scorer, cost model, shape provider).
//!
//! Prefer these re-exports over reaching into submodules; internal layout may
//! move between versions.

// Scoring
pub use crate::cfg::{
    ScoreCfg, Weights, DEFAULT_MAX_J, LARGE_ENTROPY_WEIGHT, SMALL_ENTROPY_WEIGHT,
    SMOOTHNESS_WEIGHT,
};
pub use crate::score::{combine, smoothness, smoothness_term, Breakdown, Complexity};
// Cost model
pub use crate::cost::{dist_factor, evaluate_scales, Cost, CostEval, LevelBucket, MAX_J_LIMIT};
// Sample extraction
pub use crate::samples::{angle_samples, distance_samples};
// Shapes
pub use crate::geom2::rand::{draw_polygon_radial, RadialCfg, ReplayToken};
pub use crate::geom2::wkt::parse as parse_wkt;
pub use crate::geom2::{Shape, ShapeKind, WktError};

/// Score a WKT description with default weights.
pub fn score_wkt(wkt: &str, max_j: usize) -> Result<f64, WktError> {
    Ok(Complexity::new(Shape::from_wkt(wkt)?, max_j).score())
}
