//! Visual complexity score of a planar shape.
//!
//! Purpose
//! - Combine three heuristics into one scalar:
//!   global distance irregularity (`dist_factor` over centroid distances),
//!   local angle irregularity (`dist_factor` over turning angles), and
//!   perceptual smoothness (exponential reward for gentle turns).
//!
//! Combination
//! - `large = max(dist, angle)`, `small = min(dist, angle)`;
//!   `score = large·w_large + small·w_small + smoothness·w_smooth`.
//!   The dominant weight follows the stronger signal, not a fixed heuristic.
//!
//! Conventions
//! - `Complexity` owns an immutable `Shape`; every method is a pure function
//!   of it, so repeated calls return identical values.
//! - Angle samples are taken from `Shape::canonical()`, a fresh copy.
//!
//! Code cross-refs: `cost::dist_factor`, `samples::{distance_samples, angle_samples}`, `ScoreCfg`

use crate::cfg::{ScoreCfg, Weights};
use crate::cost::dist_factor;
use crate::geom2::Shape;
use crate::samples::{angle_samples, distance_samples};

/// Sub-scores and final score of one evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakdown {
    pub dist_entropy: f64,
    pub angle_entropy: f64,
    pub smoothness: f64,
    pub score: f64,
}

/// Complexity scorer over one shape.
#[derive(Clone, Debug)]
pub struct Complexity {
    shape: Shape,
    cfg: ScoreCfg,
}

impl Complexity {
    /// Scorer with default weights and the given resolution bound.
    #[inline]
    pub fn new(shape: Shape, max_j: usize) -> Self {
        Self::with_cfg(shape, ScoreCfg::with_max_j(max_j))
    }

    /// Scorer with `ScoreCfg::default()` (`max_j = 4`).
    #[inline]
    pub fn from_shape(shape: Shape) -> Self {
        Self::with_cfg(shape, ScoreCfg::default())
    }

    #[inline]
    pub fn with_cfg(shape: Shape, cfg: ScoreCfg) -> Self {
        Self { shape, cfg }
    }

    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[inline]
    pub fn cfg(&self) -> &ScoreCfg {
        &self.cfg
    }

    /// Normalized centroid distances of all coordinates.
    pub fn distance_samples(&self) -> Vec<f64> {
        match self.shape.centroid() {
            Some(c) => distance_samples(&self.shape.coordinates(), c),
            None => Vec::new(),
        }
    }

    /// Normalized turning angles of the canonical vertex order.
    pub fn angle_samples(&self) -> Vec<f64> {
        angle_samples(&self.shape.canonical().coordinates())
    }

    /// Global distance irregularity.
    pub fn global_dist_entropy(&self) -> f64 {
        dist_factor(&self.distance_samples(), self.cfg.max_j)
    }

    /// Local angle irregularity.
    pub fn local_angle_entropy(&self) -> f64 {
        dist_factor(&self.angle_samples(), self.cfg.max_j)
    }

    /// Mean smoothness over turning angles, in [0, 1].
    pub fn perceptual_smoothness(&self) -> f64 {
        smoothness(&self.angle_samples())
    }

    /// Final weighted complexity.
    pub fn score(&self) -> f64 {
        self.breakdown().score
    }

    /// All sub-scores, extracting each sample vector once.
    pub fn breakdown(&self) -> Breakdown {
        let angles = self.angle_samples();
        let dist_entropy = dist_factor(&self.distance_samples(), self.cfg.max_j);
        let angle_entropy = dist_factor(&angles, self.cfg.max_j);
        let smoothness = smoothness(&angles);
        let score = combine(dist_entropy, angle_entropy, smoothness, &self.cfg.weights);
        tracing::debug!(
            dist_entropy,
            angle_entropy,
            smoothness,
            score,
            max_j = self.cfg.max_j,
            "complexity"
        );
        Breakdown {
            dist_entropy,
            angle_entropy,
            smoothness,
            score,
        }
    }
}

/// Smoothness of one normalized turn `a ∈ [0, 1)`: 1 at `a = 0`, → 0 as `a → 1`.
#[inline]
pub fn smoothness_term(a: f64) -> f64 {
    let floor = (-1.0f64).exp();
    ((-a).exp() - floor) / (1.0 - floor)
}

/// Mean `smoothness_term` over angle samples; 0 when there are none.
pub fn smoothness(angles: &[f64]) -> f64 {
    if angles.is_empty() {
        return 0.0;
    }
    angles.iter().map(|&a| smoothness_term(a)).sum::<f64>() / angles.len() as f64
}

/// Weighted combination; the larger entropy always takes `large_entropy`.
#[inline]
pub fn combine(dist_entropy: f64, angle_entropy: f64, smoothness: f64, w: &Weights) -> f64 {
    let large = dist_entropy.max(angle_entropy);
    let small = dist_entropy.min(angle_entropy);
    large * w.large_entropy + small * w.small_entropy + smoothness * w.smoothness
}
