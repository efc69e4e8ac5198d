//! Entropy/quantization-error cost model over normalized samples.
//!
//! Purpose
//! - Quantize a sample vector (values in [0, 1]) into `R` equal-width levels
//!   and measure (a) the Shannon entropy of level occupancy and (b) the mean
//!   squared gap between each occupied level's representative value and the
//!   average of the samples that fell into it.
//! - `dist_factor` searches `R = 2^j` for `j ∈ [1, max_j]` and returns the
//!   minimal normalized `entropy + error`, a scale-free irregularity measure.
//!
//! Conventions
//! - Level of `s` is `min(R - 1, floor(s / gap))` with `gap = 1 / R`; the clamp
//!   absorbs `s = 1.0`. Negative or NaN samples land in level 0.
//! - Buckets are kept sparse so large `R` costs memory proportional to `N`,
//!   not to `R`.
//! - Sample order never matters; only the multiset of values does.
//!
//! Code cross-refs: `score::Complexity`, `samples::{distance_samples, angle_samples}`

use std::collections::BTreeMap;

/// Largest `j` searched by `dist_factor`; larger bounds are clamped.
pub const MAX_J_LIMIT: usize = 30;

/// Occupancy of a single quantization level.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LevelBucket {
    pub count: usize,
    pub sum: f64,
}

impl LevelBucket {
    #[inline]
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }
}

/// Entropy and error of one sample vector at one resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CostEval {
    pub resolution: usize,
    pub entropy: f64,
    pub error: f64,
}

/// Cost evaluator for a borrowed sample vector at a fixed resolution.
#[derive(Clone, Copy, Debug)]
pub struct Cost<'a> {
    scores: &'a [f64],
    resolution: usize,
}

impl<'a> Cost<'a> {
    /// `resolution` below 1 is treated as 1.
    #[inline]
    pub fn new(scores: &'a [f64], resolution: usize) -> Self {
        Self {
            scores,
            resolution: resolution.max(1),
        }
    }

    #[inline]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Bin width `1 / R`.
    #[inline]
    pub fn gap(&self) -> f64 {
        1.0 / self.resolution as f64
    }

    #[inline]
    pub fn level_of(&self, s: f64) -> usize {
        // float→usize casts saturate: negatives and NaN map to 0
        ((s / self.gap()) as usize).min(self.resolution - 1)
    }

    /// Quantization level of every sample, in input order.
    pub fn levels(&self) -> Vec<usize> {
        self.scores.iter().map(|&s| self.level_of(s)).collect()
    }

    /// Occupied levels only, keyed by level index.
    pub fn buckets(&self) -> BTreeMap<usize, LevelBucket> {
        let mut out: BTreeMap<usize, LevelBucket> = BTreeMap::new();
        for &s in self.scores {
            let b = out.entry(self.level_of(s)).or_default();
            b.count += 1;
            b.sum += s;
        }
        out
    }

    /// Shannon entropy (base 2) of level occupancy; 0 for no samples.
    pub fn entropy(&self) -> f64 {
        entropy_of(&self.buckets(), self.scores.len())
    }

    /// Mean sample value per level (`R` entries, 0 for empty levels).
    ///
    /// Returns an empty vector when there are no samples.
    pub fn level_averages(&self) -> Vec<f64> {
        if self.scores.is_empty() {
            return Vec::new();
        }
        let mut averages = vec![0.0; self.resolution];
        for (lv, b) in self.buckets() {
            averages[lv] = b.average();
        }
        averages
    }

    /// Quantization error: `Σ ((i+1)·gap − avg_i)² / N` over occupied levels.
    pub fn error(&self) -> f64 {
        error_of(&self.buckets(), self.scores.len(), self.gap())
    }

    /// Entropy and error from a single bucketing pass.
    pub fn evaluate(&self) -> CostEval {
        let buckets = self.buckets();
        let n = self.scores.len();
        CostEval {
            resolution: self.resolution,
            entropy: entropy_of(&buckets, n),
            error: error_of(&buckets, n, self.gap()),
        }
    }
}

fn entropy_of(buckets: &BTreeMap<usize, LevelBucket>, n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let n = n as f64;
    buckets
        .values()
        .map(|b| {
            let p = b.count as f64 / n;
            -p * p.log2()
        })
        .sum()
}

fn error_of(buckets: &BTreeMap<usize, LevelBucket>, n: usize, gap: f64) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let sum: f64 = buckets
        .iter()
        .map(|(&lv, b)| {
            let expect = (lv + 1) as f64 * gap;
            (expect - b.average()).powi(2)
        })
        .sum();
    sum / n as f64
}

/// `num / den`, with `0 / 0` read as 0.
#[inline]
fn ratio(num: f64, den: f64) -> f64 {
    if den > 0.0 {
        num / den
    } else {
        0.0
    }
}

/// Per-resolution evaluations for `R = 2^j`, `j ∈ [1, max_j]`.
pub fn evaluate_scales(scores: &[f64], max_j: usize) -> Vec<CostEval> {
    (1..=max_j.clamp(1, MAX_J_LIMIT))
        .map(|j| Cost::new(scores, 1usize << j).evaluate())
        .collect()
}

/// Distortion factor: min over scales of `entropy/log2(N) + error/max_error`.
///
/// Returns 0 for an empty sample vector. `max_j` is clamped to
/// `[1, MAX_J_LIMIT]`. When `N = 1` or every error is 0, the corresponding
/// normalized term is 0.
pub fn dist_factor(scores: &[f64], max_j: usize) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let evals = evaluate_scales(scores, max_j);
    let max_entropy = (scores.len() as f64).log2();
    let max_error = evals.iter().map(|e| e.error).fold(0.0, f64::max);
    evals
        .iter()
        .map(|e| ratio(e.entropy, max_entropy) + ratio(e.error, max_error))
        .fold(f64::INFINITY, f64::min)
}
