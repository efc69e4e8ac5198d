//! Scoring configuration and defaults.
//!
//! Policy
//! - Weights are fixed constants; `Weights::default()` returns them. Callers
//!   experimenting with other mixes build a `Weights` by hand.

/// Default resolution search bound for the library (`R` up to `2^4`).
pub const DEFAULT_MAX_J: usize = 4;

/// Weight of the larger of the two entropy signals.
pub const LARGE_ENTROPY_WEIGHT: f64 = 0.6;
/// Weight of the smaller of the two entropy signals.
pub const SMALL_ENTROPY_WEIGHT: f64 = 0.07;
/// Weight of perceptual smoothness.
pub const SMOOTHNESS_WEIGHT: f64 = 0.33;

/// Mixing weights for the final score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weights {
    pub large_entropy: f64,
    pub small_entropy: f64,
    pub smoothness: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            large_entropy: LARGE_ENTROPY_WEIGHT,
            small_entropy: SMALL_ENTROPY_WEIGHT,
            smoothness: SMOOTHNESS_WEIGHT,
        }
    }
}

/// Scorer configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreCfg {
    /// Resolutions `2^j` for `j ∈ [1, max_j]` are searched.
    pub max_j: usize,
    pub weights: Weights,
}

impl Default for ScoreCfg {
    fn default() -> Self {
        Self {
            max_j: DEFAULT_MAX_J,
            weights: Weights::default(),
        }
    }
}

impl ScoreCfg {
    #[inline]
    pub fn with_max_j(max_j: usize) -> Self {
        Self {
            max_j,
            ..Self::default()
        }
    }
}
