//! Replayable random polygons with tunable jaggedness.
//!
//! Purpose
//! - Feed benchmarks and property tests of the scorer with shapes that span
//!   the whole irregularity range: near-regular outlines, jittered ones, and
//!   notched outlines with reflex corners.
//!
//! Model
//! - `n` vertices at unit radius on equally spaced angles with a random
//!   global phase, then angular and radial jitter.
//! - Every `notch_every`-th vertex is pulled toward the center by
//!   `notch_depth`. With neighbors left at full radius this makes the vertex
//!   reflex, which drives the turning-angle distribution apart.
//! - Vertices stay in angle order (jitter < half the spacing), so the ring is
//!   simple and CCW around the origin.

use super::types::Shape;
use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    /// Vertex count; at least 3.
    pub vertices: usize,
    /// Angular jitter as a fraction of the spacing `2π/n`. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Relative radial jitter: radius `1 + u`, `u ∈ [-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Notch period; values below 2 disable notches.
    pub notch_every: usize,
    /// Radius factor of notched vertices. Clamped to [0.05, 1].
    pub notch_depth: f64,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertices: 12,
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            notch_every: 0,
            notch_depth: 0.4,
        }
    }
}

impl RadialCfg {
    #[inline]
    fn is_notch(&self, k: usize) -> bool {
        self.notch_every >= 2 && k % self.notch_every == self.notch_every - 1
    }
}

/// `(seed, index)` pair addressing one draw of a reproducible stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    fn rng(self) -> StdRng {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&self.seed.to_le_bytes());
        bytes[8..16].copy_from_slice(&self.index.to_le_bytes());
        StdRng::from_seed(bytes)
    }
}

/// Draw one closed polygon (CCW, `cfg.vertices` distinct vertices).
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> Shape {
    let mut rng = tok.rng();
    let n = cfg.vertices.max(3);
    let delta = TAU / n as f64;
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49) * delta;
    let rj = cfg.radial_jitter.max(0.0);
    let depth = cfg.notch_depth.clamp(0.05, 1.0);
    let phase = rng.gen::<f64>() * TAU;
    let pts = (0..n)
        .map(|k| {
            let th = phase + k as f64 * delta + rng.gen_range(-1.0f64..=1.0) * aj;
            let mut r = (1.0 + rng.gen_range(-1.0f64..=1.0) * rj).max(1e-3);
            if cfg.is_notch(k) {
                r *= depth;
            }
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    Shape::polygon(pts, Vec::new())
}
