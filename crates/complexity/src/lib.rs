//! Visual complexity of planar shapes.
//!
//! A shape (polygon or line string) is reduced to two normalized sample
//! vectors, centroid distances and turning angles. Each is scored with a
//! multiscale entropy/quantization-error cost (`cost::dist_factor`), and the
//! two irregularity signals are mixed with a perceptual smoothness term into
//! one score (`score::Complexity`). Higher means more jagged.
//!
//! Layout
//! - `geom2`: shape model, WKT reader, centroid, canonical ordering, sampler.
//! - `samples`: shape → normalized sample vectors.
//! - `cost`: entropy cost model, independent of any shape.
//! - `score`: scorer and weighted combination; `cfg`: defaults.

pub mod api;
pub mod cfg;
pub mod cost;
pub mod geom2;
pub mod samples;
pub mod score;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{ScoreCfg, Weights, DEFAULT_MAX_J};
pub use cost::dist_factor;
pub use geom2::{Shape, ShapeKind, WktError};
pub use score::{Breakdown, Complexity};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{ScoreCfg, Weights};
    pub use crate::cost::{dist_factor, Cost};
    pub use crate::geom2::{Shape, ShapeKind};
    pub use crate::score::{Breakdown, Complexity};
    pub use nalgebra::Vector2 as Vec2;
}
