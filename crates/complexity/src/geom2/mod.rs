//! 2D shape model and geometry provider.
//!
//! Purpose
//! - Hold a planar shape (point, line string, polygon) as an immutable
//!   snapshot of vertex rings and answer the few geometric queries the
//!   complexity scorer needs: coordinates, centroid, canonical ordering.
//! - Read shapes from well-known text.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>`.
//! - Polygon rings are closed; the exterior ring comes first.
//! - Canonicalization never mutates: `Shape::canonical` returns a copy.
//!
//! Code cross-refs: `Shape`, `ShapeKind`, `wkt::parse`, `rand::draw_polygon_radial`

pub mod rand;
mod types;
mod util;
pub mod wkt;

pub use types::{Shape, ShapeKind};
pub use wkt::WktError;

#[cfg(test)]
mod tests;
