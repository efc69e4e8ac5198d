//! Basic 2D shape types consumed by the complexity scorer.
//!
//! - `ShapeKind`: which planar geometry a `Shape` models.
//! - `Shape`: immutable, flat vertex rings; polygons keep the exterior ring
//!   first and holes after it, every polygon ring closed (first == last).
//!
//! References
//! - Code cross-refs: `util::{centroid, canonical_rings}`, `wkt::parse`

use nalgebra::Vector2;

use super::util;

/// Geometry kind of a `Shape`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Point,
    LineString,
    Polygon,
}

/// Planar shape as an owned snapshot of vertex rings.
///
/// Invariants
/// - `Point`: zero or one ring with at most one vertex.
/// - `LineString`: zero or one ring (open or closed).
/// - `Polygon`: zero rings (empty) or exterior + holes, each closed.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    rings: Vec<Vec<Vector2<f64>>>,
}

impl Shape {
    #[inline]
    pub fn point(p: Vector2<f64>) -> Self {
        Self {
            kind: ShapeKind::Point,
            rings: vec![vec![p]],
        }
    }

    #[inline]
    pub fn line_string(points: Vec<Vector2<f64>>) -> Self {
        let rings = if points.is_empty() {
            Vec::new()
        } else {
            vec![points]
        };
        Self {
            kind: ShapeKind::LineString,
            rings,
        }
    }

    /// Polygon from an exterior ring and holes. Open rings are closed here.
    pub fn polygon(exterior: Vec<Vector2<f64>>, holes: Vec<Vec<Vector2<f64>>>) -> Self {
        if exterior.is_empty() {
            return Self::empty(ShapeKind::Polygon);
        }
        let rings = std::iter::once(exterior)
            .chain(holes.into_iter().filter(|h| !h.is_empty()))
            .map(close_ring)
            .collect();
        Self {
            kind: ShapeKind::Polygon,
            rings,
        }
    }

    #[inline]
    pub fn empty(kind: ShapeKind) -> Self {
        Self {
            kind,
            rings: Vec::new(),
        }
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[inline]
    pub fn rings(&self) -> &[Vec<Vector2<f64>>] {
        &self.rings
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rings.iter().all(|r| r.is_empty())
    }

    /// All vertices of all rings in order, closing points included.
    pub fn coordinates(&self) -> Vec<Vector2<f64>> {
        self.rings.iter().flatten().copied().collect()
    }

    /// Centroid of the shape; `None` for an empty shape.
    ///
    /// Polygons are area-weighted, line strings length-weighted; degenerate
    /// inputs fall back to the lower-dimensional centroid.
    pub fn centroid(&self) -> Option<Vector2<f64>> {
        util::centroid(self.kind, &self.rings)
    }

    /// Canonical copy: fixed ring orientation and start vertex.
    ///
    /// Idempotent and point-set preserving; `self` is never mutated.
    pub fn canonical(&self) -> Shape {
        Shape {
            kind: self.kind,
            rings: util::canonical_rings(self.kind, &self.rings),
        }
    }
}

fn close_ring(mut ring: Vec<Vector2<f64>>) -> Vec<Vector2<f64>> {
    if let (Some(first), Some(last)) = (ring.first().copied(), ring.last().copied()) {
        if first != last {
            ring.push(first);
        }
    }
    ring
}
