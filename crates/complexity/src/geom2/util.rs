use std::cmp::Ordering;

use nalgebra::Vector2;

use super::types::ShapeKind;

/// Lexicographic `(x, y)` order; NaN compares equal.
#[inline]
pub(crate) fn cmp_xy(a: &Vector2<f64>, b: &Vector2<f64>) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

#[inline]
fn cross(p: Vector2<f64>, q: Vector2<f64>) -> f64 {
    p.x * q.y - q.x * p.y
}

/// Twice the signed area of a closed ring (positive for CCW).
fn ring_area2(ring: &[Vector2<f64>]) -> f64 {
    ring.windows(2).map(|w| cross(w[0], w[1])).sum()
}

/// Area and area centroid of a closed ring; `None` for zero area.
fn ring_area_centroid(ring: &[Vector2<f64>]) -> Option<(f64, Vector2<f64>)> {
    let mut a: f64 = 0.0;
    let mut c = Vector2::<f64>::zeros();
    for w in ring.windows(2) {
        let cr = cross(w[0], w[1]);
        a += cr;
        c += (w[0] + w[1]) * cr;
    }
    a *= 0.5;
    if a == 0.0 {
        return None;
    }
    Some((a.abs(), c / (6.0 * a)))
}

fn area_centroid(rings: &[Vec<Vector2<f64>>]) -> Option<Vector2<f64>> {
    let mut area: f64 = 0.0;
    let mut moment = Vector2::<f64>::zeros();
    for (k, ring) in rings.iter().enumerate() {
        let Some((a, c)) = ring_area_centroid(ring) else {
            continue;
        };
        // holes subtract
        let a = if k == 0 { a } else { -a };
        area += a;
        moment += c * a;
    }
    if area == 0.0 {
        return None;
    }
    Some(moment / area)
}

fn line_centroid(rings: &[Vec<Vector2<f64>>]) -> Option<Vector2<f64>> {
    let mut len: f64 = 0.0;
    let mut moment = Vector2::<f64>::zeros();
    for w in rings.iter().flat_map(|r| r.windows(2)) {
        let l = (w[1] - w[0]).norm();
        len += l;
        moment += (w[0] + w[1]) * (0.5 * l);
    }
    if len <= 0.0 {
        return None;
    }
    Some(moment / len)
}

fn mean_centroid(rings: &[Vec<Vector2<f64>>]) -> Option<Vector2<f64>> {
    let n = rings.iter().map(Vec::len).sum::<usize>();
    if n == 0 {
        return None;
    }
    let sum = rings
        .iter()
        .flatten()
        .fold(Vector2::<f64>::zeros(), |acc, p| acc + p);
    Some(sum / n as f64)
}

/// Centroid by dimension, degrading polygon → line → point average.
pub(crate) fn centroid(kind: ShapeKind, rings: &[Vec<Vector2<f64>>]) -> Option<Vector2<f64>> {
    let area = match kind {
        ShapeKind::Polygon => area_centroid(rings),
        _ => None,
    };
    area.or_else(|| match kind {
        ShapeKind::Point => None,
        _ => line_centroid(rings),
    })
    .or_else(|| mean_centroid(rings))
}

/// Rotate a closed ring to start at its smallest vertex and orient it.
///
/// `clockwise` selects the target orientation; zero-area rings keep theirs.
fn canonical_ring(ring: &[Vector2<f64>], clockwise: bool) -> Vec<Vector2<f64>> {
    if ring.len() < 2 {
        return ring.to_vec();
    }
    let mut open = ring[..ring.len() - 1].to_vec();
    let start = open
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| cmp_xy(a, b))
        .map_or(0, |(i, _)| i);
    open.rotate_left(start);
    open.push(open[0]);
    let a2 = ring_area2(&open);
    let wrong = if clockwise { a2 > 0.0 } else { a2 < 0.0 };
    if wrong {
        let n = open.len();
        open[1..n - 1].reverse();
    }
    open
}

fn canonical_line(line: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let n = line.len();
    if n >= 4 && line[0] == line[n - 1] {
        return canonical_ring(line, true);
    }
    let mut out = line.to_vec();
    for i in 0..n / 2 {
        match cmp_xy(&line[i], &line[n - 1 - i]) {
            Ordering::Equal => continue,
            Ordering::Greater => out.reverse(),
            Ordering::Less => {}
        }
        break;
    }
    out
}

/// Canonical rings for a shape: polygon shells CW, holes CCW, each starting
/// at its lexicographically smallest vertex; line strings in ascending
/// end-to-end order (closed ones treated like shells).
pub(crate) fn canonical_rings(
    kind: ShapeKind,
    rings: &[Vec<Vector2<f64>>],
) -> Vec<Vec<Vector2<f64>>> {
    match kind {
        ShapeKind::Point => rings.to_vec(),
        ShapeKind::LineString => rings.iter().map(|r| canonical_line(r)).collect(),
        ShapeKind::Polygon => rings
            .iter()
            .enumerate()
            .map(|(k, r)| canonical_ring(r, k == 0))
            .collect(),
    }
}
