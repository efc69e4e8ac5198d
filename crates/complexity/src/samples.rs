//! Sample extractors: shape vertices → normalized sample vectors.
//!
//! - `distance_samples`: centroid distances divided by the largest one, in [0, 1].
//! - `angle_samples`: turning angles folded into [0, π) and divided by π.

use std::f64::consts::PI;

use nalgebra::Vector2;

/// Centroid distances normalized by their maximum.
///
/// The farthest vertex maps to exactly 1.0. If every vertex sits on the
/// centroid the result is all zeros; no vertices give an empty vector.
pub fn distance_samples(coords: &[Vector2<f64>], centroid: Vector2<f64>) -> Vec<f64> {
    let dists: Vec<f64> = coords.iter().map(|p| (p - centroid).norm()).collect();
    let max = dists.iter().copied().fold(0.0, f64::max);
    if max <= 0.0 {
        return vec![0.0; dists.len()];
    }
    dists.into_iter().map(|d| d / max).collect()
}

/// Turning angle at every vertex of a (canonical) vertex sequence, over π.
///
/// A closing vertex equal to the first is dropped; indices wrap, so open
/// line strings are treated as closed. Fewer than 3 remaining vertices give
/// an empty vector. The fold into [0, π) uses `mod π`, so a turn and the
/// supplementary turn of opposite sense collapse together.
pub fn angle_samples(coords: &[Vector2<f64>]) -> Vec<f64> {
    let pts = match coords {
        [first, .., last] if first == last => &coords[..coords.len() - 1],
        _ => coords,
    };
    let n = pts.len();
    if n < 3 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let pre = pts[(i + n - 1) % n];
            let cur = pts[i];
            let post = pts[(i + 1) % n];
            let incoming = (cur.y - pre.y).atan2(cur.x - pre.x);
            let outgoing = (post.y - cur.y).atan2(post.x - cur.x);
            let turn = (outgoing - incoming + 2.0 * PI) % PI;
            turn / PI
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn distances_normalized_by_max() {
        let coords = [vector![1.0, 0.0], vector![0.0, 2.0], vector![-4.0, 0.0]];
        let s = distance_samples(&coords, Vector2::zeros());
        assert_eq!(s, vec![0.25, 0.5, 1.0]);
    }

    #[test]
    fn distances_degenerate() {
        assert!(distance_samples(&[], Vector2::zeros()).is_empty());
        let p = vector![2.0, 2.0];
        assert_eq!(distance_samples(&[p, p], p), vec![0.0, 0.0]);
    }

    #[test]
    fn angles_of_square() {
        // CW square: every turn is -π/2, folded to π/2
        let coords = [
            vector![0.0, 0.0],
            vector![0.0, 1.0],
            vector![1.0, 1.0],
            vector![1.0, 0.0],
            vector![0.0, 0.0],
        ];
        let a = angle_samples(&coords);
        assert_eq!(a.len(), 4);
        for v in a {
            assert!((v - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn angles_in_unit_interval() {
        let coords = [
            vector![0.0, 0.0],
            vector![3.0, 0.5],
            vector![2.0, 2.0],
            vector![-1.0, 1.0],
        ];
        for v in angle_samples(&coords) {
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn angles_need_three_distinct_vertices() {
        assert!(angle_samples(&[]).is_empty());
        let tri_closed = [vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 0.0]];
        assert!(angle_samples(&tri_closed).is_empty());
        let open = [vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 1.0]];
        assert_eq!(angle_samples(&open).len(), 3);
    }

    #[test]
    fn straight_run_has_zero_turn() {
        let coords = [
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![2.0, 0.0],
            vector![1.0, 1.0],
        ];
        let a = angle_samples(&coords);
        assert!(a[1].abs() < 1e-12);
    }
}
