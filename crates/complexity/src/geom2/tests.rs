use super::*;
use nalgebra::{vector, Vector2};

fn square_ccw() -> Shape {
    Shape::polygon(
        vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ],
        Vec::new(),
    )
}

fn signed_area2(ring: &[Vector2<f64>]) -> f64 {
    ring.windows(2).map(|w| w[0].x * w[1].y - w[1].x * w[0].y).sum()
}

#[test]
fn centroid_polygon_area_weighted() {
    let s = Shape::polygon(
        vec![
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![2.0, 2.0],
            vector![0.0, 2.0],
        ],
        Vec::new(),
    );
    let c = s.centroid().unwrap();
    assert!((c - vector![1.0, 1.0]).norm() < 1e-12);
}

#[test]
fn centroid_polygon_hole_subtracts() {
    let s = Shape::from_wkt("POLYGON ((0 0, 4 0, 4 4, 0 4, 0 0), (0 0, 0 1, 1 1, 1 0, 0 0))")
        .unwrap();
    let c = s.centroid().unwrap();
    let expected = (vector![2.0, 2.0] * 16.0 - vector![0.5, 0.5]) / 15.0;
    assert!((c - expected).norm() < 1e-12);
}

#[test]
fn centroid_line_length_weighted() {
    let s = Shape::line_string(vec![
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![2.0, 2.0],
    ]);
    let c = s.centroid().unwrap();
    assert!((c - vector![1.5, 0.5]).norm() < 1e-12);
}

#[test]
fn centroid_degenerate_falls_back_to_mean() {
    let p = vector![3.0, -1.0];
    let s = Shape::polygon(vec![p, p, p], Vec::new());
    let c = s.centroid().unwrap();
    assert!((c - p).norm() < 1e-12);
    assert!(Shape::empty(ShapeKind::Polygon).centroid().is_none());
    assert_eq!(Shape::point(p).centroid(), Some(p));
}

#[test]
fn centroid_tiny_polygon_keeps_area_weighting() {
    // area 6e-24; only an exactly zero area falls back to the edge centroid
    let k = 1e-12;
    let s = Shape::polygon(
        vec![vector![0.0, 0.0], vector![4.0 * k, 0.0], vector![0.0, 3.0 * k]],
        Vec::new(),
    );
    let c = s.centroid().unwrap();
    let expected = vector![4.0 / 3.0, 1.0] * k;
    assert!((c - expected).norm() < 1e-9 * k);
}

#[test]
fn centroid_collinear_polygon_uses_edges() {
    let s = Shape::from_wkt("POLYGON ((0 0, 1 1, 3 3, 0 0))").unwrap();
    let c = s.centroid().unwrap();
    assert!((c - vector![1.5, 1.5]).norm() < 1e-12);
}

#[test]
fn canonical_polygon_is_clockwise_from_min_vertex() {
    let c = square_ccw().canonical();
    let ring = &c.rings()[0];
    assert_eq!(
        ring,
        &vec![
            vector![0.0, 0.0],
            vector![0.0, 1.0],
            vector![1.0, 1.0],
            vector![1.0, 0.0],
            vector![0.0, 0.0],
        ]
    );
    assert!(signed_area2(ring) < 0.0);
}

#[test]
fn canonical_rotates_start_vertex() {
    let s = Shape::from_wkt("POLYGON ((1 1, 1 0, 0 0, 0 1, 1 1))").unwrap();
    assert_eq!(s.canonical(), square_ccw().canonical());
}

#[test]
fn canonical_holes_are_counter_clockwise() {
    let s = Shape::from_wkt("POLYGON ((0 0, 4 0, 4 4, 0 4, 0 0), (1 1, 2 1, 2 2, 1 2, 1 1))")
        .unwrap()
        .canonical();
    assert!(signed_area2(&s.rings()[0]) < 0.0);
    assert!(signed_area2(&s.rings()[1]) > 0.0);
}

#[test]
fn canonical_is_idempotent_and_preserves_points() {
    let s = Shape::from_wkt(
        "POLYGON ((515 426, 370 390, 410 230, 610 240, 540 290, 720 300, 710 430, 515 426))",
    )
    .unwrap();
    let once = s.canonical();
    assert_eq!(once.canonical(), once);
    let sorted = |sh: &Shape| {
        let mut v = sh.coordinates();
        v.sort_by(super::util::cmp_xy);
        v.dedup();
        v
    };
    assert_eq!(sorted(&once), sorted(&s));
}

#[test]
fn canonical_line_string_direction() {
    let s = Shape::line_string(vec![
        vector![3.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 0.0],
    ]);
    let c = s.canonical();
    assert_eq!(
        c.coordinates(),
        vec![vector![0.0, 0.0], vector![1.0, 1.0], vector![3.0, 0.0]]
    );
    assert_eq!(c.canonical(), c);
}

#[test]
fn canonical_does_not_mutate_source() {
    let s = square_ccw();
    let before = s.clone();
    let _ = s.canonical();
    assert_eq!(s, before);
}
