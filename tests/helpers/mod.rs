// Copyright 2025 Lars Brubaker
// Shared test utilities for outline-tess tests.

#![allow(dead_code)]

use outline_tess::{Outline, Real, Shape, Triangle, TriangleKind, Vertex};

/// Route `log` output through the test harness; `RUST_LOG=outline_tess=trace`
/// prints every emitted triangle.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build an outline from `(x, y, on_curve)` triples.
pub fn outline(points: &[(Real, Real, bool)]) -> Outline {
    Outline::from_vertices(points.iter().map(|&(x, y, on)| Vertex::new(x, y, on)))
}

/// Straight-edged outline from `(x, y)` pairs.
pub fn polygon(points: &[(Real, Real)]) -> Outline {
    Outline::from_vertices(points.iter().map(|&(x, y)| Vertex::new(x, y, true)))
}

/// Axis-aligned square, counter-clockwise.
pub fn square(x0: Real, y0: Real, x1: Real, y1: Real) -> Outline {
    polygon(&[(x0, y0), (x1, y0), (x1, y1), (x0, y1)])
}

/// Shape holding `outlines`, each closed.
pub fn shape_of(outlines: &[Outline]) -> Shape {
    let mut shape = Shape::new();
    for o in outlines {
        for v in o.vertices() {
            shape.add_vertex(v.clone());
        }
        shape.close_last_outline();
    }
    shape
}

/// Signed area of the control polygon (on- and off-curve points alike).
pub fn control_area(o: &Outline) -> Real {
    outline_tess::geom::polygon_area(o.vertices().iter().map(|v| &v.coords))
}

/// Area covered by the fill: interior triangles plus convex curve triangles.
/// Concave curve triangles are carved out by the fragment stage, so they are
/// not counted.
pub fn filled_area(tris: &[Triangle]) -> Real {
    tris.iter()
        .filter(|t| t.kind != TriangleKind::ConcaveCurve)
        .map(|t| t.signed_area())
        .sum()
}

pub fn count_kind(tris: &[Triangle], kind: TriangleKind) -> usize {
    tris.iter().filter(|t| t.kind == kind).count()
}

pub fn assert_all_ccw(tris: &[Triangle]) {
    for t in tris {
        assert!(t.is_ccw(), "triangle is not counter-clockwise: {}", t);
    }
}

pub fn assert_area_approx(actual: Real, expected: Real, tolerance: Real, label: &str) {
    assert!(
        (actual - expected).abs() < tolerance,
        "{}: expected area ~{}, got {} (diff={})",
        label,
        expected,
        actual,
        (actual - expected).abs()
    );
}

/// Regular n-gon of radius `r` around the origin, counter-clockwise.
pub fn regular_polygon(n: usize, r: Real) -> Outline {
    let pts: Vec<(Real, Real)> = (0..n)
        .map(|i| {
            let a = std::f32::consts::TAU * i as Real / n as Real;
            (r * a.cos(), r * a.sin())
        })
        .collect();
    polygon(&pts)
}

/// Round outline with on-curve points on the axes and control points on the
/// corners of a `2r` square.
pub fn rounded(r: Real) -> Outline {
    outline(&[
        (r, 0.0, true),
        (r, r, false),
        (0.0, r, true),
        (-r, r, false),
        (-r, 0.0, true),
        (-r, -r, false),
        (0.0, -r, true),
        (r, -r, false),
    ])
}

pub fn reversed(o: &Outline) -> Outline {
    Outline::from_vertices(o.vertices().iter().rev().cloned())
}

/// Centroid of a triangle, (x, y).
pub fn centroid(t: &Triangle) -> (Real, Real) {
    let x = t.vertices.iter().map(|v| v.x()).sum::<Real>() / 3.0;
    let y = t.vertices.iter().map(|v| v.y()).sum::<Real>() / 3.0;
    (x, y)
}
