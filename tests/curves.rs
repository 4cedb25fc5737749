// Copyright 2025 Lars Brubaker
// Quadratic outlines: curve triangles, texture coordinates and fill area.

mod helpers;

use helpers::*;
use outline_tess::{Outline, Shape, TessStatus, TriangleKind, Triangulator};

fn triangulate(outlines: &[Outline]) -> (Vec<outline_tess::Triangle>, TessStatus) {
    let mut tess = Triangulator::new();
    for o in outlines {
        tess.add_curve(o).unwrap();
    }
    tess.generate_triangulation();
    let status = tess.status();
    (tess.into_triangles(), status)
}

#[test]
fn square_with_bulging_bottom() {
    init_logging();
    let o = outline(&[(0.0, 0.0, true), (1.0, -1.0, false), (2.0, 0.0, true), (2.0, 2.0, true), (0.0, 2.0, true)]);
    let (tris, status) = triangulate(&[o.clone()]);
    assert_eq!(status, TessStatus::Ok);
    assert_eq!(count_kind(&tris, TriangleKind::ConvexCurve), 1);
    assert_eq!(count_kind(&tris, TriangleKind::Interior), 2);
    assert_all_ccw(&tris);
    assert_area_approx(filled_area(&tris), control_area(&o), 1e-5, "bulging square");

    let curve = &tris[0];
    assert!(curve.needs_curve_test());
    assert_eq!(curve.vertices[0].tex_coord, Some([0.0, 0.1]));
    assert_eq!(curve.vertices[2].tex_coord, Some([1.0, 0.1]));
    assert!(tris[1..].iter().all(|t| t.vertices.iter().all(|v| v.tex_coord.is_none())));
}

#[test]
fn square_with_bite() {
    init_logging();
    let o = outline(&[(0.0, 0.0, true), (1.0, 1.0, false), (2.0, 0.0, true), (2.0, 2.0, true), (0.0, 2.0, true)]);
    let (tris, _) = triangulate(&[o]);
    assert_eq!(count_kind(&tris, TriangleKind::ConcaveCurve), 1);
    assert_eq!(count_kind(&tris, TriangleKind::Interior), 3);
    assert_all_ccw(&tris);
    // The straight fill runs through the control point; the concave triangle
    // carves the bite back out at draw time.
    assert_area_approx(filled_area(&tris), 3.0, 1e-5, "bitten square");
    assert_eq!(tris[0].vertices[1].tex_coord, Some([0.5, -0.6]));
}

#[test]
fn ring_glyph_counts_and_area() {
    init_logging();
    for r in [1.0, 1.5] {
        let outer = rounded(4.0);
        let inner = rounded(r);
        let (tris, status) = triangulate(&[outer.clone(), inner.clone()]);
        assert_eq!(status, TessStatus::Ok, "r = {}", r);
        assert_eq!(count_kind(&tris, TriangleKind::ConvexCurve), 4);
        assert_eq!(count_kind(&tris, TriangleKind::ConcaveCurve), 4, "hole curves are concave");
        assert_eq!(count_kind(&tris, TriangleKind::Interior), 12);
        assert_all_ccw(&tris);
        let expected = control_area(&outer) - control_area(&inner);
        assert_area_approx(filled_area(&tris), expected, 1e-4, "ring glyph");
    }
}

#[test]
fn d_glyph_with_counter() {
    init_logging();
    let outer = outline(&[
        (0.0, 0.0, true),
        (2.0, 0.0, true),
        (4.0, 0.0, false),
        (4.0, 2.0, true),
        (4.0, 4.0, false),
        (2.0, 4.0, true),
        (0.0, 4.0, true),
    ]);
    let (tris, _) = triangulate(&[outer.clone()]);
    assert_eq!(tris.len(), 5);
    assert_area_approx(filled_area(&tris), 16.0, 1e-5, "D");

    let counter = outline(&[
        (1.0, 1.0, true),
        (2.0, 1.0, true),
        (2.75, 1.25, false),
        (2.75, 2.0, true),
        (2.75, 2.75, false),
        (2.0, 3.0, true),
        (1.0, 3.0, true),
    ]);
    let (tris, status) = triangulate(&[outer.clone(), counter.clone()]);
    assert_eq!(status, TessStatus::Ok);
    assert_eq!(count_kind(&tris, TriangleKind::ConvexCurve), 2);
    assert_eq!(count_kind(&tris, TriangleKind::ConcaveCurve), 2);
    assert_eq!(count_kind(&tris, TriangleKind::Interior), 12);
    assert_all_ccw(&tris);
    let expected = control_area(&outer) - control_area(&counter);
    assert_area_approx(filled_area(&tris), expected, 1e-4, "D with counter");
}

#[test]
fn consecutive_control_points_are_split() {
    init_logging();
    let mut shape = Shape::new();
    for &(x, y, on) in &[
        (0.0, 0.0, true),
        (1.0, -1.0, false),
        (3.0, -1.0, false),
        (4.0, 0.0, true),
        (4.0, 3.0, true),
        (0.0, 3.0, true),
    ] {
        shape.add_point(x, y, on);
    }
    shape.close_last_outline();
    let tris = shape.triangulate(0.5).unwrap();

    assert_eq!(count_kind(&tris, TriangleKind::ConvexCurve), 2, "one quadratic per control point");
    assert_eq!(count_kind(&tris, TriangleKind::Interior), 3);
    assert_all_ccw(&tris);
    assert_area_approx(filled_area(&tris), 15.0, 1e-5, "split curve");
    // The implied on-curve point joins both curves.
    assert_eq!(tris[0].vertices[2].coords, [2.0, -1.0, 0.0]);
    assert_eq!(tris[1].vertices[0].coords, [2.0, -1.0, 0.0]);
}

#[test]
fn sharpness_scales_apex_coordinate() {
    init_logging();
    let o = outline(&[(0.0, 0.0, true), (0.5, -1.0, false), (1.0, 0.0, true)]);
    let mut shape = shape_of(&[o]);
    let soft = shape.triangulate(0.0).unwrap();
    assert_eq!(soft[0].vertices[1].tex_coord, Some([0.5, 0.1]));
    let sharp = shape.triangulate(2.0).unwrap();
    assert_eq!(sharp[0].vertices[1].tex_coord, Some([0.5, 2.1]));
}
