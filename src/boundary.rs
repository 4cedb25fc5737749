// Copyright 2025 Lars Brubaker
// License: MIT
//
// Boundary expansion: every off-curve vertex becomes a curve triangle
// (control point apex, neighbouring on-curve points as base) with texture
// coordinates for the fragment-stage implicit test. What remains is the
// straight-edged inner polygon that the loop ear-cuts.

use crate::geom::{ccw, Real};
use crate::outline::{Outline, Vertex};
use crate::triangle::{Triangle, TriangleKind};

/// Offset that keeps the curve texcoords away from the exact 0 line.
const CURVE_BIAS: Real = 0.1;

#[derive(Clone, Debug, Default)]
pub struct Expansion {
    /// The inner polygon, in outline order, carrying boundary flags.
    pub inner: Vec<Vertex>,
    /// One curve triangle per off-curve vertex, CCW, ids unassigned.
    pub triangles: Vec<Triangle>,
}

/// Split `outline` into curve triangles and its inner polygon.
///
/// `hole` forces the concave texcoord encoding for every curve and keeps every
/// control point in the inner polygon.
pub fn extract_boundary_triangles(outline: &Outline, hole: bool, sharpness: Real) -> Expansion {
    let verts = outline.vertices();
    let n = verts.len();
    let mut out = Expansion::default();
    if n == 0 {
        return out;
    }

    let contained: Vec<bool> = (0..n)
        .map(|i| !verts[(i + n - 1) % n].on_curve || !verts[i].on_curve || !verts[(i + 1) % n].on_curve)
        .collect();
    let flagged = |i: usize| {
        let mut v = verts[i].clone();
        v.boundary_contained = contained[i];
        v
    };

    for i in 0..n {
        if verts[i].on_curve {
            out.inner.push(flagged(i));
            continue;
        }

        let (i0, i2) = ((i + n - 1) % n, (i + 1) % n);
        let mut v0 = flagged(i0);
        let mut v1 = flagged(i);
        let mut v2 = flagged(i2);

        let hole_like = !ccw(&v0.coords, &v1.coords, &v2.coords);
        let concave = hole || hole_like;
        if concave {
            v0.set_tex_coord(0.0, -CURVE_BIAS);
            v2.set_tex_coord(1.0, -CURVE_BIAS);
            v1.set_tex_coord(0.5, -sharpness - CURVE_BIAS);
            // The apex bounds the remaining fill, so it stays in the polygon.
            out.inner.push(flagged(i));
        } else {
            v0.set_tex_coord(0.0, CURVE_BIAS);
            v2.set_tex_coord(1.0, CURVE_BIAS);
            v1.set_tex_coord(0.5, sharpness + CURVE_BIAS);
        }

        let kind = if concave { TriangleKind::ConcaveCurve } else { TriangleKind::ConvexCurve };
        let corners = if hole_like { [v2, v1, v0] } else { [v0, v1, v2] };
        out.triangles.push(Triangle::new(corners, [true; 3], kind));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outline(points: &[(Real, Real, bool)]) -> Outline {
        Outline::from_vertices(points.iter().map(|&(x, y, on)| Vertex::new(x, y, on)))
    }

    #[test]
    fn straight_outline_passes_through() {
        let o = outline(&[(0.0, 0.0, true), (1.0, 0.0, true), (1.0, 1.0, true)]);
        let e = extract_boundary_triangles(&o, false, 0.5);
        assert!(e.triangles.is_empty());
        assert_eq!(e.inner.len(), 3);
        assert!(e.inner.iter().all(|v| !v.boundary_contained && v.tex_coord.is_none()));
    }

    #[test]
    fn convex_curve_drops_apex() {
        let o = outline(&[(0.0, 0.0, true), (0.5, -1.0, false), (1.0, 0.0, true)]);
        let e = extract_boundary_triangles(&o, false, 0.5);
        assert_eq!(e.triangles.len(), 1);
        assert_eq!(e.inner.len(), 2);
        let t = &e.triangles[0];
        assert_eq!(t.kind, TriangleKind::ConvexCurve);
        assert!(t.is_ccw());
        assert_eq!(t.boundary, [true; 3]);
        assert_eq!(t.vertices[0].tex_coord, Some([0.0, 0.1]));
        assert_eq!(t.vertices[1].tex_coord, Some([0.5, 0.6]));
        assert_eq!(t.vertices[2].tex_coord, Some([1.0, 0.1]));
    }

    #[test]
    fn concave_curve_keeps_apex_and_reorients() {
        let o = outline(&[(0.0, 0.0, true), (0.5, 1.0, false), (1.0, 0.0, true)]);
        let e = extract_boundary_triangles(&o, false, 0.5);
        assert_eq!(e.inner.len(), 3);
        let t = &e.triangles[0];
        assert_eq!(t.kind, TriangleKind::ConcaveCurve);
        assert!(t.is_ccw(), "hole-like curve triangle must be re-wound");
        // corners swapped: (v2, v1, v0)
        assert_eq!(t.vertices[0].x(), 1.0);
        assert_eq!(t.vertices[0].tex_coord, Some([1.0, -0.1]));
        assert_eq!(t.vertices[1].tex_coord, Some([0.5, -0.6]));
        assert_eq!(t.vertices[2].tex_coord, Some([0.0, -0.1]));
        assert!(e.inner[1].tex_coord.is_none(), "inner polygon keeps the untextured apex");
    }

    #[test]
    fn hole_outline_uses_concave_encoding() {
        let o = outline(&[(0.0, 0.0, true), (0.5, -1.0, false), (1.0, 0.0, true)]);
        let e = extract_boundary_triangles(&o, true, 0.25);
        assert_eq!(e.inner.len(), 3);
        let t = &e.triangles[0];
        assert_eq!(t.kind, TriangleKind::ConcaveCurve);
        assert_eq!(t.vertices[1].tex_coord, Some([0.5, -0.35]));
    }

    #[test]
    fn neighbours_of_curves_are_flagged() {
        let o = outline(&[
            (0.0, 0.0, true),
            (1.0, -1.0, false),
            (2.0, 0.0, true),
            (2.0, 2.0, true),
            (0.0, 2.0, true),
        ]);
        let e = extract_boundary_triangles(&o, false, 0.5);
        let flags: Vec<bool> = e.inner.iter().map(|v| v.boundary_contained).collect();
        assert_eq!(flags, vec![true, true, false, false]);
    }
}
