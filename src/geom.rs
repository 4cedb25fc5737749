// Copyright 2025 Lars Brubaker
// License: MIT
//
// Geometry kernel: vector algebra and the orientation / in-circle predicates
// that drive every ear-cutting and bridging decision.
//
// All predicates work on the (x, y) components only. No epsilon is applied:
// degenerate (zero) results always classify as "not ccw" / "not inside".

pub type Real = f32;

/// A point or direction in 2D/3D space. 2D data carries z = 0.
pub type Vec3 = [Real; 3];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Winding {
    Cw,
    Ccw,
}

#[inline]
pub fn add(a: &Vec3, b: &Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
pub fn sub(a: &Vec3, b: &Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
pub fn scale(v: &Vec3, s: Real) -> Vec3 {
    [v[0] * s, v[1] * s, v[2] * s]
}

#[inline]
pub fn dot(a: &Vec3, b: &Vec3) -> Real {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
pub fn cross(a: &Vec3, b: &Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline]
pub fn length(v: &Vec3) -> Real {
    dot(v, v).sqrt()
}

/// Unit vector in the direction of `v`. The zero vector is returned unchanged.
pub fn normalize(v: &Vec3) -> Vec3 {
    let len = length(v);
    if len == 0.0 {
        *v
    } else {
        scale(v, 1.0 / len)
    }
}

#[inline]
pub fn distance(a: &Vec3, b: &Vec3) -> Real {
    length(&sub(a, b))
}

#[inline]
pub fn mid(a: &Vec3, b: &Vec3) -> Vec3 {
    scale(&add(a, b), 0.5)
}

/// Twice the signed area of triangle (a, b, c); positive when CCW.
#[inline]
pub fn tri_area(a: &Vec3, b: &Vec3, c: &Vec3) -> Real {
    (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0])
}

/// Returns true if (a, b, c) turn strictly counter-clockwise.
#[inline]
pub fn ccw(a: &Vec3, b: &Vec3, c: &Vec3) -> bool {
    tri_area(a, b, c) > 0.0
}

#[inline]
pub fn is_collinear(a: &Vec3, b: &Vec3, c: &Vec3) -> bool {
    tri_area(a, b, c) == 0.0
}

/// Returns true if `d` lies strictly inside the circle through a, b, c.
/// a, b, c must be CCW; reversing their orientation negates the answer.
/// Cocircular points are never inside.
pub fn in_circle(a: &Vec3, b: &Vec3, c: &Vec3, d: &Vec3) -> bool {
    let sq = |p: &Vec3| p[0] * p[0] + p[1] * p[1];
    sq(a) * tri_area(b, c, d) - sq(b) * tri_area(a, c, d) + sq(c) * tri_area(a, b, d)
        - sq(d) * tri_area(a, b, c)
        > 0.0
}

/// Signed area of a closed polygon (shoelace); positive when CCW.
pub fn polygon_area<'a, I>(points: I) -> Real
where
    I: IntoIterator<Item = &'a Vec3>,
    I::IntoIter: Clone,
{
    let iter = points.into_iter();
    let mut next = iter.clone().cycle().skip(1);
    let mut area = 0.0;
    for p in iter {
        // `cycle` only yields None for an empty sequence, which never reaches here.
        if let Some(q) = next.next() {
            area += p[0] * q[1] - q[0] * p[1];
        }
    }
    area * 0.5
}

/// Winding of a closed polygon. Zero-area polygons report `Cw`.
pub fn winding<'a, I>(points: I) -> Winding
where
    I: IntoIterator<Item = &'a Vec3>,
    I::IntoIter: Clone,
{
    if polygon_area(points) > 0.0 {
        Winding::Ccw
    } else {
        Winding::Cw
    }
}

#[inline]
fn perp_dot(u: &Vec3, v: &Vec3) -> Real {
    u[0] * v[1] - u[1] * v[0]
}

/// Does the ray `origin + t * dir` (t > 0) cross segment [a, b]?
///
/// Endpoints are treated half-open: an endpoint exactly on the ray's line counts
/// as lying on the negative side, so a ray through a shared vertex is counted
/// once per boundary crossing.
pub fn ray_crosses_segment(origin: &Vec3, dir: &Vec3, a: &Vec3, b: &Vec3) -> bool {
    let da = perp_dot(dir, &sub(a, origin));
    let db = perp_dot(dir, &sub(b, origin));
    if (da > 0.0) == (db > 0.0) {
        return false;
    }
    // da != db here, so the denominator is never zero.
    let t = perp_dot(&sub(a, origin), &sub(b, a)) / (db - da);
    t > 0.0
}
