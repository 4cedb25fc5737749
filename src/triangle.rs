// Copyright 2025 Lars Brubaker
// License: MIT
//
// Output triangles handed to the rendering layer.

use std::fmt;

use crate::geom::{tri_area, Real};
use crate::outline::Vertex;

/// Where a triangle came from, which decides how the fragment stage treats it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriangleKind {
    /// Flat fill produced by ear cutting.
    Interior,
    /// Curve triangle whose curve region adds to the fill.
    ConvexCurve,
    /// Curve triangle whose curve region is carved out of the fill.
    ConcaveCurve,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    pub id: u32,
    pub vertices: [Vertex; 3],
    /// Per corner: does the corner touch a curved segment?
    pub boundary: [bool; 3],
    pub kind: TriangleKind,
}

impl Triangle {
    pub fn new(vertices: [Vertex; 3], boundary: [bool; 3], kind: TriangleKind) -> Self {
        Triangle {
            id: crate::outline::UNASSIGNED_ID,
            vertices,
            boundary,
            kind,
        }
    }

    pub fn signed_area(&self) -> Real {
        let [a, b, c] = &self.vertices;
        0.5 * tri_area(&a.coords, &b.coords, &c.coords)
    }

    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    pub fn is_curve(&self) -> bool {
        self.kind != TriangleKind::Interior
    }

    /// True when at least one corner lies on a curved boundary.
    pub fn needs_curve_test(&self) -> bool {
        self.boundary.iter().any(|b| *b)
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tri[{}] {:?}", self.id, self.kind)?;
        for (v, b) in self.vertices.iter().zip(self.boundary.iter()) {
            write!(f, " ({}, {}{})", v.x(), v.y(), if *b { ", b" } else { "" })?;
        }
        Ok(())
    }
}
