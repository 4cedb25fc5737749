// Copyright 2025 Lars Brubaker
// License: MIT
//
// Outline model: vertices tagged on/off-curve and the ordered outline that
// holds them.

use crate::bbox::BoundingBox;
use crate::geom::{Real, Vec3};

/// Id carried by a vertex until `Shape::generate_vertex_ids` assigns one.
pub const UNASSIGNED_ID: u32 = u32::MAX;

#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
    pub coords: Vec3,
    /// False for the control point of a quadratic segment.
    pub on_curve: bool,
    /// Implicit-curve coordinates, set on boundary-triangle corners only.
    pub tex_coord: Option<[Real; 2]>,
    pub id: u32,
    /// Adjacent to (or itself) an off-curve point.
    pub boundary_contained: bool,
}

impl Vertex {
    pub fn new(x: Real, y: Real, on_curve: bool) -> Self {
        Self::new_3d(x, y, 0.0, on_curve)
    }

    pub fn new_3d(x: Real, y: Real, z: Real, on_curve: bool) -> Self {
        Vertex {
            coords: [x, y, z],
            on_curve,
            tex_coord: None,
            id: UNASSIGNED_ID,
            boundary_contained: false,
        }
    }

    #[inline]
    pub fn x(&self) -> Real {
        self.coords[0]
    }

    #[inline]
    pub fn y(&self) -> Real {
        self.coords[1]
    }

    #[inline]
    pub fn z(&self) -> Real {
        self.coords[2]
    }

    pub fn set_tex_coord(&mut self, s: Real, t: Real) {
        self.tex_coord = Some([s, t]);
    }
}

/// An ordered sequence of vertices. Closing does not insert a duplicate of the
/// first vertex; the last vertex implicitly connects back to the first.
#[derive(Clone, Debug, Default)]
pub struct Outline {
    vertices: Vec<Vertex>,
    closed: bool,
    bounds: BoundingBox,
}

impl Outline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vertices<I: IntoIterator<Item = Vertex>>(vertices: I) -> Self {
        let mut outline = Self::new();
        for v in vertices {
            outline.add_vertex(v);
        }
        outline
    }

    pub fn add_vertex(&mut self, v: Vertex) {
        self.bounds.resize(&v.coords);
        self.vertices.push(v);
    }

    /// Insert at `index`, shifting later vertices. Panics if `index > len`.
    pub fn insert_vertex(&mut self, index: usize, v: Vertex) {
        self.bounds.resize(&v.coords);
        self.vertices.insert(index, v);
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Mutable access for stages that annotate vertices (ids, flags); callers
    /// must not move coordinates or the cached bounds go stale.
    pub(crate) fn vertices_mut(&mut self) -> &mut [Vertex] {
        &mut self.vertices
    }

    pub fn last_vertex(&self) -> Option<&Vertex> {
        self.vertices.last()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Sort key: larger outlines are processed first so outer boundaries exist
    /// before their holes are classified.
    pub fn size(&self) -> Real {
        self.bounds.area()
    }
}
