// Copyright 2025 Lars Brubaker
// License: MIT
//
// Half-edge loop used to walk and cut polygon rings.
//
// All links are u32 indices into Vec arenas owned by the Loop:
//   - INVALID: u32::MAX  (null link)
//   - edges[e].next / prev form a strict circular list (the active ring)
//   - edges[e].sibling pairs the two directions of an internal bridge
//   - edges[e].vert indexes verts; several half-edges may share one vertex,
//     and vertex identity (index), not coordinate equality, tells them apart.
//
// Ear cutting lives in mesh/cut.rs, hole bridging in mesh/bridge.rs.

mod bridge;
mod cut;

use crate::bbox::BoundingBox;
use crate::error::TessError;
use crate::geom::{winding, Vec3, Winding};
use crate::outline::Vertex;

pub const INVALID: u32 = u32::MAX;

/// Index into Loop::verts
pub type VertIdx = u32;
/// Index into Loop::edges
pub type EdgeIdx = u32;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EdgeType {
    /// Part of an outer boundary, walked in its input order.
    Boundary,
    /// Part of a boundary that was reversed to match the requested winding.
    Hole,
    /// Internal edge created by a cut or a bridge; not part of the visible outline.
    Inner,
}

#[derive(Clone, Debug)]
pub struct HEdge {
    /// Origin vertex.
    pub vert: VertIdx,
    pub next: EdgeIdx,
    pub prev: EdgeIdx,
    /// Opposite-direction partner of an internal edge.
    pub sibling: EdgeIdx,
    pub kind: EdgeType,
    /// Id of the triangle whose ear this edge rooted.
    pub triangle: Option<u32>,
}

impl HEdge {
    fn new(vert: VertIdx, kind: EdgeType) -> Self {
        HEdge {
            vert,
            next: INVALID,
            prev: INVALID,
            sibling: INVALID,
            kind,
            triangle: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GraphVertex {
    pub point: Vertex,
    /// Half-edges registered at construction. Traversal aid only.
    pub edges: Vec<EdgeIdx>,
    pub boundary_contained: bool,
}

/// One connected region: an outer ring plus any holes bridged into it.
pub struct Loop {
    pub verts: Vec<GraphVertex>,
    pub edges: Vec<HEdge>,
    root: EdgeIdx,
    bounds: BoundingBox,
    /// Vertices of the founding outline in ring order; bridge candidates.
    outline: Vec<VertIdx>,
}

impl Loop {
    /// Build a loop from an inner polygon, re-winding it to `direction` if needed.
    pub fn new(polygon: &[Vertex], direction: Winding) -> Result<Self, TessError> {
        let mut lp = Loop {
            verts: Vec::new(),
            edges: Vec::new(),
            root: INVALID,
            bounds: BoundingBox::new(),
            outline: Vec::new(),
        };
        let (root, outline) = lp.init_from_polyline(polygon, direction)?;
        lp.root = root;
        lp.outline = outline;
        Ok(lp)
    }

    /// Append a closed ring for `polygon` to the arenas and return its first
    /// half-edge plus the new vertex indices in ring order.
    ///
    /// When the polygon's winding disagrees with `direction` the ring is built
    /// from the reversed vertex list and its edges are tagged `Hole`.
    pub(crate) fn init_from_polyline(
        &mut self,
        polygon: &[Vertex],
        direction: Winding,
    ) -> Result<(EdgeIdx, Vec<VertIdx>), TessError> {
        if polygon.len() < 3 {
            return Err(TessError::TooFewVertices { count: polygon.len() });
        }

        let invert = winding(polygon.iter().map(|v| &v.coords)) != direction;
        let kind = if invert { EdgeType::Hole } else { EdgeType::Boundary };

        let first_vert = self.verts.len() as VertIdx;
        let vert_ids = (0..polygon.len() as u32).map(|i| first_vert + i);
        for v in polygon {
            self.bounds.resize(&v.coords);
            self.verts.push(GraphVertex {
                point: v.clone(),
                edges: Vec::new(),
                boundary_contained: v.boundary_contained,
            });
        }

        let order: Vec<VertIdx> = if invert {
            vert_ids.rev().collect()
        } else {
            vert_ids.collect()
        };

        let first_edge = self.edges.len() as EdgeIdx;
        let n = order.len() as u32;
        for (i, &v) in order.iter().enumerate() {
            let e = self.alloc_edge(v, kind);
            let i = i as u32;
            self.edges[e as usize].prev = first_edge + (i + n - 1) % n;
            self.edges[e as usize].next = first_edge + (i + 1) % n;
            self.verts[v as usize].edges.push(e);
        }

        Ok((first_edge, order))
    }

    fn alloc_edge(&mut self, vert: VertIdx, kind: EdgeType) -> EdgeIdx {
        let e = self.edges.len() as EdgeIdx;
        self.edges.push(HEdge::new(vert, kind));
        e
    }

    /// a.next = b, b.prev = a
    #[inline]
    fn connect(&mut self, a: EdgeIdx, b: EdgeIdx) {
        self.edges[a as usize].next = b;
        self.edges[b as usize].prev = a;
    }

    #[inline]
    fn make_siblings(&mut self, a: EdgeIdx, b: EdgeIdx) {
        self.edges[a as usize].sibling = b;
        self.edges[b as usize].sibling = a;
    }

    // ──────────────── Accessors ────────────────

    pub fn root(&self) -> EdgeIdx {
        self.root
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    pub fn edge(&self, e: EdgeIdx) -> &HEdge {
        &self.edges[e as usize]
    }

    pub fn vertex(&self, v: VertIdx) -> &GraphVertex {
        &self.verts[v as usize]
    }

    /// Coordinates at the origin of `e`.
    #[inline]
    pub fn coords(&self, e: EdgeIdx) -> &Vec3 {
        &self.verts[self.edges[e as usize].vert as usize].point.coords
    }

    /// Iterate the active ring starting at root.
    pub fn ring(&self) -> Ring<'_> {
        Ring {
            lp: self,
            start: self.root,
            cur: self.root,
            done: self.root == INVALID,
        }
    }

    /// Number of half-edges in the active ring.
    pub fn loop_size(&self) -> usize {
        self.ring().count()
    }

    /// Exactly three half-edges remain.
    pub fn is_simplex(&self) -> bool {
        let e1 = self.edges[self.root as usize].next;
        let e2 = self.edges[e1 as usize].next;
        self.edges[e2 as usize].next == self.root
    }

    /// First boundary (non-inner) half-edge leaving `v`.
    pub fn bound_edge(&self, v: VertIdx) -> Option<EdgeIdx> {
        self.verts[v as usize]
            .edges
            .iter()
            .copied()
            .find(|&e| self.edges[e as usize].kind != EdgeType::Inner)
    }

    /// Point-in-region test against the visible boundary of the ring.
    ///
    /// Casts a ray from `p` away from the loop's bounding-box center and counts
    /// crossings of `Boundary`/`Hole` edges; bridges are skipped. Odd means inside.
    pub fn check_inside(&self, p: &Vec3) -> bool {
        if !self.bounds.contains(p) {
            return false;
        }
        let c = self.bounds.center();
        let mut dir = [p[0] - c[0], p[1] - c[1], 0.0];
        if dir[0] == 0.0 && dir[1] == 0.0 {
            dir = [1.0, 0.0, 0.0];
        }

        let mut inside = false;
        for e in self.ring() {
            let edge = &self.edges[e as usize];
            if edge.kind == EdgeType::Inner {
                continue;
            }
            if crate::geom::ray_crosses_segment(p, &dir, self.coords(e), self.coords(edge.next)) {
                inside = !inside;
            }
        }
        inside
    }
}

/// Walks `next` links once around the ring.
pub struct Ring<'a> {
    lp: &'a Loop,
    start: EdgeIdx,
    cur: EdgeIdx,
    done: bool,
}

impl Iterator for Ring<'_> {
    type Item = EdgeIdx;

    fn next(&mut self) -> Option<EdgeIdx> {
        if self.done {
            return None;
        }
        let e = self.cur;
        self.cur = self.lp.edges[e as usize].next;
        self.done = self.cur == self.start;
        Some(e)
    }
}
