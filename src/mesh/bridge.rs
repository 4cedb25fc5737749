// Copyright 2025 Lars Brubaker
// Hole bridging for Loop.

use super::{EdgeIdx, EdgeType, Loop, VertIdx};
use crate::error::TessError;
use crate::geom::{distance, in_circle, Real, Winding};
use crate::outline::Vertex;

impl Loop {
    /// Splice a hole polygon into this loop.
    ///
    /// The hole becomes a CW sub-ring; a pair of sibling `Inner` half-edges then
    /// joins it to the outer ring at the closest valid vertex pair, leaving one
    /// ring that cutting consumes uniformly.
    pub fn add_constraint_curve(&mut self, polygon: &[Vertex]) -> Result<(), TessError> {
        let (_, hole) = self.init_from_polyline(polygon, Winding::Cw)?;

        let (outer_edge, hole_vert) = self.locate_closest_vertex(&hole).ok_or(TessError::NoBridge)?;
        self.root = outer_edge;
        let v3_edge = self.bound_edge(hole_vert).ok_or(TessError::NoBridge)?;
        let v3_edge_prev = self.edges[v3_edge as usize].prev;
        let root = self.root;
        let root_prev = self.edges[root as usize].prev;

        let cross = self.alloc_edge(self.edges[root as usize].vert, EdgeType::Inner);
        self.connect(root_prev, cross);
        self.connect(cross, v3_edge);

        let cross_sib = self.alloc_edge(hole_vert, EdgeType::Inner);
        self.make_siblings(cross, cross_sib);
        self.connect(v3_edge_prev, cross_sib);
        self.connect(cross_sib, root);
        Ok(())
    }

    /// Closest (outer bound edge, hole vertex) pair.
    ///
    /// Each founding-outline edge (v, v.next), taken in ring order so the pair
    /// runs counter-clockwise, is paired with every hole vertex;
    /// a pair is disqualified when another hole vertex lies inside the circle
    /// through v, v.next and the candidate. If every pair is disqualified the
    /// plain nearest pair is used.
    fn locate_closest_vertex(&self, hole: &[VertIdx]) -> Option<(EdgeIdx, VertIdx)> {
        let n = self.outline.len();
        let pos = |v: VertIdx| &self.verts[v as usize].point.coords;

        let mut best: Option<(EdgeIdx, VertIdx)> = None;
        let mut best_dist = Real::MAX;
        let mut nearest: Option<(EdgeIdx, VertIdx)> = None;
        let mut nearest_dist = Real::MAX;

        for i in 0..n {
            let v = self.outline[i];
            let next_v = self.outline[(i + 1) % n];
            let Some(edge) = self.bound_edge(v) else {
                continue;
            };
            for &cand in hole {
                let d = distance(pos(v), pos(cand));
                if d < nearest_dist {
                    nearest = Some((edge, cand));
                    nearest_dist = d;
                }
                if d >= best_dist {
                    continue;
                }
                let blocked = hole.iter().any(|&w| {
                    w != v && w != next_v && w != cand && in_circle(pos(v), pos(next_v), pos(cand), pos(w))
                });
                if !blocked {
                    best = Some((edge, cand));
                    best_dist = d;
                }
            }
        }

        if best.is_none() && nearest.is_some() {
            log::debug!("every bridge candidate blocked by in-circle filter, using nearest pair");
        }
        best.or(nearest)
    }
}
