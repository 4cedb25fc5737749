// Copyright 2025 Lars Brubaker
// Ear cutting for Loop.

use super::{EdgeIdx, EdgeType, Loop};
use crate::geom::{ccw, in_circle};
use crate::triangle::{Triangle, TriangleKind};

impl Loop {
    /// Try to cut the ear (root, root.next, root.next.next).
    ///
    /// With `delaunay` set the ear is also rejected when any other ring vertex
    /// lies inside its circumcircle. On rejection root advances one edge and
    /// `None` is returned. A simplex is always cut.
    pub fn cut(&mut self, delaunay: bool, id: u32) -> Option<Triangle> {
        if self.is_simplex() {
            return Some(self.emit_triangle(self.root, id));
        }

        let root = self.root;
        let prev = self.edges[root as usize].prev;
        let next1 = self.edges[root as usize].next;

        let next2 = match self.find_valid_neighbor(self.edges[next1 as usize].next, delaunay) {
            Some(e) => e,
            None => {
                self.root = next1;
                return None;
            }
        };

        // Close the ear into its own ring: root -> next1 -> v3_edge -> root.
        let v3_edge = self.alloc_edge(self.edges[next2 as usize].vert, EdgeType::Inner);
        self.connect(v3_edge, root);
        self.connect(next1, v3_edge);

        // Its sibling takes the ear's place in the remaining ring.
        let mut sib = self.edges[v3_edge as usize].sibling;
        if sib == super::INVALID {
            sib = self.alloc_edge(self.edges[root as usize].vert, EdgeType::Inner);
            self.make_siblings(v3_edge, sib);
        }
        self.connect(prev, sib);
        self.connect(sib, next2);

        let tri = self.emit_triangle(root, id);
        self.root = next2;
        Some(tri)
    }

    /// `cand` closes a valid ear with root and root.next, or `None`.
    fn find_valid_neighbor(&self, cand: EdgeIdx, delaunay: bool) -> Option<EdgeIdx> {
        let root = self.root;
        let next = self.edges[root as usize].next;
        let (a, b, c) = (self.coords(root), self.coords(next), self.coords(cand));
        if !ccw(a, b, c) {
            return None;
        }
        if !delaunay {
            return Some(cand);
        }

        let corners = [
            self.edges[root as usize].vert,
            self.edges[next as usize].vert,
            self.edges[cand as usize].vert,
        ];
        let mut e = self.edges[cand as usize].next;
        while e != cand {
            if !corners.contains(&self.edges[e as usize].vert) && in_circle(a, b, c, self.coords(e)) {
                return None;
            }
            e = self.edges[e as usize].next;
        }
        Some(cand)
    }

    /// Triangle (e, e.next, e.next.next) with boundary flags from its corners.
    fn emit_triangle(&mut self, e: EdgeIdx, id: u32) -> Triangle {
        let e1 = self.edges[e as usize].next;
        let e2 = self.edges[e1 as usize].next;
        let corner = |edge: EdgeIdx| &self.verts[self.edges[edge as usize].vert as usize];
        let (g0, g1, g2) = (corner(e), corner(e1), corner(e2));

        let mut tri = Triangle::new(
            [g0.point.clone(), g1.point.clone(), g2.point.clone()],
            [g0.boundary_contained, g1.boundary_contained, g2.boundary_contained],
            TriangleKind::Interior,
        );
        tri.id = id;
        self.edges[e as usize].triangle = Some(id);
        tri
    }
}
