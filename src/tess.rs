// Copyright 2025 Lars Brubaker
// License: MIT
//
// The triangulator: classifies outlines as outer regions or holes, runs
// boundary expansion, builds one Loop per region and drives each Loop's ear
// cutting to exhaustion under the retry/abort policy.

use crate::boundary::extract_boundary_triangles;
use crate::error::TessError;
use crate::geom::{Real, Winding};
use crate::mesh::Loop;
use crate::outline::{Outline, Vertex};
use crate::triangle::Triangle;

// ─────────────────────────────── Public types ──────────────────────────────────

pub const DEFAULT_SHARPNESS: Real = 0.5;

const MAX_VALID_COORD: Real = (1u32 << 23) as Real;
const MIN_VALID_COORD: Real = -MAX_VALID_COORD;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TessOption {
    /// Prefer ears whose circumcircle holds no other ring vertex (default on).
    /// Plain ear tests do not look for enclosed vertices, so turning this off
    /// is only safe for outlines without holes.
    DelaunayCuts,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TessStatus {
    Ok,
    /// At least one loop hit the termination guard; output is partial.
    Incomplete,
}

// ─────────────────────────── Triangulator ──────────────────────────────────────

pub struct Triangulator {
    loops: Vec<Loop>,
    vertices: Vec<Vertex>,
    triangles: Vec<Triangle>,
    next_triangle_id: u32,
    sharpness: Real,
    delaunay: bool,
    status: TessStatus,
}

impl Triangulator {
    pub fn new() -> Self {
        Triangulator {
            loops: Vec::new(),
            vertices: Vec::new(),
            triangles: Vec::new(),
            next_triangle_id: 0,
            sharpness: DEFAULT_SHARPNESS,
            delaunay: true,
            status: TessStatus::Ok,
        }
    }

    /// Drop all loops, vertices and triangles so another shape can be processed.
    /// Options and sharpness are kept.
    pub fn reset(&mut self) {
        self.loops.clear();
        self.vertices.clear();
        self.triangles.clear();
        self.next_triangle_id = 0;
        self.status = TessStatus::Ok;
    }

    pub fn set_option(&mut self, option: TessOption, value: bool) {
        match option {
            TessOption::DelaunayCuts => self.delaunay = value,
        }
    }

    pub fn set_sharpness(&mut self, sharpness: Real) {
        self.sharpness = sharpness;
    }

    pub fn sharpness(&self) -> Real {
        self.sharpness
    }

    /// Add one outline of the shape.
    ///
    /// An outline with a vertex inside an existing loop is bridged into that
    /// loop as a hole; otherwise it starts a new outer region. Outlines must
    /// arrive largest first (see `Shape::sort_outlines`).
    pub fn add_curve(&mut self, outline: &Outline) -> Result<(), TessError> {
        if outline.is_empty() {
            return Ok(());
        }
        if outline.len() < 3 {
            return Err(TessError::TooFewVertices { count: outline.len() });
        }
        if let Some(index) = outline.vertices().iter().position(|v| !v.coords.iter().all(|c| is_valid_coord(*c))) {
            return Err(TessError::InvalidCoordinate { index });
        }

        let container = self.container_loop(outline);
        let expansion = extract_boundary_triangles(outline, container.is_some(), self.sharpness);
        for tri in expansion.triangles {
            self.push_triangle(tri);
        }

        match container {
            Some(idx) => {
                log::debug!("bridging {}-vertex hole into loop {}", expansion.inner.len(), idx);
                self.loops[idx].add_constraint_curve(&expansion.inner)?;
                self.vertices.extend(expansion.inner);
            }
            None => {
                if expansion.inner.len() < 3 {
                    log::debug!("outline fully covered by curve triangles, no loop needed");
                    return Ok(());
                }
                log::debug!("new outer region {} with {} vertices", self.loops.len(), expansion.inner.len());
                self.loops.push(Loop::new(&expansion.inner, Winding::Ccw)?);
                self.vertices.extend(expansion.inner);
            }
        }
        Ok(())
    }

    /// Cut every loop down to triangles and return everything produced so far
    /// (curve triangles first, then interior triangles loop by loop).
    ///
    /// The loops are consumed; calling this again without adding outlines
    /// returns the same triangles.
    pub fn generate_triangulation(&mut self) -> &[Triangle] {
        for (i, mut lp) in std::mem::take(&mut self.loops).into_iter().enumerate() {
            if !self.triangulate_loop(i, &mut lp) {
                self.status = TessStatus::Incomplete;
            }
        }
        &self.triangles
    }

    /// Returns false if the loop was abandoned before reaching its simplex.
    fn triangulate_loop(&mut self, i: usize, lp: &mut Loop) -> bool {
        let mut size = lp.loop_size();
        let mut tries = 0usize;
        let mut complete = true;
        log::debug!("triangulating loop {} ({} half-edges)", i, size);

        while !lp.is_simplex() {
            // Fall back to plain ear tests once a full lap found nothing.
            let delaunay = self.delaunay && tries <= size;
            let tri = lp.cut(delaunay, self.next_triangle_id);
            tries += 1;
            if let Some(tri) = tri {
                tries = 0;
                size -= 1;
                self.push_cut(tri);
            }
            if tries > size * 2 {
                log::warn!("loop {} triangulation incomplete: no valid ear among {} vertices", i, size);
                complete = false;
                break;
            }
        }

        if let Some(tri) = lp.cut(self.delaunay, self.next_triangle_id) {
            self.push_cut(tri);
        }
        complete
    }

    /// Record a triangle whose id was already handed to the loop.
    fn push_cut(&mut self, tri: Triangle) {
        log::trace!("{}", tri);
        self.next_triangle_id += 1;
        self.triangles.push(tri);
    }

    fn push_triangle(&mut self, mut tri: Triangle) {
        tri.id = self.next_triangle_id;
        self.push_cut(tri);
    }

    /// First loop containing any vertex of `outline`.
    fn container_loop(&self, outline: &Outline) -> Option<usize> {
        outline
            .vertices()
            .iter()
            .find_map(|v| self.loops.iter().position(|lp| lp.check_inside(&v.coords)))
    }

    // ─────── Accessors ────────────────────────────────────────────────────────

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles
    }

    /// Inner-polygon vertices of every outline that reached a loop, in the
    /// order outlines were added, carrying their boundary flags.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Loops waiting to be cut; zero after `generate_triangulation`.
    pub fn loop_count(&self) -> usize {
        self.loops.len()
    }

    pub fn status(&self) -> TessStatus {
        self.status
    }
}

impl Default for Triangulator {
    fn default() -> Self {
        Self::new()
    }
}

fn is_valid_coord(c: Real) -> bool {
    c <= MAX_VALID_COORD && c >= MIN_VALID_COORD && !c.is_nan()
}
