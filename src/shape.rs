// Copyright 2025 Lars Brubaker
// License: MIT
//
// A shape is the ordered set of outlines (outer boundaries and holes) of one
// glyph or vector path, plus the passes that prepare it for the triangulator.

use crate::bbox::BoundingBox;
use crate::error::TessError;
use crate::geom::{mid, Real};
use crate::outline::{Outline, Vertex};
use crate::tess::Triangulator;
use crate::triangle::Triangle;

/// Curve representation the outlines are normalized to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CurveMode {
    /// Every off-curve point sits between two on-curve points.
    QuadraticNurbs,
}

#[derive(Clone, Debug)]
pub struct Shape {
    outlines: Vec<Outline>,
    /// Mode of the last `transform_outlines`; cleared by any later edit.
    curve_mode: Option<CurveMode>,
}

impl Shape {
    pub fn new() -> Self {
        Shape {
            outlines: vec![Outline::new()],
            curve_mode: None,
        }
    }

    /// Append to the open outline, starting a new one if the last is closed.
    pub fn add_vertex(&mut self, v: Vertex) {
        self.curve_mode = None;
        self.open_outline_mut().add_vertex(v);
    }

    pub fn add_point(&mut self, x: Real, y: Real, on_curve: bool) {
        self.add_vertex(Vertex::new(x, y, on_curve));
    }

    pub fn close_last_outline(&mut self) {
        if let Some(last) = self.outlines.last_mut() {
            last.set_closed(true);
        }
    }

    /// Start a new open outline unless the last one is still empty.
    pub fn add_empty_outline(&mut self) {
        if self.outlines.last().map_or(true, |o| !o.is_empty()) {
            self.outlines.push(Outline::new());
        }
    }

    /// Add a finished outline. An empty `outline` is ignored; an empty open
    /// last outline is replaced rather than kept.
    pub fn add_outline(&mut self, outline: Outline) {
        if outline.is_empty() {
            return;
        }
        self.curve_mode = None;
        match self.outlines.last_mut() {
            Some(last) if last.is_empty() => *last = outline,
            _ => self.outlines.push(outline),
        }
    }

    pub fn outlines(&self) -> &[Outline] {
        &self.outlines
    }

    pub fn last_outline(&self) -> Option<&Outline> {
        self.outlines.last()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.outlines.iter().flat_map(|o| o.vertices().iter())
    }

    pub fn bounds(&self) -> BoundingBox {
        let mut bb = BoundingBox::new();
        for v in self.vertices() {
            bb.resize(&v.coords);
        }
        bb
    }

    /// Order outlines by bounding-box area, largest first, so outer boundaries
    /// are registered before the holes they contain. Ties keep input order.
    pub fn sort_outlines(&mut self) {
        self.outlines.sort_by(|a, b| b.size().total_cmp(&a.size()));
    }

    /// Give every vertex a dense id in outline order. Returns the count.
    pub fn generate_vertex_ids(&mut self) -> u32 {
        let mut next = 0u32;
        for outline in &mut self.outlines {
            for v in outline.vertices_mut() {
                v.id = next;
                next += 1;
            }
        }
        next
    }

    /// Normalize every outline to `mode`. Repeated calls without edits in
    /// between do nothing.
    pub fn transform_outlines(&mut self, mode: CurveMode) {
        if self.curve_mode == Some(mode) {
            return;
        }
        match mode {
            CurveMode::QuadraticNurbs => {
                for outline in &mut self.outlines {
                    insert_implied_on_curve(outline);
                }
            }
        }
        self.curve_mode = Some(mode);
    }

    /// Normalize, sort and number the outlines, then triangulate them with a
    /// fresh `Triangulator`.
    pub fn triangulate(&mut self, sharpness: Real) -> Result<Vec<Triangle>, TessError> {
        self.transform_outlines(CurveMode::QuadraticNurbs);
        self.sort_outlines();
        let count = self.generate_vertex_ids();
        log::debug!("triangulating shape: {} outlines, {} vertices", self.outlines.len(), count);

        let mut tess = Triangulator::new();
        tess.set_sharpness(sharpness);
        for outline in &self.outlines {
            tess.add_curve(outline)?;
        }
        tess.generate_triangulation();
        Ok(tess.into_triangles())
    }

    fn open_outline_mut(&mut self) -> &mut Outline {
        if self.outlines.last().map_or(true, |o| o.is_closed()) {
            self.outlines.push(Outline::new());
        }
        let last = self.outlines.len() - 1;
        &mut self.outlines[last]
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self::new()
    }
}

/// Split each run of two off-curve points with an on-curve midpoint, the
/// closing pair (last, first) included.
fn insert_implied_on_curve(outline: &mut Outline) {
    if outline.len() < 2 {
        return;
    }
    let mut i = 0;
    while i < outline.len() {
        let n = outline.len();
        let (a, b) = (&outline.vertices()[i], &outline.vertices()[(i + 1) % n]);
        if !a.on_curve && !b.on_curve {
            let m = mid(&a.coords, &b.coords);
            outline.insert_vertex(i + 1, Vertex::new_3d(m[0], m[1], m[2], true));
            i += 2;
        } else {
            i += 1;
        }
    }
}
