// Copyright 2025 Lars Brubaker
// WASM bindings for outline-tess

use outline_tess::{Shape, Triangle, TriangleKind, DEFAULT_SHARPNESS};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main_js() {
    console_error_panic_hook::set_once();
}

/// Builds a shape point by point, then triangulates it.
#[wasm_bindgen]
pub struct ShapeJs {
    shape: Shape,
    triangles: Vec<Triangle>,
    error: Option<String>,
}

#[wasm_bindgen]
impl ShapeJs {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ShapeJs {
        ShapeJs {
            shape: Shape::new(),
            triangles: Vec::new(),
            error: None,
        }
    }

    pub fn add_vertex(&mut self, x: f32, y: f32, on_curve: bool) {
        self.shape.add_point(x, y, on_curve);
    }

    /// Add a whole outline from flat [x0,y0,on0, x1,y1,on1, ...] triples;
    /// `on` is nonzero for on-curve points.
    pub fn add_outline(&mut self, points: &[f32]) {
        for p in points.chunks_exact(3) {
            self.shape.add_point(p[0], p[1], p[2] != 0.0);
        }
        self.shape.close_last_outline();
    }

    pub fn close_outline(&mut self) {
        self.shape.close_last_outline();
    }

    /// Triangulate; pass a negative sharpness for the default. Returns false on
    /// malformed input (see `error`).
    pub fn triangulate(&mut self, sharpness: f32) -> bool {
        let sharpness = if sharpness < 0.0 { DEFAULT_SHARPNESS } else { sharpness };
        match self.shape.triangulate(sharpness) {
            Ok(tris) => {
                self.triangles = tris;
                self.error = None;
                true
            }
            Err(e) => {
                self.triangles.clear();
                self.error = Some(e.to_string());
                false
            }
        }
    }

    pub fn error(&self) -> Option<String> {
        self.error.clone()
    }

    pub fn triangle_count(&self) -> u32 {
        self.triangles.len() as u32
    }

    /// Flat corner positions [x0,y0, x1,y1, x2,y2, ...], three corners per triangle.
    pub fn get_positions(&self) -> Vec<f32> {
        self.triangles
            .iter()
            .flat_map(|t| t.vertices.iter().flat_map(|v| [v.x(), v.y()]))
            .collect()
    }

    /// Flat curve coordinates [s0,t0, ...]; corners without one get (0, 0).
    pub fn get_tex_coords(&self) -> Vec<f32> {
        self.triangles
            .iter()
            .flat_map(|t| t.vertices.iter().flat_map(|v| v.tex_coord.unwrap_or([0.0, 0.0])))
            .collect()
    }

    /// Per-corner boundary flags, 1 when the corner touches a curve.
    pub fn get_boundary_flags(&self) -> Vec<u8> {
        self.triangles
            .iter()
            .flat_map(|t| t.boundary.iter().map(|&b| b as u8))
            .collect()
    }

    /// One entry per triangle: 0 = interior, 1 = convex curve, 2 = concave curve.
    pub fn get_kinds(&self) -> Vec<u8> {
        self.triangles
            .iter()
            .map(|t| match t.kind {
                TriangleKind::Interior => 0,
                TriangleKind::ConvexCurve => 1,
                TriangleKind::ConcaveCurve => 2,
            })
            .collect()
    }
}

impl Default for ShapeJs {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience: triangulate one closed outline of [x,y,on] triples and return
/// the flat corner positions.
#[wasm_bindgen]
pub fn triangulate_outline(points: &[f32], sharpness: f32) -> Vec<f32> {
    let mut s = ShapeJs::new();
    s.add_outline(points);
    if !s.triangulate(sharpness) {
        return Vec::new();
    }
    s.get_positions()
}
