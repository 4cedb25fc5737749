// outline-tess: quadratic outline to GPU triangle tessellation
// Copyright 2025 Lars Brubaker
// License: MIT

pub mod bbox;
pub mod boundary;
pub mod error;
pub mod geom;
pub mod mesh;
pub mod outline;
pub mod shape;
pub mod tess;
pub mod triangle;

pub use error::TessError;
pub use geom::{Real, Vec3, Winding};
pub use outline::{Outline, Vertex};
pub use shape::{CurveMode, Shape};
pub use tess::{TessOption, TessStatus, Triangulator, DEFAULT_SHARPNESS};
pub use triangle::{Triangle, TriangleKind};
