// Copyright 2025 Lars Brubaker
// License: MIT

use std::fmt;

/// Hard failures. Degenerate input that merely stops ear cutting early is not an
/// error; see `TessStatus::Incomplete`.
#[derive(Clone, Debug, PartialEq)]
pub enum TessError {
    /// A loop needs at least three vertices.
    TooFewVertices { count: usize },
    /// Coordinate at vertex `index` is NaN or outside the representable range.
    InvalidCoordinate { index: usize },
    /// No outer/hole vertex pair was available to bridge a hole.
    NoBridge,
}

impl fmt::Display for TessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TessError::TooFewVertices { count } => {
                write!(f, "outline has {} vertices, at least 3 are required", count)
            }
            TessError::InvalidCoordinate { index } => {
                write!(f, "vertex {} has an invalid coordinate", index)
            }
            TessError::NoBridge => write!(f, "no vertex pair found to bridge hole into its outer loop"),
        }
    }
}

impl std::error::Error for TessError {}
