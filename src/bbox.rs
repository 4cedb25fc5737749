// Copyright 2025 Lars Brubaker
// License: MIT
//
// Axis-aligned bounding box shared by outlines and loops.

use crate::geom::{Real, Vec3};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    /// An empty box: `min` > `max` until the first `resize`.
    pub fn new() -> Self {
        BoundingBox {
            min: [Real::MAX; 3],
            max: [-Real::MAX; 3],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min[0] > self.max[0]
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Grow the box to include `p`.
    pub fn resize(&mut self, p: &Vec3) {
        for i in 0..3 {
            self.min[i] = self.min[i].min(p[i]);
            self.max[i] = self.max[i].max(p[i]);
        }
    }

    /// Inclusive containment test on all three axes.
    pub fn contains(&self, p: &Vec3) -> bool {
        (0..3).all(|i| p[i] >= self.min[i] && p[i] <= self.max[i])
    }

    pub fn center(&self) -> Vec3 {
        [
            (self.min[0] + self.max[0]) * 0.5,
            (self.min[1] + self.max[1]) * 0.5,
            (self.min[2] + self.max[2]) * 0.5,
        ]
    }

    pub fn width(&self) -> Real {
        self.extent(0)
    }

    pub fn height(&self) -> Real {
        self.extent(1)
    }

    pub fn depth(&self) -> Real {
        self.extent(2)
    }

    /// Planar (x, y) area. Outlines are ordered by this value.
    pub fn area(&self) -> Real {
        self.width() * self.height()
    }

    fn extent(&self, axis: usize) -> Real {
        if self.is_empty() {
            0.0
        } else {
            self.max[axis] - self.min[axis]
        }
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new()
    }
}
