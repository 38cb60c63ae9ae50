//! Axis-aligned geometry for hit tests and arena bounds
//!
//! Every entity occupies a square of side `size` centered on its position.
//! Two containment policies exist and must not be mixed up:
//! - enemy hit tests use the open square (touching an edge is a miss)
//! - home uses the closed square (touching an edge counts)

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A square of side `size` centered on `center`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CenteredBox {
    pub center: Vec2,
    pub size: f32,
}

impl CenteredBox {
    pub fn new(center: Vec2, size: f32) -> Self {
        Self { center, size }
    }

    #[inline]
    pub fn half_extent(&self) -> f32 {
        self.size / 2.0
    }

    /// Top-left corner
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - Vec2::splat(self.half_extent())
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + Vec2::splat(self.half_extent())
    }

    /// Strict containment: points on the boundary are outside
    pub fn contains_open(&self, point: Vec2) -> bool {
        let (min, max) = (self.min(), self.max());
        min.x < point.x && point.x < max.x && min.y < point.y && point.y < max.y
    }

    /// Inclusive containment: points on the boundary are inside
    pub fn contains_closed(&self, point: Vec2) -> bool {
        let (min, max) = (self.min(), self.max());
        min.x <= point.x && point.x <= max.x && min.y <= point.y && point.y <= max.y
    }
}

/// The playing field, spanning `[0, width] x [0, height]` with y pointing down
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Pull a point back inside the arena
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        point.clamp(Vec2::ZERO, Vec2::new(self.width, self.height))
    }
}
