//! Axis-aligned box geometry
//!
//! Everything in the game is either a point or a square centered on a point,
//! so the whole collision model reduces to two box tests that differ only in
//! how they treat the edges.

use glam::{BVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Inclusive box test: is `point` inside the square of side `size` centered on `center`?
///
/// Points exactly on an edge count as inside.
#[inline]
pub fn square_contains(center: Vec2, size: f32, point: Vec2) -> bool {
    let half = size / 2.0;
    (center.x - half..=center.x + half).contains(&point.x)
        && (center.y - half..=center.y + half).contains(&point.y)
}

/// Strict box test: points exactly on an edge do not count.
#[inline]
pub fn square_overlaps_point(center: Vec2, size: f32, point: Vec2) -> bool {
    let half = size / 2.0;
    center.x - half < point.x
        && point.x < center.x + half
        && center.y - half < point.y
        && point.y < center.y + half
}

/// The playfield rectangle `[0, width] x [0, height]`
///
/// Nothing is clamped to it; movement policies only consult it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Per-axis: is the coordinate outside `[0, extent]`?
    pub fn outside(&self, pos: Vec2) -> BVec2 {
        BVec2::new(
            pos.x < 0.0 || pos.x > self.width,
            pos.y < 0.0 || pos.y > self.height,
        )
    }

    /// Inside `[0, W] × [0, H]`, edges included
    pub fn contains(&self, pos: Vec2) -> bool {
        !self.outside(pos).any()
    }

    /// Is something at `pos` outside the world and still moving away from it?
    pub fn escaping(&self, pos: Vec2, velocity: Vec2) -> bool {
        let out = self.outside(pos);
        let away = |p: f32, v: f32, extent: f32| (p < 0.0 && v < 0.0) || (p > extent && v > 0.0);
        (out.x && away(pos.x, velocity.x, self.width)) || (out.y && away(pos.y, velocity.y, self.height))
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};
        Self::new(WORLD_WIDTH as f32, WORLD_HEIGHT as f32)
    }
}
