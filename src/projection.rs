//! Perspective projection and screen mapping.
//!
//! Camera-space points are perspective-divided with a fixed focal length into
//! normalized device coordinates, then stretched to pixel space.
//!
//! The divide is `f / (f + z)` and is deliberately unguarded: a point at
//! `z == -f` projects to infinity and points behind it flip through the
//! origin. There is no near-plane clipping.

use crate::math::{vec2::Vec2, vec3::Vec3};

/// Perspective projector with a fixed focal length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    focal: f64,
}

impl Default for Projector {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Projector {
    pub fn new(focal: f64) -> Self {
        Self { focal }
    }

    /// Projects a camera-space point to NDC: `(x, y) * f / (f + z)`.
    #[inline]
    pub fn project(&self, p: Vec3) -> Vec2 {
        let scale = self.focal / (self.focal + p.z);
        Vec2::new(p.x * scale, p.y * scale)
    }

    /// Maps NDC in `[-1, 1]` to pixels in `[0, width] x [0, height]`.
    #[inline]
    pub fn to_screen(ndc: Vec2, width: u32, height: u32) -> Vec2 {
        Vec2::new(
            (ndc.x + 1.0) * width as f64 / 2.0,
            (ndc.y + 1.0) * height as f64 / 2.0,
        )
    }

    /// Projects every camera-space point straight to pixel space.
    pub fn project_all(&self, points: &[Vec3], width: u32, height: u32) -> Vec<Vec2> {
        points
            .iter()
            .map(|&p| Self::to_screen(self.project(p), width, height))
            .collect()
    }
}
