//! Flat shading from a single directional light.

use crate::colors::Rgba;
use crate::math::vec3::Vec3;
use crate::mesh::Triangle;

/// A directional light that illuminates the scene uniformly from a direction.
///
/// The light is infinitely far away; all rays are parallel to `direction`.
/// Shading maps `dot(direction, normal)` onto a gray ramp:
/// `channel = clamp(base - dot * scale, 0, 255)`. A face whose normal points
/// back at the light (anti-parallel to `direction`) is brightest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// The normalized direction the light is pointing (not where it comes from).
    pub direction: Vec3,
    pub base: f64,
    pub scale: f64,
}

impl DirectionalLight {
    /// Create a new directional light pointing in the given direction.
    /// The direction will be normalized automatically.
    pub fn new(direction: Vec3, base: f64, scale: f64) -> Self {
        DirectionalLight {
            direction: direction.normalize(),
            base,
            scale,
        }
    }

    /// Cosine between the light direction and a unit normal.
    pub fn brightness(&self, normal: Vec3) -> f64 {
        self.direction.dot(normal)
    }

    /// 8-bit channel value for a unit normal.
    ///
    /// NaN (from a degenerate triangle) saturates to 0 in the `as u8` cast.
    pub fn channel(&self, normal: Vec3) -> u8 {
        (self.base - self.brightness(normal) * self.scale)
            .clamp(0.0, 255.0)
            .round() as u8
    }

    /// Flat gray fill for a unit normal.
    pub fn shade(&self, normal: Vec3) -> Rgba {
        Rgba::gray(self.channel(normal))
    }
}

/// Unit face normal `normalize((b - a) × (c - a))` in the given vertex space.
///
/// A degenerate (zero-area) triangle yields NaN components.
pub fn face_normal(triangle: &Triangle, vertices: &[Vec3]) -> Vec3 {
    let [a, b, c] = triangle.indices().map(|i| vertices[i]);
    (b - a).cross(c - a).normalize()
}
