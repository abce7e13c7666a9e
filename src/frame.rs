//! Per-tick drawable output.
//!
//! A [`Frame`] is the ordered primitive list handed to the presentation
//! layer. Nothing here touches pixels; draw the primitives in order and later
//! ones cover earlier ones.

use serde::Serialize;

use crate::colors::Rgba;
use crate::math::vec2::Vec2;
use crate::mesh::{Edge, Triangle};

/// A single screen-space drawable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    /// Wireframe segment.
    Line { points: [Vec2; 2], color: Rgba },
    /// Flat-filled triangle. `face` is the triangle's declaration index.
    Polygon {
        points: [Vec2; 3],
        color: Rgba,
        face: usize,
    },
}

/// Ordered primitives for one tick, in pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub primitives: Vec<Primitive>,
}

impl Frame {
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Declaration indices of the polygons, in draw order.
    pub fn face_order(&self) -> Vec<usize> {
        self.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Polygon { face, .. } => Some(*face),
                Primitive::Line { .. } => None,
            })
            .collect()
    }

    /// Number of primitives with at least one NaN or infinite coordinate.
    pub fn degenerate_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| match p {
                Primitive::Line { points, .. } => points.iter().any(|v| !v.is_finite()),
                Primitive::Polygon { points, .. } => points.iter().any(|v| !v.is_finite()),
            })
            .count()
    }
}

/// Assembles a [`Frame`] from already-projected screen points.
pub struct FrameBuilder {
    width: u32,
    height: u32,
    primitives: Vec<Primitive>,
}

impl FrameBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            primitives: Vec::new(),
        }
    }

    /// One segment per edge, in edge order.
    pub fn wireframe(mut self, edges: &[Edge], screen: &[Vec2], color: Rgba) -> Self {
        self.primitives.reserve(edges.len());
        self.primitives.extend(edges.iter().map(|e| Primitive::Line {
            points: [screen[e.a], screen[e.b]],
            color,
        }));
        self
    }

    /// One polygon per triangle, emitted in `order` with its cached fill.
    pub fn filled(
        mut self,
        triangles: &[Triangle],
        order: &[usize],
        screen: &[Vec2],
        colors: &[Rgba],
    ) -> Self {
        self.primitives.reserve(order.len());
        self.primitives.extend(order.iter().map(|&face| {
            let t = &triangles[face];
            Primitive::Polygon {
                points: t.indices().map(|i| screen[i]),
                color: colors[face],
                face,
            }
        }));
        self
    }

    pub fn build(self) -> Frame {
        Frame {
            width: self.width,
            height: self.height,
            primitives: self.primitives,
        }
    }
}
