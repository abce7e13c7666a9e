//! Painter's-algorithm triangle ordering.
//!
//! Triangles are drawn back to front by the mean camera-space z of their three
//! vertices. This approximates hidden-surface removal only: cyclic overlap and
//! interpenetrating triangles cannot be ordered correctly by a single depth
//! key, and no attempt is made to split them.

use crate::math::vec3::Vec3;
use crate::mesh::Triangle;

/// Mean camera-space z of the triangle's three vertices.
#[inline]
pub fn average_depth(triangle: &Triangle, view_vertices: &[Vec3]) -> f64 {
    let [a, b, c] = triangle.indices().map(|i| view_vertices[i].z);
    (a + b + c) / 3.0
}

/// Triangle indices ordered farthest first.
///
/// The sort is stable and always starts from declaration order, so
/// triangles at exactly equal depth keep their file order on every tick.
/// NaN depths sort deterministically via `f64::total_cmp`.
pub fn painter_order(triangles: &[Triangle], view_vertices: &[Vec3]) -> Vec<usize> {
    let depths: Vec<f64> = triangles
        .iter()
        .map(|t| average_depth(t, view_vertices))
        .collect();

    let mut order: Vec<usize> = (0..triangles.len()).collect();
    // Descending: compare b against a.
    order.sort_by(|&a, &b| depths[b].total_cmp(&depths[a]));
    order
}
