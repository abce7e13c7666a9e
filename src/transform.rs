//! Object rotation and world-to-camera transforms.
//!
//! Every vertex goes through `rotateX(θx) → rotateY(θy) → rotateZ(θz)` and
//! then the camera-relative transform. The four steps are folded into one
//! matrix per tick: `view * Rz * Ry * Rx`.

use crate::camera::Camera;
use crate::config::CameraMode;
use crate::math::{mat4::Mat4, vec3::Vec3};

/// Object rotation angles around X, Y and Z (radians).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl RotationState {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Adds one tick's worth of spin.
    pub fn advance(&mut self, rate: Vec3) {
        self.x += rate.x;
        self.y += rate.y;
        self.z += rate.z;
    }

    /// Rotation matrix applying X first, then Y, then Z.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::rotation_z(self.z) * Mat4::rotation_y(self.y) * Mat4::rotation_x(self.x)
    }
}

/// World-to-camera matrix for the given mode.
///
/// `TranslateOnly` is the look-at transform with the direction pinned to +Z,
/// which reduces to subtracting the camera position.
pub fn view_matrix(camera: &Camera, mode: CameraMode) -> Mat4 {
    let direction = match mode {
        CameraMode::LookAt => camera.direction,
        CameraMode::TranslateOnly => Vec3::FORWARD,
    };
    Mat4::look_to(camera.position, direction, Vec3::UP)
}

/// Object-to-camera matrix for one tick.
pub fn model_view(rotation: &RotationState, camera: &Camera, mode: CameraMode) -> Mat4 {
    view_matrix(camera, mode) * rotation.to_matrix()
}

/// Transforms every vertex into camera space, preserving vertex order.
pub fn transform_vertices(vertices: &[Vec3], model_view: &Mat4) -> Vec<Vec3> {
    vertices
        .iter()
        .map(|&v| model_view.transform_point(v))
        .collect()
}
