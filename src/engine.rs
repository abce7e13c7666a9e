//! Core rendering engine.
//!
//! The [`Engine`] owns everything that is fixed for a scene: the mesh, its
//! configuration, and the per-triangle shade colors. Everything that changes
//! between ticks (camera pose and rotation angles) lives in a caller-owned
//! [`SimulationState`] passed in by reference. Access is serialized by
//! `&mut`; the engine itself has no interior mutability.
//!
//! One tick runs: transform → project → painter sort (filled mode only) →
//! frame assembly, then advances the spin angles.

use crate::camera::{Camera, CameraController, Command};
use crate::colors::Rgba;
use crate::config::{RenderMode, SceneConfig};
use crate::frame::{Frame, FrameBuilder};
use crate::light::{face_normal, DirectionalLight};
use crate::mesh::Mesh;
use crate::projection::Projector;
use crate::sorting::painter_order;
use crate::transform::{model_view, transform_vertices, RotationState};

/// Mutable per-scene state threaded through every engine call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationState {
    pub camera: Camera,
    pub rotation: RotationState,
}

pub struct Engine {
    mesh: Mesh,
    config: SceneConfig,
    projector: Projector,
    controller: CameraController,
    /// Flat fill per triangle. Shading uses object-space normals, so it
    /// never changes after load.
    face_colors: Vec<Rgba>,
}

impl Engine {
    pub fn new(mesh: Mesh, config: SceneConfig) -> Self {
        let light = DirectionalLight::new(
            config.light_direction,
            config.shade_base,
            config.shade_scale,
        );
        let face_colors = mesh
            .triangles()
            .iter()
            .map(|t| light.shade(face_normal(t, mesh.vertices())))
            .collect();

        Self {
            projector: Projector::new(config.focal_length),
            controller: CameraController::new(config.step),
            mesh,
            config,
            face_colors,
        }
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn face_colors(&self) -> &[Rgba] {
        &self.face_colors
    }

    /// Starting state: camera framed on the mesh, no rotation.
    pub fn initial_state(&self) -> SimulationState {
        SimulationState {
            camera: Camera::framing(
                self.mesh.bounds(),
                self.config.camera_height_ratio,
                self.config.camera_distance_ratio,
            ),
            rotation: RotationState::default(),
        }
    }

    /// Applies one input command to the state.
    pub fn apply(&self, state: &mut SimulationState, command: Command) {
        self.controller.apply(state, command);
    }

    /// Builds the frame for the current state without advancing it.
    pub fn frame(&self, state: &SimulationState, width: u32, height: u32) -> Frame {
        let matrix = model_view(&state.rotation, &state.camera, self.config.camera_mode);
        let view_vertices = transform_vertices(self.mesh.vertices(), &matrix);
        let screen = self.projector.project_all(&view_vertices, width, height);

        let builder = FrameBuilder::new(width, height);
        let builder = match self.config.render_mode {
            RenderMode::Wireframe => {
                builder.wireframe(self.mesh.edges(), &screen, self.config.wireframe_color)
            }
            RenderMode::Filled => {
                let order = painter_order(self.mesh.triangles(), &view_vertices);
                builder.filled(self.mesh.triangles(), &order, &screen, &self.face_colors)
            }
        };
        builder.build()
    }

    /// Builds the current frame, then advances the spin angles if enabled.
    pub fn tick(&self, state: &mut SimulationState, width: u32, height: u32) -> Frame {
        let frame = self.frame(state, width, height);
        if self.config.spin {
            state.rotation.advance(self.config.spin_rate);
        }
        log::trace!(
            "tick: {} primitives, rotation ({:.3}, {:.3}, {:.3})",
            frame.len(),
            state.rotation.x,
            state.rotation.y,
            state.rotation.z
        );
        frame
    }
}
