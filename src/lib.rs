//! A CPU-side 3D mesh animation pipeline.
//!
//! This crate turns a static mesh into an ordered list of 2D drawables once
//! per tick: rotate the object, move it into camera space, perspective-project
//! it, order triangles back to front (painter's algorithm) and flat-shade them
//! from a single directional light. Drawing the primitives is left to the
//! caller.
//!
//! # Quick Start
//!
//! ```ignore
//! use meshpaint::prelude::*;
//!
//! let mesh = Mesh::load("assets/cube.obj")?;
//! let engine = Engine::new(mesh, SceneConfig::default());
//! let mut state = engine.initial_state();
//!
//! engine.apply(&mut state, Command::TurnLeft);
//! let frame = engine.tick(&mut state, 800, 600);
//! ```

pub mod camera;
pub mod colors;
pub mod config;
pub mod engine;
pub mod error;
pub mod frame;
pub mod light;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod sorting;
pub mod transform;

// Re-export commonly needed types at crate root for convenience
pub use camera::{Camera, CameraController, Command};
pub use config::{CameraMode, RenderMode, SceneConfig};
pub use engine::{Engine, SimulationState};
pub use error::{ConfigError, LoadError};
pub use frame::{Frame, Primitive};
pub use mesh::Mesh;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use meshpaint::prelude::*;
/// ```
pub mod prelude {
    // Camera & input
    pub use crate::camera::{Camera, CameraController, Command};

    // Engine
    pub use crate::config::{CameraMode, RenderMode, SceneConfig};
    pub use crate::engine::{Engine, SimulationState};

    // Geometry
    pub use crate::mesh::{Mesh, Triangle};
    pub use crate::transform::RotationState;

    // Output
    pub use crate::colors::Rgba;
    pub use crate::frame::{Frame, Primitive};

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
}
