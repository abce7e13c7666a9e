//! Free-fly camera and the named command set that drives it.
//!
//! # Coordinate System
//!
//! - X: positive right
//! - Y: positive up (world up is `(0, 1, 0)`)
//! - Z: positive forward, away from the viewer
//!
//! The camera stores an explicit position and unit direction rather than
//! angles. Turning is a yaw about world up; there is no pitch or roll command.

use std::fmt;
use std::str::FromStr;

use crate::engine::SimulationState;
use crate::error::UnknownCommand;
use crate::math::vec3::Vec3;
use crate::mesh::Bounds;

/// Camera position and facing direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Unit-length facing direction.
    pub direction: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl Camera {
    /// Creates a camera at the given position, looking along +Z.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            direction: Vec3::FORWARD,
        }
    }

    /// Places a +Z-facing camera so a mesh with these bounds is in view.
    ///
    /// The camera is centered on the X extent, raised to `height_ratio` of the
    /// Y extent, and pulled back along -Z by `distance_ratio` times the larger
    /// of the two extents. Without bounds the camera sits at the origin.
    pub fn framing(bounds: Option<Bounds>, height_ratio: f64, distance_ratio: f64) -> Self {
        let Some(bounds) = bounds else {
            return Self::default();
        };
        let size = bounds.size();
        Self::new(Vec3::new(
            bounds.min.x + size.x * 0.5,
            bounds.min.y + size.y * height_ratio,
            -distance_ratio * size.x.max(size.y),
        ))
    }

    /// Horizontal right vector: `normalize(world_up × direction)`.
    pub fn right(&self) -> Vec3 {
        Vec3::UP.cross(self.direction).normalize()
    }

    /// Moves the camera along its facing direction.
    pub fn move_forward(&mut self, distance: f64) {
        self.position = self.position + self.direction * distance;
    }

    /// Moves the camera along its right vector (strafe).
    pub fn move_right(&mut self, distance: f64) {
        self.position = self.position + self.right() * distance;
    }

    /// Moves the camera along world Y.
    pub fn move_up(&mut self, distance: f64) {
        self.position.y += distance;
    }

    /// Yaws the camera about world up. Positive angles turn right.
    ///
    /// Only the X/Z components change. Their combined horizontal length is
    /// kept, so a unit direction stays unit even when it has a Y component.
    pub fn turn(&mut self, angle: f64) {
        let heading = self.direction.x.atan2(self.direction.z) + angle;
        let horizontal = self.direction.x.hypot(self.direction.z);
        let (sin, cos) = heading.sin_cos();
        self.direction.x = horizontal * sin;
        self.direction.z = horizontal * cos;
    }
}

/// Named input commands accepted by the core.
///
/// Raw key handling is the caller's business; it maps keys onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveForward,
    MoveBack,
    StrafeLeft,
    StrafeRight,
    MoveUp,
    MoveDown,
    TurnLeft,
    TurnRight,
    /// Tilt the object about X; used when the camera is not flying.
    RotateUp,
    RotateDown,
}

impl Command {
    pub const ALL: [Command; 10] = [
        Command::MoveForward,
        Command::MoveBack,
        Command::StrafeLeft,
        Command::StrafeRight,
        Command::MoveUp,
        Command::MoveDown,
        Command::TurnLeft,
        Command::TurnRight,
        Command::RotateUp,
        Command::RotateDown,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::MoveForward => "move-forward",
            Command::MoveBack => "move-back",
            Command::StrafeLeft => "strafe-left",
            Command::StrafeRight => "strafe-right",
            Command::MoveUp => "move-up",
            Command::MoveDown => "move-down",
            Command::TurnLeft => "turn-left",
            Command::TurnRight => "turn-right",
            Command::RotateUp => "rotate-up",
            Command::RotateDown => "rotate-down",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

/// Applies [`Command`]s to a [`SimulationState`] with a fixed step size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraController {
    /// Distance per move, or radians per turn/rotate.
    pub step: f64,
}

impl CameraController {
    pub fn new(step: f64) -> Self {
        Self { step }
    }

    pub fn apply(&self, state: &mut SimulationState, command: Command) {
        let s = self.step;
        let camera = &mut state.camera;
        match command {
            Command::MoveForward => camera.move_forward(s),
            Command::MoveBack => camera.move_forward(-s),
            Command::StrafeLeft => camera.move_right(-s),
            Command::StrafeRight => camera.move_right(s),
            Command::MoveUp => camera.move_up(s),
            Command::MoveDown => camera.move_up(-s),
            Command::TurnLeft => camera.turn(-s),
            Command::TurnRight => camera.turn(s),
            Command::RotateUp => state.rotation.x += s,
            Command::RotateDown => state.rotation.x -= s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn state_at(position: Vec3, direction: Vec3) -> SimulationState {
        SimulationState {
            camera: Camera {
                position,
                direction,
            },
            ..SimulationState::default()
        }
    }

    #[test]
    fn camera_starts_looking_forward() {
        let camera = Camera::default();
        assert_eq!(camera.direction, Vec3::FORWARD);
        assert_eq!(camera.right(), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn framing_centers_and_backs_off() {
        let bounds = Bounds {
            min: Vec3::new(-1.0, 0.0, -3.0),
            max: Vec3::new(3.0, 2.0, 3.0),
        };
        let camera = Camera::framing(Some(bounds), 0.5, 1.2);
        assert_relative_eq!(camera.position.x, 1.0);
        assert_relative_eq!(camera.position.y, 1.0);
        assert_relative_eq!(camera.position.z, -4.8);
        assert_eq!(camera.direction, Vec3::FORWARD);

        assert_eq!(Camera::framing(None, 0.5, 1.2), Camera::default());
    }

    #[test]
    fn move_forward_and_back() {
        let controller = CameraController::new(0.5);
        let mut state = state_at(Vec3::ZERO, Vec3::new(0.6, 0.0, 0.8));

        controller.apply(&mut state, Command::MoveForward);
        assert_relative_eq!(state.camera.position.x, 0.3);
        assert_relative_eq!(state.camera.position.z, 0.4);

        controller.apply(&mut state, Command::MoveBack);
        assert_relative_eq!(state.camera.position.x, 0.0);
        assert_relative_eq!(state.camera.position.z, 0.0);
    }

    #[test]
    fn strafe_uses_horizontal_right_vector() {
        let controller = CameraController::new(1.0);
        let mut state = state_at(Vec3::ZERO, Vec3::FORWARD);

        controller.apply(&mut state, Command::StrafeRight);
        assert_relative_eq!(state.camera.position.x, 1.0);

        controller.apply(&mut state, Command::StrafeLeft);
        controller.apply(&mut state, Command::StrafeLeft);
        assert_relative_eq!(state.camera.position.x, -1.0);
        assert_relative_eq!(state.camera.position.y, 0.0);
        assert_relative_eq!(state.camera.position.z, 0.0);

        // Facing -X, right is +Z.
        let mut state = state_at(Vec3::ZERO, Vec3::new(-1.0, 0.0, 0.0));
        controller.apply(&mut state, Command::StrafeRight);
        assert_relative_eq!(state.camera.position.z, 1.0);
    }

    #[test]
    fn move_up_and_down_follow_world_y() {
        let controller = CameraController::new(0.25);
        let mut state = state_at(Vec3::ZERO, Vec3::new(0.0, 0.6, 0.8));

        controller.apply(&mut state, Command::MoveUp);
        assert_eq!(state.camera.position, Vec3::new(0.0, 0.25, 0.0));
        controller.apply(&mut state, Command::MoveDown);
        controller.apply(&mut state, Command::MoveDown);
        assert_eq!(state.camera.position, Vec3::new(0.0, -0.25, 0.0));
    }

    #[test]
    fn turn_right_heads_toward_positive_x() {
        let controller = CameraController::new(std::f64::consts::FRAC_PI_2);
        let mut state = state_at(Vec3::ZERO, Vec3::FORWARD);

        controller.apply(&mut state, Command::TurnRight);
        assert_relative_eq!(state.camera.direction.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(state.camera.direction.z, 0.0, epsilon = 1e-12);

        // Keeps turning through the rear half-plane without flipping back.
        controller.apply(&mut state, Command::TurnRight);
        assert_relative_eq!(state.camera.direction.z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn turn_left_then_right_restores_direction() {
        let controller = CameraController::new(0.05);
        for direction in [
            Vec3::FORWARD,
            Vec3::new(-0.6, 0.0, -0.8),
            Vec3::new(0.3, 0.4, -0.5).normalize(),
        ] {
            let mut state = state_at(Vec3::ZERO, direction);
            controller.apply(&mut state, Command::TurnLeft);
            controller.apply(&mut state, Command::TurnRight);

            let d = state.camera.direction;
            assert_relative_eq!(d.x, direction.x, epsilon = 1e-12);
            assert_relative_eq!(d.y, direction.y, epsilon = 1e-12);
            assert_relative_eq!(d.z, direction.z, epsilon = 1e-12);
        }
    }

    #[test]
    fn turning_keeps_direction_unit_length() {
        let controller = CameraController::new(0.3);
        let mut state = state_at(Vec3::ZERO, Vec3::new(0.0, 0.6, 0.8));
        for _ in 0..50 {
            controller.apply(&mut state, Command::TurnLeft);
            assert_relative_eq!(state.camera.direction.magnitude(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(state.camera.direction.y, 0.6, epsilon = 1e-12);
        }
    }

    #[test]
    fn rotate_commands_only_touch_object_angle() {
        let controller = CameraController::new(0.1);
        let mut state = SimulationState::default();
        let camera = state.camera;

        controller.apply(&mut state, Command::RotateUp);
        controller.apply(&mut state, Command::RotateUp);
        controller.apply(&mut state, Command::RotateDown);
        assert_relative_eq!(state.rotation.x, 0.1);
        assert_eq!(state.rotation.y, 0.0);
        assert_eq!(state.camera, camera);
    }

    #[test]
    fn command_names_round_trip() {
        for command in Command::ALL {
            assert_eq!(command.to_string().parse::<Command>(), Ok(command));
        }
        assert_eq!(
            "jump".parse::<Command>(),
            Err(UnknownCommand("jump".to_string()))
        );
    }
}
