//! Scene configuration.
//!
//! Everything that would otherwise be a compiled-in constant (spin rates,
//! movement step, focal length, light, shading ramp, camera framing) lives in
//! [`SceneConfig`] and is passed to [`Engine::new`](crate::engine::Engine::new).
//! Configs deserialize from JSON; missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::colors::{self, Rgba};
use crate::error::ConfigError;
use crate::math::vec3::Vec3;

/// Which primitives a frame is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    /// One line segment per mesh edge, in edge order.
    Wireframe,
    /// One shaded polygon per triangle, painter-sorted.
    #[default]
    Filled,
}

/// How camera space is derived from world space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CameraMode {
    /// Full look-at transform built from the camera's direction.
    #[default]
    LookAt,
    /// Subtract the camera position only; the view always faces +Z.
    TranslateOnly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub render_mode: RenderMode,
    pub camera_mode: CameraMode,
    /// Advance the object rotation angles after every tick.
    pub spin: bool,
    /// Per-tick angle increments (radians) around X, Y and Z.
    pub spin_rate: Vec3,
    /// Distance (or angle, for turns and rotations) covered by one command.
    pub step: f64,
    pub focal_length: f64,
    /// Direction the light travels in. Normalized by the engine.
    pub light_direction: Vec3,
    /// Channel value for a face perpendicular to the light.
    pub shade_base: f64,
    /// Channel change per unit of `dot(light, normal)`.
    pub shade_scale: f64,
    /// Initial camera height as a fraction of the mesh's Y extent.
    pub camera_height_ratio: f64,
    /// Initial camera distance behind the origin, in multiples of the larger
    /// of the mesh's X and Y extents.
    pub camera_distance_ratio: f64,
    pub wireframe_color: Rgba,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            render_mode: RenderMode::default(),
            camera_mode: CameraMode::default(),
            spin: true,
            spin_rate: Vec3::new(0.003, 0.005, 0.007),
            step: 0.05,
            focal_length: 1.0,
            light_direction: Vec3::new(1.0, -1.0, 1.0),
            shade_base: 128.0,
            shade_scale: 96.0,
            camera_height_ratio: 0.5,
            camera_distance_ratio: 1.2,
            wireframe_color: colors::LAWN_GREEN,
        }
    }
}

impl SceneConfig {
    /// Reads, parses and validates a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the pipeline cannot work with at all.
    ///
    /// Values that merely produce odd pictures (negative step, huge spin
    /// rates) are accepted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.focal_length.is_finite() && self.focal_length > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "focal_length must be positive, got {}",
                self.focal_length
            )));
        }
        if !self.step.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "step must be finite, got {}",
                self.step
            )));
        }
        let light = self.light_direction.magnitude();
        if !(light.is_finite() && light > 0.0) {
            return Err(ConfigError::Invalid(
                "light_direction must be a non-zero vector".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_validate() {
        SceneConfig::default().validate().unwrap();
    }

    #[test]
    fn empty_json_yields_defaults() {
        assert_eq!(SceneConfig::from_json_str("{}").unwrap(), SceneConfig::default());
    }

    #[test]
    fn partial_json_overrides_fields() {
        let config = SceneConfig::from_json_str(
            r#"{
                "render_mode": "wireframe",
                "camera_mode": "translate-only",
                "spin": false,
                "spin_rate": { "x": 0.0, "y": 0.01, "z": 0.0 },
                "wireframe_color": { "r": 255, "g": 0, "b": 0, "a": 255 }
            }"#,
        )
        .unwrap();

        assert_eq!(config.render_mode, RenderMode::Wireframe);
        assert_eq!(config.camera_mode, CameraMode::TranslateOnly);
        assert!(!config.spin);
        assert_eq!(config.spin_rate, Vec3::new(0.0, 0.01, 0.0));
        assert_eq!(config.wireframe_color, Rgba::rgb(255, 0, 0));
        assert_eq!(config.step, SceneConfig::default().step);
    }

    #[test]
    fn rejects_bad_focal_length() {
        let err = SceneConfig::from_json_str(r#"{ "focal_length": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_zero_light() {
        let err = SceneConfig::from_json_str(
            r#"{ "light_direction": { "x": 0.0, "y": 0.0, "z": 0.0 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = SceneConfig::from_json_str("{ spin: yes }").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{ "step": 0.25 }"#).unwrap();
        let config = SceneConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.step, 0.25);
    }
}
