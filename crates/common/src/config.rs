use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors from loading or validating a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Window creation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "basic camera".into(),
            width: 1280,
            height: 720,
            resizable: false,
        }
    }
}

/// Camera start pose and tuning constants.
///
/// Angles are in degrees. `sensitivity` is degrees of rotation per pixel of
/// cursor travel, `base_speed` is world units per second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub start_position: Vec3,
    pub start_yaw: f32,
    pub start_pitch: f32,
    pub sensitivity: f32,
    pub base_speed: f32,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            start_position: Vec3::new(0.0, 0.0, 3.0),
            start_yaw: -90.0,
            start_pitch: 0.0,
            sensitivity: 0.05,
            base_speed: 5.0,
            fov_degrees: 60.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Scene animation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// Rotation rate applied to every cube around X, Y and Z.
    pub spin_degrees_per_second: f32,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            spin_degrees_per_second: -60.0,
        }
    }
}

/// Renderer parameters. Texture paths are optional; a procedural texture is
/// used when a path is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub clear_color: [f32; 3],
    pub base_texture: Option<PathBuf>,
    pub overlay_texture: Option<PathBuf>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            clear_color: [0.2, 0.5, 0.5],
            base_texture: None,
            overlay_texture: None,
        }
    }
}

/// Top-level configuration, read from a JSON file.
///
/// Every section is `#[serde(default)]`, so a file only needs the keys it
/// overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlycamConfig {
    pub window: WindowSettings,
    pub camera: CameraSettings,
    pub scene: SceneSettings,
    pub render: RenderSettings,
}

impl FlycamConfig {
    /// Load and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let config: Self = serde_json::from_reader(std::io::BufReader::new(file))?;
        config.validate()?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would produce a degenerate camera or window.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.window;
        if w.width == 0 || w.height == 0 {
            return Err(ConfigError::invalid(
                "window",
                format!("size must be non-zero, got {}x{}", w.width, w.height),
            ));
        }

        let c = &self.camera;
        if !c.start_position.is_finite() {
            return Err(ConfigError::invalid(
                "camera.start_position",
                "must be finite",
            ));
        }
        if !c.start_yaw.is_finite() || !c.start_pitch.is_finite() {
            return Err(ConfigError::invalid(
                "camera.start_yaw/start_pitch",
                "must be finite",
            ));
        }
        if !(c.sensitivity.is_finite() && c.sensitivity > 0.0) {
            return Err(ConfigError::invalid(
                "camera.sensitivity",
                format!("must be positive, got {}", c.sensitivity),
            ));
        }
        if !(c.base_speed.is_finite() && c.base_speed >= 0.0) {
            return Err(ConfigError::invalid(
                "camera.base_speed",
                format!("must be non-negative, got {}", c.base_speed),
            ));
        }
        if !(c.fov_degrees > 0.0 && c.fov_degrees < 180.0) {
            return Err(ConfigError::invalid(
                "camera.fov_degrees",
                format!("must be in (0, 180), got {}", c.fov_degrees),
            ));
        }
        if !(c.near > 0.0 && c.far > c.near && c.far.is_finite()) {
            return Err(ConfigError::invalid(
                "camera.near/far",
                format!("need 0 < near < far, got near={} far={}", c.near, c.far),
            ));
        }

        if !self.scene.spin_degrees_per_second.is_finite() {
            return Err(ConfigError::invalid(
                "scene.spin_degrees_per_second",
                "must be finite",
            ));
        }

        if self
            .render
            .clear_color
            .iter()
            .any(|v| !(0.0..=1.0).contains(v))
        {
            return Err(ConfigError::invalid(
                "render.clear_color",
                "components must be in [0, 1]",
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
    fn defaults_match_reference_constants() {
        let c = FlycamConfig::default();
        assert_eq!(c.window.width, 1280);
        assert_eq!(c.window.height, 720);
        assert!(!c.window.resizable);
        assert_eq!(c.camera.start_position, Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(c.camera.start_yaw, -90.0);
        assert_eq!(c.camera.start_pitch, 0.0);
        assert_eq!(c.camera.sensitivity, 0.05);
        assert_eq!(c.camera.base_speed, 5.0);
        assert_eq!(c.camera.fov_degrees, 60.0);
        assert_eq!(c.camera.near, 0.1);
        assert_eq!(c.camera.far, 100.0);
        assert_eq!(c.scene.spin_degrees_per_second, -60.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "camera": {{ "base_speed": 12.5 }} }}"#).unwrap();

        let c = FlycamConfig::load(file.path()).unwrap();
        assert_eq!(c.camera.base_speed, 12.5);
        assert_eq!(c.camera.sensitivity, 0.05);
        assert_eq!(c.window, WindowSettings::default());
    }

    #[test]
    fn json_round_trip_through_file() {
        let mut original = FlycamConfig::default();
        original.render.base_texture = Some(PathBuf::from("images/crate.png"));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(original.to_json_pretty().unwrap().as_bytes())
            .unwrap();

        let loaded = FlycamConfig::load(file.path()).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn rejects_inverted_clip_planes() {
        let mut c = FlycamConfig::default();
        c.camera.near = 10.0;
        c.camera.far = 1.0;
        let err = c.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "camera.near/far", .. }));
    }

    #[test]
    fn rejects_zero_window() {
        let mut c = FlycamConfig::default();
        c.window.height = 0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_sensitivity() {
        let mut c = FlycamConfig::default();
        c.camera.sensitivity = 0.0;
        assert!(c.validate().is_err());
        c.camera.sensitivity = f32::NAN;
        assert!(c.validate().is_err());
    }

    #[test]
    fn load_invalid_file_reports_validation_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "camera": {{ "fov_degrees": 190.0 }} }}"#).unwrap();
        assert!(matches!(
            FlycamConfig::load(file.path()),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn load_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            FlycamConfig::load(file.path()),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn load_or_default_without_path() {
        let c = FlycamConfig::load_or_default(None).unwrap();
        assert_eq!(c, FlycamConfig::default());
    }
}
