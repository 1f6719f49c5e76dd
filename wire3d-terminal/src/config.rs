//! Viewer configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`WIRE3D_SECTION__KEY`)

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use wire3d_core::{Camera, CameraError, CameraState, Lens, Viewport};

/// Main viewer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Virtual drawing surface
    #[serde(default)]
    pub surface: SurfaceConfig,
    /// Projection lens
    #[serde(default)]
    pub lens: LensConfig,
    /// Starting camera pose
    #[serde(default)]
    pub camera: CameraConfig,
    /// Keyboard control steps and limits
    #[serde(default)]
    pub controls: ControlsConfig,
    /// Mesh source
    #[serde(default)]
    pub mesh: MeshConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from the `config` directory of the working directory
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        // Built-in defaults fill any section the files leave out
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // WIRE3D_CAMERA__DISTANCE=6 -> camera.distance = 6
        figment = figment.merge(Env::prefixed("WIRE3D_").split("__"));

        let config: AppConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every section can be turned into core types
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.camera_optics()?;
        self.controls.validate()?;
        let distance = self.camera.distance;
        if !(distance >= self.controls.min_distance && distance <= self.controls.max_distance) {
            return Err(ConfigError::Invalid(format!(
                "camera.distance {} is outside [{}, {}]",
                distance, self.controls.min_distance, self.controls.max_distance
            )));
        }
        Ok(())
    }

    pub fn camera_optics(&self) -> Result<Camera, ConfigError> {
        let viewport = Viewport::new(self.surface.width as f32, self.surface.height as f32)?;
        Ok(Camera::new(self.lens.to_lens(), viewport)?)
    }

    pub fn initial_state(&self) -> CameraState {
        CameraState::new(
            self.camera.rotation_y,
            self.camera.rotation_x,
            self.camera.distance,
        )
    }
}

/// Drawing surface size in pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
        }
    }
}

/// Perspective lens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LensConfig {
    /// Field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl LensConfig {
    pub fn to_lens(&self) -> Lens {
        Lens {
            fov_degrees: self.fov,
            near: self.near,
            far: self.far,
        }
    }
}

impl Default for LensConfig {
    fn default() -> Self {
        let lens = Lens::default();
        Self {
            fov: lens.fov_degrees,
            near: lens.near,
            far: lens.far,
        }
    }
}

/// Starting camera pose
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Rotation about Y in degrees
    pub rotation_y: f32,
    /// Rotation about X in degrees
    pub rotation_x: f32,
    /// Distance from the model origin
    pub distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let state = CameraState::default();
        Self {
            rotation_y: state.rotation_y,
            rotation_x: state.rotation_x,
            distance: state.distance,
        }
    }
}

/// Keyboard controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlsConfig {
    /// Degrees per rotation key press
    pub rotation_step: f32,
    /// Units per zoom key press
    pub distance_step: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl ControlsConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.rotation_step > 0.0 && self.distance_step > 0.0) {
            return Err(ConfigError::Invalid(
                "control steps must be positive".to_string(),
            ));
        }
        if !(self.min_distance > 0.0 && self.max_distance >= self.min_distance) {
            return Err(ConfigError::Invalid(format!(
                "distance limits must satisfy 0 < min <= max, got [{}, {}]",
                self.min_distance, self.max_distance
            )));
        }
        Ok(())
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            rotation_step: 5.0,
            distance_step: 0.25,
            min_distance: 0.5,
            max_distance: 20.0,
        }
    }
}

/// Mesh source configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshConfig {
    /// OBJ file loaded when no path is given on the command line
    pub path: String,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            path: "human.obj".to_string(),
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Figment(#[from] figment::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl From<CameraError> for ConfigError {
    fn from(e: CameraError) -> Self {
        ConfigError::Invalid(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.surface.width, 800);
        assert_eq!(config.surface.height, 800);
        assert_eq!(config.lens.fov, 90.0);
        assert_eq!(config.camera.distance, 4.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_initial_state() {
        let state = AppConfig::default().initial_state();
        assert_eq!(state, CameraState::new(45.0, 0.0, 4.0));
    }

    #[test]
    fn test_camera_optics() {
        let camera = AppConfig::default().camera_optics().unwrap();
        assert_eq!(camera.viewport, Viewport::default());
        assert_eq!(camera.lens, Lens::default());
    }

    #[test]
    fn test_zero_surface_is_invalid() {
        let mut config = AppConfig::default();
        config.surface.width = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_distance_outside_limits_is_invalid() {
        let mut config = AppConfig::default();
        config.camera.distance = 50.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_clip_planes_are_invalid() {
        let mut config = AppConfig::default();
        config.lens.near = 0.0;
        assert!(config.validate().is_err());
    }
}
