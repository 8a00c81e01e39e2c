//! Camera configuration
//!
//! Supports multiple profiles (debug, release) with different settings.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::action::Easing;
use crate::camera::{CameraError, DEFAULT_MAX_ZOOM};

/// Viewport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Viewport width in screen units
    pub width: f32,
    /// Viewport height in screen units
    pub height: f32,
}

impl ViewportConfig {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Zoom limit and transition defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoomConfig {
    /// How far in the camera may zoom
    #[serde(default = "default_max_zoom")]
    pub max_zoom: f32,
    /// Easing used by transitions that don't name one
    #[serde(default)]
    pub default_easing: Easing,
}

fn default_max_zoom() -> f32 {
    DEFAULT_MAX_ZOOM
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            max_zoom: DEFAULT_MAX_ZOOM,
            default_easing: Easing::default(),
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// The active profile (debug, release, etc.)
    pub profile: String,
    /// Viewport configuration
    pub viewport: ViewportConfig,
    /// Zoom configuration
    #[serde(default)]
    pub camera: ZoomConfig,
}

impl CameraConfig {
    /// Loads configuration based on the specified profile
    ///
    /// Sources are layered in this order:
    /// 1. config/{profile}.toml (profile-specific configuration)
    /// 2. Environment variables with prefix CAMERA_ (e.g., CAMERA_VIEWPORT__WIDTH=1280)
    ///
    /// Config files are searched for in:
    /// 1. Next to the executable (target/debug/config or target/release/config)
    /// 2. In the current directory (./config)
    pub fn load(profile: &str) -> Result<Self, CameraError> {
        Ok(Self::build(Self::find_config_dir().as_deref(), profile)?)
    }

    /// Loads a profile from an explicit config directory, plus environment overrides
    pub fn load_from_dir(dir: &Path, profile: &str) -> Result<Self, CameraError> {
        Ok(Self::build(Some(dir), profile)?)
    }

    /// Loads configuration using the CAMERA_PROFILE environment variable,
    /// defaulting to "release"
    pub fn load_from_env() -> Result<Self, CameraError> {
        let profile = std::env::var("CAMERA_PROFILE").unwrap_or_else(|_| "release".to_string());
        Self::load(&profile)
    }

    fn build(config_dir: Option<&Path>, profile: &str) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        // Add profile-specific configuration
        builder = match config_dir {
            Some(dir) => {
                let profile_path = dir.join(profile);
                builder.add_source(File::from(profile_path.as_path()).required(false))
            }
            None => builder.add_source(File::with_name(&format!("config/{}", profile)).required(false)),
        };

        // Use __ as separator for nested fields (e.g., CAMERA_CAMERA__MAX_ZOOM)
        builder = builder.add_source(
            Environment::with_prefix("CAMERA")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.set_override("profile", profile)?.build()?;

        config.try_deserialize()
    }

    /// Finds the config directory by searching in multiple locations
    fn find_config_dir() -> Option<PathBuf> {
        if let Ok(exe_path) = std::env::current_exe()
            && let Some(exe_dir) = exe_path.parent()
        {
            let config_dir = exe_dir.join("config");
            if config_dir.exists() {
                return Some(config_dir);
            }
        }

        let cwd_config = PathBuf::from("config");
        if cwd_config.exists() {
            return Some(cwd_config);
        }

        None
    }

    /// Built-in configuration used when nothing can be loaded
    pub fn builtin() -> Self {
        Self {
            profile: "release".to_string(),
            viewport: ViewportConfig {
                width: 1024.0,
                height: 768.0,
            },
            camera: ZoomConfig::default(),
        }
    }

    /// Rejects sizes and zoom limits the camera cannot work with
    pub fn validate(&self) -> Result<(), CameraError> {
        let size = self.viewport.size();
        if !(size.is_finite() && size.x > 0.0 && size.y > 0.0) {
            return Err(CameraError::invalid("viewport size", size));
        }
        let max_zoom = self.camera.max_zoom;
        if !(max_zoom.is_finite() && max_zoom > 0.0) {
            return Err(CameraError::invalid("max zoom", max_zoom));
        }
        Ok(())
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self::load("release").unwrap_or_else(|_| Self::builtin())
    }
}
