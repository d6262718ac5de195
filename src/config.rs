//! TOML configuration for every tunable of the die scene.
//!
//! All tables and keys are optional; anything left out takes the value the
//! scene ships with.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::content::HttpContentStore;
use crate::error::{ConfigError, Result};
use crate::geometry::DieProportions;
use crate::math::Point3;
use crate::operations::{BuildDie, FloatMotion, RotationDriver};
use crate::render::{
    Camera, DirectionalLight, EnvironmentPreset, Lighting, RenderSettings, Viewport,
};
use crate::tessellation::TessellationParams;

/// Every tunable of the die scene and its content backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub die: DieConfig,
    pub rotation: RotationConfig,
    pub float: FloatConfig,
    pub render: RenderConfig,
    pub content: ContentConfig,
}

/// `[die]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DieConfig {
    pub edge_length: f64,
    /// Side of the square canvas the die is drawn into, in pixels.
    pub viewport: u32,
    pub spread_ratio: f64,
    pub pip_radius_ratio: f64,
    pub surface_offset: f64,
}

impl Default for DieConfig {
    fn default() -> Self {
        let proportions = DieProportions::default();
        Self {
            edge_length: 2.4,
            viewport: 700,
            spread_ratio: proportions.spread_ratio,
            pip_radius_ratio: proportions.pip_radius_ratio,
            surface_offset: proportions.surface_offset,
        }
    }
}

/// `[rotation]` table, rates in radians per second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    pub pitch_rate: f64,
    pub yaw_rate: f64,
    pub wobble_amplitude: f64,
    pub wobble_rate: f64,
}

impl Default for RotationConfig {
    fn default() -> Self {
        let driver = RotationDriver::default();
        Self {
            pitch_rate: driver.base_pitch_rate,
            yaw_rate: driver.base_yaw_rate,
            wobble_amplitude: driver.amplitude,
            wobble_rate: driver.wobble_rate,
        }
    }
}

/// `[float]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatConfig {
    pub enabled: bool,
    pub speed: f64,
    pub float_intensity: f64,
    pub rotation_intensity: f64,
}

impl Default for FloatConfig {
    fn default() -> Self {
        let motion = FloatMotion::default();
        Self {
            enabled: true,
            speed: motion.speed,
            float_intensity: motion.float_intensity,
            rotation_intensity: motion.rotation_intensity,
        }
    }
}

/// `[render]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Host window width below which the die is hidden.
    pub min_host_width: u32,
    pub segments: usize,
    pub camera_position: [f64; 3],
    pub fov_degrees: f64,
    pub ambient_intensity: f64,
    pub light_position: [f64; 3],
    pub light_intensity: f64,
    pub cast_shadow: bool,
    pub environment: EnvironmentPreset,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let settings = RenderSettings::default();
        let camera = settings.camera.position;
        let light = settings.lighting.directional;
        Self {
            min_host_width: settings.min_host_width,
            segments: settings.tessellation.segments,
            camera_position: [camera.x, camera.y, camera.z],
            fov_degrees: settings.camera.fov_degrees,
            ambient_intensity: settings.lighting.ambient_intensity,
            light_position: [light.position.x, light.position.y, light.position.z],
            light_intensity: light.intensity,
            cast_shadow: light.cast_shadow,
            environment: settings.lighting.environment,
        }
    }
}

/// `[content]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Backend base URL; empty means same origin.
    pub backend_url: String,
    pub fetch_timeout_secs: u64,
    pub save_timeout_secs: u64,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            fetch_timeout_secs: HttpContentStore::DEFAULT_FETCH_TIMEOUT.as_secs(),
            save_timeout_secs: HttpContentStore::DEFAULT_SAVE_TIMEOUT.as_secs(),
        }
    }
}

impl Config {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is malformed or has
    /// values of the wrong type.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config = toml::from_str(source).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if it is malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(ConfigError::from)?;
        debug!(path = %path.display(), "loading config");
        Self::from_toml_str(&source)
    }

    #[must_use]
    pub fn proportions(&self) -> DieProportions {
        DieProportions {
            spread_ratio: self.die.spread_ratio,
            pip_radius_ratio: self.die.pip_radius_ratio,
            surface_offset: self.die.surface_offset,
        }
    }

    /// Die builder for the configured edge and proportions.
    #[must_use]
    pub fn build_die(&self) -> BuildDie {
        BuildDie::new(self.die.edge_length).with_proportions(self.proportions())
    }

    #[must_use]
    pub fn rotation_driver(&self) -> RotationDriver {
        RotationDriver {
            base_pitch_rate: self.rotation.pitch_rate,
            base_yaw_rate: self.rotation.yaw_rate,
            amplitude: self.rotation.wobble_amplitude,
            wobble_rate: self.rotation.wobble_rate,
        }
    }

    /// Float motion, or a motionless one when `[float] enabled = false`.
    #[must_use]
    pub fn float_motion(&self) -> FloatMotion {
        if !self.float.enabled {
            return FloatMotion::disabled();
        }
        FloatMotion {
            speed: self.float.speed,
            float_intensity: self.float.float_intensity,
            rotation_intensity: self.float.rotation_intensity,
        }
    }

    #[must_use]
    pub fn render_settings(&self) -> RenderSettings {
        let render = &self.render;
        let [cx, cy, cz] = render.camera_position;
        let [lx, ly, lz] = render.light_position;
        RenderSettings {
            camera: Camera {
                position: Point3::new(cx, cy, cz),
                fov_degrees: render.fov_degrees,
            },
            lighting: Lighting {
                ambient_intensity: render.ambient_intensity,
                directional: DirectionalLight {
                    position: Point3::new(lx, ly, lz),
                    intensity: render.light_intensity,
                    cast_shadow: render.cast_shadow,
                },
                environment: render.environment,
            },
            tessellation: TessellationParams {
                segments: render.segments,
            },
            min_host_width: render.min_host_width,
            ..RenderSettings::default()
        }
    }

    /// Square host view the die is shown in.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::square(self.die.viewport)
    }

    /// HTTP content store for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialised.
    pub fn content_store(&self) -> Result<HttpContentStore> {
        let store = HttpContentStore::new(&self.content.backend_url)?.with_timeouts(
            Duration::from_secs(self.content.fetch_timeout_secs),
            Duration::from_secs(self.content.save_timeout_secs),
        );
        Ok(store)
    }
}
