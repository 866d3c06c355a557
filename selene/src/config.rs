//! Viewer configuration.
//!
//! Loaded from TOML; every section and field is optional and falls back to
//! the built-in defaults.
//!
//! ```toml
//! [location]
//! latitude = 48.8566
//! longitude = 2.3522
//!
//! [scene]
//! units_per_km = 1e-5
//! light_distance = 6.684587122268445e-14
//!
//! [sweep]
//! step_hours = 1.0
//!
//! [ephemeris]
//! refraction = true
//! aberration = true
//!
//! [render]
//! fov_deg = 45.0
//! bump_scale = 4.0
//! ```

use crate::error::{OrientationError, OrientationResult};
use crate::projector::{SceneProjector, LIGHT_DISTANCE, SCENE_UNITS_PER_KM};
use log::debug;
use selene_core::location::{DEFAULT_LATITUDE_DEG, DEFAULT_LONGITUDE_DEG};
use selene_core::GeoLocation;
use selene_ephemeris::EquatorOptions;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub location: LocationConfig,
    pub scene: SceneConfig,
    pub sweep: SweepConfig,
    pub ephemeris: EphemerisConfig,
    pub render: RenderConfig,
}

/// Observer used until a better fix arrives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE_DEG,
            longitude: DEFAULT_LONGITUDE_DEG,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub units_per_km: f64,
    pub light_distance: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            units_per_km: SCENE_UNITS_PER_KM,
            light_distance: LIGHT_DISTANCE,
        }
    }
}

/// Default row spacing for `selene sweep`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    pub step_hours: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self { step_hours: 1.0 }
    }
}

impl SweepConfig {
    pub fn step_days(&self) -> f64 {
        self.step_hours / 24.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EphemerisConfig {
    pub refraction: bool,
    pub aberration: bool,
}

impl Default for EphemerisConfig {
    fn default() -> Self {
        Self {
            refraction: true,
            aberration: true,
        }
    }
}

/// Fixed scene setup handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub fov_deg: f64,
    pub near: f64,
    pub far: f64,
    pub sphere_radius: f64,
    pub sphere_segments: u32,
    pub bump_scale: f64,
    pub ambient_color: u32,
    pub light_color: u32,
    pub light_intensity: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fov_deg: 45.0,
            near: 0.1,
            far: 1000.0,
            sphere_radius: 1.0,
            sphere_segments: 64,
            bump_scale: 4.0,
            ambient_color: 0x333333,
            light_color: 0xffffff,
            light_intensity: 4.0,
        }
    }
}

impl fmt::Display for RenderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fov {}° clip [{}, {}], sphere r={} x{} bump {}, ambient #{:06x}, light #{:06x} x{}",
            self.fov_deg,
            self.near,
            self.far,
            self.sphere_radius,
            self.sphere_segments,
            self.bump_scale,
            self.ambient_color,
            self.light_color,
            self.light_intensity
        )
    }
}

impl ViewerConfig {
    pub fn from_toml_str(text: &str) -> OrientationResult<Self> {
        let config: Self = toml::from_str(text)
            .map_err(|e| OrientationError::config(format!("Invalid TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> OrientationResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            OrientationError::config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn to_toml_string(&self) -> OrientationResult<String> {
        toml::to_string_pretty(self).map_err(|e| OrientationError::config(e.to_string()))
    }

    pub fn validate(&self) -> OrientationResult<()> {
        self.location()?;

        let scene = &self.scene;
        if !(scene.units_per_km.is_finite() && scene.units_per_km > 0.0) {
            return Err(OrientationError::config("scene.units_per_km must be positive"));
        }
        if !(scene.light_distance.is_finite() && scene.light_distance > 0.0) {
            return Err(OrientationError::config("scene.light_distance must be positive"));
        }

        let step = self.sweep.step_hours;
        if !(step.is_finite() && step > 0.0) {
            return Err(OrientationError::config(format!(
                "sweep.step_hours must be positive, got {}",
                step
            )));
        }

        let render = &self.render;
        if !(render.near > 0.0 && render.far > render.near) {
            return Err(OrientationError::config("render clip planes need 0 < near < far"));
        }

        Ok(())
    }

    /// Configured observer, range-checked.
    pub fn location(&self) -> OrientationResult<GeoLocation> {
        Ok(GeoLocation::new(self.location.latitude, self.location.longitude)?)
    }

    pub fn projector(&self) -> SceneProjector {
        SceneProjector::new(self.scene.units_per_km, self.scene.light_distance)
    }

    pub fn equator_options(&self) -> EquatorOptions {
        EquatorOptions {
            refraction: self.ephemeris.refraction,
            aberration: self.ephemeris.aberration,
        }
    }
}
