//! Scene state projector: [`MoonOrientation`] → [`SceneTransform`].
//!
//! The scene has the Moon mesh at the origin, a camera on the +Z axis
//! looking at it, and one directional light. Scales:
//!
//! | Constant | Value | Role |
//! |----------|-------|------|
//! | [`KM_PER_AU`] | 149 597 870.7 | km in one astronomical unit |
//! | [`SCENE_UNITS_PER_KM`] | 1e-5 | camera distance per km of Earth–Moon distance |
//! | [`LIGHT_DISTANCE`] | ≈ 6.684587e-14 | length of the light position vector |
//!
//! The light is directional, so only the direction of its position vector
//! matters and [`LIGHT_DISTANCE`] is cosmetic. It is one km of scene scale
//! divided by the AU so renderers that reinterpret the unit stay consistent.

use crate::orientation::MoonOrientation;
use selene_core::constants::DEG_TO_RAD;
use serde::{Deserialize, Serialize};

pub use selene_core::constants::KM_PER_AU;

/// Scene units per kilometre: a 384 400 km Moon sits 3.844 units away.
pub const SCENE_UNITS_PER_KM: f64 = 1.0 / 100_000.0;

/// Light position scale, `SCENE_UNITS_PER_KM / KM_PER_AU` ≈ 6.684587122268445e-14.
pub const LIGHT_DISTANCE: f64 = SCENE_UNITS_PER_KM / KM_PER_AU;

/// Parameters an external renderer applies to its scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneTransform {
    /// Mesh yaw, radians.
    pub moon_rotation_y: f64,
    /// Mesh pitch, radians.
    pub moon_rotation_x: f64,
    /// Camera distance from the mesh centre along +Z, scene units.
    pub camera_distance: f64,
    /// Camera roll, radians.
    pub camera_roll_z: f64,
    /// Directional light position (x, y, z).
    pub light_direction: [f64; 3],
}

/// Maps orientations to transforms with a chosen pair of scale factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneProjector {
    pub units_per_km: f64,
    pub light_distance: f64,
}

impl Default for SceneProjector {
    fn default() -> Self {
        Self::new(SCENE_UNITS_PER_KM, LIGHT_DISTANCE)
    }
}

impl SceneProjector {
    pub const fn new(units_per_km: f64, light_distance: f64) -> Self {
        Self {
            units_per_km,
            light_distance,
        }
    }

    pub fn project(&self, orientation: &MoonOrientation) -> SceneTransform {
        let (sin_phase, cos_phase) = libm::sincos(orientation.phase_angle_deg * DEG_TO_RAD);

        SceneTransform {
            moon_rotation_y: (-orientation.elon - 90.0) * DEG_TO_RAD,
            moon_rotation_x: orientation.elat * DEG_TO_RAD,
            camera_distance: orientation.distance_km * self.units_per_km,
            camera_roll_z: orientation.parallactic_angle_deg * DEG_TO_RAD,
            light_direction: [
                sin_phase * self.light_distance,
                0.0,
                -cos_phase * self.light_distance,
            ],
        }
    }
}

/// Projects with the default scene scale.
pub fn project(orientation: &MoonOrientation) -> SceneTransform {
    SceneProjector::default().project(orientation)
}
