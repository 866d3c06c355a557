//! Moon orientation model.
//!
//! For an observer and an instant, work out how the Moon should be drawn:
//! which way its face is rocked by libration, how far away it is, where the
//! Sun lights it from, and how its disk is tilted against the local
//! vertical. Then turn those numbers into the handful of transform
//! parameters a 3D scene needs.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`orientation`] | [`compute_orientation`] and the parallactic angle |
//! | [`projector`] | [`SceneProjector`]: orientation → [`SceneTransform`] |
//! | [`context`] | [`ObservationContext`], [`TimeProvider`], [`FixedLocation`] |
//! | [`renderer`] | [`Renderer`] seam and a text renderer |
//! | [`config`] | TOML [`ViewerConfig`] |
//! | [`error`] | [`OrientationError`] |
//!
//! ```
//! use selene::{GeoLocation, MeeusEphemeris, ObservationContext, SceneProjector};
//! use selene::UTC;
//!
//! let when: UTC = "2024-01-11T00:00:00Z".parse()?;
//! let ctx = ObservationContext::new(when, GeoLocation::PARIS)?;
//! let eph = MeeusEphemeris::default();
//!
//! let moon = ctx.orientation(&eph)?;
//! assert!(moon.phase_angle_deg > 340.0);
//!
//! let scene = SceneProjector::default().project(&moon);
//! assert!(scene.camera_distance > 3.5 && scene.camera_distance < 4.1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod orientation;
pub mod projector;
pub mod renderer;

pub use config::ViewerConfig;
pub use context::{FixedLocation, LocationProvider, ObservationContext, TimeProvider};
pub use error::{OrientationError, OrientationResult};
pub use orientation::{compute_orientation, compute_orientation_with, parallactic_angle, MoonOrientation};
pub use projector::{project, SceneProjector, SceneTransform, KM_PER_AU, LIGHT_DISTANCE, SCENE_UNITS_PER_KM};
pub use renderer::{Renderer, TextRenderer};

pub use selene_core::GeoLocation;
pub use selene_ephemeris::{Ephemeris, EquatorOptions, MeeusEphemeris};
pub use selene_time::UTC;
