//! Ephemeris interface for the Moon orientation model, and an analytic
//! implementation of it.
//!
//! The orientation calculator only needs five things from an ephemeris: the
//! topocentric equatorial position of a body, local sidereal time, lunar
//! libration, the lunar phase, and the length of the astronomical unit.
//! [`Ephemeris`] names exactly those, so any source (an analytic theory, a
//! JPL kernel reader, a recorded fixture in tests) can stand behind it.
//!
//! [`MeeusEphemeris`] is the built-in source:
//!
//! | Module | Content |
//! |--------|---------|
//! | [`moon`] | 60+60-term lunar series (Meeus ch. 47) |
//! | [`sun`] | Low-precision solar theory (Meeus ch. 25) |
//! | [`libration`] | Optical + physical libration (Meeus ch. 53) |
//! | [`frames`] | Ecliptic → equatorial, geocentric → topocentric |
//! | [`refraction`] | Standard-atmosphere refraction |
//!
//! ```
//! use selene_core::GeoLocation;
//! use selene_ephemeris::{Body, Ephemeris, EquatorOptions, MeeusEphemeris};
//! use selene_time::UTC;
//!
//! let eph = MeeusEphemeris::default();
//! let when: UTC = "2024-01-11T11:57:00Z".parse()?;
//!
//! let phase = eph.moon_phase(&when)?;
//! assert!(phase < 1.0 || phase > 359.0);
//!
//! let moon = eph.equatorial(Body::Moon, &when, &GeoLocation::PARIS, EquatorOptions::APPARENT)?;
//! assert!((0.0..24.0).contains(&moon.ra_hours));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod errors;
pub mod frames;
pub mod libration;
pub mod meeus;
pub mod moon;
pub mod refraction;
pub mod sun;

pub use errors::{EphemerisError, EphemerisResult};
pub use libration::Libration;
pub use meeus::MeeusEphemeris;

use selene_core::GeoLocation;
use selene_time::UTC;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Earliest year the built-in theory is evaluated for.
pub const MIN_YEAR: f64 = 1600.0;

/// Latest year the built-in theory is evaluated for.
pub const MAX_YEAR: f64 = 2500.0;

pub use selene_core::constants::KM_PER_AU;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Body {
    Sun,
    Moon,
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Body::Sun => write!(f, "Sun"),
            Body::Moon => write!(f, "Moon"),
        }
    }
}

/// Corrections applied to an equatorial position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquatorOptions {
    /// Lift the position by atmospheric refraction.
    pub refraction: bool,
    /// Evaluate the body at the light-emission time (and include annual
    /// aberration for the Sun).
    pub aberration: bool,
}

impl EquatorOptions {
    /// Geometric position, no corrections.
    pub const GEOMETRIC: Self = Self {
        refraction: false,
        aberration: false,
    };

    /// What an observer actually sees: light-time and refraction applied.
    pub const APPARENT: Self = Self {
        refraction: true,
        aberration: true,
    };
}

/// Topocentric equatorial coordinates on the true equator and equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Equatorial {
    /// Right ascension, hours, [0, 24).
    pub ra_hours: f64,
    /// Declination, degrees.
    pub dec_deg: f64,
    /// Observer–body distance, AU.
    pub dist_au: f64,
}

/// The ephemeris services the orientation calculator consumes.
///
/// Implementations must be deterministic: equal inputs give bit-identical
/// outputs.
pub trait Ephemeris {
    /// Position of `body` seen from `observer` at sea level.
    fn equatorial(
        &self,
        body: Body,
        time: &UTC,
        observer: &GeoLocation,
        options: EquatorOptions,
    ) -> EphemerisResult<Equatorial>;

    /// Apparent sidereal time in hours, [0, 24). `None` gives Greenwich;
    /// `Some(east_longitude_deg)` gives local sidereal time.
    fn local_sidereal_time(&self, time: &UTC, longitude_deg: Option<f64>) -> EphemerisResult<f64>;

    fn libration(&self, time: &UTC) -> EphemerisResult<Libration>;

    /// Ecliptic elongation of the Moon from the Sun, degrees, [0, 360):
    /// 0 new, 90 first quarter, 180 full, 270 third quarter.
    fn moon_phase(&self, time: &UTC) -> EphemerisResult<f64>;

    fn km_per_au(&self) -> f64 {
        KM_PER_AU
    }
}
