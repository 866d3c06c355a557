//! Core angle type.
//!
//! [`Angle`] stores radians and converts to degrees or hours on demand.
//! Ephemeris outputs arrive in mixed units (right ascension in hours,
//! declination and libration in degrees), so the typed wrapper keeps the
//! conversions in one place.
//!
//! ```
//! use selene_core::Angle;
//!
//! let ra = Angle::from_hours(6.0);
//! assert!((ra.degrees() - 90.0).abs() < 1e-10);
//!
//! let (sin, cos) = Angle::from_degrees(30.0).sin_cos();
//! assert!((sin - 0.5).abs() < 1e-12);
//! assert!((cos - 0.75_f64.sqrt()).abs() < 1e-12);
//! ```

use crate::constants::DEGREES_PER_HOUR;

#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle {
    rad: f64,
}

impl Angle {
    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg.to_radians(),
        }
    }

    /// One hour of right ascension or hour angle is 15°.
    #[inline]
    pub fn from_hours(h: f64) -> Self {
        Self {
            rad: (h * DEGREES_PER_HOUR).to_radians(),
        }
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad.to_degrees()
    }

    #[inline]
    pub fn hours(self) -> f64 {
        self.degrees() / DEGREES_PER_HOUR
    }

    #[inline]
    pub fn sin(self) -> f64 {
        libm::sin(self.rad)
    }

    #[inline]
    pub fn cos(self) -> f64 {
        libm::cos(self.rad)
    }

    #[inline]
    pub fn tan(self) -> f64 {
        libm::tan(self.rad)
    }

    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        libm::sincos(self.rad)
    }

    /// Wrapped to [0, 2π).
    #[inline]
    pub fn wrapped(self) -> Self {
        Self::from_radians(super::normalize::wrap_0_2pi(self.rad))
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.rad.is_finite()
    }
}

impl std::fmt::Display for Angle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}°", p, self.degrees()),
            None => write!(f, "{}°", self.degrees()),
        }
    }
}
