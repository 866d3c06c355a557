//! Observer location on the Earth's surface.
//!
//! [`GeoLocation`] keeps geodetic latitude and longitude in degrees, exactly
//! as supplied by a location fix, plus a height above the WGS84 ellipsoid.
//! Construction validates the ranges, so every `GeoLocation` in circulation
//! is usable by the ephemeris without further checks.
//!
//! # Coordinate conventions
//!
//! - **Latitude**: north positive, [-90°, +90°]. The poles are valid inputs.
//! - **Longitude**: east positive, [-180°, +180°].
//! - **Height**: meters above the ellipsoid, 0 for a sea-level observer.
//!
//! ```
//! use selene_core::GeoLocation;
//!
//! let obs = GeoLocation::new(-33.8688, 151.2093)?;
//! assert_eq!(obs.to_string(), "33.8688°S, 151.2093°E");
//! assert_eq!(GeoLocation::default(), GeoLocation::PARIS);
//! # Ok::<(), selene_core::AstroError>(())
//! ```

use crate::angle::{validate_latitude, validate_longitude, Angle};
use crate::constants::{WGS84_FLATTENING, WGS84_SEMI_MAJOR_AXIS_KM};
use crate::errors::{AstroError, AstroResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_LATITUDE_DEG: f64 = 48.8566;

pub const DEFAULT_LONGITUDE_DEG: f64 = 2.3522;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoLocation {
    latitude: f64,
    longitude: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    height: f64,
}

impl GeoLocation {
    /// Paris, the location used until a fix arrives.
    pub const PARIS: Self = Self {
        latitude: DEFAULT_LATITUDE_DEG,
        longitude: DEFAULT_LONGITUDE_DEG,
        height: 0.0,
    };

    /// A sea-level observer.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> AstroResult<Self> {
        Self::with_height(latitude_deg, longitude_deg, 0.0)
    }

    pub fn with_height(latitude_deg: f64, longitude_deg: f64, height_m: f64) -> AstroResult<Self> {
        let reject = |reason: &str| AstroError::invalid_location(latitude_deg, longitude_deg, reason);

        validate_latitude(Angle::from_degrees(latitude_deg))
            .map_err(|e| reject(&e.to_string()))?;
        validate_longitude(Angle::from_degrees(longitude_deg), false)
            .map_err(|e| reject(&e.to_string()))?;
        if !height_m.is_finite() || !(-12_000.0..=100_000.0).contains(&height_m) {
            return Err(reject("Height outside reasonable range [-12000, 100000] meters"));
        }

        Ok(Self {
            latitude: latitude_deg,
            longitude: longitude_deg,
            height: height_m,
        })
    }

    /// Re-runs the range checks, for values that arrived through deserialization.
    pub fn validated(self) -> AstroResult<Self> {
        Self::with_height(self.latitude, self.longitude, self.height)
    }

    pub fn latitude_degrees(&self) -> f64 {
        self.latitude
    }

    pub fn longitude_degrees(&self) -> f64 {
        self.longitude
    }

    pub fn height_meters(&self) -> f64 {
        self.height
    }

    pub fn latitude_angle(&self) -> Angle {
        Angle::from_degrees(self.latitude)
    }

    /// Geocentric cylindrical coordinates `(u, v)` in km: distance from the
    /// rotation axis and distance from the equatorial plane.
    pub fn to_geocentric_km(&self) -> (f64, f64) {
        let (sin_lat, cos_lat) = self.latitude_angle().sin_cos();
        let e2 = WGS84_FLATTENING * (2.0 - WGS84_FLATTENING);
        let height_km = self.height / 1000.0;

        // e² < 1, so the denominator never vanishes
        let n = WGS84_SEMI_MAJOR_AXIS_KM / libm::sqrt(1.0 - e2 * sin_lat * sin_lat);

        let u = (n + height_km) * cos_lat;
        let v = (n * (1.0 - e2) + height_km) * sin_lat;
        (u, v)
    }
}

impl Default for GeoLocation {
    fn default() -> Self {
        Self::PARIS
    }
}

impl std::fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ns = if self.latitude < 0.0 { 'S' } else { 'N' };
        let ew = if self.longitude < 0.0 { 'W' } else { 'E' };
        write!(
            f,
            "{:.4}°{}, {:.4}°{}",
            self.latitude.abs(),
            ns,
            self.longitude.abs(),
            ew
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_paris_at_sea_level() {
        let loc = GeoLocation::default();
        assert_eq!(loc.latitude_degrees(), 48.8566);
        assert_eq!(loc.longitude_degrees(), 2.3522);
        assert_eq!(loc.height_meters(), 0.0);
        assert_eq!(loc.to_string(), "48.8566°N, 2.3522°E");
    }

    #[test]
    fn test_degrees_kept_exactly() {
        let loc = GeoLocation::new(-12.345678, 98.7654321).unwrap();
        assert_eq!(loc.latitude_degrees(), -12.345678);
        assert_eq!(loc.longitude_degrees(), 98.7654321);
    }

    #[test]
    fn test_poles_and_antimeridian_accepted() {
        assert!(GeoLocation::new(90.0, 0.0).is_ok());
        assert!(GeoLocation::new(-90.0, 180.0).is_ok());
        assert!(GeoLocation::new(0.0, -180.0).is_ok());
    }

    #[test]
    fn test_out_of_range_rejected_as_invalid_location() {
        for (lat, lon) in [(90.5, 0.0), (-91.0, 0.0), (0.0, 180.5), (0.0, -200.0)] {
            match GeoLocation::new(lat, lon) {
                Err(AstroError::InvalidLocation {
                    latitude,
                    longitude,
                    ..
                }) => {
                    assert_eq!(latitude, lat);
                    assert_eq!(longitude, lon);
                }
                other => panic!("Expected InvalidLocation for ({lat}, {lon}), got {other:?}"),
            }
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(GeoLocation::new(f64::NAN, 0.0).is_err());
        assert!(GeoLocation::new(0.0, f64::INFINITY).is_err());
        assert!(GeoLocation::with_height(0.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_display_hemispheres() {
        let loc = GeoLocation::new(-33.8688, -70.6693).unwrap();
        assert_eq!(loc.to_string(), "33.8688°S, 70.6693°W");
    }

    #[test]
    fn test_geocentric_equator_and_pole() {
        let eq = GeoLocation::new(0.0, 0.0).unwrap();
        let (u, v) = eq.to_geocentric_km();
        assert!((u - WGS84_SEMI_MAJOR_AXIS_KM).abs() < 1e-9);
        assert!(v.abs() < 1e-9);

        let pole = GeoLocation::new(90.0, 0.0).unwrap();
        let (u, v) = pole.to_geocentric_km();
        assert!(u.abs() < 1e-9);
        // polar radius b = a(1 - f)
        assert!((v - WGS84_SEMI_MAJOR_AXIS_KM * (1.0 - WGS84_FLATTENING)).abs() < 1e-6);
    }
}
