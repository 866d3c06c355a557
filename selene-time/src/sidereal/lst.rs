use super::gmst::GAST;
use crate::scales::UTC;
use crate::TimeResult;
use selene_core::angle::wrap_0_2pi;
use selene_core::{Angle, GeoLocation};

/// Local apparent sidereal time for an observer's east longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LST {
    angle: Angle,
    longitude_deg: f64,
}

impl LST {
    pub fn from_gast(gast: &GAST, longitude_deg: f64) -> Self {
        let rad = wrap_0_2pi(gast.radians() + longitude_deg.to_radians());
        Self {
            angle: Angle::from_radians(rad),
            longitude_deg,
        }
    }

    pub fn from_utc(utc: &UTC, longitude_deg: f64) -> TimeResult<Self> {
        Ok(Self::from_gast(&GAST::from_utc(utc)?, longitude_deg))
    }

    pub fn for_location(utc: &UTC, location: &GeoLocation) -> TimeResult<Self> {
        Self::from_utc(utc, location.longitude_degrees())
    }

    pub fn angle(&self) -> Angle {
        self.angle
    }

    pub fn longitude_degrees(&self) -> f64 {
        self.longitude_deg
    }

    pub fn hours(&self) -> f64 {
        self.angle.hours()
    }

    pub fn radians(&self) -> f64 {
        self.angle.radians()
    }
}

impl std::fmt::Display for LST {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LST {:.6}h @ {:.4}°", self.hours(), self.longitude_deg)
    }
}
