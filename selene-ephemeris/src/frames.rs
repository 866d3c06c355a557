//! Ecliptic → equatorial conversion and the topocentric shift.

use selene_core::angle::wrap_0_2pi;
use selene_core::GeoLocation;

/// Position on the equator of date: RA/Dec in radians, distance in km.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialVector {
    pub ra: f64,
    pub dec: f64,
    pub distance_km: f64,
}

impl EquatorialVector {
    pub fn from_cartesian(x: f64, y: f64, z: f64) -> Self {
        Self {
            ra: wrap_0_2pi(libm::atan2(y, x)),
            dec: libm::atan2(z, libm::hypot(x, y)),
            distance_km: libm::sqrt(x * x + y * y + z * z),
        }
    }

    pub fn to_cartesian(&self) -> (f64, f64, f64) {
        let (sin_ra, cos_ra) = libm::sincos(self.ra);
        let (sin_dec, cos_dec) = libm::sincos(self.dec);
        let r = self.distance_km;
        (r * cos_dec * cos_ra, r * cos_dec * sin_ra, r * sin_dec)
    }
}

/// Rotates ecliptic coordinates (radians) about the equinox by the obliquity `eps`.
pub fn ecliptic_to_equatorial(
    longitude: f64,
    latitude: f64,
    distance_km: f64,
    eps: f64,
) -> EquatorialVector {
    let (sin_l, cos_l) = libm::sincos(longitude);
    let (sin_b, cos_b) = libm::sincos(latitude);
    let (sin_e, cos_e) = libm::sincos(eps);

    let x = cos_b * cos_l;
    let y = cos_b * sin_l * cos_e - sin_b * sin_e;
    let z = cos_b * sin_l * sin_e + sin_b * cos_e;

    EquatorialVector::from_cartesian(x * distance_km, y * distance_km, z * distance_km)
}

/// Moves a geocentric position to the observer's site.
///
/// `local_sidereal` is the local apparent sidereal time in radians, which
/// is the right ascension of the observer's meridian on the equator of date.
pub fn topocentric(
    geocentric: &EquatorialVector,
    observer: &GeoLocation,
    local_sidereal: f64,
) -> EquatorialVector {
    let (u, v) = observer.to_geocentric_km();
    let (sin_lst, cos_lst) = libm::sincos(local_sidereal);
    let (x, y, z) = geocentric.to_cartesian();
    EquatorialVector::from_cartesian(x - u * cos_lst, y - u * sin_lst, z - v)
}
