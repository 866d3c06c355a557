//! Atmospheric refraction for a standard atmosphere (1010 hPa, 10 °C).
//!
//! Saemundsson's formula gives the lift from true to apparent altitude,
//! within 0.1′ of Bennett's tables above the horizon. Below −1° the value is
//! held at its −1° level and tapered to zero at the nadir so the correction
//! stays continuous for bodies under the horizon.

use crate::frames::EquatorialVector;
use selene_core::constants::{DEG_TO_RAD, RAD_TO_DEG};
use selene_core::GeoLocation;

/// Refraction in degrees for a true (airless) altitude in degrees.
pub fn refraction_angle(altitude_deg: f64) -> f64 {
    if !(-90.0..=90.0).contains(&altitude_deg) {
        return 0.0;
    }

    let hd = altitude_deg.max(-1.0);
    let mut refr = 1.02 / libm::tan((hd + 10.3 / (hd + 5.11)) * DEG_TO_RAD) / 60.0;

    if altitude_deg < -1.0 {
        refr *= (altitude_deg + 90.0) / 89.0;
    }

    // The formula dips a hair below zero near the zenith
    refr.max(0.0)
}

/// Lifts a topocentric position along its vertical circle by the refraction
/// angle. `local_sidereal` in radians; RA/Dec in and out on the equator of date.
pub fn refract(
    position: &EquatorialVector,
    observer: &GeoLocation,
    local_sidereal: f64,
) -> EquatorialVector {
    let hour_angle = local_sidereal - position.ra;
    let (sin_h, cos_h) = libm::sincos(hour_angle);
    let (sin_d, cos_d) = libm::sincos(position.dec);
    let (sin_p, cos_p) = observer.latitude_angle().sin_cos();

    // Hour-angle frame: x to the meridian on the equator, y west, z to the pole
    let ex = cos_d * cos_h;
    let ey = cos_d * sin_h;
    let ez = sin_d;

    // Horizon basis expressed in that frame: south, west, zenith
    let south = ex * sin_p - ez * cos_p;
    let west = ey;
    let up = ex * cos_p + ez * sin_p;

    let horizontal = libm::hypot(south, west);
    if horizontal < 1e-15 {
        return *position;
    }

    let altitude = libm::atan2(up, horizontal) * RAD_TO_DEG;
    let apparent = (altitude + refraction_angle(altitude)) * DEG_TO_RAD;
    let (sin_a, cos_a) = libm::sincos(apparent);
    let scale = cos_a / horizontal;
    let (south, west, up) = (south * scale, west * scale, sin_a);

    let ex = south * sin_p + up * cos_p;
    let ey = west;
    let ez = -south * cos_p + up * sin_p;

    EquatorialVector {
        ra: selene_core::angle::wrap_0_2pi(local_sidereal - libm::atan2(ey, ex)),
        dec: libm::atan2(ez, libm::hypot(ex, ey)),
        distance_km: position.distance_km,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizon_refraction_about_half_degree() {
        let r = refraction_angle(0.0);
        assert!((r - 0.4797).abs() < 0.01, "{r}");
    }

    #[test]
    fn test_refraction_shrinks_with_altitude() {
        assert!(refraction_angle(10.0) > refraction_angle(45.0));
        assert!(refraction_angle(45.0) > refraction_angle(80.0));
        // about 1′ at 45°
        assert!((refraction_angle(45.0) * 60.0 - 1.0).abs() < 0.05);
        assert_eq!(refraction_angle(90.0), 0.0);
    }

    #[test]
    fn test_below_horizon_tapers() {
        assert!(refraction_angle(-30.0) < refraction_angle(-1.0));
        assert_eq!(refraction_angle(-90.0), 0.0);
        assert_eq!(refraction_angle(f64::NAN), 0.0);
    }

    #[test]
    fn test_refract_raises_meridian_body() {
        let obs = GeoLocation::new(45.0, 0.0).unwrap();
        // On the meridian at dec 0 the altitude is 45°; refraction lifts it north
        let pos = EquatorialVector {
            ra: 1.0,
            dec: 0.0,
            distance_km: 384_400.0,
        };
        let out = refract(&pos, &obs, 1.0);
        let lift_deg = out.dec * RAD_TO_DEG;
        assert!((lift_deg - refraction_angle(45.0)).abs() < 1e-9, "{lift_deg}");
        assert!((out.ra - 1.0).abs() < 1e-9);
        assert_eq!(out.distance_km, pos.distance_km);
    }
}
