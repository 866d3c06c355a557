//! Low-precision solar coordinates (Meeus ch. 25), good to 0.01°.
//!
//! The Sun only enters the lunar model through the elongation that defines
//! the phase and through the light direction, so 0.01° is ample.

use selene_core::angle::wrap_0_2pi;
use selene_core::constants::DEG_TO_RAD;
use selene_core::math::polynomial;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocentricSun {
    /// Geometric longitude, mean equinox of date, radians.
    pub true_longitude: f64,
    /// Longitude corrected for nutation and aberration, radians.
    pub apparent_longitude: f64,
    /// Radius vector, AU.
    pub distance_au: f64,
}

/// `t` is Julian centuries of TT since J2000.0.
pub fn geocentric_sun(t: f64) -> GeocentricSun {
    let l0 = polynomial(t, &[280.46646, 36000.76983, 0.0003032]);
    let m = polynomial(t, &[357.52911, 35999.05029, -0.0001537]) * DEG_TO_RAD;
    let e = polynomial(t, &[0.016708634, -0.000042037, -0.0000001267]);

    let c = polynomial(t, &[1.914602, -0.004817, -0.000014]) * libm::sin(m)
        + (0.019993 - 0.000101 * t) * libm::sin(2.0 * m)
        + 0.000289 * libm::sin(3.0 * m);

    let true_longitude = l0 + c;
    let true_anomaly = m + c * DEG_TO_RAD;
    let distance_au = 1.000001018 * (1.0 - e * e) / (1.0 + e * libm::cos(true_anomaly));

    let omega = (125.04 - 1934.136 * t) * DEG_TO_RAD;
    let apparent = true_longitude - 0.00569 - 0.00478 * libm::sin(omega);

    GeocentricSun {
        true_longitude: wrap_0_2pi(true_longitude * DEG_TO_RAD),
        apparent_longitude: wrap_0_2pi(apparent * DEG_TO_RAD),
        distance_au,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use selene_core::constants::RAD_TO_DEG;

    #[test]
    fn test_meeus_example_25a() {
        // 1992 October 13, 0h TD
        let sun = geocentric_sun(-0.072183436);
        assert!((sun.true_longitude * RAD_TO_DEG - 199.90988).abs() < 1e-4);
        assert!((sun.apparent_longitude * RAD_TO_DEG - 199.90895).abs() < 1e-4);
        assert!((sun.distance_au - 0.99766).abs() < 1e-5);
    }

    #[test]
    fn test_distance_between_perihelion_and_aphelion() {
        for day in 0..366 {
            let sun = geocentric_sun(0.24 + day as f64 / 36525.0);
            assert!((0.983..1.017).contains(&sun.distance_au));
        }
    }
}
