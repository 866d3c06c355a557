//! Optical and physical libration of the Moon (Meeus ch. 53).
//!
//! The optical part follows from the geometry of the Moon's orbit against
//! its mean equator, inclined by I = 1.54242° to the ecliptic. The physical
//! part is the small forced wobble of the lunar figure, expressed through
//! the ρ, σ, τ series. Their sum gives the selenographic coordinates of the
//! sub-Earth point.

use crate::moon::{FundamentalArguments, GeocentricMoon};
use selene_core::angle::{wrap_0_360, wrap_pm_pi};
use selene_core::constants::{
    DEG_TO_RAD, MOON_EQUATOR_INCLINATION_DEG, MOON_MEAN_RADIUS_KM, RAD_TO_DEG,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Libration and the geocentric quantities it is derived from. Degrees, km.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Libration {
    /// Selenographic longitude of the sub-Earth point, east positive.
    pub elon: f64,
    /// Selenographic latitude of the sub-Earth point.
    pub elat: f64,
    /// Geocentric ecliptic longitude of the Moon, [0, 360).
    pub mlon: f64,
    /// Geocentric ecliptic latitude of the Moon.
    pub mlat: f64,
    /// Earth–Moon center distance.
    pub dist_km: f64,
    /// Apparent angular diameter seen from the Earth's center.
    pub diam_deg: f64,
}

/// The two libration contributions, degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LibrationComponents {
    pub optical_longitude: f64,
    pub optical_latitude: f64,
    pub physical_longitude: f64,
    pub physical_latitude: f64,
}

impl LibrationComponents {
    pub fn longitude(&self) -> f64 {
        self.optical_longitude + self.physical_longitude
    }

    pub fn latitude(&self) -> f64 {
        self.optical_latitude + self.physical_latitude
    }
}

/// `t` is Julian centuries of TT; `moon` the geometric position at `t`.
pub fn libration_components(t: f64, moon: &GeocentricMoon) -> LibrationComponents {
    let args = FundamentalArguments::compute(t);
    let inc = MOON_EQUATOR_INCLINATION_DEG * DEG_TO_RAD;
    let (sin_i, cos_i) = libm::sincos(inc);

    let f = args.argument_of_latitude;
    let omega = args.ascending_node;
    let beta = moon.latitude;

    // Geometric longitude already excludes nutation, so W = λ − Ω directly
    let w = moon.longitude - omega;
    let (sin_w, cos_w) = libm::sincos(w);
    let (sin_b, cos_b) = libm::sincos(beta);

    let a = libm::atan2(sin_w * cos_b * cos_i - sin_b * sin_i, cos_w * cos_b);
    let l_opt = wrap_pm_pi(a - f);
    let b_opt = libm::asin(-sin_w * cos_b * sin_i - sin_b * cos_i);

    let (rho, sigma, tau) = physical_series(t, &args);

    let (sin_a, cos_a) = libm::sincos(a);
    let l_phys = -tau + (rho * cos_a + sigma * sin_a) * libm::tan(b_opt);
    let b_phys = sigma * cos_a - rho * sin_a;

    LibrationComponents {
        optical_longitude: l_opt * RAD_TO_DEG,
        optical_latitude: b_opt * RAD_TO_DEG,
        physical_longitude: l_phys,
        physical_latitude: b_phys,
    }
}

pub fn libration(t: f64, moon: &GeocentricMoon) -> Libration {
    let parts = libration_components(t, moon);
    let r = MOON_MEAN_RADIUS_KM;
    let d = moon.distance_km;
    Libration {
        elon: parts.longitude(),
        elat: parts.latitude(),
        mlon: wrap_0_360(moon.longitude * RAD_TO_DEG),
        mlat: moon.latitude * RAD_TO_DEG,
        dist_km: d,
        diam_deg: 2.0 * libm::atan(r / libm::sqrt(d * d - r * r)) * RAD_TO_DEG,
    }
}

/// ρ, σ, τ in degrees.
fn physical_series(t: f64, a: &FundamentalArguments) -> (f64, f64, f64) {
    let d = a.elongation;
    let m = a.sun_anomaly;
    let mp = a.moon_anomaly;
    let f = a.argument_of_latitude;
    let om = a.ascending_node;
    let k1 = (119.75 + 131.849 * t) * DEG_TO_RAD;
    let k2 = (72.56 + 20.186 * t) * DEG_TO_RAD;

    use libm::{cos, sin};

    let rho = -0.02752 * cos(mp) - 0.02245 * sin(f) + 0.00684 * cos(mp - 2.0 * f)
        - 0.00293 * cos(2.0 * f)
        - 0.00085 * cos(2.0 * f - 2.0 * d)
        - 0.00054 * cos(mp - 2.0 * d)
        - 0.00020 * sin(mp + f)
        - 0.00014 * cos(mp + 2.0 * f - 2.0 * d)
        - 0.00007 * cos(mp - m);

    let sigma = -0.02816 * sin(mp) + 0.02244 * cos(f)
        - 0.00682 * sin(mp - 2.0 * f)
        - 0.00279 * sin(2.0 * f)
        - 0.00083 * sin(2.0 * f - 2.0 * d)
        + 0.00069 * sin(mp - 2.0 * d)
        + 0.00040 * cos(mp + f)
        - 0.00025 * sin(2.0 * mp)
        - 0.00023 * sin(mp + 2.0 * f)
        + 0.00020 * cos(mp - f)
        + 0.00019 * sin(mp - f)
        + 0.00013 * sin(mp + 2.0 * f - 2.0 * d)
        - 0.00010 * cos(mp - 3.0 * f);

    let tau = 0.02520 * a.e * sin(m) + 0.00473 * sin(2.0 * mp - 2.0 * f)
        - 0.00467 * sin(mp)
        + 0.00396 * sin(k1)
        + 0.00276 * sin(2.0 * mp - 2.0 * d)
        + 0.00196 * sin(om)
        - 0.00183 * cos(mp - f)
        + 0.00115 * sin(mp - 2.0 * d)
        - 0.00096 * sin(mp - d)
        + 0.00046 * sin(2.0 * f - 2.0 * d)
        - 0.00039 * sin(mp - f)
        - 0.00032 * sin(mp - m - d)
        + 0.00027 * sin(2.0 * mp - m - 2.0 * d)
        + 0.00023 * sin(k2)
        - 0.00014 * sin(2.0 * d)
        + 0.00014 * cos(2.0 * mp - 2.0 * f)
        - 0.00012 * sin(mp - 2.0 * f)
        - 0.00012 * sin(2.0 * mp)
        + 0.00011 * sin(2.0 * mp - 2.0 * m - 2.0 * d);

    (rho, sigma, tau)
}
