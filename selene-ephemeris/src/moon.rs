//! Geocentric position of the Moon.
//!
//! Meeus, *Astronomical Algorithms* ch. 47, which abridges ELP-2000/82 to
//! 60 terms in longitude and distance and 60 in latitude. Accuracy is about
//! 10″ in longitude, 4″ in latitude and a few km in distance over several
//! centuries around J2000, well inside the [`MIN_YEAR`](crate::MIN_YEAR) to
//! [`MAX_YEAR`](crate::MAX_YEAR) window.
//!
//! Longitudes are referred to the mean equinox of date. Add nutation in
//! longitude to obtain apparent longitudes.

use selene_core::angle::wrap_0_2pi;
use selene_core::constants::DEG_TO_RAD;
use selene_core::math::polynomial;

/// Delaunay-style arguments for the lunar theory, radians, plus the
/// eccentricity factor `e` of the Earth's orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FundamentalArguments {
    /// Moon's mean longitude L′.
    pub mean_longitude: f64,
    /// Mean elongation D.
    pub elongation: f64,
    /// Sun's mean anomaly M.
    pub sun_anomaly: f64,
    /// Moon's mean anomaly M′.
    pub moon_anomaly: f64,
    /// Argument of latitude F.
    pub argument_of_latitude: f64,
    /// Longitude of the mean ascending node Ω.
    pub ascending_node: f64,
    /// 1 − 0.002516 T − 0.0000074 T²
    pub e: f64,
}

impl FundamentalArguments {
    /// `t` is Julian centuries of TT since J2000.0.
    pub fn compute(t: f64) -> Self {
        let arg = |coefficients: &[f64]| wrap_0_2pi(polynomial(t, coefficients) * DEG_TO_RAD);

        Self {
            mean_longitude: arg(&[
                218.3164477,
                481267.88123421,
                -0.0015786,
                1.0 / 538841.0,
                -1.0 / 65194000.0,
            ]),
            elongation: arg(&[
                297.8501921,
                445267.1114034,
                -0.0018819,
                1.0 / 545868.0,
                -1.0 / 113065000.0,
            ]),
            sun_anomaly: arg(&[357.5291092, 35999.0502909, -0.0001536, 1.0 / 24490000.0]),
            moon_anomaly: arg(&[
                134.9633964,
                477198.8675055,
                0.0087414,
                1.0 / 69699.0,
                -1.0 / 14712000.0,
            ]),
            argument_of_latitude: arg(&[
                93.2720950,
                483202.0175233,
                -0.0036539,
                -1.0 / 3526000.0,
                1.0 / 863310000.0,
            ]),
            ascending_node: arg(&[
                125.0445479,
                -1934.1362891,
                0.0020754,
                1.0 / 467441.0,
                -1.0 / 60616000.0,
            ]),
            e: polynomial(t, &[1.0, -0.002516, -0.0000074]),
        }
    }
}

/// Geometric geocentric ecliptic position, mean equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocentricMoon {
    /// Ecliptic longitude, radians, [0, 2π).
    pub longitude: f64,
    /// Ecliptic latitude, radians.
    pub latitude: f64,
    /// Center-to-center distance, km.
    pub distance_km: f64,
}

#[derive(Debug, Clone, Copy)]
struct PeriodicTerm {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    sin_coeff: i32,
    cos_coeff: i32,
}

impl PeriodicTerm {
    const fn new(d: i8, m: i8, mp: i8, f: i8, sin_coeff: i32, cos_coeff: i32) -> Self {
        Self {
            d,
            m,
            mp,
            f,
            sin_coeff,
            cos_coeff,
        }
    }

    fn argument(&self, a: &FundamentalArguments) -> f64 {
        self.d as f64 * a.elongation
            + self.m as f64 * a.sun_anomaly
            + self.mp as f64 * a.moon_anomaly
            + self.f as f64 * a.argument_of_latitude
    }

    /// Terms containing M are scaled by E (or E² for 2M) for the shrinking
    /// eccentricity of the Earth's orbit.
    fn eccentricity_factor(&self, e: f64) -> f64 {
        match self.m.abs() {
            0 => 1.0,
            1 => e,
            _ => e * e,
        }
    }
}

const MEAN_DISTANCE_KM: f64 = 385000.56;

pub fn geocentric_moon(t: f64) -> GeocentricMoon {
    let args = FundamentalArguments::compute(t);
    let a1 = (119.75 + 131.849 * t) * DEG_TO_RAD;
    let a2 = (53.09 + 479264.290 * t) * DEG_TO_RAD;
    let a3 = (313.45 + 481266.484 * t) * DEG_TO_RAD;

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for term in &LONGITUDE_DISTANCE_TERMS {
        let (s, c) = libm::sincos(term.argument(&args));
        let scale = term.eccentricity_factor(args.e);
        sum_l += term.sin_coeff as f64 * scale * s;
        sum_r += term.cos_coeff as f64 * scale * c;
    }

    let mut sum_b = 0.0;
    for term in &LATITUDE_TERMS {
        let s = libm::sin(term.argument(&args));
        sum_b += term.sin_coeff as f64 * term.eccentricity_factor(args.e) * s;
    }

    let lp = args.mean_longitude;
    let mp = args.moon_anomaly;
    let f = args.argument_of_latitude;

    // Venus, Jupiter and Earth-flattening perturbations
    sum_l += 3958.0 * libm::sin(a1) + 1962.0 * libm::sin(lp - f) + 318.0 * libm::sin(a2);
    sum_b += -2235.0 * libm::sin(lp)
        + 382.0 * libm::sin(a3)
        + 175.0 * libm::sin(a1 - f)
        + 175.0 * libm::sin(a1 + f)
        + 127.0 * libm::sin(lp - mp)
        - 115.0 * libm::sin(lp + mp);

    GeocentricMoon {
        longitude: wrap_0_2pi(lp + sum_l * 1e-6 * DEG_TO_RAD),
        latitude: sum_b * 1e-6 * DEG_TO_RAD,
        distance_km: MEAN_DISTANCE_KM + sum_r / 1000.0,
    }
}

// Table 47.A: D, M, M', F, Σl (1e-6 deg), Σr (1e-3 km)
const LONGITUDE_DISTANCE_TERMS: [PeriodicTerm; 60] = [
    PeriodicTerm::new(0, 0, 1, 0, 6288774, -20905355),
    PeriodicTerm::new(2, 0, -1, 0, 1274027, -3699111),
    PeriodicTerm::new(2, 0, 0, 0, 658314, -2955968),
    PeriodicTerm::new(0, 0, 2, 0, 213618, -569925),
    PeriodicTerm::new(0, 1, 0, 0, -185116, 48888),
    PeriodicTerm::new(0, 0, 0, 2, -114332, -3149),
    PeriodicTerm::new(2, 0, -2, 0, 58793, 246158),
    PeriodicTerm::new(2, -1, -1, 0, 57066, -152138),
    PeriodicTerm::new(2, 0, 1, 0, 53322, -170733),
    PeriodicTerm::new(2, -1, 0, 0, 45758, -204586),
    PeriodicTerm::new(0, 1, -1, 0, -40923, -129620),
    PeriodicTerm::new(1, 0, 0, 0, -34720, 108743),
    PeriodicTerm::new(0, 1, 1, 0, -30383, 104755),
    PeriodicTerm::new(2, 0, 0, -2, 15327, 10321),
    PeriodicTerm::new(0, 0, 1, 2, -12528, 0),
    PeriodicTerm::new(0, 0, 1, -2, 10980, 79661),
    PeriodicTerm::new(4, 0, -1, 0, 10675, -34782),
    PeriodicTerm::new(0, 0, 3, 0, 10034, -23210),
    PeriodicTerm::new(4, 0, -2, 0, 8548, -21636),
    PeriodicTerm::new(2, 1, -1, 0, -7888, 24208),
    PeriodicTerm::new(2, 1, 0, 0, -6766, 30824),
    PeriodicTerm::new(1, 0, -1, 0, -5163, -8379),
    PeriodicTerm::new(1, 1, 0, 0, 4987, -16675),
    PeriodicTerm::new(2, -1, 1, 0, 4036, -12831),
    PeriodicTerm::new(2, 0, 2, 0, 3994, -10445),
    PeriodicTerm::new(4, 0, 0, 0, 3861, -11650),
    PeriodicTerm::new(2, 0, -3, 0, 3665, 14403),
    PeriodicTerm::new(0, 1, -2, 0, -2689, -7003),
    PeriodicTerm::new(2, 0, -1, 2, -2602, 0),
    PeriodicTerm::new(2, -1, -2, 0, 2390, 10056),
    PeriodicTerm::new(1, 0, 1, 0, -2348, 6322),
    PeriodicTerm::new(2, -2, 0, 0, 2236, -9884),
    PeriodicTerm::new(0, 1, 2, 0, -2120, 5751),
    PeriodicTerm::new(0, 2, 0, 0, -2069, 0),
    PeriodicTerm::new(2, -2, -1, 0, 2048, -4950),
    PeriodicTerm::new(2, 0, 1, -2, -1773, 4130),
    PeriodicTerm::new(2, 0, 0, 2, -1595, 0),
    PeriodicTerm::new(4, -1, -1, 0, 1215, -3958),
    PeriodicTerm::new(0, 0, 2, 2, -1110, 0),
    PeriodicTerm::new(3, 0, -1, 0, -892, 3258),
    PeriodicTerm::new(2, 1, 1, 0, -810, 2616),
    PeriodicTerm::new(4, -1, -2, 0, 759, -1897),
    PeriodicTerm::new(0, 2, -1, 0, -713, -2117),
    PeriodicTerm::new(2, 2, -1, 0, -700, 2354),
    PeriodicTerm::new(2, 1, -2, 0, 691, 0),
    PeriodicTerm::new(2, -1, 0, -2, 596, 0),
    PeriodicTerm::new(4, 0, 1, 0, 549, -1423),
    PeriodicTerm::new(0, 0, 4, 0, 537, -1117),
    PeriodicTerm::new(4, -1, 0, 0, 520, -1571),
    PeriodicTerm::new(1, 0, -2, 0, -487, -1739),
    PeriodicTerm::new(2, 1, 0, -2, -399, 0),
    PeriodicTerm::new(0, 0, 2, -2, -381, -4421),
    PeriodicTerm::new(1, 1, 1, 0, 351, 0),
    PeriodicTerm::new(3, 0, -2, 0, -340, 0),
    PeriodicTerm::new(4, 0, -3, 0, 330, 0),
    PeriodicTerm::new(2, -1, 2, 0, 327, 0),
    PeriodicTerm::new(0, 2, 1, 0, -323, 1165),
    PeriodicTerm::new(1, 1, -1, 0, 299, 0),
    PeriodicTerm::new(2, 0, 3, 0, 294, 0),
    PeriodicTerm::new(2, 0, -1, -2, 0, 8752),
];

// Table 47.B: D, M, M', F, Σb (1e-6 deg)
const LATITUDE_TERMS: [PeriodicTerm; 60] = [
    PeriodicTerm::new(0, 0, 0, 1, 5128122, 0),
    PeriodicTerm::new(0, 0, 1, 1, 280602, 0),
    PeriodicTerm::new(0, 0, 1, -1, 277693, 0),
    PeriodicTerm::new(2, 0, 0, -1, 173237, 0),
    PeriodicTerm::new(2, 0, -1, 1, 55413, 0),
    PeriodicTerm::new(2, 0, -1, -1, 46271, 0),
    PeriodicTerm::new(2, 0, 0, 1, 32573, 0),
    PeriodicTerm::new(0, 0, 2, 1, 17198, 0),
    PeriodicTerm::new(2, 0, 1, -1, 9266, 0),
    PeriodicTerm::new(0, 0, 2, -1, 8822, 0),
    PeriodicTerm::new(2, -1, 0, -1, 8216, 0),
    PeriodicTerm::new(2, 0, -2, -1, 4324, 0),
    PeriodicTerm::new(2, 0, 1, 1, 4200, 0),
    PeriodicTerm::new(2, 1, 0, -1, -3359, 0),
    PeriodicTerm::new(2, -1, -1, 1, 2463, 0),
    PeriodicTerm::new(2, -1, 0, 1, 2211, 0),
    PeriodicTerm::new(2, -1, -1, -1, 2065, 0),
    PeriodicTerm::new(0, 1, -1, -1, -1870, 0),
    PeriodicTerm::new(4, 0, -1, -1, 1828, 0),
    PeriodicTerm::new(0, 1, 0, 1, -1794, 0),
    PeriodicTerm::new(0, 0, 0, 3, -1749, 0),
    PeriodicTerm::new(0, 1, -1, 1, -1565, 0),
    PeriodicTerm::new(1, 0, 0, 1, -1491, 0),
    PeriodicTerm::new(0, 1, 1, 1, -1475, 0),
    PeriodicTerm::new(0, 1, 1, -1, -1410, 0),
    PeriodicTerm::new(0, 1, 0, -1, -1344, 0),
    PeriodicTerm::new(1, 0, 0, -1, -1335, 0),
    PeriodicTerm::new(0, 0, 3, 1, 1107, 0),
    PeriodicTerm::new(4, 0, 0, -1, 1021, 0),
    PeriodicTerm::new(4, 0, -1, 1, 833, 0),
    PeriodicTerm::new(0, 0, 1, -3, 777, 0),
    PeriodicTerm::new(4, 0, -2, 1, 671, 0),
    PeriodicTerm::new(2, 0, 0, -3, 607, 0),
    PeriodicTerm::new(2, 0, 2, -1, 596, 0),
    PeriodicTerm::new(2, -1, 1, -1, 491, 0),
    PeriodicTerm::new(2, 0, -2, 1, -451, 0),
    PeriodicTerm::new(0, 0, 3, -1, 439, 0),
    PeriodicTerm::new(2, 0, 2, 1, 422, 0),
    PeriodicTerm::new(2, 0, -3, -1, 421, 0),
    PeriodicTerm::new(2, 1, -1, 1, -366, 0),
    PeriodicTerm::new(2, 1, 0, 1, -351, 0),
    PeriodicTerm::new(4, 0, 0, 1, 331, 0),
    PeriodicTerm::new(2, -1, 1, 1, 315, 0),
    PeriodicTerm::new(2, -2, 0, -1, 302, 0),
    PeriodicTerm::new(0, 0, 1, 3, -283, 0),
    PeriodicTerm::new(2, 1, 1, -1, -229, 0),
    PeriodicTerm::new(1, 1, 0, -1, 223, 0),
    PeriodicTerm::new(1, 1, 0, 1, 223, 0),
    PeriodicTerm::new(0, 1, -2, -1, -220, 0),
    PeriodicTerm::new(2, 1, -1, -1, -220, 0),
    PeriodicTerm::new(1, 0, 1, 1, -185, 0),
    PeriodicTerm::new(2, -1, -2, -1, 181, 0),
    PeriodicTerm::new(0, 1, 2, 1, -177, 0),
    PeriodicTerm::new(4, 0, -2, -1, 176, 0),
    PeriodicTerm::new(4, -1, -1, -1, 166, 0),
    PeriodicTerm::new(1, 0, 1, -1, -164, 0),
    PeriodicTerm::new(4, 0, 1, -1, 132, 0),
    PeriodicTerm::new(1, 0, -1, -1, -119, 0),
    PeriodicTerm::new(4, -1, 0, -1, 115, 0),
    PeriodicTerm::new(2, -2, 0, 1, 107, 0),
];
