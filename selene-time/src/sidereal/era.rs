use crate::julian::JulianDate;
use crate::{TimeError, TimeResult};
use selene_core::angle::wrap_0_2pi;
use selene_core::constants::{J2000_JD, TWOPI};
use selene_core::math::fmod;

/// Earth rotation angle (IAU 2000) in radians, [0, 2π), from a UT1 date.
pub fn earth_rotation_angle(ut1: &JulianDate) -> TimeResult<f64> {
    let (d1, d2) = if ut1.jd1 < ut1.jd2 {
        (ut1.jd1, ut1.jd2)
    } else {
        (ut1.jd2, ut1.jd1)
    };

    let t = d1 + (d2 - J2000_JD);

    if !t.is_finite() || t.abs() > 1e12 {
        return Err(TimeError::CalculationError(format!(
            "Time value out of valid range: {} days from J2000",
            t
        )));
    }

    // Fractional days carried separately so the 2π·t term keeps its precision
    let f = fmod(d1, 1.0) + fmod(d2, 1.0);
    let theta = TWOPI * (f + 0.7790572732640 + 0.00273781191135448 * t);

    Ok(wrap_0_2pi(theta))
}
