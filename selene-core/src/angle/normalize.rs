//! Angle wrapping.
//!
//! The radian helpers follow the `fmod` + single correction approach so the
//! result is exact for inputs already inside the target range. The degree
//! helpers are used for ephemeris outputs, which are reported in degrees.

use crate::constants::{PI, TWOPI};
use crate::math::fmod;

/// Wraps an angle to [-π, +π) radians.
#[inline]
pub fn wrap_pm_pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w.abs() >= PI {
        return w - TWOPI.copysign(x);
    }

    w
}

/// Wraps an angle to [0, 2π) radians.
#[inline]
pub fn wrap_0_2pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w < 0.0 {
        let shifted = w + TWOPI;
        // w in (-ulp, 0) rounds up to exactly 2π
        if shifted >= TWOPI {
            0.0
        } else {
            shifted
        }
    } else {
        w
    }
}

/// Wraps degrees to [0, 360).
#[inline]
pub fn wrap_0_360(x: f64) -> f64 {
    let w = fmod(x, 360.0);
    if w < 0.0 {
        let shifted = w + 360.0;
        if shifted >= 360.0 {
            0.0
        } else {
            shifted
        }
    } else {
        w
    }
}

/// Wraps degrees to (-180, +180].
///
/// Note the half-open side differs from [`wrap_pm_pi`]: -180° maps to +180°,
/// which is the convention used for parallactic angles.
#[inline]
pub fn wrap_pm_180(x: f64) -> f64 {
    let w = wrap_0_360(x);
    if w > 180.0 {
        w - 360.0
    } else {
        w
    }
}
