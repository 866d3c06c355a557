//! Sidereal time.
//!
//! | Type | Definition |
//! |------|------------|
//! | [`GMST`] | Earth rotation angle plus the IAU 2006 polynomial |
//! | [`GAST`] | GMST plus the equation of the equinoxes (Δψ cos ε) |
//! | [`LST`] | GAST plus the observer's east longitude |
//!
//! All three are kept as an [`Angle`](selene_core::Angle) in [0, 2π) and
//! reported in hours by default, matching right ascension.

mod era;
mod gmst;
mod lst;

pub use era::earth_rotation_angle;
pub use gmst::{GAST, GMST};
pub use lst::LST;

/// Hour angle in hours, wrapped to [-12, +12), west positive.
pub fn hour_angle_hours(sidereal_hours: f64, ra_hours: f64) -> f64 {
    let ha = libm::fmod(sidereal_hours - ra_hours, 24.0);
    if ha >= 12.0 {
        ha - 24.0
    } else if ha < -12.0 {
        ha + 24.0
    } else {
        ha
    }
}
