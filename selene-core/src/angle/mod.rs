//! Angle type, wrapping helpers and range validation.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Angle`] | Typed angle stored in radians |
//! | [`wrap_0_2pi`], [`wrap_pm_pi`] | Radian wrapping |
//! | [`wrap_0_360`], [`wrap_pm_180`] | Degree wrapping for ephemeris outputs |
//! | [`validate_latitude`], [`validate_longitude`] | Observer coordinate checks |

mod core;
mod normalize;
mod validate;

pub use self::core::Angle;
pub use normalize::{wrap_0_2pi, wrap_0_360, wrap_pm_180, wrap_pm_pi};
pub use validate::{validate_declination, validate_latitude, validate_longitude};
