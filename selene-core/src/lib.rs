//! Low-level building blocks for the lunar orientation model.
//!
//! `selene-core` holds the pieces every other crate in the workspace leans on:
//! typed angles, observer locations, physical constants, the short nutation
//! series, and the shared error type.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`Angle`] type, wrapping, range validation |
//! | [`location`] | [`GeoLocation`] with validated latitude/longitude |
//! | [`nutation`] | Short nutation series (Δψ, Δε) |
//! | [`obliquity`] | Mean obliquity of the ecliptic (IAU 1980) |
//! | [`constants`] | J2000, AU, WGS84, unit conversions |
//! | [`math`] | `fmod`, Horner polynomials, angular separation |
//! | [`errors`] | [`AstroError`] and [`AstroResult`] |
//!
//! # Design Notes
//!
//! - **Radians internally**: trigonometry runs in radians, while the public
//!   observer and ephemeris values are degrees because that is how locations
//!   and lunar quantities are quoted.
//! - **Validated construction**: a [`GeoLocation`] cannot hold an
//!   out-of-range latitude or longitude.

pub mod angle;
pub mod constants;
pub mod errors;
pub mod location;
pub mod math;
pub mod nutation;
pub mod obliquity;

pub use angle::Angle;
pub use errors::{AstroError, AstroResult, MathErrorKind};
pub use location::GeoLocation;
pub use nutation::Nutation;
