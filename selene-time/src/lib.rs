//! Time scales and sidereal time for the lunar orientation model.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`julian`] | Two-part [`JulianDate`] |
//! | [`scales`] | [`UTC`] and [`TT`] instants |
//! | [`delta_t`] | ΔT = TT − UT from the Espenak–Meeus polynomials |
//! | [`parsing`] | ISO 8601 input via `chrono` |
//! | [`sidereal`] | Earth rotation angle, [`GMST`], [`GAST`], [`LST`] |
//!
//! UT1 is taken equal to UTC. The difference stays under 0.9 s, which moves
//! the sidereal clock by less than 4″.
//!
//! ```
//! use selene_time::{UTC, TT, LST};
//!
//! let utc: UTC = "2024-01-11T00:00:00Z".parse()?;
//! let tt = TT::from_utc(&utc);
//! assert!(tt.seconds_ahead_of(&utc) > 60.0);
//!
//! let lst = LST::from_utc(&utc, 2.3522)?;
//! assert!((0.0..24.0).contains(&lst.hours()));
//! # Ok::<(), selene_time::TimeError>(())
//! ```

pub mod delta_t;
pub mod julian;
pub mod parsing;
pub mod scales;
pub mod sidereal;

pub use julian::JulianDate;
pub use scales::{tt_from_calendar, utc_from_calendar, TT, UTC};
pub use sidereal::{earth_rotation_angle, GAST, GMST, LST};

use thiserror::Error;

pub type TimeResult<T> = Result<T, TimeError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeError {
    #[error("Conversion error: {0}")]
    ConversionError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

impl From<selene_core::AstroError> for TimeError {
    fn from(err: selene_core::AstroError) -> Self {
        TimeError::CalculationError(err.to_string())
    }
}
