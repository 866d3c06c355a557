//! Error type shared by the selene crates.
//!
//! | Variant | Raised by | Caller keeps going? |
//! |---------|-----------|---------------------|
//! | [`InvalidLocation`](AstroError::InvalidLocation) | [`GeoLocation`](crate::GeoLocation) construction | Yes, with the previous location |
//! | [`MathError`](AstroError::MathError) | Angle validation, non-finite input | No |
//!
//! ```
//! use selene_core::{AstroError, GeoLocation};
//!
//! match GeoLocation::new(91.0, 2.35) {
//!     Err(AstroError::InvalidLocation { latitude, .. }) => assert_eq!(latitude, 91.0),
//!     other => panic!("expected a rejected fix, got {other:?}"),
//! }
//! ```

use thiserror::Error;

/// What went wrong inside a [`MathError`](AstroError::MathError).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathErrorKind {
    Overflow,
    InvalidInput,
    /// NaN or infinite.
    NotFinite,
    /// Finite, but outside the allowed interval (latitude past a pole, ...).
    OutOfRange,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AstroError {
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },

    /// Observer coordinates rejected before any ephemeris evaluation.
    #[error("Invalid location ({latitude}, {longitude}): {message}")]
    InvalidLocation {
        latitude: f64,
        longitude: f64,
        message: String,
    },
}

pub type AstroResult<T> = Result<T, AstroError>;

impl AstroError {
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    pub fn invalid_location(latitude: f64, longitude: f64, reason: &str) -> Self {
        Self::InvalidLocation {
            latitude,
            longitude,
            message: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_source() {
        let math = AstroError::math_error("validate_latitude", MathErrorKind::OutOfRange, "Lat 91°");
        assert_eq!(
            math.to_string(),
            "Math error in validate_latitude (OutOfRange): Lat 91°"
        );

        let loc = AstroError::invalid_location(91.0, 2.0, "latitude beyond the pole");
        assert_eq!(
            loc.to_string(),
            "Invalid location (91, 2): latitude beyond the pole"
        );
    }

    #[test]
    fn test_errors_cross_threads() {
        fn send_sync<T: Send + Sync + 'static>() {}
        send_sync::<AstroError>();
    }
}
