use selene_core::AstroError;
use selene_time::TimeError;
use thiserror::Error;

/// Failures of an ephemeris evaluation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("Date {date} (year {year:.2}) outside supported range [{min}, {max}]")]
    OutOfRange {
        date: String,
        year: f64,
        min: f64,
        max: f64,
    },

    #[error("Non-finite result for {quantity} at {date}")]
    NonFinite { quantity: String, date: String },

    #[error("Time error: {0}")]
    Time(#[from] TimeError),

    #[error(transparent)]
    Core(#[from] AstroError),
}

pub type EphemerisResult<T> = Result<T, EphemerisError>;

impl EphemerisError {
    pub fn out_of_range(date: impl Into<String>, year: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            date: date.into(),
            year,
            min,
            max,
        }
    }

    pub fn non_finite(quantity: impl Into<String>, date: impl Into<String>) -> Self {
        Self::NonFinite {
            quantity: quantity.into(),
            date: date.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = EphemerisError::out_of_range("2600-01-01T00:00:00.000Z", 2600.0, 1600.0, 2500.0);
        let msg = err.to_string();
        assert!(msg.contains("2600-01-01"));
        assert!(msg.contains("[1600, 2500]"));
    }

    #[test]
    fn test_from_time_error() {
        let time = TimeError::ParseError("bad".into());
        let err: EphemerisError = time.clone().into();
        assert_eq!(err, EphemerisError::Time(time));
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send_sync<T: Send + Sync>() {}
        _assert_send_sync::<EphemerisError>();
    }
}
