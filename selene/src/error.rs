//! Errors surfaced by the orientation pipeline.
//!
//! | Variant | Meaning | Caller action |
//! |---------|---------|---------------|
//! | [`InvalidLocation`](OrientationError::InvalidLocation) | Observer outside valid ranges | Keep the previous location |
//! | [`Oracle`](OrientationError::Oracle) | Ephemeris could not evaluate the date | Propagate, show nothing |
//! | [`Time`](OrientationError::Time) | Unusable time input | Fix the input |
//! | [`Config`](OrientationError::Config) | Bad configuration file | Fix the file |
//! | [`Render`](OrientationError::Render) | Renderer refused a transform | Renderer specific |
//!
//! A degenerate parallactic angle is not an error; it evaluates to 0.

use selene_core::AstroError;
use selene_ephemeris::EphemerisError;
use selene_time::TimeError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrientationError {
    #[error("Invalid location ({latitude}, {longitude}): {message}")]
    InvalidLocation {
        latitude: f64,
        longitude: f64,
        message: String,
    },

    #[error("Ephemeris failure: {0}")]
    Oracle(#[from] EphemerisError),

    #[error("Time error: {0}")]
    Time(#[from] TimeError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),
}

pub type OrientationResult<T> = Result<T, OrientationError>;

impl OrientationError {
    pub fn invalid_location(latitude: f64, longitude: f64, message: impl Into<String>) -> Self {
        Self::InvalidLocation {
            latitude,
            longitude,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn render(message: impl Into<String>) -> Self {
        Self::Render(message.into())
    }

    /// True when the ephemeris, not the caller's input, failed.
    pub fn is_oracle_failure(&self) -> bool {
        matches!(self, Self::Oracle(_))
    }

    pub fn is_invalid_location(&self) -> bool {
        matches!(self, Self::InvalidLocation { .. })
    }
}

impl From<AstroError> for OrientationError {
    fn from(err: AstroError) -> Self {
        match err {
            AstroError::InvalidLocation {
                latitude,
                longitude,
                message,
            } => Self::InvalidLocation {
                latitude,
                longitude,
                message,
            },
            // Anything else comes out of the astronomy itself
            other => Self::Oracle(EphemerisError::Core(other)),
        }
    }
}
