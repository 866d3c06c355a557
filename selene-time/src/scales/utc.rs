//! Coordinated Universal Time (UTC).
//!
//! Observation instants enter the system as UTC: the wall clock at startup,
//! parsed ISO 8601 strings, or `chrono` timestamps. Leap seconds are not
//! modelled; a UTC day is always 86400 s, which is also how Unix time and
//! `chrono` count.
//!
//! ```
//! use selene_time::{JulianDate, UTC};
//! use selene_time::scales::utc::utc_from_calendar;
//!
//! let a = UTC::new(1704931200, 0); // 2024-01-11 00:00:00 UTC
//! let b = utc_from_calendar(2024, 1, 11, 0, 0, 0.0);
//! assert!((a.to_julian_date().to_f64() - b.to_julian_date().to_f64()).abs() < 1e-9);
//! assert_eq!(a.to_iso8601(), "2024-01-11T00:00:00.000Z");
//! ```

use crate::julian::JulianDate;
use crate::parsing::parse_iso8601;
use crate::{TimeError, TimeResult};
use chrono::{DateTime, Utc};
use selene_core::constants::{
    NANOSECONDS_PER_SECOND_F64, SECONDS_PER_DAY, SECONDS_PER_DAY_F64, UNIX_EPOCH_JD,
};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UTC(JulianDate);

impl UTC {
    /// From Unix seconds and nanoseconds.
    pub fn new(seconds: i64, nanos: u32) -> Self {
        let days = seconds.div_euclid(SECONDS_PER_DAY);
        let remainder_seconds = seconds.rem_euclid(SECONDS_PER_DAY);
        let jd1 = UNIX_EPOCH_JD + days as f64;
        let jd2 = (remainder_seconds as f64 + nanos as f64 / NANOSECONDS_PER_SECOND_F64)
            / SECONDS_PER_DAY_F64;
        Self(JulianDate::new(jd1, jd2))
    }

    pub fn from_julian_date(jd: JulianDate) -> Self {
        Self(jd)
    }

    pub fn j2000() -> Self {
        Self(JulianDate::j2000())
    }

    pub fn to_julian_date(&self) -> JulianDate {
        self.0
    }

    pub fn add_seconds(&self, seconds: f64) -> Self {
        Self(self.0.add_seconds(seconds))
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self(self.0.add_days(days))
    }

    pub fn now() -> Self {
        Self::from(Utc::now())
    }

    /// Seconds since the Unix epoch, as a float.
    pub fn unix_seconds(&self) -> f64 {
        ((self.0.jd1 - UNIX_EPOCH_JD) + self.0.jd2) * SECONDS_PER_DAY_F64
    }

    /// Converts to a `chrono` timestamp, rounded to the microsecond.
    pub fn to_datetime(&self) -> TimeResult<DateTime<Utc>> {
        let micros = libm::round(self.unix_seconds() * 1e6);
        if !micros.is_finite() || micros.abs() > i64::MAX as f64 {
            return Err(TimeError::ConversionError(format!(
                "{} is outside the representable calendar range",
                self.0
            )));
        }
        let micros = micros as i64;
        let secs = micros.div_euclid(1_000_000);
        let nanos = (micros.rem_euclid(1_000_000) * 1_000) as u32;
        DateTime::from_timestamp(secs, nanos).ok_or_else(|| {
            TimeError::ConversionError(format!(
                "{} is outside the representable calendar range",
                self.0
            ))
        })
    }

    /// `YYYY-MM-DDTHH:MM:SS.sssZ`, or the raw Julian Date if out of calendar range.
    pub fn to_iso8601(&self) -> String {
        match self.to_datetime() {
            Ok(dt) => dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            Err(_) => format!("JD{:.6}", self.0.to_f64()),
        }
    }
}

pub fn utc_from_calendar(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> UTC {
    UTC::from_julian_date(JulianDate::from_calendar(
        year, month, day, hour, minute, second,
    ))
}

impl fmt::Display for UTC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UTC {}", self.0)
    }
}

impl From<JulianDate> for UTC {
    fn from(jd: JulianDate) -> Self {
        Self::from_julian_date(jd)
    }
}

impl From<DateTime<Utc>> for UTC {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::new(dt.timestamp(), dt.timestamp_subsec_nanos())
    }
}

impl FromStr for UTC {
    type Err = TimeError;

    fn from_str(s: &str) -> TimeResult<Self> {
        parse_iso8601(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use selene_core::constants::J2000_JD;

    #[test]
    fn test_utc_constructors() {
        assert_eq!(UTC::new(0, 0).to_julian_date().to_f64(), UNIX_EPOCH_JD);
        assert_eq!(UTC::j2000().to_julian_date().to_f64(), J2000_JD);
        assert_eq!(
            utc_from_calendar(2000, 1, 1, 12, 0, 0.0)
                .to_julian_date()
                .to_f64(),
            J2000_JD
        );
    }

    #[test]
    fn test_negative_unix_seconds() {
        let utc = UTC::new(-43_200, 0);
        assert_eq!(utc.to_julian_date().to_f64(), UNIX_EPOCH_JD - 0.5);
        assert!(utc.to_julian_date().jd2() >= 0.0);
    }

    #[test]
    fn test_utc_arithmetic() {
        let utc = UTC::j2000();
        assert_eq!(utc.add_days(1.0).to_julian_date().to_f64(), J2000_JD + 1.0);
        assert_eq!(
            utc.add_seconds(3600.0).to_julian_date().to_f64(),
            J2000_JD + 1.0 / 24.0
        );
    }

    #[test]
    fn test_chrono_interop() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 11, 11, 57, 0).unwrap();
        let utc = UTC::from(dt);
        assert_eq!(utc.to_datetime().unwrap(), dt);
        assert_eq!(utc.to_iso8601(), "2024-01-11T11:57:00.000Z");
    }

    #[test]
    fn test_unix_seconds() {
        let utc = UTC::new(1_704_931_200, 500_000_000);
        assert!((utc.unix_seconds() - 1_704_931_200.5).abs() < 1e-5);
    }

    #[test]
    fn test_display() {
        let s = UTC::j2000().to_string();
        assert!(s.starts_with("UTC JD 2451545"));
    }
}
