//! Terrestrial Time (TT).
//!
//! All ephemeris theories in this workspace are evaluated in TT. A UTC
//! instant is carried over by adding ΔT from [`crate::delta_t`].

use crate::delta_t::delta_t_at;
use crate::julian::JulianDate;
use crate::scales::utc::UTC;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TT(JulianDate);

impl TT {
    pub fn from_julian_date(jd: JulianDate) -> Self {
        Self(jd)
    }

    pub fn j2000() -> Self {
        Self(JulianDate::j2000())
    }

    pub fn from_utc(utc: &UTC) -> Self {
        let jd = utc.to_julian_date();
        Self(jd.add_seconds(delta_t_at(&jd)))
    }

    pub fn to_julian_date(&self) -> JulianDate {
        self.0
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self(self.0.add_days(days))
    }

    pub fn centuries_since_j2000(&self) -> f64 {
        self.0.centuries_since_j2000()
    }

    pub fn days_since_j2000(&self) -> f64 {
        self.0.days_since_j2000()
    }

    pub fn decimal_year(&self) -> f64 {
        self.0.decimal_year()
    }

    /// TT − UTC in seconds for the instant `utc` this was derived from.
    pub fn seconds_ahead_of(&self, utc: &UTC) -> f64 {
        let a = self.0;
        let b = utc.to_julian_date();
        ((a.jd1 - b.jd1) + (a.jd2 - b.jd2)) * selene_core::constants::SECONDS_PER_DAY_F64
    }
}

pub fn tt_from_calendar(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> TT {
    TT::from_julian_date(JulianDate::from_calendar(
        year, month, day, hour, minute, second,
    ))
}

impl fmt::Display for TT {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TT {}", self.0)
    }
}

impl From<JulianDate> for TT {
    fn from(jd: JulianDate) -> Self {
        Self::from_julian_date(jd)
    }
}
