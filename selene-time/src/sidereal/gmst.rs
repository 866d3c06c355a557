use super::era::earth_rotation_angle;
use crate::scales::{TT, UTC};
use crate::TimeResult;
use selene_core::angle::wrap_0_2pi;
use selene_core::constants::ARCSEC_TO_RAD;
use selene_core::math::polynomial;
use selene_core::obliquity::mean_obliquity;
use selene_core::{Angle, Nutation};

/// Greenwich mean sidereal time.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GMST(Angle);

impl GMST {
    /// UT1 is taken equal to UTC; TT follows from ΔT.
    pub fn from_utc(utc: &UTC) -> TimeResult<Self> {
        Self::from_ut1_and_tt(utc, &TT::from_utc(utc))
    }

    pub fn from_ut1_and_tt(ut1: &UTC, tt: &TT) -> TimeResult<Self> {
        let era = earth_rotation_angle(&ut1.to_julian_date())?;
        let t = tt.centuries_since_j2000();

        let polynomial_arcsec = polynomial(
            t,
            &[
                0.014506,
                4612.156534,
                1.3915817,
                -0.00000044,
                -0.000029956,
                -0.0000000368,
            ],
        );

        Ok(Self(Angle::from_radians(wrap_0_2pi(
            era + polynomial_arcsec * ARCSEC_TO_RAD,
        ))))
    }

    pub fn angle(&self) -> Angle {
        self.0
    }

    pub fn hours(&self) -> f64 {
        self.0.hours()
    }

    pub fn radians(&self) -> f64 {
        self.0.radians()
    }
}

/// Greenwich apparent sidereal time.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GAST(Angle);

impl GAST {
    pub fn from_utc(utc: &UTC) -> TimeResult<Self> {
        let tt = TT::from_utc(utc);
        let gmst = GMST::from_ut1_and_tt(utc, &tt)?;
        let t = tt.centuries_since_j2000();
        let nutation = Nutation::compute(t);
        let eps = mean_obliquity(t) + nutation.delta_eps;
        let equation_of_equinoxes = nutation.delta_psi * libm::cos(eps);
        Ok(Self(Angle::from_radians(wrap_0_2pi(
            gmst.radians() + equation_of_equinoxes,
        ))))
    }

    pub fn angle(&self) -> Angle {
        self.0
    }

    pub fn hours(&self) -> f64 {
        self.0.hours()
    }

    pub fn radians(&self) -> f64 {
        self.0.radians()
    }
}

impl std::fmt::Display for GMST {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GMST {:.6}h", self.hours())
    }
}

impl std::fmt::Display for GAST {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GAST {:.6}h", self.hours())
    }
}
