//! Nutation in longitude and obliquity.
//!
//! Four-term series from the lunar node and the mean longitudes of the Sun
//! and Moon, good to about 0.5″ in Δψ and 0.1″ in Δε. That is far below
//! anything visible at the scale of a lunar disk, and it keeps apparent
//! sidereal time and apparent ecliptic longitudes consistent with each other.
//!
//! ```
//! use selene_core::nutation::Nutation;
//!
//! let n = Nutation::compute(0.0);
//! // Near J2000 the node term dominates: Δψ ≈ -14″
//! assert!((n.delta_psi_arcsec() + 13.9).abs() < 1.0);
//! ```

use crate::constants::{ARCSEC_TO_RAD, DEG_TO_RAD};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nutation {
    /// Nutation in longitude, radians.
    pub delta_psi: f64,
    /// Nutation in obliquity, radians.
    pub delta_eps: f64,
}

impl Nutation {
    /// `t` is Julian centuries of TT since J2000.0.
    pub fn compute(t: f64) -> Self {
        let omega = (125.04452 - 1934.136261 * t) * DEG_TO_RAD;
        let l_sun = (280.4665 + 36000.7698 * t) * DEG_TO_RAD;
        let l_moon = (218.3165 + 481267.8813 * t) * DEG_TO_RAD;

        let dpsi = -17.20 * libm::sin(omega) - 1.32 * libm::sin(2.0 * l_sun)
            - 0.23 * libm::sin(2.0 * l_moon)
            + 0.21 * libm::sin(2.0 * omega);
        let deps = 9.20 * libm::cos(omega)
            + 0.57 * libm::cos(2.0 * l_sun)
            + 0.10 * libm::cos(2.0 * l_moon)
            - 0.09 * libm::cos(2.0 * omega);

        Self {
            delta_psi: dpsi * ARCSEC_TO_RAD,
            delta_eps: deps * ARCSEC_TO_RAD,
        }
    }

    pub fn delta_psi_arcsec(&self) -> f64 {
        self.delta_psi / ARCSEC_TO_RAD
    }

    pub fn delta_eps_arcsec(&self) -> f64 {
        self.delta_eps / ARCSEC_TO_RAD
    }
}
