//! Mean obliquity of the ecliptic.
//!
//! The obliquity is the angle between the Earth's equator and the ecliptic,
//! about 23.44° and slowly decreasing. The IAU 1980 polynomial is used here;
//! it pairs with the short nutation series in [`crate::nutation`].
//!
//! ```
//! use selene_core::obliquity::mean_obliquity;
//!
//! let eps = mean_obliquity(0.0);
//! assert!((eps.to_degrees() - 23.4392911).abs() < 1e-6);
//! ```

use crate::constants::ARCSEC_TO_RAD;
use crate::math::polynomial;

/// Mean obliquity in radians, for `t` Julian centuries of TT since J2000.0.
///
/// At J2000.0: ε₀ = 84381.448″ ≈ 23°26′21.448″
pub fn mean_obliquity(t: f64) -> f64 {
    polynomial(t, &[84381.448, -46.8150, -0.00059, 0.001813]) * ARCSEC_TO_RAD
}

/// True obliquity: mean obliquity plus nutation in obliquity.
pub fn true_obliquity(t: f64, delta_eps: f64) -> f64 {
    mean_obliquity(t) + delta_eps
}
