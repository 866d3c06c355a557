//! ΔT = TT − UT.
//!
//! Piecewise polynomials by Espenak and Meeus (NASA Five Millennium Canon),
//! fitted to historical observations up to 2005 and extrapolated after.
//! Extrapolated values drift by a few seconds per decade, which at the
//! Moon's angular rate (about 0.5″ per second) is invisible on the disk.
//!
//! | Span | Origin of `t` |
//! |------|---------------|
//! | before 1600, after 2150 | long-term parabola in `(y − 1820)/100` |
//! | 1600–1700 | 1600 |
//! | 1700–1800 | 1700 |
//! | 1800–1860 | 1800 |
//! | 1860–1900 | 1860 |
//! | 1900–1920 | 1900 |
//! | 1920–1941 | 1920 |
//! | 1941–1961 | 1950 |
//! | 1961–1986 | 1975 |
//! | 1986–2005 | 2000 |
//! | 2005–2050 | 2000 |
//! | 2050–2150 | parabola with a linear blend |

use crate::JulianDate;
use selene_core::math::polynomial;

/// ΔT in seconds for a decimal year.
pub fn delta_t_seconds(year: f64) -> f64 {
    if !(1600.0..2150.0).contains(&year) {
        return long_term(year);
    }

    if year < 1700.0 {
        let t = year - 1600.0;
        polynomial(t, &[120.0, -0.9808, -0.01532, 1.0 / 7129.0])
    } else if year < 1800.0 {
        let t = year - 1700.0;
        polynomial(t, &[8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1174000.0])
    } else if year < 1860.0 {
        let t = year - 1800.0;
        polynomial(
            t,
            &[
                13.72,
                -0.332447,
                0.0068612,
                0.0041116,
                -0.00037436,
                0.0000121272,
                -0.0000001699,
                0.000000000875,
            ],
        )
    } else if year < 1900.0 {
        let t = year - 1860.0;
        polynomial(
            t,
            &[
                7.62,
                0.5737,
                -0.251754,
                0.01680668,
                -0.0004473624,
                1.0 / 233174.0,
            ],
        )
    } else if year < 1920.0 {
        let t = year - 1900.0;
        polynomial(t, &[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197])
    } else if year < 1941.0 {
        let t = year - 1920.0;
        polynomial(t, &[21.20, 0.84493, -0.076100, 0.0020936])
    } else if year < 1961.0 {
        let t = year - 1950.0;
        polynomial(t, &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0])
    } else if year < 1986.0 {
        let t = year - 1975.0;
        polynomial(t, &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0])
    } else if year < 2005.0 {
        let t = year - 2000.0;
        polynomial(
            t,
            &[
                63.86,
                0.3345,
                -0.060374,
                0.0017275,
                0.000651814,
                0.00002373599,
            ],
        )
    } else if year < 2050.0 {
        let t = year - 2000.0;
        polynomial(t, &[62.92, 0.32217, 0.005589])
    } else {
        long_term(year) - 0.5628 * (2150.0 - year)
    }
}

/// ΔT in seconds at a Julian Date (either scale; the difference is negligible here).
pub fn delta_t_at(jd: &JulianDate) -> f64 {
    delta_t_seconds(jd.decimal_year())
}

fn long_term(year: f64) -> f64 {
    let u = (year - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        // Published/extrapolated values from the Espenak–Meeus tables
        assert!((delta_t_seconds(2000.0) - 63.86).abs() < 1e-9);
        assert!((delta_t_seconds(1900.0) - -2.79).abs() < 1e-9);
        assert!((delta_t_seconds(1950.0) - 29.07).abs() < 1e-9);
        assert!((delta_t_seconds(1975.0) - 45.45).abs() < 1e-9);
    }

    #[test]
    fn test_recent_era_close_to_observed() {
        // Observed ΔT was 69.2 s in 2024; the 2005 extrapolation overshoots a little
        let dt = delta_t_seconds(2024.0);
        assert!((65.0..78.0).contains(&dt), "ΔT(2024) = {dt}");
    }

    #[test]
    fn test_segment_boundaries_nearly_continuous() {
        for boundary in [1700.0, 1800.0, 1860.0, 1900.0, 1920.0, 1941.0, 1961.0, 1986.0, 2005.0, 2050.0, 2150.0] {
            let before = delta_t_seconds(boundary - 1e-6);
            let after = delta_t_seconds(boundary);
            assert!(
                (before - after).abs() < 2.0,
                "jump at {boundary}: {before} vs {after}"
            );
        }
    }

    #[test]
    fn test_long_term_parabola() {
        assert_eq!(delta_t_seconds(1820.0 - 1000.0), -20.0 + 32.0 * 100.0);
        assert!(delta_t_seconds(2500.0) > delta_t_seconds(2200.0));
    }
}
