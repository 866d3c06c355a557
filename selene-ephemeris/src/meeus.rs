//! [`Ephemeris`] backed by the analytic series in this crate.

use crate::frames::{ecliptic_to_equatorial, topocentric, EquatorialVector};
use crate::libration::{libration, Libration};
use crate::moon::{geocentric_moon, GeocentricMoon};
use crate::refraction::refract;
use crate::sun::geocentric_sun;
use crate::{
    Body, Ephemeris, EphemerisError, EphemerisResult, Equatorial, EquatorOptions, KM_PER_AU,
    MAX_YEAR, MIN_YEAR,
};
use log::trace;
use selene_core::angle::{validate_longitude, wrap_0_360};
use selene_core::constants::{
    DAYS_PER_JULIAN_CENTURY, RAD_TO_DEG, SECONDS_PER_DAY_F64, SPEED_OF_LIGHT_KM_PER_S,
};
use selene_core::obliquity::true_obliquity;
use selene_core::{Angle, GeoLocation, Nutation};
use selene_time::{GAST, LST, TT, UTC};

/// Analytic Moon/Sun ephemeris valid over a configurable span of years.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeeusEphemeris {
    min_year: f64,
    max_year: f64,
}

impl Default for MeeusEphemeris {
    fn default() -> Self {
        Self {
            min_year: MIN_YEAR,
            max_year: MAX_YEAR,
        }
    }
}

impl MeeusEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    /// Narrows the accepted span. Bounds outside the theory's own span are clamped.
    pub fn with_year_range(min_year: f64, max_year: f64) -> Self {
        Self {
            min_year: min_year.max(MIN_YEAR),
            max_year: max_year.min(MAX_YEAR),
        }
    }

    pub fn year_range(&self) -> (f64, f64) {
        (self.min_year, self.max_year)
    }

    fn terrestrial_time(&self, time: &UTC) -> EphemerisResult<TT> {
        let year = time.to_julian_date().decimal_year();
        if !year.is_finite() || year < self.min_year || year > self.max_year {
            return Err(EphemerisError::out_of_range(
                time.to_iso8601(),
                year,
                self.min_year,
                self.max_year,
            ));
        }
        Ok(TT::from_utc(time))
    }

    /// Moon as it appeared when the light now arriving left it.
    fn retarded_moon(t: f64) -> GeocentricMoon {
        let moon = geocentric_moon(t);
        let light_days = moon.distance_km / SPEED_OF_LIGHT_KM_PER_S / SECONDS_PER_DAY_F64;
        geocentric_moon(t - light_days / DAYS_PER_JULIAN_CENTURY)
    }

    fn ensure_finite(value: f64, quantity: &str, time: &UTC) -> EphemerisResult<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(EphemerisError::non_finite(quantity, time.to_iso8601()))
        }
    }
}

impl Ephemeris for MeeusEphemeris {
    fn equatorial(
        &self,
        body: Body,
        time: &UTC,
        observer: &GeoLocation,
        options: EquatorOptions,
    ) -> EphemerisResult<Equatorial> {
        let tt = self.terrestrial_time(time)?;
        let t = tt.centuries_since_j2000();
        let nutation = Nutation::compute(t);
        let eps = true_obliquity(t, nutation.delta_eps);

        let geocentric: EquatorialVector = match body {
            Body::Moon => {
                let moon = if options.aberration {
                    Self::retarded_moon(t)
                } else {
                    geocentric_moon(t)
                };
                ecliptic_to_equatorial(
                    moon.longitude + nutation.delta_psi,
                    moon.latitude,
                    moon.distance_km,
                    eps,
                )
            }
            Body::Sun => {
                let sun = geocentric_sun(t);
                let longitude = if options.aberration {
                    sun.apparent_longitude
                } else {
                    sun.true_longitude + nutation.delta_psi
                };
                ecliptic_to_equatorial(longitude, 0.0, sun.distance_au * KM_PER_AU, eps)
            }
        };

        let lst = LST::for_location(time, observer)?.radians();
        let mut position = topocentric(&geocentric, observer, lst);
        if options.refraction {
            position = refract(&position, observer, lst);
        }

        trace!(
            "{} at {}: geocentric ra={:.6}h dec={:.6}°, topocentric ra={:.6}h dec={:.6}° ({:?})",
            body,
            time.to_iso8601(),
            Angle::from_radians(geocentric.ra).hours(),
            geocentric.dec * RAD_TO_DEG,
            Angle::from_radians(position.ra).hours(),
            position.dec * RAD_TO_DEG,
            options
        );

        Ok(Equatorial {
            ra_hours: Self::ensure_finite(Angle::from_radians(position.ra).hours(), "ra", time)?,
            dec_deg: Self::ensure_finite(position.dec * RAD_TO_DEG, "dec", time)?,
            dist_au: Self::ensure_finite(position.distance_km / KM_PER_AU, "distance", time)?,
        })
    }

    fn local_sidereal_time(&self, time: &UTC, longitude_deg: Option<f64>) -> EphemerisResult<f64> {
        let gast = GAST::from_utc(time)?;
        let hours = match longitude_deg {
            None => gast.hours(),
            Some(lon) => {
                validate_longitude(Angle::from_degrees(lon), true)?;
                LST::from_gast(&gast, lon).hours()
            }
        };
        Self::ensure_finite(hours, "sidereal time", time)
    }

    fn libration(&self, time: &UTC) -> EphemerisResult<Libration> {
        let t = self.terrestrial_time(time)?.centuries_since_j2000();
        let lib = libration(t, &geocentric_moon(t));
        trace!(
            "libration at {}: elon={:.4}° elat={:.4}° dist={:.1} km",
            time.to_iso8601(),
            lib.elon,
            lib.elat,
            lib.dist_km
        );
        Self::ensure_finite(lib.elon, "libration longitude", time)?;
        Self::ensure_finite(lib.elat, "libration latitude", time)?;
        Ok(lib)
    }

    fn moon_phase(&self, time: &UTC) -> EphemerisResult<f64> {
        let t = self.terrestrial_time(time)?.centuries_since_j2000();
        let nutation = Nutation::compute(t);
        let moon_lon = geocentric_moon(t).longitude + nutation.delta_psi;
        let sun_lon = geocentric_sun(t).apparent_longitude;
        let phase = wrap_0_360((moon_lon - sun_lon) * RAD_TO_DEG);
        Self::ensure_finite(phase, "phase", time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use selene_time::utc_from_calendar;

    fn eph() -> MeeusEphemeris {
        MeeusEphemeris::default()
    }

    #[test]
    fn test_out_of_range_dates_fail() {
        let early = utc_from_calendar(1500, 6, 1, 0, 0, 0.0);
        let late = utc_from_calendar(2600, 6, 1, 0, 0, 0.0);
        for when in [early, late] {
            assert!(matches!(
                eph().moon_phase(&when),
                Err(EphemerisError::OutOfRange { .. })
            ));
            assert!(matches!(
                eph().libration(&when),
                Err(EphemerisError::OutOfRange { .. })
            ));
            assert!(matches!(
                eph().equatorial(Body::Moon, &when, &GeoLocation::PARIS, EquatorOptions::APPARENT),
                Err(EphemerisError::OutOfRange { .. })
            ));
        }
    }

    #[test]
    fn test_narrowed_range() {
        let e = MeeusEphemeris::with_year_range(2000.0, 3000.0);
        assert_eq!(e.year_range(), (2000.0, MAX_YEAR));
        let when = utc_from_calendar(1999, 1, 1, 0, 0, 0.0);
        assert!(e.libration(&when).is_err());
    }

    #[test]
    fn test_sidereal_longitude_term() {
        let when = utc_from_calendar(2024, 1, 11, 0, 0, 0.0);
        let greenwich = eph().local_sidereal_time(&when, None).unwrap();
        let paris = eph().local_sidereal_time(&when, Some(2.3522)).unwrap();
        let diff = (paris - greenwich).rem_euclid(24.0);
        assert!((diff - 2.3522 / 15.0).abs() < 1e-9);
        assert!(eph().local_sidereal_time(&when, Some(f64::NAN)).is_err());
    }

    #[test]
    fn test_light_time_shifts_moon_slightly() {
        let when = utc_from_calendar(2024, 3, 1, 6, 0, 0.0);
        let obs = GeoLocation::PARIS;
        let geometric = eph()
            .equatorial(Body::Moon, &when, &obs, EquatorOptions::GEOMETRIC)
            .unwrap();
        let retarded = eph()
            .equatorial(
                Body::Moon,
                &when,
                &obs,
                EquatorOptions {
                    refraction: false,
                    aberration: true,
                },
            )
            .unwrap();
        // 1.3 s of lunar motion is well under an arcsecond per axis
        let dra_arcsec = (geometric.ra_hours - retarded.ra_hours).abs() * 15.0 * 3600.0;
        let ddec_arcsec = (geometric.dec_deg - retarded.dec_deg).abs() * 3600.0;
        assert!(dra_arcsec < 2.0 && ddec_arcsec < 2.0);
        assert!(dra_arcsec + ddec_arcsec > 0.0);
    }

    #[test]
    fn test_topocentric_distance_differs_from_geocentric() {
        let when = utc_from_calendar(2024, 1, 11, 0, 0, 0.0);
        let eq = eph()
            .equatorial(Body::Moon, &when, &GeoLocation::PARIS, EquatorOptions::APPARENT)
            .unwrap();
        let lib = eph().libration(&when).unwrap();
        let topo_km = eq.dist_au * KM_PER_AU;
        // Observer is at most one Earth radius closer or farther
        assert!((topo_km - lib.dist_km).abs() < 6400.0);
    }

    #[test]
    fn test_sun_distance_about_one_au() {
        let when = utc_from_calendar(2024, 7, 4, 12, 0, 0.0);
        let sun = eph()
            .equatorial(Body::Sun, &when, &GeoLocation::PARIS, EquatorOptions::GEOMETRIC)
            .unwrap();
        assert!((sun.dist_au - 1.0167).abs() < 0.001);
        // early July: Sun near 6.9h RA, +22.8° dec
        assert!((sun.ra_hours - 6.9).abs() < 0.2);
        assert!((sun.dec_deg - 22.8).abs() < 0.5);
    }
}
