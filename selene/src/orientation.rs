//! Orientation calculator: observer + instant → how the Moon looks.
//!
//! [`compute_orientation`] asks an [`Ephemeris`] for four things and turns
//! them into a [`MoonOrientation`]:
//!
//! - libration in longitude and latitude plus the geocentric distance,
//! - the phase angle (0 new, 180 full),
//! - the topocentric apparent RA/Dec of the Moon,
//! - local sidereal time at the observer's longitude.
//!
//! The last two give the hour angle, from which [`parallactic_angle`]
//! derives the tilt of the lunar disk against the observer's vertical.
//!
//! ```
//! use selene::orientation::parallactic_angle;
//!
//! // On the meridian, south of the zenith: the pole points straight up.
//! assert_eq!(parallactic_angle(0.0, 10.0, 48.8566), 0.0);
//! // West of the meridian the disk rotates clockwise (positive).
//! assert!(parallactic_angle(3.0, 10.0, 48.8566) > 0.0);
//! ```

use crate::error::{OrientationError, OrientationResult};
use log::debug;
use selene_core::angle::{validate_declination, wrap_0_360, wrap_pm_180};
use selene_core::constants::RAD_TO_DEG;
use selene_core::{Angle, GeoLocation};
use selene_ephemeris::{Body, Ephemeris, EphemerisError, EquatorOptions};
use selene_time::sidereal::hour_angle_hours;
use selene_time::UTC;
use serde::{Deserialize, Serialize};

/// Below this both terms of the parallactic angle are treated as zero.
const DEGENERATE_EPSILON: f64 = 1e-12;

/// Snapshot of the Moon's appearance for one (time, location) pair.
///
/// Derived on demand and never cached, so it always matches the inputs it
/// was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonOrientation {
    /// Libration in longitude, degrees.
    pub elon: f64,
    /// Libration in latitude, degrees.
    pub elat: f64,
    /// Earth–Moon centre distance, km.
    pub distance_km: f64,
    /// [0, 360): 0 new, 90 first quarter, 180 full, 270 third quarter.
    pub phase_angle_deg: f64,
    /// (-180, 180], positive when the body is west of the meridian.
    pub parallactic_angle_deg: f64,
}

/// Parallactic angle in degrees for an hour angle (hours, positive west),
/// declination and observer latitude (degrees).
///
/// When the body sits at the zenith the angle is undefined and 0 is
/// returned. At the poles `tan(lat)` is huge but finite, so the result is
/// still a finite number.
pub fn parallactic_angle(hour_angle_hours: f64, dec_deg: f64, lat_deg: f64) -> f64 {
    let (sin_ha, cos_ha) = Angle::from_hours(hour_angle_hours).sin_cos();
    let (sin_dec, cos_dec) = Angle::from_degrees(dec_deg).sin_cos();
    let tan_lat = Angle::from_degrees(lat_deg).tan();

    let num = sin_ha;
    let den = tan_lat * cos_dec - sin_dec * cos_ha;

    if num.abs() < DEGENERATE_EPSILON && den.abs() < DEGENERATE_EPSILON {
        return 0.0;
    }

    wrap_pm_180(libm::atan2(num, den) * RAD_TO_DEG)
}

/// Orientation as seen by an observer at sea level, with light-time and
/// refraction applied to the Moon's position.
pub fn compute_orientation<E>(
    ephemeris: &E,
    time: &UTC,
    location: &GeoLocation,
) -> OrientationResult<MoonOrientation>
where
    E: Ephemeris + ?Sized,
{
    compute_orientation_with(ephemeris, time, location, EquatorOptions::APPARENT)
}

/// [`compute_orientation`] with explicit corrections for the Moon's position.
pub fn compute_orientation_with<E>(
    ephemeris: &E,
    time: &UTC,
    location: &GeoLocation,
    options: EquatorOptions,
) -> OrientationResult<MoonOrientation>
where
    E: Ephemeris + ?Sized,
{
    // Reject bad observers before the ephemeris sees them
    let location = location.validated()?;

    let moon = ephemeris.equatorial(Body::Moon, time, &location, options)?;
    let lst_hours = ephemeris.local_sidereal_time(time, Some(location.longitude_degrees()))?;
    let libration = ephemeris.libration(time)?;
    let phase = ephemeris.moon_phase(time)?;

    // A declination past a pole from the oracle surfaces as an oracle failure
    validate_declination(Angle::from_degrees(moon.dec_deg))?;
    if !(libration.dist_km.is_finite() && libration.dist_km > 0.0) {
        return Err(OrientationError::Oracle(EphemerisError::non_finite(
            "distance",
            time.to_iso8601(),
        )));
    }

    // LST − RA, folded into [-12, 12) h
    let hour_angle = hour_angle_hours(lst_hours, moon.ra_hours);
    let orientation = MoonOrientation {
        elon: libration.elon,
        elat: libration.elat,
        distance_km: libration.dist_km,
        phase_angle_deg: wrap_0_360(phase),
        parallactic_angle_deg: parallactic_angle(
            hour_angle,
            moon.dec_deg,
            location.latitude_degrees(),
        ),
    };

    debug!(
        "orientation at {} for {}: elon={:.4}° elat={:.4}° dist={:.1} km phase={:.3}° q={:.3}° (HA={:.4}h)",
        time.to_iso8601(),
        location,
        orientation.elon,
        orientation.elat,
        orientation.distance_km,
        orientation.phase_angle_deg,
        orientation.parallactic_angle_deg,
        hour_angle
    );

    Ok(orientation)
}
