use selene_core::GeoLocation;
use selene_ephemeris::{Body, Ephemeris, EquatorOptions, MeeusEphemeris};
use selene_time::{utc_from_calendar, UTC};

fn paris() -> GeoLocation {
    GeoLocation::PARIS
}

#[test]
fn test_new_moon_january_2024() {
    let eph = MeeusEphemeris::default();
    let when: UTC = "2024-01-11T11:57:00Z".parse().unwrap();
    let phase = eph.moon_phase(&when).unwrap();
    let from_new = phase.min(360.0 - phase);
    assert!(from_new < 1.0, "phase {phase}");
}

#[test]
fn test_quarter_phases_2024() {
    let eph = MeeusEphemeris::default();
    // 2024-01-18 03:53 first quarter, 2024-01-25 17:54 full, 2024-02-02 23:18 last quarter
    let cases = [
        (utc_from_calendar(2024, 1, 18, 3, 53, 0.0), 90.0),
        (utc_from_calendar(2024, 1, 25, 17, 54, 0.0), 180.0),
        (utc_from_calendar(2024, 2, 2, 23, 18, 0.0), 270.0),
    ];
    for (when, expected) in cases {
        let phase = eph.moon_phase(&when).unwrap();
        assert!((phase - expected).abs() < 1.0, "{when}: {phase}");
    }
}

#[test]
fn test_distance_stays_between_perigee_and_apogee() {
    let eph = MeeusEphemeris::default();
    let start = utc_from_calendar(2023, 1, 1, 0, 0, 0.0);
    let mut min_km = f64::MAX;
    let mut max_km = f64::MIN;
    for step in 0..(4 * 365 * 4) {
        let when = start.add_days(step as f64 * 0.25);
        let km = eph.libration(&when).unwrap().dist_km;
        min_km = min_km.min(km);
        max_km = max_km.max(km);
    }
    assert!(min_km > 356_000.0 && min_km < 357_500.0, "min {min_km}");
    assert!(max_km < 407_200.0 && max_km > 406_000.0, "max {max_km}");
}

#[test]
fn test_equatorial_is_deterministic() {
    let eph = MeeusEphemeris::default();
    let when = utc_from_calendar(2024, 1, 11, 0, 0, 0.0);
    let a = eph
        .equatorial(Body::Moon, &when, &paris(), EquatorOptions::APPARENT)
        .unwrap();
    let b = eph
        .equatorial(Body::Moon, &when, &paris(), EquatorOptions::APPARENT)
        .unwrap();
    assert_eq!(a.ra_hours.to_bits(), b.ra_hours.to_bits());
    assert_eq!(a.dec_deg.to_bits(), b.dec_deg.to_bits());
    assert_eq!(a.dist_au.to_bits(), b.dist_au.to_bits());
}

#[test]
fn test_moon_near_sun_at_new_moon() {
    let eph = MeeusEphemeris::default();
    let when = utc_from_calendar(2024, 1, 11, 11, 57, 0.0);
    let moon = eph
        .equatorial(Body::Moon, &when, &paris(), EquatorOptions::GEOMETRIC)
        .unwrap();
    let sun = eph
        .equatorial(Body::Sun, &when, &paris(), EquatorOptions::GEOMETRIC)
        .unwrap();
    let (ra1, dec1) = ((moon.ra_hours * 15.0).to_radians(), moon.dec_deg.to_radians());
    let (ra2, dec2) = ((sun.ra_hours * 15.0).to_radians(), sun.dec_deg.to_radians());
    let cos_sep = dec1.sin() * dec2.sin() + dec1.cos() * dec2.cos() * (ra2 - ra1).cos();
    let separation = cos_sep.clamp(-1.0, 1.0).acos().to_degrees();
    // Ecliptic latitude plus parallax keep them a few degrees apart at most
    assert!(separation < 7.0, "separation {separation}");
}

#[test]
fn test_refraction_only_raises_apparent_position() {
    let eph = MeeusEphemeris::default();
    let when = utc_from_calendar(2024, 1, 11, 0, 0, 0.0);
    let plain = eph
        .equatorial(Body::Moon, &when, &paris(), EquatorOptions::GEOMETRIC)
        .unwrap();
    let refracted = eph
        .equatorial(
            Body::Moon,
            &when,
            &paris(),
            EquatorOptions {
                refraction: true,
                aberration: false,
            },
        )
        .unwrap();
    assert_eq!(plain.dist_au, refracted.dist_au);
    let shift = (plain.dec_deg - refracted.dec_deg).abs()
        + (plain.ra_hours - refracted.ra_hours).abs() * 15.0;
    assert!(shift < 1.5, "shift {shift}");
}

#[test]
fn test_libration_amplitudes_over_a_year() {
    let eph = MeeusEphemeris::default();
    let start = utc_from_calendar(2024, 1, 1, 0, 0, 0.0);
    let mut max_lon: f64 = 0.0;
    let mut max_lat: f64 = 0.0;
    for day in 0..366 {
        let lib = eph.libration(&start.add_days(day as f64)).unwrap();
        max_lon = max_lon.max(lib.elon.abs());
        max_lat = max_lat.max(lib.elat.abs());
    }
    assert!(max_lon > 5.0 && max_lon < 8.5, "max |elon| {max_lon}");
    assert!(max_lat > 5.0 && max_lat < 7.5, "max |elat| {max_lat}");
}
