use selene_core::GeoLocation;
use selene_time::sidereal::hour_angle_hours;
use selene_time::{GAST, GMST, LST, TT, UTC};

fn utc(text: &str) -> UTC {
    text.parse().unwrap()
}

#[test]
fn test_sidereal_day_is_shorter_than_solar_day() {
    let a = GMST::from_utc(&utc("2024-01-11T00:00:00Z")).unwrap().hours();
    let b = GMST::from_utc(&utc("2024-01-12T00:00:00Z")).unwrap().hours();
    // One solar day advances the sidereal clock by ~3m56.56s
    let gain_minutes = (b - a).rem_euclid(24.0) * 60.0;
    assert!((gain_minutes - 3.9426).abs() < 0.001, "{gain_minutes}");
}

#[test]
fn test_equation_of_equinoxes_is_small() {
    let when = utc("2024-01-11T00:00:00Z");
    let gmst = GMST::from_utc(&when).unwrap().hours();
    let gast = GAST::from_utc(&when).unwrap().hours();
    let diff_seconds = ((gast - gmst + 12.0).rem_euclid(24.0) - 12.0) * 3600.0;
    assert!(diff_seconds.abs() < 1.2, "{diff_seconds}");
}

#[test]
fn test_local_sidereal_time_tracks_longitude() {
    let when = utc("2024-01-11T00:00:00Z");
    let paris = LST::for_location(&when, &GeoLocation::PARIS).unwrap();
    let greenwich = LST::from_utc(&when, 0.0).unwrap();
    let diff = (paris.hours() - greenwich.hours()).rem_euclid(24.0);
    assert!((diff - 2.3522 / 15.0).abs() < 1e-9);
    assert_eq!(paris.longitude_degrees(), 2.3522);

    let west = LST::from_utc(&when, -120.0).unwrap();
    let diff = (greenwich.hours() - west.hours()).rem_euclid(24.0);
    assert!((diff - 8.0).abs() < 1e-9);
}

#[test]
fn test_hour_angle_of_meridian_transit() {
    let when = utc("2024-01-11T00:00:00Z");
    let lst = LST::for_location(&when, &GeoLocation::PARIS).unwrap();
    // A target at the local sidereal time is on the meridian; 6 h less is 6 h west
    assert!(hour_angle_hours(lst.hours(), lst.hours()).abs() < 1e-12);
    let west = hour_angle_hours(lst.hours(), (lst.hours() - 6.0).rem_euclid(24.0));
    assert!((west - 6.0).abs() < 1e-9);
}

#[test]
fn test_terrestrial_time_leads_utc_by_delta_t() {
    let when = utc("2024-01-11T00:00:00Z");
    let lead = TT::from_utc(&when).seconds_ahead_of(&when);
    // ΔT in 2024 is about 69 s; the polynomial gives a little more
    assert!(lead > 66.0 && lead < 76.0, "{lead}");
}

#[test]
fn test_offsets_and_parsing_agree() {
    let base = utc("2024-01-11T00:00:00Z");
    let plus = base.add_days(1.5);
    assert_eq!(plus.to_iso8601(), "2024-01-12T12:00:00.000Z");
    assert_eq!(utc("2024-01-12T13:00:00+01:00").to_iso8601(), plus.to_iso8601());
    assert!("not a date".parse::<UTC>().is_err());
}
