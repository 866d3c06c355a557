use super::core::Angle;
use crate::constants::{HALF_PI, PI};
use crate::{AstroError, MathErrorKind};

// Degree → radian conversion may land one ulp past ±90° or ±180°
const BOUNDARY_SLACK: f64 = 4.0 * f64::EPSILON;

/// Validates a declination in [-90°, +90°].
pub fn validate_declination(angle: Angle) -> Result<Angle, AstroError> {
    let rad = angle.radians();
    if !rad.is_finite() {
        return Err(AstroError::math_error(
            "validate_declination",
            MathErrorKind::NotFinite,
            "Dec not finite",
        ));
    }

    if rad.abs() <= HALF_PI + BOUNDARY_SLACK {
        return Ok(angle);
    }

    Err(AstroError::math_error(
        "validate_declination",
        MathErrorKind::OutOfRange,
        &format!("Dec {:.4}° out of range [-90°, +90°]", angle.degrees()),
    ))
}

/// Validates a geodetic latitude in [-90°, +90°]. The poles are accepted.
pub fn validate_latitude(angle: Angle) -> Result<Angle, AstroError> {
    let rad = angle.radians();
    if !rad.is_finite() {
        return Err(AstroError::math_error(
            "validate_latitude",
            MathErrorKind::NotFinite,
            "Lat not finite",
        ));
    }

    if rad.abs() <= HALF_PI + BOUNDARY_SLACK {
        return Ok(angle);
    }

    Err(AstroError::math_error(
        "validate_latitude",
        MathErrorKind::OutOfRange,
        &format!("Lat {:.4}° out of range [-90°, +90°]", angle.degrees()),
    ))
}

/// Validates a longitude.
///
/// - `normalize = false`: must lie in [-180°, +180°]
/// - `normalize = true`: any finite value, wrapped to [0°, 360°)
pub fn validate_longitude(angle: Angle, normalize: bool) -> Result<Angle, AstroError> {
    let rad = angle.radians();
    if !rad.is_finite() {
        return Err(AstroError::math_error(
            "validate_longitude",
            MathErrorKind::NotFinite,
            "Lon not finite",
        ));
    }

    if normalize {
        return Ok(angle.wrapped());
    }

    if rad.abs() <= PI + BOUNDARY_SLACK {
        return Ok(angle);
    }

    Err(AstroError::math_error(
        "validate_longitude",
        MathErrorKind::OutOfRange,
        &format!("Lon {:.4}° out of range [-180°, +180°]", angle.degrees()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(result: Result<Angle, AstroError>) -> MathErrorKind {
        match result {
            Err(AstroError::MathError { kind, .. }) => kind,
            other => panic!("Expected MathError, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_latitude_bounds() {
        assert!(validate_latitude(Angle::from_degrees(48.8566)).is_ok());
        assert!(validate_latitude(Angle::from_degrees(90.0)).is_ok());
        assert!(validate_latitude(Angle::from_degrees(-90.0)).is_ok());
        assert_eq!(
            kind_of(validate_latitude(Angle::from_degrees(90.0001))),
            MathErrorKind::OutOfRange
        );
        assert_eq!(
            kind_of(validate_latitude(Angle::from_radians(f64::NAN))),
            MathErrorKind::NotFinite
        );
    }

    #[test]
    fn test_validate_longitude_strict() {
        assert!(validate_longitude(Angle::from_degrees(2.3522), false).is_ok());
        assert!(validate_longitude(Angle::from_degrees(-180.0), false).is_ok());
        assert!(validate_longitude(Angle::from_degrees(180.0), false).is_ok());
        assert_eq!(
            kind_of(validate_longitude(Angle::from_degrees(181.0), false)),
            MathErrorKind::OutOfRange
        );
    }

    #[test]
    fn test_validate_longitude_normalize() {
        let lon = validate_longitude(Angle::from_degrees(-90.0), true).unwrap();
        assert!((lon.degrees() - 270.0).abs() < 1e-10);
        assert_eq!(
            kind_of(validate_longitude(Angle::from_radians(f64::INFINITY), true)),
            MathErrorKind::NotFinite
        );
    }

    #[test]
    fn test_validate_declination() {
        assert!(validate_declination(Angle::from_degrees(-28.5)).is_ok());
        assert!(validate_declination(Angle::from_degrees(-91.0)).is_err());
    }
}
