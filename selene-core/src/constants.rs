pub const J2000_JD: f64 = 2451545.0;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

pub const MJD_ZERO_POINT: f64 = 2_400_000.5;

/// Unix epoch (1970-01-01T00:00:00) as a Julian Date.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

pub const SECONDS_PER_DAY: i64 = 86_400;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const NANOSECONDS_PER_SECOND_F64: f64 = 1_000_000_000.0;

/// Degrees of rotation per hour of right ascension or hour angle.
pub const DEGREES_PER_HOUR: f64 = 15.0;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

#[allow(clippy::excessive_precision)]
pub const ARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-6;

/// Astronomical Unit in kilometers (IAU 2012 definition, exact).
pub const KM_PER_AU: f64 = 149_597_870.7;

/// Speed of light in km/s (exact).
pub const SPEED_OF_LIGHT_KM_PER_S: f64 = 299_792.458;

/// WGS84 semi-major axis in kilometers.
pub const WGS84_SEMI_MAJOR_AXIS_KM: f64 = 6378.137;

pub const WGS84_FLATTENING: f64 = 0.0033528106647474805;

/// Mean radius of the Moon in kilometers.
pub const MOON_MEAN_RADIUS_KM: f64 = 1737.4;

/// Inclination of the mean lunar equator to the ecliptic (Meeus ch. 53).
pub const MOON_EQUATOR_INCLINATION_DEG: f64 = 1.54242;
