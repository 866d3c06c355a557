//! The one piece of state: which instant, seen from where.
//!
//! [`TimeProvider`] fixes a base instant once; every slider position is an
//! offset in days from it. [`LocationProvider`] yields the observer, and
//! [`FixedLocation`] accepts new fixes only when they validate.
//! [`ObservationContext`] pairs the two and is replaced as a whole on
//! every change, so an orientation never mixes an old time with a new
//! location.

use crate::error::{OrientationError, OrientationResult};
use crate::orientation::{compute_orientation_with, MoonOrientation};
use crate::projector::{SceneProjector, SceneTransform};
use log::{info, warn};
use selene_core::constants::SECONDS_PER_DAY_F64;
use selene_core::GeoLocation;
use selene_ephemeris::{Ephemeris, EquatorOptions};
use selene_time::{TimeError, TimeResult, UTC};

/// Base instant captured once, plus offsets from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeProvider {
    base: UTC,
}

impl TimeProvider {
    pub fn new(base: UTC) -> Self {
        Self { base }
    }

    /// Base instant taken from the system clock.
    pub fn starting_now() -> Self {
        Self::new(UTC::now())
    }

    pub fn base(&self) -> UTC {
        self.base
    }

    /// `base + offset_days · 86400 s`. Fractional days are fine.
    pub fn at_offset(&self, offset_days: f64) -> TimeResult<UTC> {
        if !offset_days.is_finite() {
            return Err(TimeError::ConversionError(format!(
                "Day offset must be finite, got {}",
                offset_days
            )));
        }
        Ok(self.base.add_seconds(offset_days * SECONDS_PER_DAY_F64))
    }
}

impl Default for TimeProvider {
    fn default() -> Self {
        Self::starting_now()
    }
}

/// Source of the observer's position.
pub trait LocationProvider {
    fn current(&self) -> GeoLocation;
}

impl LocationProvider for GeoLocation {
    fn current(&self) -> GeoLocation {
        *self
    }
}

/// Holds the last good fix; starts at Paris.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedLocation {
    location: GeoLocation,
}

impl FixedLocation {
    pub fn new(location: GeoLocation) -> OrientationResult<Self> {
        Ok(Self {
            location: location.validated()?,
        })
    }

    /// Replaces the fix. An invalid one is logged and leaves the previous
    /// location in place.
    pub fn update(&mut self, latitude: f64, longitude: f64) -> OrientationResult<GeoLocation> {
        match GeoLocation::new(latitude, longitude) {
            Ok(location) => {
                info!("Location updated to: {:.4}, {:.4}", latitude, longitude);
                self.location = location;
                Ok(location)
            }
            Err(err) => {
                warn!("Unable to use location fix, keeping {}: {}", self.location, err);
                Err(err.into())
            }
        }
    }
}

impl LocationProvider for FixedLocation {
    fn current(&self) -> GeoLocation {
        self.location
    }
}

/// Current (time, location) pair.
///
/// Updates return a new context; a failed update returns an error and the
/// caller still holds the old one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationContext {
    time: UTC,
    location: GeoLocation,
}

impl ObservationContext {
    pub fn new(time: UTC, location: GeoLocation) -> OrientationResult<Self> {
        Ok(Self {
            time,
            location: location.validated()?,
        })
    }

    /// Context at the provider's base instant and the provider's location.
    pub fn from_providers<L>(time: &TimeProvider, location: &L) -> OrientationResult<Self>
    where
        L: LocationProvider + ?Sized,
    {
        Self::new(time.base(), location.current())
    }

    pub fn time(&self) -> UTC {
        self.time
    }

    pub fn location(&self) -> GeoLocation {
        self.location
    }

    #[must_use]
    pub fn with_time(&self, time: UTC) -> Self {
        Self {
            time,
            location: self.location,
        }
    }

    pub fn with_location(&self, location: GeoLocation) -> OrientationResult<Self> {
        Self::new(self.time, location)
    }

    /// Moves to a slider position relative to the provider's base instant.
    pub fn with_offset_days(&self, provider: &TimeProvider, offset_days: f64) -> OrientationResult<Self> {
        let time = provider.at_offset(offset_days).map_err(OrientationError::from)?;
        Ok(self.with_time(time))
    }

    pub fn orientation<E>(&self, ephemeris: &E) -> OrientationResult<MoonOrientation>
    where
        E: Ephemeris + ?Sized,
    {
        self.orientation_with(ephemeris, EquatorOptions::APPARENT)
    }

    pub fn orientation_with<E>(
        &self,
        ephemeris: &E,
        options: EquatorOptions,
    ) -> OrientationResult<MoonOrientation>
    where
        E: Ephemeris + ?Sized,
    {
        compute_orientation_with(ephemeris, &self.time, &self.location, options)
    }

    pub fn transform<E>(&self, ephemeris: &E, projector: &SceneProjector) -> OrientationResult<SceneTransform>
    where
        E: Ephemeris + ?Sized,
    {
        Ok(projector.project(&self.orientation(ephemeris)?))
    }
}
