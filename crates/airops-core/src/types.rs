//! Fundamental geographic and simulation types.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use crate::error::CoordinateError;

/// Geographic position: latitude and longitude in degrees, altitude in
/// the host's unit of choice.
///
/// Latitude is always within [-90, 90] and longitude within [-180, 180].
/// Values are stored exactly as given; there is no normalization or
/// wraparound on the validated paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinates")]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
    altitude: f64,
}

/// Unvalidated wire form of [`Coordinates`].
#[derive(Debug, Clone, Copy, Deserialize)]
struct RawCoordinates {
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    altitude: f64,
}

impl TryFrom<RawCoordinates> for Coordinates {
    type Error = CoordinateError;

    fn try_from(raw: RawCoordinates) -> Result<Self, Self::Error> {
        Coordinates::new(raw.latitude, raw.longitude, raw.altitude)
    }
}

impl Coordinates {
    /// Create a coordinate, rejecting an out-of-range latitude or longitude.
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Result<Self, CoordinateError> {
        check_latitude(latitude)?;
        check_longitude(longitude)?;
        Ok(Self {
            latitude,
            longitude,
            altitude,
        })
    }

    /// Create a coordinate from arbitrary angles: latitude is clamped to
    /// [-90, 90] and longitude wrapped into [-180, 180).
    ///
    /// Used for positions computed by navigation math, never for host input.
    pub fn normalized(latitude: f64, longitude: f64, altitude: f64) -> Self {
        let longitude = if (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
            longitude
        } else {
            (longitude - MIN_LONGITUDE).rem_euclid(360.0) + MIN_LONGITUDE
        };
        Self {
            latitude: latitude.clamp(MIN_LATITUDE, MAX_LATITUDE),
            longitude,
            altitude,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Set the latitude. On error the previous value is kept.
    pub fn set_latitude(&mut self, latitude: f64) -> Result<(), CoordinateError> {
        check_latitude(latitude)?;
        self.latitude = latitude;
        Ok(())
    }

    /// Set the longitude. On error the previous value is kept.
    pub fn set_longitude(&mut self, longitude: f64) -> Result<(), CoordinateError> {
        check_longitude(longitude)?;
        self.longitude = longitude;
        Ok(())
    }

    pub fn set_altitude(&mut self, altitude: f64) {
        self.altitude = altitude;
    }

    /// Copy latitude and longitude from `other`, keeping this altitude.
    pub fn set_horizontal(&mut self, other: &Coordinates) {
        self.latitude = other.latitude;
        self.longitude = other.longitude;
    }
}

fn check_latitude(latitude: f64) -> Result<(), CoordinateError> {
    // NaN fails `contains`, so it is rejected too.
    if (MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
        Ok(())
    } else {
        Err(CoordinateError::Latitude(latitude))
    }
}

fn check_longitude(longitude: f64) -> Result<(), CoordinateError> {
    if (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
        Ok(())
    } else {
        Err(CoordinateError::Longitude(longitude))
    }
}
