//! Fixed-point geographic coordinate value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean Earth radius used for great-circle distances, in meters
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

const MICRODEGREES_PER_DEGREE: f64 = 1_000_000.0;

/// Convert degrees to integer microdegrees, truncating toward zero
#[must_use]
#[allow(clippy::cast_possible_truncation)] // coordinates fit comfortably in i32 microdegrees
pub fn to_microdegrees(degrees: f64) -> i32 {
    (degrees * MICRODEGREES_PER_DEGREE) as i32
}

/// Convert integer microdegrees back to degrees
#[must_use]
pub fn to_degrees(microdegrees: i32) -> f64 {
    f64::from(microdegrees) / MICRODEGREES_PER_DEGREE
}

/// A geographic point stored as latitude/longitude microdegrees (degrees × 1e6)
///
/// Precision beyond six decimal digits is lost on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    lat: i32,
    lon: i32,
}

impl Point {
    /// Create a point from raw microdegree values
    #[must_use]
    pub const fn from_microdegrees(lat: i32, lon: i32) -> Self {
        Self { lat, lon }
    }

    /// Create a point from floating point degrees
    #[must_use]
    pub fn from_degrees(lat: f64, lon: f64) -> Self {
        Self {
            lat: to_microdegrees(lat),
            lon: to_microdegrees(lon),
        }
    }

    /// Latitude in microdegrees
    #[must_use]
    pub const fn lat(&self) -> i32 {
        self.lat
    }

    /// Longitude in microdegrees
    #[must_use]
    pub const fn lon(&self) -> i32 {
        self.lon
    }

    /// Latitude in degrees
    #[must_use]
    pub fn lat_degrees(&self) -> f64 {
        to_degrees(self.lat)
    }

    /// Longitude in degrees
    #[must_use]
    pub fn lon_degrees(&self) -> f64 {
        to_degrees(self.lon)
    }

    /// Whether both coordinates are set
    ///
    /// A zero latitude or longitude means "coordinates unknown".
    #[must_use]
    pub const fn is_known(&self) -> bool {
        self.lat != 0 && self.lon != 0
    }

    /// Great-circle distance to another point in meters
    ///
    /// Uses the Haversine formula on a spherical Earth.
    #[must_use]
    pub fn distance_meters(&self, other: &Self) -> f64 {
        let lat1_rad = self.lat_degrees().to_radians();
        let lat2_rad = other.lat_degrees().to_radians();
        let delta_lat = (other.lat_degrees() - self.lat_degrees()).to_radians();
        let delta_lon = (other.lon_degrees() - self.lon_degrees()).to_radians();

        let a = (lat1_rad.cos() * lat2_rad.cos()).mul_add(
            (delta_lon / 2.0).sin().powi(2),
            (delta_lat / 2.0).sin().powi(2),
        );
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_METERS * c
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat_degrees(), self.lon_degrees())
    }
}
