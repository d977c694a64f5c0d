//! Location entity - stations, addresses, points of interest and bare coordinates

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;
use crate::value_objects::Point;

/// What kind of place a [`Location`] describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    /// A registered stop with a stable identifier
    Station,
    /// A street address
    Address,
    /// A named venue or place
    PointOfInterest,
    /// An anonymous coordinate
    Coordinate,
    /// Unclassified
    Any,
}

impl LocationType {
    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Station => "Station",
            Self::Address => "Address",
            Self::PointOfInterest => "POI",
            Self::Coordinate => "Coordinate",
            Self::Any => "Any",
        }
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A place in the canonical model
///
/// `name` and `place` are never empty strings; blank input is stored as
/// "no value". An `id` is only ever set from an identifier observed upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LocationRecord")]
pub struct Location {
    kind: LocationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    point: Point,
    #[serde(skip_serializing_if = "Option::is_none")]
    place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

/// Wire form of [`Location`]; deserialization goes through [`Location::new`]
#[derive(Debug, Deserialize)]
struct LocationRecord {
    kind: LocationType,
    id: Option<String>,
    point: Point,
    place: Option<String>,
    name: Option<String>,
}

impl From<LocationRecord> for Location {
    fn from(record: LocationRecord) -> Self {
        Self::new(
            record.kind,
            record.id,
            record.point,
            record.place,
            record.name,
        )
    }
}

impl Location {
    /// Create a location, normalizing blank strings to "no value"
    #[must_use]
    pub fn new(
        kind: LocationType,
        id: Option<String>,
        point: Point,
        place: Option<String>,
        name: Option<String>,
    ) -> Self {
        Self {
            kind,
            id: non_empty(id),
            point,
            place: non_empty(place),
            name: non_empty(name),
        }
    }

    /// Create a registered station
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLocation` if `id` is blank.
    pub fn station(
        id: impl Into<String>,
        point: Point,
        name: Option<String>,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::InvalidLocation(
                "station requires an id".to_string(),
            ));
        }
        Ok(Self::new(LocationType::Station, Some(id), point, None, name))
    }

    /// Create an anonymous coordinate location
    #[must_use]
    pub const fn coordinate(point: Point) -> Self {
        Self {
            kind: LocationType::Coordinate,
            id: None,
            point,
            place: None,
            name: None,
        }
    }

    /// The kind of place
    #[must_use]
    pub const fn kind(&self) -> LocationType {
        self.kind
    }

    /// Registered stop identifier, if any
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Position
    #[must_use]
    pub const fn point(&self) -> Point {
        self.point
    }

    /// Latitude in microdegrees
    #[must_use]
    pub const fn lat(&self) -> i32 {
        self.point.lat()
    }

    /// Longitude in microdegrees
    #[must_use]
    pub const fn lon(&self) -> i32 {
        self.point.lon()
    }

    /// Whether this location has usable coordinates
    #[must_use]
    pub const fn has_coordinates(&self) -> bool {
        self.point.is_known()
    }

    /// Locality or full label
    #[must_use]
    pub fn place(&self) -> Option<&str> {
        self.place.as_deref()
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.name, &self.place) {
            (Some(name), Some(place)) if place.starts_with(name.as_str()) => write!(f, "{place}"),
            (Some(name), Some(place)) => write!(f, "{name}, {place}"),
            (Some(name), None) => write!(f, "{name}"),
            (None, _) => write!(f, "{}", self.point),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point() -> Point {
        Point::from_degrees(61.0586, 28.1887)
    }

    #[test]
    fn test_station_requires_id() {
        let err = Location::station("", point(), Some("Lappeenranta".to_string()));
        assert!(matches!(err, Err(DomainError::InvalidLocation(_))));

        let err = Location::station("  ", point(), None);
        assert!(err.is_err());
    }

    #[test]
    fn test_station_with_id() {
        let loc = Location::station("LINKKI:207", point(), Some("Kauppatori".to_string()))
            .expect("valid station");
        assert_eq!(loc.kind(), LocationType::Station);
        assert_eq!(loc.id(), Some("LINKKI:207"));
        assert_eq!(loc.name(), Some("Kauppatori"));
    }

    #[test]
    fn test_empty_strings_become_none() {
        let loc = Location::new(
            LocationType::Address,
            Some(String::new()),
            point(),
            Some("  ".to_string()),
            Some(String::new()),
        );
        assert!(loc.id().is_none());
        assert!(loc.place().is_none());
        assert!(loc.name().is_none());
    }

    #[test]
    fn test_coordinate() {
        let loc = Location::coordinate(point());
        assert_eq!(loc.kind(), LocationType::Coordinate);
        assert!(loc.has_coordinates());
        assert!(!Location::coordinate(Point::default()).has_coordinates());
    }

    #[test]
    fn test_display() {
        let loc = Location::new(
            LocationType::Address,
            None,
            point(),
            Some("Lappeenranta".to_string()),
            Some("Kauppakatu 1".to_string()),
        );
        assert_eq!(loc.to_string(), "Kauppakatu 1, Lappeenranta");
        assert_eq!(
            Location::coordinate(point()).to_string(),
            "61.058600, 28.188700"
        );
    }

    #[test]
    fn test_display_label_already_containing_name() {
        let loc = Location::new(
            LocationType::Address,
            None,
            point(),
            Some("Kauppakatu 1, Lappeenranta".to_string()),
            Some("Kauppakatu 1".to_string()),
        );
        assert_eq!(loc.to_string(), "Kauppakatu 1, Lappeenranta");
    }

    #[test]
    fn test_deserialize_normalizes_blank_strings() {
        let json = r#"{
            "kind": "station",
            "id": " ",
            "point": { "lat": 61058600, "lon": 28188700 },
            "place": "",
            "name": ""
        }"#;
        let loc: Location = serde_json::from_str(json).unwrap();
        assert_eq!(loc.kind(), LocationType::Station);
        assert!(loc.id().is_none());
        assert!(loc.place().is_none());
        assert!(loc.name().is_none());
        assert_eq!(loc.lat(), 61_058_600);
    }

    #[test]
    fn test_serde_roundtrip() {
        let loc = Location::station("LINKKI:207", point(), Some("Kauppatori".to_string()))
            .expect("valid station");
        let json = serde_json::to_string(&loc).unwrap();
        assert!(!json.contains("place"));
        let back: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(back, loc);
    }
}
