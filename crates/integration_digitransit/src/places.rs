//! Place normalization
//!
//! Three upstream shapes map onto the canonical [`Location`]: geocoding
//! features, nearest-query edges and itinerary places. Records without a
//! coordinate pair are skipped.

use domain::{Location, LocationType, Point};
use tracing::debug;

use crate::api::{RawEdge, RawFeature, RawPlace, text};

/// Classify a geocoding layer
fn kind_from_layer(layer: Option<&str>) -> LocationType {
    match layer {
        Some("stop") => LocationType::Station,
        Some("address") => LocationType::Address,
        Some("venue" | "place") => LocationType::PointOfInterest,
        _ => LocationType::Any,
    }
}

/// Map a geocoding feature
///
/// Geocoding never yields a registered stop id, so the result carries none
/// even for `stop` hits.
pub(crate) fn location_from_feature(feature: RawFeature) -> Option<Location> {
    let coordinates = feature.geometry.and_then(|g| g.coordinates)?;
    let &[lon, lat, ..] = coordinates.as_slice() else {
        debug!("Skipping geocoding feature without coordinate pair");
        return None;
    };

    let (name, label, layer) = feature
        .properties
        .map(|p| (text(p.name), text(p.label), text(p.layer)))
        .unwrap_or_default();

    let kind = kind_from_layer(layer.as_deref());
    let place = label.filter(|label| name.as_deref() != Some(label.as_str()));

    Some(Location::new(
        kind,
        None,
        Point::from_degrees(lat, lon),
        place,
        name,
    ))
}

/// Map a nearest-query edge
///
/// The distance is folded into the display name as `"{name} ({distance}m)"`;
/// without a distance the bare name is used.
pub(crate) fn location_from_edge(edge: RawEdge) -> Option<Location> {
    let node = edge.node?;
    let place = node.place?;

    let Some(name) = text(place.name) else {
        debug!("Skipping nearby place without name");
        return None;
    };
    let (Some(lat), Some(lon)) = (place.lat, place.lon) else {
        debug!(%name, "Skipping nearby place without coordinates");
        return None;
    };

    let display_name = match node.distance {
        Some(distance) => format!("{name} ({distance}m)"),
        None => name,
    };

    Some(Location::new(
        LocationType::Station,
        text(place.gtfs_id),
        Point::from_degrees(lat, lon),
        None,
        Some(display_name),
    ))
}

/// Map an itinerary leg endpoint or intermediate place
///
/// A place backed by a stop record becomes a station; anything else is a
/// bare coordinate.
pub(crate) fn location_from_place(place: RawPlace) -> Option<Location> {
    let (Some(lat), Some(lon)) = (place.lat, place.lon) else {
        debug!("Skipping itinerary place without coordinates");
        return None;
    };

    let (kind, id) = match place.stop {
        Some(stop) => (LocationType::Station, text(stop.gtfs_id)),
        None => (LocationType::Coordinate, None),
    };

    Some(Location::new(
        kind,
        id,
        Point::from_degrees(lat, lon),
        None,
        text(place.name),
    ))
}
