//! Itinerary to [`Trip`] translation
//!
//! Legs are translated in upstream order. A leg that cannot be translated
//! (unaccepted mode, missing endpoint, missing time) is dropped on its own;
//! the trip itself is always produced, possibly with no legs.

use domain::{IndividualLeg, IndividualMode, Leg, Location, PublicLeg, Stop, Trip};
use tracing::debug;

use crate::api::{RawItinerary, RawLeg, RawPlace, text};
use crate::codec::from_epoch_millis;
use crate::lines::{LineContext, line_from_route};
use crate::places::location_from_place;

/// Shape a leg is translated into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LegShape {
    Individual(IndividualMode),
    Public,
}

/// Select the leg shape for an upstream mode, case-insensitively
///
/// `FERRY` is not accepted here even though lines map it to a ferry
/// product, so ferry legs are dropped from trips.
fn leg_shape(mode: &str) -> Option<LegShape> {
    match mode.trim().to_uppercase().as_str() {
        "WALK" => Some(LegShape::Individual(IndividualMode::Walk)),
        "BUS" | "TRAM" | "RAIL" | "TRAIN" | "SUBWAY" => Some(LegShape::Public),
        _ => None,
    }
}

/// Whole meters from an optional upstream distance
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn meters(distance: Option<f64>) -> u32 {
    distance.map_or(0, |d| d.max(0.0) as u32)
}

/// Translate one itinerary
///
/// `from` and `to` are the locations the trip was requested between.
pub(crate) fn trip_from_itinerary(itinerary: RawItinerary, from: &Location, to: &Location) -> Trip {
    let legs = itinerary.legs.into_iter().filter_map(leg_from_raw).collect();

    Trip {
        from: from.clone(),
        to: to.clone(),
        legs,
        duration_seconds: itinerary.duration.unwrap_or(0),
        walk_distance_meters: meters(itinerary.walk_distance),
    }
}

fn leg_from_raw(leg: RawLeg) -> Option<Leg> {
    let mode = leg.mode.unwrap_or_default();
    let Some(shape) = leg_shape(&mode) else {
        debug!(%mode, "Dropping leg with unaccepted mode");
        return None;
    };

    let from = leg.from.and_then(location_from_place)?;
    let to = leg.to.and_then(location_from_place)?;
    let (Some(departure), Some(arrival)) = (
        leg.start_time.and_then(from_epoch_millis),
        leg.end_time.and_then(from_epoch_millis),
    ) else {
        debug!(%mode, "Dropping leg without start or end time");
        return None;
    };

    match shape {
        LegShape::Individual(mode) => Some(Leg::Individual(IndividualLeg {
            mode,
            from,
            departure,
            to,
            arrival,
            distance_meters: meters(leg.distance),
        })),
        LegShape::Public => {
            let Some(route) = leg.route else {
                debug!(%mode, "Dropping public leg without route");
                return None;
            };

            let destination_label = leg
                .trip
                .and_then(|trip| text(trip.trip_headsign))
                .or_else(|| text(leg.headsign))
                .or_else(|| to.name().map(str::to_string))
                .unwrap_or_default();

            let intermediate_stops = leg
                .intermediate_places
                .into_iter()
                .filter_map(stop_from_place)
                .collect();

            Some(Leg::Public(PublicLeg {
                line: line_from_route(route, LineContext::Trip),
                destination_label,
                from,
                departure,
                to,
                arrival,
                intermediate_stops,
                is_real_time: leg.real_time.unwrap_or(false),
            }))
        },
    }
}

/// An intermediate call: location plus arrival time
fn stop_from_place(place: RawPlace) -> Option<Stop> {
    let arrival = place.arrival_time.and_then(from_epoch_millis)?;
    let location = location_from_place(place)?;
    Some(Stop { location, arrival })
}
