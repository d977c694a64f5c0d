//! GraphQL query text builders
//!
//! Coordinates are rendered in degrees with six decimals, matching the
//! microdegree precision of [`Point`]. String arguments are embedded as JSON
//! string literals, which are valid GraphQL string literals.

use chrono::NaiveDateTime;
use domain::Point;

/// Number of itineraries requested per trip query
pub(crate) const TRIP_ITINERARIES: u32 = 5;

/// Trivial query used to probe service health
pub(crate) const HEALTH_QUERY: &str = "{ __typename }";

const PLACE_FIELDS: &str = "name lat lon stop { gtfsId }";
const ROUTE_FIELDS: &str = "gtfsId shortName longName mode color textColor";

/// Escape a value as a quoted GraphQL string literal
fn string_literal(value: &str) -> String {
    serde_json::Value::String(value.to_owned()).to_string()
}

fn coordinates(point: Point) -> String {
    format!(
        "{{lat: {:.6}, lon: {:.6}}}",
        point.lat_degrees(),
        point.lon_degrees()
    )
}

/// Trip planning between two points
///
/// `local_time` is the departure (or arrival, with `arrive_by`) time in the
/// network's time zone.
pub(crate) fn plan_query(
    from: Point,
    to: Point,
    local_time: NaiveDateTime,
    arrive_by: bool,
) -> String {
    format!(
        "{{ plan(from: {from}, to: {to}, date: \"{date}\", time: \"{time}\", \
         arriveBy: {arrive_by}, numItineraries: {TRIP_ITINERARIES}) {{ \
         itineraries {{ duration walkDistance \
         legs {{ mode startTime endTime distance realTime headsign \
         from {{ {PLACE_FIELDS} }} to {{ {PLACE_FIELDS} }} \
         intermediatePlaces {{ arrivalTime {PLACE_FIELDS} }} \
         route {{ {ROUTE_FIELDS} }} trip {{ tripHeadsign }} }} }} }} }}",
        from = coordinates(from),
        to = coordinates(to),
        date = local_time.format("%Y-%m-%d"),
        time = local_time.format("%H:%M:%S"),
    )
}

/// Upcoming departures from one stop
pub(crate) fn departures_query(stop_id: &str, max_departures: u32) -> String {
    format!(
        "{{ stop(id: {id}) {{ stoptimesWithoutPatterns(numberOfDepartures: {max_departures}) {{ \
         scheduledDeparture realtimeDeparture departureDelay realtime realtimeState headsign \
         trip {{ route {{ {ROUTE_FIELDS} }} }} }} }} }}",
        id = string_literal(stop_id),
    )
}

/// Free-text place search
pub(crate) fn geocode_query(text: &str, max_locations: u32) -> String {
    format!(
        "{{ geocode(text: {text}, size: {max_locations}) {{ features {{ \
         properties {{ name label layer }} geometry {{ coordinates }} }} }} }}",
        text = string_literal(text),
    )
}

/// Stops around a point
pub(crate) fn nearest_query(point: Point, max_distance: u32, max_locations: u32) -> String {
    format!(
        "{{ nearest(lat: {lat:.6}, lon: {lon:.6}, maxDistance: {max_distance}, \
         first: {max_locations}, filterByPlaceTypes: [STOP]) {{ edges {{ node {{ distance \
         place {{ ... on Stop {{ gtfsId name lat lon }} }} }} }} }} }}",
        lat = point.lat_degrees(),
        lon = point.lon_degrees(),
    )
}
