//! Stop departure normalization
//!
//! Stop times count seconds from the local midnight of the service day, so a
//! reference "now" in the network's time zone anchors every record.

use chrono::{DateTime, TimeZone};
use domain::Departure;
use tracing::debug;

use crate::api::{RawStop, RawStoptime, text};
use crate::codec::midnight_plus_seconds;
use crate::lines::{LineContext, line_from_route};

/// `realtimeState` value marking a cancelled departure
pub(crate) const CANCELLED_STATE: &str = "CANCELED";

/// Destination used when neither headsign nor line name is known
const UNKNOWN_DESTINATION: &str = "Unknown";

/// Normalize a stop's upcoming stop times, keeping upstream order
pub(crate) fn departures_from_stop<Tz: TimeZone>(
    stop: RawStop,
    reference: &DateTime<Tz>,
) -> Vec<Departure> {
    stop.stoptimes_without_patterns
        .into_iter()
        .filter_map(|stoptime| departure_from_stoptime(stoptime, reference))
        .collect()
}

fn departure_from_stoptime<Tz: TimeZone>(
    stoptime: RawStoptime,
    reference: &DateTime<Tz>,
) -> Option<Departure> {
    let Some(scheduled) = stoptime.scheduled_departure else {
        debug!("Skipping stop time without scheduled departure");
        return None;
    };
    let Some(route) = stoptime.trip.and_then(|trip| trip.route) else {
        debug!(scheduled, "Skipping stop time without route");
        return None;
    };

    let Some(planned_time) = midnight_plus_seconds(reference, scheduled) else {
        debug!(scheduled, "Skipping stop time with out-of-range departure");
        return None;
    };
    let predicted_time = predicted_seconds(
        scheduled,
        stoptime.realtime_departure,
        stoptime.realtime,
        stoptime.departure_delay,
    )
    .and_then(|realtime| midnight_plus_seconds(reference, realtime));

    let line = line_from_route(route, LineContext::Departure);
    let destination = text(stoptime.headsign)
        .or_else(|| text(Some(line.name.clone())))
        .unwrap_or_else(|| UNKNOWN_DESTINATION.to_string());

    Some(Departure {
        planned_time,
        predicted_time,
        line,
        destination,
        is_cancelled: stoptime.realtime_state.as_deref() == Some(CANCELLED_STATE),
    })
}

/// Live departure in seconds since midnight
///
/// `realtimeDeparture` wins; without it, a delay flagged as real-time is
/// applied to the schedule.
fn predicted_seconds(
    scheduled: i64,
    realtime_departure: Option<i64>,
    realtime: Option<bool>,
    departure_delay: Option<i64>,
) -> Option<i64> {
    match (realtime_departure, realtime, departure_delay) {
        (Some(realtime), _, _) => Some(realtime),
        (None, Some(true), Some(delay)) => scheduled.checked_add(delay),
        _ => None,
    }
}
