//! Classified outcome of a trip-planning request

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Trip;

/// Result of planning a trip
///
/// Callers react differently to each variant, so failures are not
/// collapsed into a single error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "trips", rename_all = "snake_case")]
pub enum TripsOutcome {
    /// Itineraries found, in upstream order
    Ok(Vec<Trip>),
    /// Origin and destination are too close to plan between
    TooClose,
    /// The upstream service could not resolve a location unambiguously
    Ambiguous,
    /// The request was understood but no itinerary exists
    NoTrips,
    /// Transport failure, bad status or an unrecognized upstream error
    ServiceUnavailable,
}

impl TripsOutcome {
    /// The trips carried by a successful outcome, empty otherwise
    #[must_use]
    pub fn trips(&self) -> &[Trip] {
        match self {
            Self::Ok(trips) => trips,
            _ => &[],
        }
    }

    /// Whether the outcome carries trips
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Short status label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Ok(_) => "ok",
            Self::TooClose => "too_close",
            Self::Ambiguous => "ambiguous",
            Self::NoTrips => "no_trips",
            Self::ServiceUnavailable => "service_unavailable",
        }
    }
}

impl fmt::Display for TripsOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(trips) => write!(f, "ok ({} trips)", trips.len()),
            other => write!(f, "{}", other.label()),
        }
    }
}
