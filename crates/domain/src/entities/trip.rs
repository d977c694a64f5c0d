//! Trip entity - one proposed itinerary made of ordered legs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Line, Location};

/// A waypoint inside a scheduled leg
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    /// Where the vehicle calls
    pub location: Location,
    /// When the vehicle arrives
    pub arrival: DateTime<Utc>,
}

/// Self-powered travel mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndividualMode {
    /// On foot
    Walk,
}

/// A self-powered segment, e.g. walking to a stop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualLeg {
    pub mode: IndividualMode,
    pub from: Location,
    pub departure: DateTime<Utc>,
    pub to: Location,
    pub arrival: DateTime<Utc>,
    /// Straight-line distance in meters
    pub distance_meters: u32,
}

/// A ride on a scheduled vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicLeg {
    pub line: Line,
    /// Rider-facing destination (headsign)
    pub destination_label: String,
    pub from: Location,
    pub departure: DateTime<Utc>,
    pub to: Location,
    pub arrival: DateTime<Utc>,
    /// Calls between `from` and `to`, in travel order
    pub intermediate_stops: Vec<Stop>,
    /// Whether the times come from a live prediction
    pub is_real_time: bool,
}

/// One segment of a trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Leg {
    Individual(IndividualLeg),
    Public(PublicLeg),
}

impl Leg {
    /// Where the leg starts
    #[must_use]
    pub const fn from(&self) -> &Location {
        match self {
            Self::Individual(leg) => &leg.from,
            Self::Public(leg) => &leg.from,
        }
    }

    /// Where the leg ends
    #[must_use]
    pub const fn to(&self) -> &Location {
        match self {
            Self::Individual(leg) => &leg.to,
            Self::Public(leg) => &leg.to,
        }
    }

    /// Departure time at `from`
    #[must_use]
    pub const fn departure(&self) -> DateTime<Utc> {
        match self {
            Self::Individual(leg) => leg.departure,
            Self::Public(leg) => leg.departure,
        }
    }

    /// Arrival time at `to`
    #[must_use]
    pub const fn arrival(&self) -> DateTime<Utc> {
        match self {
            Self::Individual(leg) => leg.arrival,
            Self::Public(leg) => leg.arrival,
        }
    }

    /// Whether this is a scheduled vehicle ride
    #[must_use]
    pub const fn is_public(&self) -> bool {
        matches!(self, Self::Public(_))
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dep = self.departure().format("%H:%M");
        let arr = self.arrival().format("%H:%M");
        match self {
            Self::Individual(leg) => {
                write!(f, "{dep}–{arr} Walk ({}m) to {}", leg.distance_meters, leg.to)
            },
            Self::Public(leg) => {
                write!(f, "{dep}–{arr} {} → {}", leg.line, leg.destination_label)
            },
        }
    }
}

/// A complete proposed itinerary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub from: Location,
    pub to: Location,
    /// Legs in travel order; may be empty
    pub legs: Vec<Leg>,
    /// Total duration in seconds
    pub duration_seconds: i64,
    /// Total walking distance in meters
    pub walk_distance_meters: u32,
}

impl Trip {
    /// Departure time of the first leg
    #[must_use]
    pub fn first_departure(&self) -> Option<DateTime<Utc>> {
        self.legs.first().map(Leg::departure)
    }

    /// Arrival time of the last leg
    #[must_use]
    pub fn last_arrival(&self) -> Option<DateTime<Utc>> {
        self.legs.last().map(Leg::arrival)
    }

    /// Number of scheduled vehicle rides
    #[must_use]
    pub fn public_leg_count(&self) -> usize {
        self.legs.iter().filter(|leg| leg.is_public()).count()
    }
}
