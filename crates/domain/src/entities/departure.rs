//! Departure entity - one upcoming vehicle departure from a stop

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Line;

/// A scheduled departure, optionally with a live prediction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Departure {
    /// Timetabled departure time
    pub planned_time: DateTime<Utc>,
    /// Live predicted departure time, set only when real-time data exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_time: Option<DateTime<Utc>>,
    pub line: Line,
    /// Rider-facing destination
    pub destination: String,
    pub is_cancelled: bool,
}

impl Departure {
    /// The best known departure time
    #[must_use]
    pub fn time(&self) -> DateTime<Utc> {
        self.predicted_time.unwrap_or(self.planned_time)
    }

    /// Predicted minus planned time, when a prediction exists
    #[must_use]
    pub fn delay(&self) -> Option<Duration> {
        self.predicted_time
            .map(|predicted| predicted - self.planned_time)
    }
}

impl fmt::Display for Departure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} → {}",
            self.time().format("%H:%M"),
            self.line.label,
            self.destination
        )?;
        if self.is_cancelled {
            write!(f, " (cancelled)")?;
        }
        Ok(())
    }
}
