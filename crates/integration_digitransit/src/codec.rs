//! Unit conversions between upstream encodings and the canonical model
//!
//! Itineraries carry absolute epoch-millisecond timestamps while stop times
//! carry seconds since the local service-day midnight. The two are kept as
//! separate functions on purpose; they are never interchangeable.

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Convert an epoch-millisecond timestamp to an absolute time
#[must_use]
pub fn from_epoch_millis(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}

/// Local midnight of the reference date's calendar day plus `seconds`
///
/// `seconds` may exceed one day for trips running past midnight; the result
/// rolls into the following day. Returns `None` if midnight does not exist in
/// `tz` on that day or the offset is out of range.
#[must_use]
pub fn midnight_plus_seconds<Tz: TimeZone>(
    reference: &DateTime<Tz>,
    seconds: i64,
) -> Option<DateTime<Utc>> {
    let tz = reference.timezone();
    let midnight = reference.date_naive().and_hms_opt(0, 0, 0)?;
    let local_midnight = tz.from_local_datetime(&midnight).earliest()?;
    let offset = Duration::try_seconds(seconds)?;
    local_midnight
        .checked_add_signed(offset)
        .map(|t| t.with_timezone(&Utc))
}

/// Parse a `RRGGBB` hex color into fully opaque ARGB
///
/// Empty, absent or unparseable input yields `None`.
#[must_use]
pub fn parse_argb_color(hex: Option<&str>) -> Option<u32> {
    let hex = hex?.trim().trim_start_matches('#');
    if hex.is_empty() {
        return None;
    }
    u32::from_str_radix(hex, 16)
        .ok()
        .map(|rgb| 0xFF00_0000 | (rgb & 0x00FF_FFFF))
}
