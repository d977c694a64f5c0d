//! Raw Digitransit GraphQL response types
//!
//! Every field is optional: the routing API omits or nulls fields freely and
//! the normalizers decide what is required. Record lists are decoded
//! leniently so that a single malformed record is dropped on its own.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use tracing::debug;

/// GraphQL response envelope
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    pub message: Option<String>,
    pub extensions: Option<GraphQlErrorExtensions>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlErrorExtensions {
    pub code: Option<String>,
}

// --- plan ---

#[derive(Debug, Deserialize)]
pub(crate) struct PlanData {
    pub plan: Option<RawPlan>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPlan {
    #[serde(default, deserialize_with = "lenient_seq")]
    pub itineraries: Vec<RawItinerary>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawItinerary {
    pub duration: Option<i64>,
    pub walk_distance: Option<f64>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub legs: Vec<RawLeg>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawLeg {
    pub mode: Option<String>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub distance: Option<f64>,
    pub real_time: Option<bool>,
    pub headsign: Option<String>,
    pub from: Option<RawPlace>,
    pub to: Option<RawPlace>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub intermediate_places: Vec<RawPlace>,
    pub route: Option<RawRoute>,
    pub trip: Option<RawTrip>,
}

/// Leg endpoint or intermediate place
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawPlace {
    pub name: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub arrival_time: Option<i64>,
    pub stop: Option<RawStopRef>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawStopRef {
    pub gtfs_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawRoute {
    pub gtfs_id: Option<String>,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub mode: Option<String>,
    pub color: Option<String>,
    pub text_color: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawTrip {
    pub trip_headsign: Option<String>,
    pub route: Option<RawRoute>,
}

// --- stop departures ---

#[derive(Debug, Deserialize)]
pub(crate) struct StopData {
    pub stop: Option<RawStop>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawStop {
    #[serde(default, deserialize_with = "lenient_seq")]
    pub stoptimes_without_patterns: Vec<RawStoptime>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawStoptime {
    pub scheduled_departure: Option<i64>,
    pub realtime_departure: Option<i64>,
    /// Seconds late at departure, as reported alongside `realtime`
    pub departure_delay: Option<i64>,
    pub realtime: Option<bool>,
    pub realtime_state: Option<String>,
    pub headsign: Option<String>,
    pub trip: Option<RawTrip>,
}

// --- geocoding ---

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeData {
    pub geocode: Option<RawGeocode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawGeocode {
    #[serde(default, deserialize_with = "lenient_seq")]
    pub features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawFeature {
    pub properties: Option<RawFeatureProperties>,
    pub geometry: Option<RawGeometry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawFeatureProperties {
    pub name: Option<String>,
    pub label: Option<String>,
    pub layer: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawGeometry {
    /// `[longitude, latitude]`
    pub coordinates: Option<Vec<f64>>,
}

// --- nearest ---

#[derive(Debug, Deserialize)]
pub(crate) struct NearestData {
    pub nearest: Option<RawNearest>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawNearest {
    #[serde(default, deserialize_with = "lenient_seq")]
    pub edges: Vec<RawEdge>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawEdge {
    pub node: Option<RawNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawNode {
    pub distance: Option<u32>,
    pub place: Option<RawNearbyPlace>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawNearbyPlace {
    pub gtfs_id: Option<String>,
    pub name: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Decode a nullable JSON array, dropping elements that fail to decode
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let values = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();

    Ok(values
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!(error = %e, "Skipping malformed record");
                None
            },
        })
        .collect())
}

/// Trimmed text, with blank strings treated as absent
pub(crate) fn text(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text() {
        assert_eq!(text(Some("  Kauppatori ".to_string())).as_deref(), Some("Kauppatori"));
        assert_eq!(text(Some("Kauppatori".to_string())).as_deref(), Some("Kauppatori"));
        assert_eq!(text(Some("   ".to_string())), None);
        assert_eq!(text(None), None);
    }

    #[test]
    fn test_lenient_seq_skips_malformed_records() {
        let json = r#"{
            "stoptimesWithoutPatterns": [
                { "scheduledDeparture": 32400, "headsign": "Ok" },
                { "scheduledDeparture": "not a number" },
                { "scheduledDeparture": 33000, "realtimeDeparture": 33060 }
            ]
        }"#;
        let stop: RawStop = serde_json::from_str(json).unwrap();
        assert_eq!(stop.stoptimes_without_patterns.len(), 2);
        assert_eq!(stop.stoptimes_without_patterns[0].scheduled_departure, Some(32400));
        assert_eq!(stop.stoptimes_without_patterns[1].realtime_departure, Some(33060));
    }

    #[test]
    fn test_lenient_seq_accepts_null_and_missing() {
        let stop: RawStop = serde_json::from_str(r#"{ "stoptimesWithoutPatterns": null }"#).unwrap();
        assert!(stop.stoptimes_without_patterns.is_empty());

        let stop: RawStop = serde_json::from_str("{}").unwrap();
        assert!(stop.stoptimes_without_patterns.is_empty());
    }

    #[test]
    fn test_envelope_with_errors() {
        let json = r#"{
            "data": { "plan": null },
            "errors": [{ "extensions": { "code": "AMBIGUOUS_LOCATION" } }]
        }"#;
        let response: GraphQlResponse<PlanData> = serde_json::from_str(json).unwrap();
        assert!(response.data.unwrap().plan.is_none());
        let errors = response.errors.unwrap();
        assert_eq!(
            errors[0].extensions.as_ref().and_then(|e| e.code.as_deref()),
            Some("AMBIGUOUS_LOCATION")
        );
        assert!(errors[0].message.is_none());
    }

    #[test]
    fn test_null_realtime_is_absent() {
        let json = r#"{ "scheduledDeparture": 32400, "realtimeDeparture": null }"#;
        let stoptime: RawStoptime = serde_json::from_str(json).unwrap();
        assert!(stoptime.realtime_departure.is_none());
        assert!(stoptime.realtime.is_none());
        assert!(stoptime.departure_delay.is_none());
    }
}
