//! Digitransit GraphQL client
//!
//! Each operation issues at most one POST to the GraphQL endpoint. Failures
//! never escape: trip planning classifies them into a [`TripsOutcome`], the
//! other operations fall back to an empty list.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use domain::{Area, Departure, Location, TripsOutcome};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::api::{GeocodeData, GraphQlResponse, NearestData, PlanData, RawPlan, StopData};
use crate::config::DigitransitConfig;
use crate::departures::departures_from_stop;
use crate::error::DigitransitError;
use crate::places::{location_from_edge, location_from_feature};
use crate::query;
use crate::trips::trip_from_itinerary;

/// Origin and destination closer than this are not planned between
pub const MIN_TRIP_DISTANCE_METERS: f64 = 100.0;

/// Trait for transit query clients
#[async_trait]
pub trait TransitClient: Send + Sync {
    /// Plan trips between two locations
    ///
    /// `time` is the departure time, or the arrival time when `arrive_by` is set.
    async fn query_trips(
        &self,
        from: &Location,
        to: &Location,
        time: DateTime<Utc>,
        arrive_by: bool,
    ) -> TripsOutcome;

    /// Upcoming departures from a stop, empty on any failure
    async fn query_departures(&self, stop_id: &str, max_departures: u32) -> Vec<Departure>;

    /// Places matching a free-text query, empty on any failure
    async fn suggest_locations(&self, query: &str, max_locations: u32) -> Vec<Location>;

    /// Stops within `max_distance` meters of a location, empty on any failure
    async fn query_nearby_locations(
        &self,
        location: &Location,
        max_distance: u32,
        max_locations: u32,
    ) -> Vec<Location>;

    /// Coverage area of the network
    fn area(&self) -> Area;

    /// Check if the routing service is reachable
    async fn is_healthy(&self) -> bool;
}

/// Client for a Digitransit routing API endpoint
#[derive(Debug)]
pub struct DigitransitClient {
    client: Client,
    config: DigitransitConfig,
    tz: Tz,
}

impl DigitransitClient {
    /// Create a new Digitransit client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &DigitransitConfig) -> Result<Self, DigitransitError> {
        config
            .validate()
            .map_err(DigitransitError::ConfigurationError)?;
        let tz = config.tz()?;

        let timeout = Duration::from_secs(config.timeout_secs);
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|e| DigitransitError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
            tz,
        })
    }

    /// POST a query and decode the GraphQL envelope
    async fn execute<T: DeserializeOwned>(
        &self,
        query: String,
    ) -> Result<GraphQlResponse<T>, DigitransitError> {
        let url = self.config.endpoint();
        debug!(%url, "Sending GraphQL query");

        let response = self
            .client
            .post(&url)
            .header(
                self.config.api_key_header.as_str(),
                self.config.api_key_str(),
            )
            .json(&serde_json::json!({ "query": query }))
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DigitransitError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(&e))?;
        if body.trim().is_empty() {
            return Err(DigitransitError::EmptyResponse);
        }

        serde_json::from_str(&body).map_err(|e| DigitransitError::ParseError(e.to_string()))
    }

    fn transport_error(&self, e: &reqwest::Error) -> DigitransitError {
        if e.is_timeout() {
            DigitransitError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            DigitransitError::ConnectionFailed(e.to_string())
        }
    }

    /// Execute a query and surface the first GraphQL error, if any
    async fn fetch<T: DeserializeOwned>(&self, query: String) -> Result<Option<T>, DigitransitError> {
        let response: GraphQlResponse<T> = self.execute(query).await?;

        if let Some(first) = response.errors.and_then(|errors| errors.into_iter().next()) {
            return Err(DigitransitError::Upstream {
                code: first.extensions.and_then(|ext| ext.code),
                message: first.message.unwrap_or_default(),
            });
        }

        Ok(response.data)
    }

    async fn fetch_plan(
        &self,
        from: &Location,
        to: &Location,
        time: DateTime<Utc>,
        arrive_by: bool,
    ) -> Result<Option<RawPlan>, DigitransitError> {
        let local_time = time.with_timezone(&self.tz).naive_local();
        let query = query::plan_query(from.point(), to.point(), local_time, arrive_by);
        let data: Option<PlanData> = self.fetch(query).await?;
        Ok(data.and_then(|data| data.plan))
    }
}

/// Whether both locations have known coordinates closer than the minimum
fn too_close(from: &Location, to: &Location) -> bool {
    from.has_coordinates()
        && to.has_coordinates()
        && from.point().distance_meters(&to.point()) < MIN_TRIP_DISTANCE_METERS
}

#[async_trait]
impl TransitClient for DigitransitClient {
    #[instrument(skip(self, from, to), fields(from = %from, to = %to))]
    async fn query_trips(
        &self,
        from: &Location,
        to: &Location,
        time: DateTime<Utc>,
        arrive_by: bool,
    ) -> TripsOutcome {
        if too_close(from, to) {
            debug!("Locations too close to plan a trip");
            return TripsOutcome::TooClose;
        }

        let plan = match self.fetch_plan(from, to, time, arrive_by).await {
            Ok(plan) => plan,
            Err(e) if e.is_ambiguous_location() => {
                warn!(error = %e, "Trip query has an ambiguous location");
                return TripsOutcome::Ambiguous;
            },
            Err(e) => {
                warn!(error = %e, transport = e.is_transport(), "Trip query failed");
                return TripsOutcome::ServiceUnavailable;
            },
        };

        let Some(plan) = plan.filter(|plan| !plan.itineraries.is_empty()) else {
            debug!("No itineraries found");
            return TripsOutcome::NoTrips;
        };

        let trips: Vec<_> = plan
            .itineraries
            .into_iter()
            .map(|itinerary| trip_from_itinerary(itinerary, from, to))
            .collect();

        debug!(count = trips.len(), "Trips found");
        TripsOutcome::Ok(trips)
    }

    #[instrument(skip(self))]
    async fn query_departures(&self, stop_id: &str, max_departures: u32) -> Vec<Departure> {
        let query = query::departures_query(stop_id, max_departures);
        let stop = match self.fetch::<StopData>(query).await {
            Ok(data) => data.and_then(|data| data.stop),
            Err(e) => {
                warn!(error = %e, "Departure query failed");
                return Vec::new();
            },
        };

        let Some(stop) = stop else {
            debug!("Stop not found");
            return Vec::new();
        };

        let now = Utc::now().with_timezone(&self.tz);
        let departures = departures_from_stop(stop, &now);
        debug!(count = departures.len(), "Departures found");
        departures
    }

    #[instrument(skip(self))]
    async fn suggest_locations(&self, query: &str, max_locations: u32) -> Vec<Location> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let text = query::geocode_query(query.trim(), max_locations);
        let features = match self.fetch::<GeocodeData>(text).await {
            Ok(data) => data
                .and_then(|data| data.geocode)
                .map(|geocode| geocode.features)
                .unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Location search failed");
                return Vec::new();
            },
        };

        let locations: Vec<_> = features
            .into_iter()
            .filter_map(location_from_feature)
            .collect();
        debug!(count = locations.len(), "Locations found");
        locations
    }

    #[instrument(skip(self, location), fields(location = %location))]
    async fn query_nearby_locations(
        &self,
        location: &Location,
        max_distance: u32,
        max_locations: u32,
    ) -> Vec<Location> {
        if !location.has_coordinates() {
            debug!("Nearby query without coordinates");
            return Vec::new();
        }

        let query = query::nearest_query(location.point(), max_distance, max_locations);
        let edges = match self.fetch::<NearestData>(query).await {
            Ok(data) => data
                .and_then(|data| data.nearest)
                .map(|nearest| nearest.edges)
                .unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Nearby query failed");
                return Vec::new();
            },
        };

        let locations: Vec<_> = edges.into_iter().filter_map(location_from_edge).collect();
        debug!(count = locations.len(), "Nearby locations found");
        locations
    }

    fn area(&self) -> Area {
        self.config.area.to_area()
    }

    async fn is_healthy(&self) -> bool {
        self.client
            .post(self.config.endpoint())
            .header(
                self.config.api_key_header.as_str(),
                self.config.api_key_str(),
            )
            .json(&serde_json::json!({ "query": query::HEALTH_QUERY }))
            .send()
            .await
            .is_ok_and(|response| response.status().is_success())
    }
}

#[cfg(test)]
mod tests {
    use domain::Point;

    use super::*;

    #[test]
    fn test_new_validates_config() {
        let mut config = DigitransitConfig::for_testing();
        config.timeout_secs = 0;
        assert!(matches!(
            DigitransitClient::new(&config),
            Err(DigitransitError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_new_with_valid_config() {
        let client = DigitransitClient::new(&DigitransitConfig::for_testing()).unwrap();
        assert_eq!(client.tz, chrono_tz::Europe::Helsinki);
        assert!(client.area().is_well_formed());
    }

    #[test]
    fn test_too_close() {
        let a = Location::coordinate(Point::from_degrees(60.1699, 24.9384));
        let near = Location::coordinate(Point::from_degrees(60.1703, 24.9384));
        let far = Location::coordinate(Point::from_degrees(60.1799, 24.9384));
        assert!(too_close(&a, &near));
        assert!(!too_close(&a, &far));
    }

    #[test]
    fn test_unknown_coordinates_are_never_too_close() {
        let a = Location::coordinate(Point::from_degrees(60.1699, 24.9384));
        let unknown = Location::coordinate(Point::default());
        assert!(!too_close(&a, &unknown));
        assert!(!too_close(&unknown, &unknown));

        // zero on one axis counts as unknown too
        let half = Location::coordinate(Point::from_microdegrees(60_169_900, 0));
        assert!(!too_close(&a, &half));
    }

    #[test]
    fn test_client_is_object_safe() {
        let client = DigitransitClient::new(&DigitransitConfig::for_testing()).unwrap();
        let client: Box<dyn TransitClient> = Box::new(client);
        assert_eq!(client.area(), DigitransitConfig::default().area.to_area());
    }
}
