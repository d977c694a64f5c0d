//! Digitransit routing integration
//!
//! Queries a [Digitransit](https://digitransit.fi) GraphQL routing endpoint for
//! trip plans, stop departures, free-text place search and nearby stops, and
//! normalizes the responses into the canonical model of the `domain` crate.
//!
//! # Architecture
//!
//! [`TransitClient`] defines the four query operations, implemented by
//! [`DigitransitClient`]. The client owns the only failure handling: trip
//! planning returns a classified [`domain::TripsOutcome`], the other
//! operations return an empty list when anything goes wrong. Response
//! normalization is split per record kind into pure functions that skip
//! malformed records individually.
//!
//! # Example
//!
//! ```rust,ignore
//! use chrono::Utc;
//! use domain::{Location, Point};
//! use integration_digitransit::{DigitransitClient, DigitransitConfig, TransitClient};
//!
//! let config = DigitransitConfig::load()?;
//! let client = DigitransitClient::new(&config)?;
//!
//! let outcome = client
//!     .query_trips(
//!         &Location::coordinate(Point::from_degrees(60.1699, 24.9384)), // Helsinki
//!         &Location::coordinate(Point::from_degrees(60.2055, 24.6559)), // Espoo
//!         Utc::now(),
//!         false,
//!     )
//!     .await;
//! ```

mod api;
mod client;
pub mod codec;
mod config;
mod departures;
mod error;
mod lines;
mod places;
mod query;
mod trips;

pub use client::{DigitransitClient, MIN_TRIP_DISTANCE_METERS, TransitClient};
pub use config::{AreaConfig, DigitransitConfig};
pub use error::{AMBIGUOUS_LOCATION_CODE, DigitransitError};
