//! Digitransit service configuration

use std::fmt;

use chrono_tz::Tz;
use domain::{Area, Point};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::error::DigitransitError;

/// Configuration for a Digitransit routing endpoint
///
/// Built once at startup and shared read-only by the client.
#[derive(Clone, Serialize, Deserialize)]
pub struct DigitransitConfig {
    /// Base URL of the API host
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the GraphQL endpoint on the host
    #[serde(default = "default_graphql_path")]
    pub graphql_path: String,

    /// Subscription key (sensitive - uses `SecretString`)
    #[serde(default = "default_api_key", skip_serializing)]
    pub api_key: SecretString,

    /// Header that carries the subscription key
    #[serde(default = "default_api_key_header")]
    pub api_key_header: String,

    /// Timeout in seconds for connecting and for the whole exchange
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// IANA time zone used for service-day arithmetic
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Coverage area of the network
    #[serde(default)]
    pub area: AreaConfig,
}

/// Coverage bounding box in degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AreaConfig {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl AreaConfig {
    /// Convert to the domain `Area` value object
    #[must_use]
    pub fn to_area(&self) -> Area {
        Area::new(
            Point::from_degrees(self.south, self.west),
            Point::from_degrees(self.north, self.east),
        )
    }
}

impl Default for AreaConfig {
    // Finland, including the Åland islands
    fn default() -> Self {
        Self {
            south: 59.5,
            west: 19.0,
            north: 70.2,
            east: 31.7,
        }
    }
}

fn default_base_url() -> String {
    "https://api.digitransit.fi".to_string()
}

fn default_graphql_path() -> String {
    "/routing/v2/finland/gtfs/v1".to_string()
}

fn default_api_key() -> SecretString {
    SecretString::from(String::new())
}

fn default_api_key_header() -> String {
    "digitransit-subscription-key".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_timezone() -> String {
    "Europe/Helsinki".to_string()
}

impl Default for DigitransitConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            graphql_path: default_graphql_path(),
            api_key: default_api_key(),
            api_key_header: default_api_key_header(),
            timeout_secs: default_timeout_secs(),
            timezone: default_timezone(),
            area: AreaConfig::default(),
        }
    }
}

impl fmt::Debug for DigitransitConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigitransitConfig")
            .field("base_url", &self.base_url)
            .field("graphql_path", &self.graphql_path)
            .field("api_key", &"[REDACTED]")
            .field("api_key_header", &self.api_key_header)
            .field("timeout_secs", &self.timeout_secs)
            .field("timezone", &self.timezone)
            .field("area", &self.area)
            .finish()
    }
}

impl DigitransitConfig {
    /// Load configuration from an optional `digitransit.toml` and the environment
    ///
    /// Environment variables use the `DIGITRANSIT_` prefix, with `__` between
    /// nested keys (e.g. `DIGITRANSIT_API_KEY`, `DIGITRANSIT_AREA__NORTH`).
    pub fn load() -> Result<Self, DigitransitError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("digitransit").required(false))
            .add_source(
                config::Environment::with_prefix("DIGITRANSIT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        builder
            .build()
            .and_then(config::Config::try_deserialize)
            .map_err(|e| DigitransitError::ConfigurationError(e.to_string()))
    }

    /// Parse configuration from a TOML document
    pub fn from_toml_str(toml: &str) -> Result<Self, DigitransitError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .and_then(config::Config::try_deserialize)
            .map_err(|e| DigitransitError::ConfigurationError(e.to_string()))
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: SecretString::from("test-key".to_string()),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Full URL of the GraphQL endpoint
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.graphql_path
        )
    }

    /// The subscription key
    #[must_use]
    pub fn api_key_str(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// The configured time zone
    pub fn tz(&self) -> Result<Tz, DigitransitError> {
        self.timezone.parse::<Tz>().map_err(|e| {
            DigitransitError::ConfigurationError(format!(
                "unknown timezone {}: {e}",
                self.timezone
            ))
        })
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if let Err(e) = url::Url::parse(&self.endpoint()) {
            return Err(format!("endpoint is not a valid URL: {e}"));
        }

        if !self.graphql_path.starts_with('/') {
            return Err("graphql_path must start with '/'".to_string());
        }

        if self.api_key_str().trim().is_empty() {
            return Err("api_key must not be empty".to_string());
        }

        if self.api_key_header.trim().is_empty() {
            return Err("api_key_header must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.tz().is_err() {
            return Err(format!("timezone {} is not a known IANA zone", self.timezone));
        }

        if !self.area.to_area().is_well_formed() {
            return Err("area must be ordered south-west to north-east".to_string());
        }

        Ok(())
    }
}
