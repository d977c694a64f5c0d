//! Transport product (vehicle mode) of a line

use serde::{Deserialize, Serialize};
use std::fmt;

/// Vehicle mode served by a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Product {
    /// Bus, also the fallback for unrecognized modes
    #[default]
    Bus,
    /// Tram / light rail
    Tram,
    /// Commuter and regional trains
    RegionalRail,
    /// Metro
    Subway,
    /// Ferry
    Ferry,
}

impl Product {
    /// Map an upstream mode string, case-insensitively
    ///
    /// Unknown modes fall back to [`Product::Bus`].
    #[must_use]
    pub fn from_mode(mode: &str) -> Self {
        match mode.trim().to_uppercase().as_str() {
            "TRAM" => Self::Tram,
            "RAIL" | "TRAIN" => Self::RegionalRail,
            "SUBWAY" => Self::Subway,
            "FERRY" => Self::Ferry,
            _ => Self::Bus,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Bus => "Bus",
            Self::Tram => "Tram",
            Self::RegionalRail => "Train",
            Self::Subway => "Metro",
            Self::Ferry => "Ferry",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mode() {
        assert_eq!(Product::from_mode("BUS"), Product::Bus);
        assert_eq!(Product::from_mode("tram"), Product::Tram);
        assert_eq!(Product::from_mode("RAIL"), Product::RegionalRail);
        assert_eq!(Product::from_mode("Train"), Product::RegionalRail);
        assert_eq!(Product::from_mode("SUBWAY"), Product::Subway);
        assert_eq!(Product::from_mode("FERRY"), Product::Ferry);
    }

    #[test]
    fn test_unknown_mode_falls_back_to_bus() {
        assert_eq!(Product::from_mode("AIRPLANE"), Product::Bus);
        assert_eq!(Product::from_mode(""), Product::Bus);
    }

    #[test]
    fn test_display() {
        assert_eq!(Product::Subway.to_string(), "Metro");
        assert_eq!(Product::RegionalRail.to_string(), "Train");
    }
}
