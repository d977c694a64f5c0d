//! Line entity - a route served by scheduled vehicles

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::Product;

/// A transit line (route)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Upstream route identifier
    pub id: String,
    /// Short rider-facing label (e.g. "5", "M1")
    pub label: String,
    /// Long descriptive name
    pub name: String,
    /// Vehicle mode
    pub product: Product,
    /// Background color as fully opaque ARGB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    /// Text color as fully opaque ARGB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<u32>,
}

impl Line {
    /// Whether the line carries any style information
    #[must_use]
    pub const fn has_style(&self) -> bool {
        self.color.is_some() || self.text_color.is_some()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.product, self.label)
    }
}
