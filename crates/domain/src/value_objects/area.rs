//! Provider coverage area

use serde::{Deserialize, Serialize};

use super::Point;

/// A static bounding box describing the region a provider covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    /// South-west corner
    pub south_west: Point,
    /// North-east corner
    pub north_east: Point,
}

impl Area {
    /// Create a new area from its two corners
    #[must_use]
    pub const fn new(south_west: Point, north_east: Point) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Whether the corners are ordered south-west to north-east
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        self.south_west.lat() <= self.north_east.lat()
            && self.south_west.lon() <= self.north_east.lon()
    }

    /// Whether a point lies within the area (edges inclusive)
    #[must_use]
    pub const fn contains(&self, point: &Point) -> bool {
        point.lat() >= self.south_west.lat()
            && point.lat() <= self.north_east.lat()
            && point.lon() >= self.south_west.lon()
            && point.lon() <= self.north_east.lon()
    }
}
