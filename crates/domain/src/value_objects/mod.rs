//! Value Objects - Immutable, identity-less domain primitives

mod area;
mod point;
mod product;

pub use area::Area;
pub use point::{EARTH_RADIUS_METERS, Point, to_degrees, to_microdegrees};
pub use product::Product;
