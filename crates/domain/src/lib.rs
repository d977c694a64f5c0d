//! Canonical public transport model
//!
//! Provider-independent value records produced by the transit integrations:
//! locations, lines, trips with their legs and stops, departures, and the
//! classified outcome of a trip-planning request. Every type here is an
//! immutable value constructed fresh per response; nothing performs I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
