//! Domain entities - the canonical transit output model

mod departure;
mod line;
mod location;
mod outcome;
mod trip;

pub use departure::Departure;
pub use line::Line;
pub use location::{Location, LocationType};
pub use outcome::TripsOutcome;
pub use trip::{IndividualLeg, IndividualMode, Leg, PublicLeg, Stop, Trip};
