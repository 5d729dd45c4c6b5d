//! Where in the World: name the hidden country.
//!
//! Every miss reports whether the guess is on the right continent and how
//! far it is from the target by great-circle distance.

mod atlas;
mod game;
mod geo;

pub use atlas::{normalize, Atlas, Country};
pub use game::{LocationFeedback, LocationGame};
pub use geo::{haversine, Coordinate};
pub use crate::core::config::DistanceUnit;
