//! Solution extraction and reporting.
//!
//! [`extract_solution`] turns a solved [`Assignment`](crate::routing::Assignment)
//! into explicit routes; [`Itinerary`] and [`Summary`] render them for
//! drivers and for the operations log.

mod extractor;
mod itinerary;

pub use extractor::extract_solution;
pub use itinerary::{itineraries, Itinerary, Stop, Summary};
