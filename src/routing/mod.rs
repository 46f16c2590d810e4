//! Routing model: index space, successor assignments and constraints.
//!
//! - [`IndexManager`]: routing index ↔ node mapping, per-vehicle depot starts and ends
//! - [`Assignment`]: solved routes in successor (`next`) form
//! - [`RoutingModel`]: arc-cost objective over indices or nodes
//! - [`CapacityDimension`]: cumulative load bounded by vehicle capacity

mod assignment;
mod dimension;
mod index;
mod model;

pub use assignment::Assignment;
pub use dimension::{CapacityDimension, CapacityViolation};
pub use index::IndexManager;
pub use model::RoutingModel;
