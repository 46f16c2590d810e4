//! The dispatch boundary: job files in, driver notifications out.
//!
//! Distance lookups and message delivery are external collaborators behind
//! the [`DistanceProvider`] and [`NotificationSink`] traits. Their failures
//! are logged and reported, never retried.

mod collaborators;
mod dispatcher;
mod job;

pub use collaborators::{build_distance_matrix, DistanceProvider, Notification, NotificationSink};
pub use dispatcher::{DispatchConfig, DispatchReport, Dispatcher};
pub use job::{Carrier, Destination, JobDescription};
