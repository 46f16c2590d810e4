//! Domain model types for capacitated routing.
//!
//! Provides nodes with demands, vehicles with capacities, the validated
//! problem that ties them to a distance matrix, and the routes and solution
//! produced by the solver.

mod node;
mod problem;
mod route;
mod solution;
mod vehicle;

pub use node::Node;
pub use problem::Problem;
pub use route::{Route, Visit};
pub use solution::{Solution, Termination};
pub use vehicle::Vehicle;
