//! # u-cvrp
//!
//! Capacitated vehicle routing for parcel dispatch: a single depot, a fleet
//! of capacity-limited vehicles and a set of destinations with parcel
//! demands, solved by cheapest-arc construction followed by guided local
//! search under a wall-clock budget.
//!
//! ## Modules
//!
//! - [`models`]: Problem, Node, Vehicle, Route, Solution
//! - [`distance`]: Dense symmetric distance matrix
//! - [`routing`]: Index manager, successor assignment, capacity dimension, routing model
//! - [`constructive`]: Path-cheapest-arc, cheapest insertion, first-fit-decreasing fallback
//! - [`local_search`]: Relocate, exchange and 2-opt neighbourhoods
//! - [`search`]: Guided local search and the [`Solver`](search::Solver) entry point
//! - [`extract`]: Solution extraction, itineraries and summaries
//! - [`dispatch`]: Job files, distance provider and notification sink boundary
//! - [`error`]: Validation and collaborator errors
//!
//! ## Example
//!
//! ```
//! use u_cvrp::distance::DistanceMatrix;
//! use u_cvrp::extract::itineraries;
//! use u_cvrp::models::{Node, Problem, Vehicle};
//! use u_cvrp::search::{SearchConfig, Solver};
//!
//! let dm = DistanceMatrix::from_rows(vec![
//!     vec![0, 3, 4, 5],
//!     vec![3, 0, 2, 4],
//!     vec![4, 2, 0, 3],
//!     vec![5, 4, 3, 0],
//! ]).unwrap();
//! let problem = Problem::new(
//!     0,
//!     vec![Node::depot(0), Node::new(1, 5), Node::new(2, 5), Node::new(3, 8)],
//!     vec![Vehicle::new(0, 10), Vehicle::new(1, 10)],
//!     dm,
//! ).unwrap();
//!
//! let config = SearchConfig::default().without_time_limit().with_max_iterations(50);
//! let outcome = Solver::new(config).solve(&problem);
//! let solution = outcome.solution().expect("feasible");
//! assert_eq!(solution.total_distance(), 19);
//! assert_eq!(itineraries(&problem, solution).len(), 2);
//! ```

pub mod constructive;
pub mod dispatch;
pub mod distance;
pub mod error;
pub mod extract;
pub mod local_search;
pub mod models;
pub mod routing;
pub mod search;

#[cfg(test)]
mod test_support;
