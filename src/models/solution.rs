//! Solution type.

use super::Route;

/// Why the search stopped improving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// No improving iteration within the configured bound, or nothing to do.
    Converged,
    /// The outer-iteration cap was reached.
    IterationLimit,
    /// The wall-clock budget elapsed; the best solution so far is returned.
    TimeLimit,
    /// An external cancellation was observed.
    Cancelled,
}

/// A complete, feasible assignment of destinations to vehicles.
///
/// Holds one route per vehicle, in fleet order, possibly empty. Built once
/// by the extractor and immutable afterwards.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::{Route, Solution, Termination};
///
/// let sol = Solution::new(vec![Route::new(0), Route::new(1)], Termination::Converged);
/// assert_eq!(sol.num_routes(), 2);
/// assert_eq!(sol.num_served(), 0);
/// assert_eq!(sol.total_distance(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    routes: Vec<Route>,
    termination: Termination,
}

impl Solution {
    /// Creates a solution from per-vehicle routes.
    pub fn new(routes: Vec<Route>, termination: Termination) -> Self {
        Self {
            routes,
            termination,
        }
    }

    /// Returns the routes in fleet order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the route driven by the given vehicle.
    pub fn route(&self, vehicle: usize) -> &Route {
        &self.routes[vehicle]
    }

    /// Number of routes (one per vehicle).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Number of routes that serve at least one destination.
    pub fn num_used_vehicles(&self) -> usize {
        self.routes.iter().filter(|r| !r.is_empty()).count()
    }

    /// Total distance across all routes.
    pub fn total_distance(&self) -> i64 {
        self.routes.iter().map(Route::total_distance).sum()
    }

    /// Total parcels delivered across all routes.
    pub fn total_load(&self) -> i64 {
        self.routes.iter().map(Route::total_load).sum()
    }

    /// Total number of destinations served.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// Why the search stopped.
    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// Returns `true` if the wall-clock budget cut the search short.
    pub fn is_time_limited(&self) -> bool {
        self.termination == Termination::TimeLimit
    }
}
