//! Route and visit types.

/// A single stop within a route.
///
/// Tracks the node visited, the parcels dropped there and the running load
/// of the vehicle's capacity dimension after the stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    /// Node being visited.
    pub node_id: usize,
    /// Demand served at this node.
    pub demand: i64,
    /// Cumulative load after this visit.
    pub load_after: i64,
}

/// An ordered sequence of destination visits assigned to a single vehicle.
///
/// A route starts and ends at the depot; the depot is not stored in
/// `visits`. An empty route is a depot-to-depot trip of length zero.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::{Route, Visit};
///
/// let mut route = Route::new(0);
/// route.push_visit(Visit { node_id: 3, demand: 4, load_after: 4 });
/// route.set_total_distance(12);
/// assert_eq!(route.len(), 1);
/// assert_eq!(route.total_load(), 4);
/// assert_eq!(route.node_sequence(0), vec![0, 3, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    vehicle_id: usize,
    visits: Vec<Visit>,
    total_distance: i64,
    total_load: i64,
}

impl Route {
    /// Creates an empty route for the given vehicle.
    pub fn new(vehicle_id: usize) -> Self {
        Self {
            vehicle_id,
            visits: Vec::new(),
            total_distance: 0,
            total_load: 0,
        }
    }

    /// Appends a visit to the end of this route.
    pub fn push_visit(&mut self, visit: Visit) {
        self.total_load = visit.load_after;
        self.visits.push(visit);
    }

    /// Returns the vehicle (fleet position) assigned to this route.
    pub fn vehicle_id(&self) -> usize {
        self.vehicle_id
    }

    /// Returns the ordered sequence of visits.
    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    /// Returns the number of destination visits (excluding depot).
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    /// Returns `true` if this route serves no destination.
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Returns the visited node ids in order.
    pub fn node_ids(&self) -> Vec<usize> {
        self.visits.iter().map(|v| v.node_id).collect()
    }

    /// Returns the full node sequence, depot at both ends.
    pub fn node_sequence(&self, depot: usize) -> Vec<usize> {
        std::iter::once(depot)
            .chain(self.visits.iter().map(|v| v.node_id))
            .chain(std::iter::once(depot))
            .collect()
    }

    /// Total distance of this route, depot legs included.
    pub fn total_distance(&self) -> i64 {
        self.total_distance
    }

    /// Total load served by this route.
    pub fn total_load(&self) -> i64 {
        self.total_load
    }

    /// Sets the total distance (used by the extractor).
    pub fn set_total_distance(&mut self, d: i64) {
        self.total_distance = d;
    }
}
