//! Per-vehicle itineraries and the fleet summary.

use std::fmt;

use serde::Serialize;

use crate::models::{Problem, Route, Solution};

/// One delivery stop on an itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stop {
    /// Destination node.
    pub node_id: usize,
    /// Address, or a generated label if the node has none.
    pub address: String,
    /// Parcels dropped here.
    pub demand: i64,
    /// Parcels delivered so far, this stop included.
    pub load_after: i64,
}

/// What a single driver is told to do.
///
/// The [`Display`](fmt::Display) form is the plain-text message handed to
/// the notification sink.
///
/// # Examples
///
/// ```
/// use u_cvrp::distance::DistanceMatrix;
/// use u_cvrp::extract::Itinerary;
/// use u_cvrp::models::{Node, Problem, Route, Vehicle, Visit};
///
/// let problem = Problem::new(
///     0,
///     vec![Node::depot(0).with_address("Depot"), Node::new(1, 3).with_address("Rue A")],
///     vec![Vehicle::new(0, 5).with_name("Ana")],
///     DistanceMatrix::from_rows(vec![vec![0, 7], vec![7, 0]]).unwrap(),
/// ).unwrap();
/// let mut route = Route::new(0);
/// route.push_visit(Visit { node_id: 1, demand: 3, load_after: 3 });
/// route.set_total_distance(14);
///
/// let itinerary = Itinerary::new(&problem, &route);
/// assert_eq!(itinerary.triples(), vec![(1, 3, 3)]);
/// assert!(itinerary.to_string().starts_with("Hello Ana, your delivery route is the following:"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Itinerary {
    /// Fleet position of the vehicle.
    pub vehicle_id: usize,
    /// Name used in the greeting.
    pub vehicle_name: String,
    /// Where the message goes, if the vehicle has a contact.
    pub recipient: Option<String>,
    /// Depot label.
    pub depot_address: String,
    /// Stops in driving order.
    pub stops: Vec<Stop>,
    /// Parcels delivered on the route.
    pub total_load: i64,
    /// Distance of the route, depot legs included.
    pub total_distance: i64,
}

impl Itinerary {
    /// Builds the itinerary of `route`, reading labels from `problem`.
    pub fn new(problem: &Problem, route: &Route) -> Self {
        let vehicle = problem.vehicle(route.vehicle_id());
        let stops = route
            .visits()
            .iter()
            .map(|visit| Stop {
                node_id: visit.node_id,
                address: problem.node(visit.node_id).label(),
                demand: visit.demand,
                load_after: visit.load_after,
            })
            .collect();
        Self {
            vehicle_id: route.vehicle_id(),
            vehicle_name: vehicle.label(),
            recipient: vehicle.contact().map(str::to_owned),
            depot_address: problem.node(problem.depot()).label(),
            stops,
            total_load: route.total_load(),
            total_distance: route.total_distance(),
        }
    }

    /// `(node, demand, cumulative load)` per stop.
    pub fn triples(&self) -> Vec<(usize, i64, i64)> {
        self.stops
            .iter()
            .map(|s| (s.node_id, s.demand, s.load_after))
            .collect()
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Hello {}, your delivery route is the following:",
            self.vehicle_name
        )?;
        writeln!(f, " Start at {} ->", self.depot_address)?;
        for stop in &self.stops {
            writeln!(
                f,
                " {} Parcels to {} (load {}) ->",
                stop.demand, stop.address, stop.load_after
            )?;
        }
        writeln!(
            f,
            " Return to {}: Parcels({})",
            self.depot_address, self.total_load
        )?;
        writeln!(f, "Distance of the route: {} (m)", self.total_distance)?;
        write!(f, "Parcels Delivered: {} (parcels)", self.total_load)
    }
}

/// Fleet-wide totals for operational logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Distance over all routes.
    pub total_distance: i64,
    /// Parcels delivered over all routes.
    pub total_load: i64,
    /// Parcels ordered.
    pub total_demand: i64,
    /// Destinations served.
    pub served: usize,
    /// Destinations in the problem.
    pub destinations: usize,
}

impl Summary {
    /// Totals of `solution` against the demand of `problem`.
    pub fn new(problem: &Problem, solution: &Solution) -> Self {
        Self {
            total_distance: solution.total_distance(),
            total_load: solution.total_load(),
            total_demand: problem.total_demand(),
            served: solution.num_served(),
            destinations: problem.num_destinations(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total distance of all routes: {} (m)", self.total_distance)?;
        write!(f, "Parcels Delivered: {}/{}", self.total_load, self.total_demand)
    }
}

/// One itinerary per vehicle, in fleet order, empty routes included.
pub fn itineraries(problem: &Problem, solution: &Solution) -> Vec<Itinerary> {
    solution
        .routes()
        .iter()
        .map(|route| Itinerary::new(problem, route))
        .collect()
}
