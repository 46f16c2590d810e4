//! Routing model: arc costs and constraints over routing indices.

use super::{CapacityDimension, IndexManager};
use crate::models::Problem;

/// The objective and constraints the search optimises against.
///
/// Arc costs are looked up by routing index through the [`IndexManager`],
/// or directly by node. The model only borrows the immutable problem, so it
/// is `Send + Sync` and freely shared by move evaluators.
///
/// # Examples
///
/// ```
/// use u_cvrp::distance::DistanceMatrix;
/// use u_cvrp::models::{Node, Problem, Vehicle};
/// use u_cvrp::routing::RoutingModel;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0, 4, 6],
///     vec![4, 0, 3],
///     vec![6, 3, 0],
/// ]).unwrap();
/// let problem = Problem::new(
///     0,
///     vec![Node::depot(0), Node::new(1, 5), Node::new(2, 7)],
///     vec![Vehicle::new(0, 20)],
///     dm,
/// ).unwrap();
/// let model = RoutingModel::new(&problem);
/// let manager = model.manager();
/// assert_eq!(model.arc_cost(manager.start(0), 0), 4);
/// assert_eq!(model.route_cost(&[1, 2]), 4 + 3 + 6);
/// assert_eq!(model.route_cost(&[]), 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoutingModel<'a> {
    problem: &'a Problem,
    capacity: CapacityDimension<'a>,
}

impl<'a> RoutingModel<'a> {
    /// Creates the model for a validated problem.
    pub fn new(problem: &'a Problem) -> Self {
        Self {
            problem,
            capacity: CapacityDimension::new(problem),
        }
    }

    /// The underlying problem.
    pub fn problem(&self) -> &'a Problem {
        self.problem
    }

    /// The index manager.
    pub fn manager(&self) -> &'a IndexManager {
        self.problem.manager()
    }

    /// The capacity dimension.
    pub fn capacity(&self) -> &CapacityDimension<'a> {
        &self.capacity
    }

    /// Depot node.
    pub fn depot(&self) -> usize {
        self.problem.depot()
    }

    /// Cost of the arc between two routing indices.
    ///
    /// # Panics
    ///
    /// Panics if either index is outside the index space.
    pub fn arc_cost(&self, from_index: usize, to_index: usize) -> i64 {
        let manager = self.manager();
        self.distance(manager.index_to_node(from_index), manager.index_to_node(to_index))
    }

    /// Cost of the arc between two nodes.
    pub fn distance(&self, from: usize, to: usize) -> i64 {
        self.problem.distances().get(from, to)
    }

    /// Demand at a routing index (zero at vehicle starts and ends).
    pub fn demand(&self, index: usize) -> i64 {
        self.capacity.transit(self.manager().index_to_node(index))
    }

    /// Cost of a route: depot to first stop, consecutive stops, last stop
    /// back to the depot. An empty route costs nothing.
    pub fn route_cost(&self, nodes: &[usize]) -> i64 {
        let (Some(&first), Some(&last)) = (nodes.first(), nodes.last()) else {
            return 0;
        };
        let depot = self.depot();
        let inner: i64 = nodes.windows(2).map(|w| self.distance(w[0], w[1])).sum();
        self.distance(depot, first) + inner + self.distance(last, depot)
    }

    /// Objective value: sum of route costs over all vehicles.
    pub fn total_cost(&self, routes: &[Vec<usize>]) -> i64 {
        routes.iter().map(|r| self.route_cost(r)).sum()
    }

    /// Returns `true` if every route respects its vehicle's capacity.
    pub fn is_feasible(&self, routes: &[Vec<usize>]) -> bool {
        routes
            .iter()
            .enumerate()
            .all(|(v, r)| self.capacity.check(v, r).is_ok())
    }
}
