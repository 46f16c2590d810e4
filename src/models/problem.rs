//! Validated routing problem.

use super::{Node, Vehicle};
use crate::distance::DistanceMatrix;
use crate::error::ValidationError;
use crate::routing::IndexManager;

/// A validated, immutable capacitated routing problem.
///
/// Construction checks every structural invariant once, so the search never
/// has to: at least one vehicle, a depot inside the node range, a square
/// symmetric matrix with a zero diagonal matching the node count, node ids
/// equal to their positions, non-negative demands (zero at the depot) and
/// positive capacities.
///
/// Vehicles are addressed by their position in the fleet.
///
/// # Examples
///
/// ```
/// use u_cvrp::distance::DistanceMatrix;
/// use u_cvrp::models::{Node, Problem, Vehicle};
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0, 4, 6],
///     vec![4, 0, 3],
///     vec![6, 3, 0],
/// ]).unwrap();
/// let problem = Problem::new(
///     0,
///     vec![Node::depot(0), Node::new(1, 5), Node::new(2, 7)],
///     vec![Vehicle::new(0, 10), Vehicle::new(1, 10)],
///     dm,
/// ).unwrap();
/// assert_eq!(problem.num_destinations(), 2);
/// assert_eq!(problem.total_demand(), 12);
/// assert_eq!(problem.total_capacity(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct Problem {
    depot: usize,
    nodes: Vec<Node>,
    vehicles: Vec<Vehicle>,
    distances: DistanceMatrix,
    manager: IndexManager,
}

impl Problem {
    /// Validates the inputs and builds the problem.
    pub fn new(
        depot: usize,
        nodes: Vec<Node>,
        vehicles: Vec<Vehicle>,
        distances: DistanceMatrix,
    ) -> Result<Self, ValidationError> {
        if vehicles.is_empty() {
            return Err(ValidationError::NoVehicles);
        }
        let manager = IndexManager::new(nodes.len(), vehicles.len(), depot)?;

        if distances.size() != nodes.len() {
            return Err(ValidationError::MatrixDimension {
                expected: nodes.len(),
                found: distances.size(),
            });
        }
        for node in 0..distances.size() {
            if distances.get(node, node) != 0 {
                return Err(ValidationError::NonZeroDiagonal { node });
            }
        }
        if let Some((from, to)) = distances.first_asymmetry() {
            return Err(ValidationError::AsymmetricDistance { from, to });
        }

        for (position, node) in nodes.iter().enumerate() {
            if node.id() != position {
                return Err(ValidationError::NodeIdMismatch {
                    position,
                    id: node.id(),
                });
            }
            if node.demand() < 0 {
                return Err(ValidationError::NegativeDemand {
                    node: position,
                    demand: node.demand(),
                });
            }
        }
        if nodes[depot].demand() != 0 {
            return Err(ValidationError::DepotDemand {
                demand: nodes[depot].demand(),
            });
        }

        for (vehicle, v) in vehicles.iter().enumerate() {
            if v.capacity() <= 0 {
                return Err(ValidationError::NonPositiveCapacity {
                    vehicle,
                    capacity: v.capacity(),
                });
            }
        }

        Ok(Self {
            depot,
            nodes,
            vehicles,
            distances,
            manager,
        })
    }

    /// Depot node index.
    pub fn depot(&self) -> usize {
        self.depot
    }

    /// All nodes, depot included.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The node with the given id.
    pub fn node(&self, id: usize) -> &Node {
        &self.nodes[id]
    }

    /// The fleet.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// The vehicle at the given fleet position.
    pub fn vehicle(&self, index: usize) -> &Vehicle {
        &self.vehicles[index]
    }

    /// Travel costs between all nodes.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Mapping between routing positions and nodes.
    pub fn manager(&self) -> &IndexManager {
        &self.manager
    }

    /// Number of nodes, depot included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of vehicles.
    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    /// Number of destinations (nodes other than the depot).
    pub fn num_destinations(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Ids of every destination in increasing order.
    pub fn destinations(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.nodes.len()).filter(move |&n| n != self.depot)
    }

    /// Demand at the given node.
    pub fn demand(&self, node: usize) -> i64 {
        self.nodes[node].demand()
    }

    /// Sum of all destination demands.
    pub fn total_demand(&self) -> i64 {
        self.nodes.iter().map(Node::demand).sum()
    }

    /// Sum of all vehicle capacities.
    pub fn total_capacity(&self) -> i64 {
        self.vehicles.iter().map(Vehicle::capacity).sum()
    }

    /// Largest single vehicle capacity.
    pub fn max_capacity(&self) -> i64 {
        self.vehicles
            .iter()
            .map(Vehicle::capacity)
            .max()
            .unwrap_or(0)
    }
}
